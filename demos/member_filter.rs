//! Member Filtering Example
//!
//! This example demonstrates the skip-member hook:
//! - Streaming candidate members through the extension
//! - Private names and attributes being excluded
//! - Loading an inclusion table from YAML configuration

use sphinx_scrub::{AutodocHooks, ScrubExtension};
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Sphinx Scrub - Member Filtering Example");
    println!("=======================================");

    let config_yaml = r#"
include_members:
  inferences.inferences:
    Inferences:
      - __init__
"#;

    let extension = ScrubExtension::from_yaml_str(config_yaml)?;
    println!(
        "✅ Loaded configuration, inclusion table covers {} module(s)",
        extension.inclusion_table().module_count()
    );

    // Candidate members the way the generator reports them.
    let candidates = [
        ("class", "Inferences"),
        ("method", "__init__"),
        ("method", "_load_model"),
        ("method", "predict"),
        ("method", "batch_predict"),
        ("attribute", "model_path"),
        ("property", "version"),
        ("function", "_warm_cache"),
        ("function", "from_pretrained"),
        ("data", "DEFAULT_BACKEND"),
    ];

    println!("\n🔍 Filtering {} candidate members:", candidates.len());
    let options = HashMap::new();
    let mut included = 0;
    let mut excluded = 0;

    for (what, name) in candidates {
        let skip = extension.on_skip_member(what, name, false, &options);
        if skip {
            excluded += 1;
            println!("  🚫 excluded {:<9} {}", what, name);
        } else {
            included += 1;
            println!("  ✅ included {:<9} {}", what, name);
        }
    }

    println!("\n📊 Summary");
    println!("==========");
    println!("Included: {}", included);
    println!("Excluded: {}", excluded);

    if let Some(allowed) = extension
        .inclusion_table()
        .allowed_members("inferences.inferences", "Inferences")
    {
        println!(
            "\nInclusion table lists {:?} for inferences.inferences.Inferences,",
            allowed
        );
        println!("but the exclusion rules above decide on their own.");
    }

    Ok(())
}
