//! Page Scrubbing Example
//!
//! This example demonstrates the source cleaning hook:
//! - Feeding a generated package page through the extension
//! - Boilerplate headings being dropped or trimmed
//! - Automodule directive blocks passing through untouched

use sphinx_scrub::{AutodocHooks, ScrubExtension, AUTOMODULE_MARKER};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Sphinx Scrub - Page Cleaning Example");
    println!("====================================");

    let extension = ScrubExtension::default();

    // A package page the way the API reference generator writes it,
    // boilerplate headings carrying their trailing space.
    let generated_page = concat!(
        "inferences package \n",
        "===================\n",
        "\n",
        "Subpackages \n",
        "------------\n",
        "\n",
        ".. toctree::\n",
        "   :maxdepth: 4\n",
        "\n",
        "   inferences.backends\n",
        "\n",
        "Submodules \n",
        "-----------\n",
        "\n",
        "inferences.inferences module \n",
        "-----------------------------\n",
        "\n",
        ".. automodule:: inferences.inferences\n",
        "   :members:\n",
        "   :undoc-members:\n",
        "   :show-inheritance:\n",
        "\n",
        "Module contents\n",
        "---------------\n",
        "\n",
        ".. automodule:: inferences\n",
        "   :members:\n",
        "   :undoc-members:\n",
        "   :show-inheritance:\n",
    );

    println!("\n📄 Generated page ({} bytes):", generated_page.len());
    println!("------------------------------------");
    print!("{}", generated_page);

    // The hook receives the page text as the first element of a mutable
    // container and rewrites it in place.
    let mut source = vec![generated_page.to_string()];
    extension.on_source_read("inferences", &mut source);
    let cleaned = &source[0];

    println!("------------------------------------");
    println!("\n🧹 Cleaned page ({} bytes):", cleaned.len());
    println!("------------------------------------");
    print!("{}", cleaned);
    println!("------------------------------------");

    let dropped = generated_page.lines().count() - cleaned.lines().count();
    let blocks = cleaned.matches(AUTOMODULE_MARKER).count();
    println!(
        "\n✅ Dropped {} heading line(s), {} automodule block(s) preserved",
        dropped, blocks
    );

    Ok(())
}
