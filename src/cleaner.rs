//! Source cleaner for autodoc-generated reStructuredText.
//!
//! `sphinx-apidoc` decorates every generated page with boilerplate headings
//! ("Submodules", "Subpackages", "somepkg package", "somemod module") that add
//! noise to a published API reference. This module strips that boilerplate
//! with plain substring rules while leaving `automodule` directive blocks
//! untouched, since their indented option lines are consumed verbatim by the
//! builder.

/// Directive marker that opens an automodule block.
pub const AUTOMODULE_MARKER: &str = ".. automodule::";

/// Indentation that keeps a line inside an automodule block.
const BLOCK_INDENT: &str = "   ";

/// Cleans one generated page, returning the scrubbed text.
///
/// The scan keeps a single flag for whether it is inside an automodule block:
/// a line containing [`AUTOMODULE_MARKER`] raises it, and a non-blank line
/// without the three-space block indent lowers it again before the heading
/// rules run on that line. Blank lines never close a block. Everything
/// outside a block goes through the heading rules; everything inside passes
/// through unchanged.
///
/// Lines are split and rejoined on `'\n'`, so a trailing newline (and any
/// stray `'\r'`) survives the round trip. Empty input yields empty output.
pub fn clean_source(text: &str) -> String {
    let mut processed: Vec<String> = Vec::new();
    let mut in_automodule = false;

    for line in text.split('\n') {
        if line.contains(AUTOMODULE_MARKER) {
            in_automodule = true;
        }

        if in_automodule {
            // Blank lines belong to the block and keep it open.
            if line.trim().is_empty() {
                processed.push(line.to_string());
                continue;
            }
            // A non-blank line without the block indent closes the block and
            // falls through to the heading rules below.
            if !line.starts_with(BLOCK_INDENT) {
                in_automodule = false;
            }
        }

        if in_automodule {
            processed.push(line.to_string());
            continue;
        }

        if let Some(cleaned) = scrub_heading_line(line) {
            processed.push(cleaned);
        }
    }

    processed.join("\n")
}

/// Applies the heading rules to a line outside any automodule block.
///
/// Returns `None` when the line is dropped from the page. The trigger
/// substrings include a trailing space: a heading that ends the line
/// ("phoenix.config module") is not a trigger, only the variants the
/// generator writes with text after the keyword are.
fn scrub_heading_line(line: &str) -> Option<String> {
    if line.contains("Submodules ") {
        return None;
    }

    let mut line = line.to_string();
    if line.contains("Subpackages ") {
        line = line.replace("Subpackages", "");
    }
    // Checked on the possibly already modified line, not the original.
    if line.contains("package ") {
        line = line.replace("package", "");
    }
    if line.contains("module ") {
        line = line.replace("module", "");
    }

    Some(line)
}
