//! This example validates and inspects an SSML document supplied on the
//! command line, or a built-in sample if none is given.

use std::env;

use ssml_lite::{character_count, extract_plain_text, format_ssml, ExampleCatalog, Validator};

fn main() {
    // Take the document from the command line, or fall back to a catalog
    // sample.
    let ssml = env::args().nth(1).unwrap_or_else(|| {
        ExampleCatalog::standard()
            .snippet("Basic Pause")
            .unwrap()
            .to_owned()
    });

    // Validate and report the verdict the way a front-end would.
    let validator = Validator::new();
    let verdict = validator.validate(&ssml);
    println!("verdict: {}", verdict.message());

    // Show both billing-relevant counts.
    println!(
        "characters: {} spoken, {} raw",
        character_count(&ssml, false),
        character_count(&ssml, true)
    );

    println!("spoken text: {}", extract_plain_text(&ssml));
    println!("formatted:\n{}", format_ssml(&ssml));
}
