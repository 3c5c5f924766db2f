// Render the Jumplinks settings page
//
// Merges stored settings with the defaults, builds the field tree the admin
// UI renders, and prints a Markdown reference for it.
//
// Run with: cargo run --example render_settings

use jumplinks_config::{
    Composer, DocsConfig, KindRegistry, ModuleConfig, RenderContext, generate_docs,
};
use serde_json::json;
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ModuleConfig::builder()
        .assets_url("/site/modules/ProcessJumplinks/Assets/")
        .build();
    let registry = KindRegistry::standard();
    let installed: HashSet<String> = ["ProcessRedirects".to_string()].into();

    // What the host has stored for this module
    let stored = json!({
        "_schemaVersion": 1,
        "wildcardCleaning": "semiClean",
        "legacyDomain": "http://old.example.com/",
        "moduleDebug": true
    });
    let values = config.merge_persisted(stored.as_object().cloned().unwrap_or_default());

    let composer = Composer::new(&config, &registry);
    let mut ctx = RenderContext::new();
    let tree = composer.input_fields(&values, &installed, &mut ctx)?;

    println!("=== Page assets ===");
    for url in ctx.scripts.iter().chain(&ctx.styles) {
        println!("  {url}");
    }
    for (flag, value) in &ctx.flags {
        println!("  {flag} = {value}");
    }

    println!("\n=== Field values ===");
    for field in tree.fields() {
        if let (Some(name), Some(value)) = (&field.name, &field.value) {
            println!("  {name:<26} {value}");
        }
    }

    println!("\n=== Reference ===\n");
    let docs = generate_docs(&tree, DocsConfig::new().with_title("Jumplinks Settings"));
    println!("{docs}");

    Ok(())
}
