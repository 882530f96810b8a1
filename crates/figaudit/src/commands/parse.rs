//! Metadata parse command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figaudit_inventory::Inventory;
use figaudit_meta::{parse_elements, MetadataExport, ParseOptions};
use figaudit_report::Reporter;

use crate::config::ConfigFile;

/// Run the parse command.
pub fn run(config: &ConfigFile, metadata: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let metadata = metadata.unwrap_or_else(|| config.input.metadata.clone());
    let output = output.unwrap_or_else(|| config.output.inventory.clone());
    let options = config.parser.to_options()?;

    let inventory = build_inventory(&metadata, &options)?;

    let reporter = Reporter::new();
    println!("{}", reporter.summary(&inventory)?);
    println!("\n{}", reporter.key_components(&inventory)?);

    inventory
        .save(&output)
        .with_context(|| format!("Failed to save inventory to {}", output.display()))?;
    println!("\nJSON saved to {}", output.display());

    Ok(())
}

/// Load an export and turn it into a categorized inventory.
fn build_inventory(metadata: &Path, options: &ParseOptions) -> Result<Inventory> {
    tracing::info!("Parsing {}", metadata.display());

    let export = MetadataExport::load(metadata)
        .with_context(|| format!("Failed to load metadata export {}", metadata.display()))?;

    let parsed = parse_elements(&export.text, options);
    if parsed.skipped > 0 {
        tracing::warn!(
            "Skipped {} top-level elements without a name or id",
            parsed.skipped
        );
    }

    let inventory = Inventory::from_elements(&parsed.elements);
    tracing::info!(
        "Parsed {} elements from {} lines",
        inventory.grand_total(),
        parsed.lines
    );

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use figaudit_inventory::Category;
    use tempfile::tempdir;

    const EXPORT: &str = r#"[{"text": "<canvas name=\"Internal Only Canvas\" id=\"0:2\">\n  <frame name=\"Button\" id=\"1:1\">\n    <symbol name=\"Size=S\" id=\"1:2\"/>\n    <symbol name=\"Size=L\" id=\"1:3\"/>\n  </frame>\n  <symbol name=\"Arrow Right\" id=\"2:1\"/>\n  <frame id=\"3:1\"/>\n</canvas>"}]"#;

    #[test]
    fn builds_inventory_from_export_file() {
        let temp = tempdir().unwrap();
        let metadata = temp.path().join("metadata.json");
        fs::write(&metadata, EXPORT).unwrap();

        let inventory = build_inventory(&metadata, &ParseOptions::default()).unwrap();

        assert_eq!(inventory.grand_total(), 2);
        assert_eq!(inventory.bucket(Category::FormControls)[0].variants, 2);
        assert_eq!(inventory.total(Category::Icons), 1);
    }

    #[test]
    fn writes_artifact_to_configured_path() {
        let temp = tempdir().unwrap();
        let metadata = temp.path().join("metadata.json");
        let output = temp.path().join("build").join("inventory.json");
        fs::write(&metadata, EXPORT).unwrap();

        run(&ConfigFile::default(), Some(metadata), Some(output.clone())).unwrap();

        let inventory = Inventory::load(&output).unwrap();
        assert_eq!(inventory.grand_total(), 2);
    }

    #[test]
    fn fails_on_missing_export() {
        let temp = tempdir().unwrap();

        let result = build_inventory(&temp.path().join("missing.json"), &ParseOptions::default());

        assert!(result.is_err());
    }

    #[test]
    fn fails_on_malformed_export() {
        let temp = tempdir().unwrap();
        let metadata = temp.path().join("metadata.json");
        fs::write(&metadata, "{not json").unwrap();

        let result = build_inventory(&metadata, &ParseOptions::default());

        assert!(result.is_err());
    }
}
