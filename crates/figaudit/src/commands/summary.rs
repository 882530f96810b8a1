//! Inventory summary command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figaudit_inventory::{AuditSummary, Inventory};
use figaudit_report::Reporter;

use crate::config::ConfigFile;

/// Run the summary command.
pub fn run(config: &ConfigFile, inventory: Option<PathBuf>) -> Result<()> {
    let path = inventory.unwrap_or_else(|| config.output.inventory.clone());

    println!("{}", render_report(config, &path)?);

    Ok(())
}

/// Render the category summary followed by the audit report.
fn render_report(config: &ConfigFile, path: &Path) -> Result<String> {
    let inventory = Inventory::load(path)
        .with_context(|| format!("Failed to load inventory {}", path.display()))?;
    let canonical = config.audit.canonical_set();
    if canonical.is_empty() {
        tracing::warn!("No canonical component ids configured; tier 1 will be empty");
    }

    let audit = AuditSummary::from_inventory(&inventory, &canonical);

    let reporter = Reporter::new();
    Ok(format!(
        "{}\n\n{}",
        reporter.summary(&inventory)?,
        reporter.audit(&audit)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn summarizes_saved_inventory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inventory.json");
        fs::write(
            &path,
            r#"{"categories": {"Form Controls": [{"name": "Button", "id": "1:1", "type": "frame", "variants": 4}]}, "totals": {"Form Controls": 1}}"#,
        )
        .unwrap();

        let mut config = ConfigFile::default();
        config.audit.canonical_ids = vec!["1:1".to_string()];

        let text = render_report(&config, &path).unwrap();

        assert!(text.contains("  Form Controls: 1\n"));
        assert!(text.contains("  TOTAL: 1"));
        assert!(text.contains("Tier 1: 1"));
        assert!(text.contains("Tier 3: 0"));
        assert!(text.contains("Variants: 4"));
        assert!(run(&config, Some(path)).is_ok());
    }

    #[test]
    fn default_canonical_ids_place_button_in_tier_one() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inventory.json");
        fs::write(
            &path,
            r#"{"categories": {"Form Controls": [{"name": "Button", "id": "40006598:72259", "type": "frame", "variants": 308}, {"name": "Slider", "id": "9:9", "type": "frame", "variants": 0}]}, "totals": {"Form Controls": 2}}"#,
        )
        .unwrap();

        let text = render_report(&ConfigFile::default(), &path).unwrap();

        assert!(text.contains("Tier 1: 1"));
        assert!(text.contains("Tier 3: 1"));
    }

    #[test]
    fn fails_on_missing_inventory() {
        let temp = tempdir().unwrap();

        let result = run(&ConfigFile::default(), Some(temp.path().join("none.json")));

        assert!(result.is_err());
    }
}
