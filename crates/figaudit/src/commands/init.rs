//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'figaudit parse <metadata.json>' to build the inventory.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# figaudit configuration

[input]
# Metadata export used when `figaudit parse` is given no path
metadata = "metadata.json"

[output]
# Inventory artifact written by `parse` and read by `summary`
inventory = "inventory.json"

[parser]
# Whitespace characters per nesting level
indent_width = 2
# Nesting depth of component candidates (children sit one level deeper)
top_level_depth = 1

[audit]
# Node ids of canonical, fully documented components (tier 1)
canonical_ids = [
    "40006598:72259",  # Button
    "40006598:70760",  # Text Input
    "40006598:84030",  # Select
    "40006598:90126",  # Accordion
    "40006598:71720",  # Chip
    "40003841:33610",  # Badge
    "40008110:15068",  # Link - Standalone
    "40006598:81360",  # Checkbox
    "40008120:29000",  # Tabs
    "40003841:33483",  # Tooltip
    "40006598:82298",  # Action Menu
    "40006598:71412",  # Counter Badge
    "40006598:81018",  # Button Group
    "40017359:55323",  # Snackbar
    "40015525:22363",  # Toggle
    "40000054:23550",  # Progress Circle
    "40019054:169935", # Avatar
    "40019054:170805", # Consumer NavBar
    "40006816:22081",  # Footer
    "40019054:170681", # User Profile Menu / Consumer
    "40006598:90371",  # Checkbox List
    "40006598:71903",  # Action List / No-selection
    "40007190:39217",  # Alert / inpage
    "40009097:47558",  # Alert / top
]
"#;
