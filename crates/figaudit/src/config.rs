//! Configuration file (audit.toml).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use figaudit_meta::ParseOptions;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub audit: AuditConfig,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// Metadata export read by `parse` when no path is given
    #[serde(default = "default_metadata")]
    pub metadata: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Inventory artifact path
    #[serde(default = "default_inventory")]
    pub inventory: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default = "default_top_level_depth")]
    pub top_level_depth: usize,
}

#[derive(Debug, Deserialize)]
pub struct AuditConfig {
    /// Ids of the canonical (tier 1) components
    #[serde(default = "default_canonical_ids")]
    pub canonical_ids: Vec<String>,
}

/// Node ids of the fully documented library components.
pub const DEFAULT_CANONICAL_IDS: [&str; 24] = [
    "40006598:72259",  // Button
    "40006598:70760",  // Text Input
    "40006598:84030",  // Select
    "40006598:90126",  // Accordion
    "40006598:71720",  // Chip
    "40003841:33610",  // Badge
    "40008110:15068",  // Link - Standalone
    "40006598:81360",  // Checkbox
    "40008120:29000",  // Tabs
    "40003841:33483",  // Tooltip
    "40006598:82298",  // Action Menu
    "40006598:71412",  // Counter Badge
    "40006598:81018",  // Button Group
    "40017359:55323",  // Snackbar
    "40015525:22363",  // Toggle
    "40000054:23550",  // Progress Circle
    "40019054:169935", // Avatar
    "40019054:170805", // Consumer NavBar
    "40006816:22081",  // Footer
    "40019054:170681", // User Profile Menu / Consumer
    "40006598:90371",  // Checkbox List
    "40006598:71903",  // Action List / No-selection
    "40007190:39217",  // Alert / inpage
    "40009097:47558",  // Alert / top
];

fn default_metadata() -> PathBuf {
    PathBuf::from("metadata.json")
}
fn default_inventory() -> PathBuf {
    PathBuf::from("inventory.json")
}
fn default_indent_width() -> usize {
    2
}
fn default_top_level_depth() -> usize {
    1
}
fn default_canonical_ids() -> Vec<String> {
    DEFAULT_CANONICAL_IDS.iter().map(|id| id.to_string()).collect()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            metadata: default_metadata(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            inventory: default_inventory(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            top_level_depth: default_top_level_depth(),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            canonical_ids: default_canonical_ids(),
        }
    }
}

impl ParserConfig {
    /// Convert to parser options, rejecting a zero indent width and
    /// indentation that does not fit in a `usize`.
    pub fn to_options(&self) -> Result<ParseOptions> {
        if self.indent_width == 0 {
            bail!("parser.indent_width must be greater than zero");
        }

        let options = ParseOptions {
            indent_width: self.indent_width,
            top_level_depth: self.top_level_depth,
        };
        if options.checked_indents().is_none() {
            bail!(
                "parser.top_level_depth {} with indent_width {} overflows the indentation",
                self.top_level_depth,
                self.indent_width
            );
        }

        Ok(options)
    }
}

impl AuditConfig {
    pub fn canonical_set(&self) -> HashSet<String> {
        self.canonical_ids.iter().cloned().collect()
    }
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}
