//! Metadata export envelope.
//!
//! The design tool dumps its metadata as a JSON array of text blocks. Only the
//! first block carries the component tree.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// A loaded metadata export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataExport {
    /// Indented tag-like tree text
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct TextBlock {
    text: String,
}

impl MetadataExport {
    /// Decode an export from its JSON representation.
    pub fn from_json(source: &str) -> Result<Self, ExportError> {
        let blocks: Vec<TextBlock> =
            serde_json::from_str(source).map_err(|e| ExportError::InvalidJson(e.to_string()))?;

        let first = blocks.into_iter().next().ok_or(ExportError::Empty)?;

        Ok(Self { text: first.text })
    }

    /// Read and decode an export file.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let source = fs::read_to_string(path).map_err(|e| ExportError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let export = Self::from_json(&source)?;
        tracing::debug!(
            "Loaded {} bytes of metadata text from {}",
            export.text.len(),
            path.display()
        );

        Ok(export)
    }
}

/// Errors that can occur when loading an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to read metadata export {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Invalid metadata JSON: {0}")]
    InvalidJson(String),

    #[error("Metadata export contains no text blocks")]
    Empty,
}
