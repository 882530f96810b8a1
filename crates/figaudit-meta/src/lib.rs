//! Design-tool metadata export parsing.
//!
//! This crate loads the JSON envelope of a metadata export, tokenizes its
//! indented tag-like tree, and extracts the top-level frames and symbols
//! together with the number of variants each frame holds.

pub mod element;
pub mod export;
pub mod parser;

pub use element::{Element, ElementKind, TagLine};
pub use export::{ExportError, MetadataExport};
pub use parser::{parse_elements, ParseOptions, ParsedExport};
