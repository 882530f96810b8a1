//! Text reports for design library audits.
//!
//! Renders the inventory summary table, the key component listing and the
//! audit summary through templates.

pub mod reporter;
pub mod templates;

pub use reporter::{ReportError, Reporter};
