//! Component categorization and inventory aggregation.
//!
//! Elements parsed from a metadata export are sorted into nine fixed
//! categories by an ordered keyword decision list, grouped into an
//! [`Inventory`], and classified further for the audit summary.

pub mod audit;
pub mod category;
pub mod inventory;

pub use audit::{classify_token_system, AuditSummary, Tier, TokenSystem};
pub use category::{categorize, Category};
pub use inventory::{Inventory, InventoryError, InventoryItem};
