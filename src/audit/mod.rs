//! Audit logging system for Budgeto
//!
//! Every change made through `BudgetService` is appended to an audit log with
//! before/after values.
//!
//! - `AuditEntry`: one logged operation (timestamp, operation, entity, values).
//! - `AuditLogger`: appends entries to a line-delimited JSON file (JSONL).
//! - `generate_diff`: one-line summary of changes between two JSON values.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
