//! Business logic layer
//!
//! - `budget`: validated, persisted and audited changes to the budget
//! - `recommendation`: assessment of a budget against an allocation rule

pub mod budget;
pub mod recommendation;

pub use budget::BudgetService;
pub use recommendation::{recommend, recommend_for_state, DEVIATION_THRESHOLD};
