//! Display formatting for terminal output
//!
//! Provides utilities for formatting budget items, totals and
//! recommendations for terminal display.

pub mod format;
pub mod items;
pub mod summary;

pub use format::{format_currency, format_percentage};
pub use items::{format_item_list, income_detail, savings_detail};
pub use summary::{format_budget_summary, format_recommendation};
