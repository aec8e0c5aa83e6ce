//! Configuration module for Budgeto
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (allocation rule, currency symbol)

pub mod paths;
pub mod settings;

pub use paths::BudgetoPaths;
pub use settings::Settings;
