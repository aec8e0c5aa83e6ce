//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod income;
pub mod rules;
pub mod savings;
pub mod snapshot;
pub mod summary;
pub mod wizard;

pub use audit::handle_audit_command;
pub use expense::{
    handle_fixed_command, handle_variable_command, FixedCommands, VariableCommands,
};
pub use income::{handle_income_command, IncomeCommands};
pub use rules::{handle_rules_command, RulesCommands};
pub use savings::{handle_savings_command, SavingsCommands};
pub use snapshot::{handle_export_command, handle_import_command};
pub use summary::{handle_recommend_command, handle_summary_command};
pub use wizard::{handle_complete_command, handle_reset_command, handle_step_command, StepCommands};

use chrono::NaiveDate;

use crate::error::{BudgetoError, BudgetoResult};

/// Parse a user-entered amount such as "1200", "1,200.50" or "$1200"
pub fn parse_amount(input: &str) -> BudgetoResult<f64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| BudgetoError::Validation(format!("Invalid amount: '{}'", input)))
}

/// Parse a date in YYYY-MM-DD form
pub fn parse_date(input: &str) -> BudgetoResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        BudgetoError::Validation(format!(
            "Invalid date: '{}'. Use YYYY-MM-DD format.",
            input
        ))
    })
}

/// Turn an unknown category name into a validation error listing the options
fn unknown_category(input: &str, valid: &str) -> BudgetoError {
    BudgetoError::Validation(format!(
        "Unknown category '{}'. Valid categories: {}",
        input, valid
    ))
}
