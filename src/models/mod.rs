//! Core data models for Budgeto
//!
//! This module contains the data structures of the monthly budget: the four
//! item kinds with their category enums, the allocation rule, wizard steps and
//! the health assessment returned by the recommendation engine.

pub mod expense;
pub mod ids;
pub mod income;
pub mod item;
pub mod recommendation;
pub mod rules;
pub mod savings;
pub mod step;

pub use expense::{
    FixedExpenseCategory, FixedExpenseItem, VariableExpenseCategory, VariableExpenseItem,
};
pub use ids::ItemId;
pub use income::{IncomeCategory, IncomeFrequency, IncomeItem};
pub use item::{BudgetEntry, ItemValidationError};
pub use recommendation::{
    Adjustment, AdjustmentCategory, BudgetRecommendation, RecommendationStatus,
};
pub use rules::BudgetRules;
pub use savings::{SavingsCategory, SavingsGoalItem};
pub use step::WizardStep;
