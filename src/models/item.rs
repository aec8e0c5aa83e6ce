//! Shared behaviour of the four budget item kinds
//!
//! Every item carries an identifier, a display name and a monthly amount.
//! Validation lives here for the input layer; the store itself never
//! validates what it is given.

use std::fmt;

use super::ids::ItemId;

/// Validation errors for budget items
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValidationError {
    EmptyName,
    NonPositiveAmount(f64),
    NonFiniteAmount,
    NonPositiveTarget(f64),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Target amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// Common view over income, fixed expense, variable expense and savings items
pub trait BudgetEntry {
    /// Human-readable kind name used in messages and the audit log
    const KIND: &'static str;

    fn id(&self) -> &ItemId;
    fn name(&self) -> &str;
    fn amount(&self) -> f64;

    /// Display label of the item's category
    fn category_label(&self) -> &'static str;

    /// Validate the base item fields
    fn validate(&self) -> Result<(), ItemValidationError> {
        validate_base(self.name(), self.amount())
    }
}

/// Validate a name and amount the way the input forms do
pub fn validate_base(name: &str, amount: f64) -> Result<(), ItemValidationError> {
    if name.trim().is_empty() {
        return Err(ItemValidationError::EmptyName);
    }
    if !amount.is_finite() {
        return Err(ItemValidationError::NonFiniteAmount);
    }
    if amount <= 0.0 {
        return Err(ItemValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}

/// Sum of amounts across a collection
///
/// Insertion order is irrelevant to the result.
pub fn total_amount<T: BudgetEntry>(items: &[T]) -> f64 {
    items.iter().map(BudgetEntry::amount).sum()
}

/// Whether every identifier in the collection is distinct
pub fn ids_unique<T: BudgetEntry>(items: &[T]) -> bool {
    let mut seen = std::collections::HashSet::new();
    items.iter().all(|item| seen.insert(item.id().clone()))
}
