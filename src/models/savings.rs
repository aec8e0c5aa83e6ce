//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::item::{validate_base, BudgetEntry, ItemValidationError};

/// What a savings goal is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SavingsCategory {
    #[default]
    Emergency,
    Retirement,
    Vacation,
    BigPurchase,
    Education,
    Other,
}

impl SavingsCategory {
    pub const VALID: &'static str =
        "emergency, retirement, vacation, big_purchase, education, other";

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "emergency" | "emergency_fund" => Some(Self::Emergency),
            "retirement" | "pension" => Some(Self::Retirement),
            "vacation" | "holiday" => Some(Self::Vacation),
            "bigpurchase" | "big_purchase" | "big-purchase" | "purchase" => {
                Some(Self::BigPurchase)
            }
            "education" => Some(Self::Education),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Emergency => "Emergency Fund",
            Self::Retirement => "Retirement",
            Self::Vacation => "Vacation",
            Self::BigPurchase => "Major Purchase",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for SavingsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A monthly contribution toward a savings goal
///
/// The target date and amount are informational; only `amount` (the monthly
/// contribution) takes part in budget totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalItem {
    pub id: ItemId,
    pub name: String,
    pub amount: f64,
    pub category: SavingsCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
}

impl SavingsGoalItem {
    pub fn new(name: impl Into<String>, amount: f64, category: SavingsCategory) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            amount,
            category,
            target_date: None,
            target_amount: None,
        }
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn with_target_amount(mut self, amount: f64) -> Self {
        self.target_amount = Some(amount);
        self
    }

    /// Months of contributions needed to reach the target amount, if one is set
    pub fn months_to_target(&self) -> Option<u32> {
        let target = self.target_amount?;
        if self.amount <= 0.0 || target <= 0.0 {
            return None;
        }
        Some((target / self.amount).ceil() as u32)
    }
}

impl BudgetEntry for SavingsGoalItem {
    const KIND: &'static str = "Savings goal";

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn category_label(&self) -> &'static str {
        self.category.label()
    }

    fn validate(&self) -> Result<(), ItemValidationError> {
        validate_base(&self.name, self.amount)?;
        match self.target_amount {
            Some(target) if target.is_nan() || target <= 0.0 => Err(ItemValidationError::NonPositiveTarget(target)),
            _ => Ok(()),
        }
    }
}
