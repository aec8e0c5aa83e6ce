//! Income item model
//!
//! Income sources for the month. Frequency is recorded for the user's benefit
//! only; amounts are always summed as entered (no monthly conversion).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::item::BudgetEntry;

/// Kind of income source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum IncomeCategory {
    #[default]
    Salary,
    Grant,
    SideJob,
    Other,
}

impl IncomeCategory {
    pub const VALID: &'static str = "salary, grant, side_job, other";

    /// Parse an income category from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "salary" | "wage" | "wages" => Some(Self::Salary),
            "grant" | "scholarship" => Some(Self::Grant),
            "sidejob" | "side_job" | "side-job" | "side" => Some(Self::SideJob),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Grant => "Grant/Scholarship",
            Self::SideJob => "Side Job",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How often the income is received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    #[default]
    Monthly,
    Biweekly,
    Weekly,
}

impl IncomeFrequency {
    pub const VALID: &'static str = "monthly, biweekly, weekly";

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monthly" | "month" => Some(Self::Monthly),
            "biweekly" | "bi-weekly" | "fortnightly" => Some(Self::Biweekly),
            "weekly" | "week" => Some(Self::Weekly),
            _ => None,
        }
    }
}

impl fmt::Display for IncomeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Biweekly => write!(f, "Bi-weekly"),
            Self::Weekly => write!(f, "Weekly"),
        }
    }
}

/// A single income source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeItem {
    pub id: ItemId,
    pub name: String,
    pub amount: f64,
    pub category: IncomeCategory,
    pub frequency: IncomeFrequency,
}

impl IncomeItem {
    /// Create a new monthly income item with a fresh identifier
    pub fn new(name: impl Into<String>, amount: f64, category: IncomeCategory) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            amount,
            category,
            frequency: IncomeFrequency::Monthly,
        }
    }

    pub fn with_frequency(mut self, frequency: IncomeFrequency) -> Self {
        self.frequency = frequency;
        self
    }
}

impl BudgetEntry for IncomeItem {
    const KIND: &'static str = "Income";

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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_income() {
        let income = IncomeItem::new("Day job", 3200.0, IncomeCategory::Salary);
        assert_eq!(income.name, "Day job");
        assert_eq!(income.frequency, IncomeFrequency::Monthly);
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(IncomeCategory::parse("SideJob"), Some(IncomeCategory::SideJob));
        assert_eq!(IncomeCategory::parse("side_job"), Some(IncomeCategory::SideJob));
        assert_eq!(IncomeCategory::parse("grant"), Some(IncomeCategory::Grant));
        assert_eq!(IncomeCategory::parse("lottery"), None);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(IncomeCategory::Grant.to_string(), "Grant/Scholarship");
        assert_eq!(IncomeCategory::SideJob.label(), "Side Job");
    }

    #[test]
    fn test_wire_format() {
        let income = IncomeItem {
            id: ItemId::from("inc1"),
            name: "Tutoring".into(),
            amount: 250.0,
            category: IncomeCategory::SideJob,
            frequency: IncomeFrequency::Biweekly,
        };

        let value = serde_json::to_value(&income).unwrap();
        assert_eq!(value["category"], "sideJob");
        assert_eq!(value["frequency"], "biweekly");
        assert_eq!(value["id"], "inc1");
    }
}
