//! Expense item models
//!
//! Fixed expenses are the "needs" of the 50/30/20 rule, variable expenses
//! the "wants".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::item::BudgetEntry;

/// Category of a fixed (essential) expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FixedExpenseCategory {
    #[default]
    Housing,
    Transport,
    Utilities,
    Insurance,
    Subscription,
    Debt,
    Other,
}

impl FixedExpenseCategory {
    pub const VALID: &'static str =
        "housing, transport, utilities, insurance, subscription, debt, other";

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "housing" | "rent" | "mortgage" => Some(Self::Housing),
            "transport" | "transportation" => Some(Self::Transport),
            "utilities" | "utility" => Some(Self::Utilities),
            "insurance" => Some(Self::Insurance),
            "subscription" | "subscriptions" => Some(Self::Subscription),
            "debt" | "loan" => Some(Self::Debt),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Transport => "Transportation",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::Subscription => "Subscriptions",
            Self::Debt => "Debt Payments",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FixedExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category of a variable (discretionary) expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum VariableExpenseCategory {
    #[default]
    Food,
    Shopping,
    Entertainment,
    Health,
    Education,
    Travel,
    Other,
}

impl VariableExpenseCategory {
    pub const VALID: &'static str =
        "food, shopping, entertainment, health, education, travel, other";

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "food" | "dining" | "groceries" => Some(Self::Food),
            "shopping" => Some(Self::Shopping),
            "entertainment" | "fun" => Some(Self::Entertainment),
            "health" | "wellness" => Some(Self::Health),
            "education" => Some(Self::Education),
            "travel" => Some(Self::Travel),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health & Wellness",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for VariableExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recurring essential expense (rent, insurance, loan payments...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpenseItem {
    pub id: ItemId,
    pub name: String,
    pub amount: f64,
    pub category: FixedExpenseCategory,
}

impl FixedExpenseItem {
    pub fn new(name: impl Into<String>, amount: f64, category: FixedExpenseCategory) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            amount,
            category,
        }
    }
}

impl BudgetEntry for FixedExpenseItem {
    const KIND: &'static str = "Fixed expense";

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

/// A discretionary monthly spending estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpenseItem {
    pub id: ItemId,
    pub name: String,
    pub amount: f64,
    pub category: VariableExpenseCategory,
}

impl VariableExpenseItem {
    pub fn new(name: impl Into<String>, amount: f64, category: VariableExpenseCategory) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            amount,
            category,
        }
    }
}

impl BudgetEntry for VariableExpenseItem {
    const KIND: &'static str = "Variable expense";

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
    fn test_fixed_category_parse() {
        assert_eq!(
            FixedExpenseCategory::parse("Rent"),
            Some(FixedExpenseCategory::Housing)
        );
        assert_eq!(
            FixedExpenseCategory::parse("subscriptions"),
            Some(FixedExpenseCategory::Subscription)
        );
        assert_eq!(FixedExpenseCategory::parse("food"), None);
    }

    #[test]
    fn test_variable_category_parse() {
        assert_eq!(
            VariableExpenseCategory::parse("groceries"),
            Some(VariableExpenseCategory::Food)
        );
        assert_eq!(VariableExpenseCategory::parse("housing"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FixedExpenseCategory::Debt.to_string(), "Debt Payments");
        assert_eq!(VariableExpenseCategory::Health.label(), "Health & Wellness");
    }

    #[test]
    fn test_validation() {
        let rent = FixedExpenseItem::new("Rent", 1100.0, FixedExpenseCategory::Housing);
        assert!(rent.validate().is_ok());

        let blank = VariableExpenseItem::new("  ", 40.0, VariableExpenseCategory::Food);
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_wire_format() {
        let item = FixedExpenseItem {
            id: ItemId::from("f1"),
            name: "Netflix".into(),
            amount: 15.49,
            category: FixedExpenseCategory::Subscription,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":"f1","name":"Netflix","amount":15.49,"category":"subscription"}"#
        );
    }
}
