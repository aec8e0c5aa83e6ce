//! Budget health assessment types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall health classification of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Excellent,
    Good,
    Warning,
    Danger,
}

impl fmt::Display for RecommendationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Warning => write!(f, "Warning"),
            Self::Danger => write!(f, "Danger"),
        }
    }
}

/// Rule bucket an adjustment applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentCategory {
    Needs,
    Wants,
    Savings,
}

impl fmt::Display for AdjustmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Needs => write!(f, "needs"),
            Self::Wants => write!(f, "wants"),
            Self::Savings => write!(f, "savings"),
        }
    }
}

/// A suggested change to one bucket
///
/// For needs and wants `difference` is the amount to cut
/// (`current - recommended`); for savings it is the amount to add
/// (`recommended - current`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub category: AdjustmentCategory,
    pub current_amount: f64,
    pub recommended_amount: f64,
    pub difference: f64,
}

impl Adjustment {
    /// Whether the suggestion is to increase the bucket rather than reduce it
    pub fn is_increase(&self) -> bool {
        self.category == AdjustmentCategory::Savings
    }
}

/// Result of assessing a budget against a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecommendation {
    pub status: RecommendationStatus,
    pub message: String,
    /// Absent when no bucket deviated past the threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustments: Option<Vec<Adjustment>>,
}

impl BudgetRecommendation {
    /// Adjustments as a slice; an absent list reads as empty
    pub fn adjustments(&self) -> &[Adjustment] {
        self.adjustments.as_deref().unwrap_or(&[])
    }

    pub fn has_adjustments(&self) -> bool {
        !self.adjustments().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_adjustments_read_as_empty() {
        let rec = BudgetRecommendation {
            status: RecommendationStatus::Excellent,
            message: "ok".into(),
            adjustments: None,
        };
        assert!(rec.adjustments().is_empty());
        assert!(!rec.has_adjustments());

        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("adjustments").is_none());
        assert_eq!(json["status"], "excellent");
    }

    #[test]
    fn test_adjustment_wire_format() {
        let adj = Adjustment {
            category: AdjustmentCategory::Savings,
            current_amount: 100.0,
            recommended_amount: 200.0,
            difference: 100.0,
        };
        assert!(adj.is_increase());

        let json = serde_json::to_value(adj).unwrap();
        assert_eq!(json["category"], "savings");
        assert_eq!(json["currentAmount"], 100.0);
        assert_eq!(json["recommendedAmount"], 200.0);
    }
}
