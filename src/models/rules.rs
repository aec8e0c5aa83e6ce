//! Allocation rule (target percentages of income)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target share of income for needs, wants and savings, in percent
///
/// The three values are expected, but not required, to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRules {
    #[serde(rename = "needsPercentage")]
    pub needs: f64,
    #[serde(rename = "wantsPercentage")]
    pub wants: f64,
    #[serde(rename = "savingsPercentage")]
    pub savings: f64,
}

impl BudgetRules {
    /// The classic 50/30/20 split
    pub const FIFTY_THIRTY_TWENTY: Self = Self {
        needs: 50.0,
        wants: 30.0,
        savings: 20.0,
    };

    pub fn new(needs: f64, wants: f64, savings: f64) -> Self {
        Self {
            needs,
            wants,
            savings,
        }
    }

    pub fn total(&self) -> f64 {
        self.needs + self.wants + self.savings
    }

    /// Whether the targets account for exactly all of income
    pub fn is_balanced(&self) -> bool {
        (self.total() - 100.0).abs() < 1e-9
    }
}

impl Default for BudgetRules {
    fn default() -> Self {
        Self::FIFTY_THIRTY_TWENTY
    }
}

impl fmt::Display for BudgetRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.needs, self.wants, self.savings)
    }
}
