//! Wizard steps
//!
//! The budget is entered over five steps. The store keeps the cursor as a
//! raw integer; this enum is how callers interpret and bound it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Income,
    FixedExpenses,
    VariableExpenses,
    SavingsGoals,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        Self::Income,
        Self::FixedExpenses,
        Self::VariableExpenses,
        Self::SavingsGoals,
        Self::Summary,
    ];

    pub const FIRST: i64 = 0;
    pub const LAST: i64 = 4;

    /// Interpret a raw cursor value; out-of-range values have no step
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    /// Clamp any raw cursor value into the wizard's range
    pub fn clamp_index(index: i64) -> i64 {
        index.clamp(Self::FIRST, Self::LAST)
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    pub fn previous(self) -> Self {
        Self::from_index(self.index() - 1).unwrap_or(self)
    }

    pub fn is_last(self) -> bool {
        self == Self::Summary
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::FixedExpenses => "Fixed Expenses",
            Self::VariableExpenses => "Variable Expenses",
            Self::SavingsGoals => "Savings Goals",
            Self::Summary => "Summary",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(n) = s.trim().parse::<i64>() {
            return Self::from_index(n);
        }
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "fixed" | "fixed_expenses" | "needs" => Some(Self::FixedExpenses),
            "variable" | "variable_expenses" | "wants" => Some(Self::VariableExpenses),
            "savings" | "savings_goals" => Some(Self::SavingsGoals),
            "summary" => Some(Self::Summary),
            _ => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(WizardStep::from_index(0), Some(WizardStep::Income));
        assert_eq!(WizardStep::from_index(4), Some(WizardStep::Summary));
        assert_eq!(WizardStep::from_index(5), None);
        assert_eq!(WizardStep::from_index(-1), None);
    }

    #[test]
    fn test_navigation_stops_at_ends() {
        assert_eq!(WizardStep::Income.previous(), WizardStep::Income);
        assert_eq!(WizardStep::Income.next(), WizardStep::FixedExpenses);
        assert_eq!(WizardStep::Summary.next(), WizardStep::Summary);
        assert!(WizardStep::Summary.is_last());
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(WizardStep::clamp_index(-3), 0);
        assert_eq!(WizardStep::clamp_index(2), 2);
        assert_eq!(WizardStep::clamp_index(99), 4);
    }

    #[test]
    fn test_parse() {
        assert_eq!(WizardStep::parse("3"), Some(WizardStep::SavingsGoals));
        assert_eq!(WizardStep::parse("Wants"), Some(WizardStep::VariableExpenses));
        assert_eq!(WizardStep::parse("7"), None);
    }
}
