//! Budget state container
//!
//! `BudgetState` is an immutable snapshot of everything the user has entered.
//! Every transition consumes the old snapshot and returns a new one; nothing is
//! mutated in place. Totals and percentages are derived from the collections on
//! every call and never stored.
//!
//! The store does not validate items or bound the wizard cursor. Both are the
//! caller's job (see `services::BudgetService`).

pub mod snapshot;

use serde::{Deserialize, Serialize};

use crate::models::item::total_amount;
use crate::models::{
    FixedExpenseItem, IncomeItem, SavingsGoalItem, VariableExpenseItem, WizardStep,
};

/// The complete budget as entered through the wizard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetState {
    pub income: Vec<IncomeItem>,
    pub fixed_expenses: Vec<FixedExpenseItem>,
    pub variable_expenses: Vec<VariableExpenseItem>,
    pub savings_goals: Vec<SavingsGoalItem>,
    pub current_step: i64,
    pub has_completed_setup: bool,
}

/// Aggregates derived from a `BudgetState` at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetTotals {
    pub income: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub savings_goals: f64,
    pub remaining: f64,
    pub needs_percentage: f64,
    pub wants_percentage: f64,
    pub savings_percentage: f64,
}

impl BudgetTotals {
    /// Remaining funds are not negative
    pub fn is_balanced(&self) -> bool {
        self.remaining >= 0.0
    }
}

impl BudgetState {
    /// The empty initial state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_income(self, items: Vec<IncomeItem>) -> Self {
        Self {
            income: items,
            ..self
        }
    }

    pub fn replace_fixed_expenses(self, items: Vec<FixedExpenseItem>) -> Self {
        Self {
            fixed_expenses: items,
            ..self
        }
    }

    pub fn replace_variable_expenses(self, items: Vec<VariableExpenseItem>) -> Self {
        Self {
            variable_expenses: items,
            ..self
        }
    }

    pub fn replace_savings_goals(self, items: Vec<SavingsGoalItem>) -> Self {
        Self {
            savings_goals: items,
            ..self
        }
    }

    /// Move the wizard cursor; any integer is accepted as-is
    pub fn set_step(self, step: i64) -> Self {
        Self {
            current_step: step,
            ..self
        }
    }

    /// Mark setup as done. Only `reset_all` clears the flag again.
    pub fn complete_setup(self) -> Self {
        Self {
            has_completed_setup: true,
            ..self
        }
    }

    /// Discard everything and return the empty initial state
    ///
    /// Clearing the persisted snapshot is up to the caller.
    pub fn reset_all(self) -> Self {
        Self::new()
    }

    /// The wizard step the cursor points at, if it is in range
    pub fn step(&self) -> Option<WizardStep> {
        WizardStep::from_index(self.current_step)
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty()
            && self.fixed_expenses.is_empty()
            && self.variable_expenses.is_empty()
            && self.savings_goals.is_empty()
    }

    pub fn total_income(&self) -> f64 {
        total_amount(&self.income)
    }

    pub fn total_fixed_expenses(&self) -> f64 {
        total_amount(&self.fixed_expenses)
    }

    pub fn total_variable_expenses(&self) -> f64 {
        total_amount(&self.variable_expenses)
    }

    pub fn total_savings_goals(&self) -> f64 {
        total_amount(&self.savings_goals)
    }

    /// Income left after expenses and savings; negative when overspent
    pub fn remaining_funds(&self) -> f64 {
        self.total_income()
            - self.total_fixed_expenses()
            - self.total_variable_expenses()
            - self.total_savings_goals()
    }

    pub fn needs_percentage(&self) -> f64 {
        share_of_income(self.total_fixed_expenses(), self.total_income())
    }

    pub fn wants_percentage(&self) -> f64 {
        share_of_income(self.total_variable_expenses(), self.total_income())
    }

    pub fn savings_percentage(&self) -> f64 {
        share_of_income(self.total_savings_goals(), self.total_income())
    }

    /// All aggregates at once, computed from the current collections
    pub fn totals(&self) -> BudgetTotals {
        BudgetTotals {
            income: self.total_income(),
            fixed_expenses: self.total_fixed_expenses(),
            variable_expenses: self.total_variable_expenses(),
            savings_goals: self.total_savings_goals(),
            remaining: self.remaining_funds(),
            needs_percentage: self.needs_percentage(),
            wants_percentage: self.wants_percentage(),
            savings_percentage: self.savings_percentage(),
        }
    }
}

/// `part / income * 100`, or exactly 0 when there is no positive income
fn share_of_income(part: f64, income: f64) -> f64 {
    if income > 0.0 {
        part * 100.0 / income
    } else {
        0.0
    }
}
