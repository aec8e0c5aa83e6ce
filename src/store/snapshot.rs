//! Snapshot serialization for `BudgetState`
//!
//! A snapshot is the whole state as one JSON document:
//!
//! ```json
//! {
//!   "income": [...],
//!   "fixedExpenses": [...],
//!   "variableExpenses": [...],
//!   "savingsGoals": [...],
//!   "currentStep": 2,
//!   "hasCompletedSetup": false
//! }
//! ```
//!
//! There is no version field. A document missing any of these fields, or with
//! a field of the wrong type, is rejected rather than migrated.

use crate::error::{BudgetoError, BudgetoResult};

use super::BudgetState;

impl BudgetState {
    /// Serialize the entire state into a snapshot blob
    pub fn to_snapshot(&self) -> BudgetoResult<String> {
        serde_json::to_string(self)
            .map_err(|e| BudgetoError::Json(format!("Failed to serialize budget: {}", e)))
    }

    /// Serialize with indentation, for export and inspection
    pub fn to_snapshot_pretty(&self) -> BudgetoResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BudgetoError::Json(format!("Failed to serialize budget: {}", e)))
    }

    /// Parse a snapshot blob into a complete state
    pub fn from_snapshot(blob: &str) -> BudgetoResult<Self> {
        serde_json::from_str(blob).map_err(|e| BudgetoError::MalformedSnapshot(e.to_string()))
    }

    /// Replace this state with the one in `blob`
    ///
    /// Nothing is merged: on success every field comes from the snapshot. On
    /// failure `self` is left exactly as it was.
    pub fn apply_snapshot(&mut self, blob: &str) -> BudgetoResult<()> {
        *self = Self::from_snapshot(blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FixedExpenseCategory, FixedExpenseItem, IncomeCategory, IncomeFrequency, IncomeItem,
        ItemId, SavingsCategory, SavingsGoalItem, VariableExpenseCategory, VariableExpenseItem,
    };
    use chrono::NaiveDate;
    use serde_json::json;

    fn populated_state() -> BudgetState {
        BudgetState::new()
            .replace_income(vec![IncomeItem::new(
                "Stipend",
                1450.5,
                IncomeCategory::Grant,
            )
            .with_frequency(IncomeFrequency::Biweekly)])
            .replace_fixed_expenses(vec![FixedExpenseItem::new(
                "Phone",
                35.0,
                FixedExpenseCategory::Utilities,
            )])
            .replace_variable_expenses(vec![VariableExpenseItem::new(
                "Cinema",
                24.99,
                VariableExpenseCategory::Entertainment,
            )])
            .replace_savings_goals(vec![SavingsGoalItem::new(
                "New bike",
                80.0,
                SavingsCategory::BigPurchase,
            )
            .with_target_amount(900.0)
            .with_target_date(NaiveDate::from_ymd_opt(2027, 6, 30).unwrap())])
            .set_step(3)
    }

    #[test]
    fn test_round_trip() {
        let state = populated_state();
        let blob = state.to_snapshot().unwrap();
        let restored = BudgetState::from_snapshot(&blob).unwrap();
        assert_eq!(state, restored);

        let completed = state.complete_setup();
        let restored = BudgetState::from_snapshot(&completed.to_snapshot_pretty().unwrap()).unwrap();
        assert_eq!(completed, restored);
    }

    #[test]
    fn test_round_trip_preserves_every_amount_bit() {
        // Amounts with 16-17 significant digits, from a fixed xorshift sequence
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut next_amount = || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed % 10_000_000_000) as f64 / 997.0
        };

        for _ in 0..5_000 {
            let state = BudgetState::new()
                .replace_income(vec![IncomeItem::new(
                    "Job",
                    next_amount(),
                    IncomeCategory::Salary,
                )])
                .replace_savings_goals(vec![SavingsGoalItem::new(
                    "Fund",
                    next_amount(),
                    SavingsCategory::Emergency,
                )
                .with_target_amount(next_amount())]);

            let restored = BudgetState::from_snapshot(&state.to_snapshot().unwrap()).unwrap();
            assert_eq!(
                restored.income[0].amount.to_bits(),
                state.income[0].amount.to_bits()
            );
            assert_eq!(restored, state);
        }
    }

    #[test]
    fn test_empty_round_trip() {
        let blob = BudgetState::new().to_snapshot().unwrap();
        assert_eq!(
            blob,
            r#"{"income":[],"fixedExpenses":[],"variableExpenses":[],"savingsGoals":[],"currentStep":0,"hasCompletedSetup":false}"#
        );
        assert_eq!(BudgetState::from_snapshot(&blob).unwrap(), BudgetState::new());
    }

    #[test]
    fn test_parses_hand_written_snapshot() {
        let blob = json!({
            "income": [
                {"id": "k2j8x1q", "name": "Barista", "amount": 900, "category": "sideJob", "frequency": "weekly"}
            ],
            "fixedExpenses": [],
            "variableExpenses": [
                {"id": "a1", "name": "Books", "amount": 40, "category": "education"}
            ],
            "savingsGoals": [
                {"id": "s1", "name": "Trip", "amount": 100, "category": "vacation", "targetAmount": 1200}
            ],
            "currentStep": 4,
            "hasCompletedSetup": true
        })
        .to_string();

        let state = BudgetState::from_snapshot(&blob).unwrap();
        assert_eq!(state.income[0].id, ItemId::from("k2j8x1q"));
        assert_eq!(state.income[0].category, IncomeCategory::SideJob);
        assert_eq!(state.income[0].frequency, IncomeFrequency::Weekly);
        assert_eq!(state.savings_goals[0].target_amount, Some(1200.0));
        assert_eq!(state.savings_goals[0].target_date, None);
        assert_eq!(state.current_step, 4);
        assert!(state.has_completed_setup);
    }

    #[test]
    fn test_missing_income_is_malformed() {
        let mut state = populated_state();
        let before = state.clone();

        let blob = json!({
            "fixedExpenses": [],
            "variableExpenses": [],
            "savingsGoals": [],
            "currentStep": 0,
            "hasCompletedSetup": false
        })
        .to_string();

        let err = state.apply_snapshot(&blob).unwrap_err();
        assert!(err.is_malformed_snapshot());
        assert_eq!(state, before);
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let blob = json!({
            "income": [],
            "fixedExpenses": [],
            "variableExpenses": [],
            "savingsGoals": [],
            "currentStep": "two",
            "hasCompletedSetup": false
        })
        .to_string();

        assert!(BudgetState::from_snapshot(&blob)
            .unwrap_err()
            .is_malformed_snapshot());
    }

    #[test]
    fn test_unknown_category_is_malformed() {
        let blob = json!({
            "income": [{"id": "x", "name": "Crypto", "amount": 10, "category": "mining", "frequency": "monthly"}],
            "fixedExpenses": [],
            "variableExpenses": [],
            "savingsGoals": [],
            "currentStep": 0,
            "hasCompletedSetup": false
        })
        .to_string();

        assert!(BudgetState::from_snapshot(&blob).is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(BudgetState::from_snapshot("not json at all")
            .unwrap_err()
            .is_malformed_snapshot());
        assert!(BudgetState::from_snapshot("").is_err());
        assert!(BudgetState::from_snapshot("[]").is_err());
    }

    #[test]
    fn test_apply_snapshot_replaces_everything() {
        let mut state = populated_state().complete_setup();
        let blob = BudgetState::new().set_step(1).to_snapshot().unwrap();

        state.apply_snapshot(&blob).unwrap();

        assert!(state.is_empty());
        assert_eq!(state.current_step, 1);
        assert!(!state.has_completed_setup);
    }
}
