//! Budget service
//!
//! The input layer in front of `BudgetState`. It validates what the user
//! enters, turns add/remove requests into whole-collection replacements,
//! bounds wizard navigation, persists the snapshot after every change and
//! records each change in the audit log.
//!
//! The in-memory state is updated before persisting. If the save fails the
//! error is returned, but the new state is kept and stays usable.

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::error::{BudgetoError, BudgetoResult};
use crate::models::item::ids_unique;
use crate::models::{
    BudgetEntry, BudgetRecommendation, BudgetRules, FixedExpenseItem, IncomeItem, ItemId,
    SavingsGoalItem, VariableExpenseItem, WizardStep,
};
use crate::services::recommendation::recommend_for_state;
use crate::storage::{load_state, save_state, SnapshotSurface};
use crate::store::{BudgetState, BudgetTotals};

/// Service for building and maintaining the monthly budget
pub struct BudgetService<'a> {
    surface: &'a dyn SnapshotSurface,
    audit: Option<&'a AuditLogger>,
    state: BudgetState,
}

impl<'a> BudgetService<'a> {
    /// Wrap an existing state; nothing is read from the surface
    pub fn new(surface: &'a dyn SnapshotSurface, state: BudgetState) -> Self {
        Self {
            surface,
            audit: None,
            state,
        }
    }

    /// Load the persisted budget (or start empty if nothing is stored)
    pub fn open(surface: &'a dyn SnapshotSurface) -> BudgetoResult<Self> {
        let state = load_state(surface)?;
        Ok(Self::new(surface, state))
    }

    /// Record changes in `logger`
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn totals(&self) -> BudgetTotals {
        self.state.totals()
    }

    pub fn recommendation(&self, rules: &BudgetRules) -> BudgetRecommendation {
        recommend_for_state(&self.state, rules)
    }

    /// Persist the current state
    pub fn save(&self) -> BudgetoResult<()> {
        save_state(self.surface, &self.state)
    }

    // ---------------------------------------------------------------------
    // Items
    // ---------------------------------------------------------------------

    pub fn add_income(&mut self, item: IncomeItem) -> BudgetoResult<ItemId> {
        let items = appended(&self.state.income, item.clone())?;
        let entry = created_entry(EntityType::Income, &item);
        self.transition(|state| state.replace_income(items), entry)?;
        Ok(item.id)
    }

    pub fn add_fixed_expense(&mut self, item: FixedExpenseItem) -> BudgetoResult<ItemId> {
        let items = appended(&self.state.fixed_expenses, item.clone())?;
        let entry = created_entry(EntityType::FixedExpense, &item);
        self.transition(|state| state.replace_fixed_expenses(items), entry)?;
        Ok(item.id)
    }

    pub fn add_variable_expense(&mut self, item: VariableExpenseItem) -> BudgetoResult<ItemId> {
        let items = appended(&self.state.variable_expenses, item.clone())?;
        let entry = created_entry(EntityType::VariableExpense, &item);
        self.transition(|state| state.replace_variable_expenses(items), entry)?;
        Ok(item.id)
    }

    pub fn add_savings_goal(&mut self, item: SavingsGoalItem) -> BudgetoResult<ItemId> {
        let items = appended(&self.state.savings_goals, item.clone())?;
        let entry = created_entry(EntityType::SavingsGoal, &item);
        self.transition(|state| state.replace_savings_goals(items), entry)?;
        Ok(item.id)
    }

    /// Remove an income item by full id or unambiguous prefix
    pub fn remove_income(&mut self, reference: &str) -> BudgetoResult<IncomeItem> {
        let (items, removed) = without(&self.state.income, reference)?;
        let entry = deleted_entry(EntityType::Income, &removed);
        self.transition(|state| state.replace_income(items), entry)?;
        Ok(removed)
    }

    pub fn remove_fixed_expense(&mut self, reference: &str) -> BudgetoResult<FixedExpenseItem> {
        let (items, removed) = without(&self.state.fixed_expenses, reference)?;
        let entry = deleted_entry(EntityType::FixedExpense, &removed);
        self.transition(|state| state.replace_fixed_expenses(items), entry)?;
        Ok(removed)
    }

    pub fn remove_variable_expense(
        &mut self,
        reference: &str,
    ) -> BudgetoResult<VariableExpenseItem> {
        let (items, removed) = without(&self.state.variable_expenses, reference)?;
        let entry = deleted_entry(EntityType::VariableExpense, &removed);
        self.transition(|state| state.replace_variable_expenses(items), entry)?;
        Ok(removed)
    }

    pub fn remove_savings_goal(&mut self, reference: &str) -> BudgetoResult<SavingsGoalItem> {
        let (items, removed) = without(&self.state.savings_goals, reference)?;
        let entry = deleted_entry(EntityType::SavingsGoal, &removed);
        self.transition(|state| state.replace_savings_goals(items), entry)?;
        Ok(removed)
    }

    // ---------------------------------------------------------------------
    // Wizard
    // ---------------------------------------------------------------------

    /// The step the cursor points at; an out-of-range cursor reads as the
    /// nearest valid step
    pub fn current_step(&self) -> WizardStep {
        self.state.step().unwrap_or_else(|| {
            WizardStep::from_index(WizardStep::clamp_index(self.state.current_step))
                .unwrap_or(WizardStep::Income)
        })
    }

    pub fn go_to_step(&mut self, step: WizardStep) -> BudgetoResult<WizardStep> {
        let before = self.state.current_step;
        let after = step.index();
        if before != after {
            let entry = AuditEntry::update(
                EntityType::Wizard,
                "step",
                Some(step.title().to_string()),
                &before,
                &after,
                Some(format!("{} -> {}", before, after)),
            );
            self.transition(|state| state.set_step(after), entry)?;
        }
        Ok(step)
    }

    pub fn next_step(&mut self) -> BudgetoResult<WizardStep> {
        let next = self.current_step().next();
        self.go_to_step(next)
    }

    pub fn previous_step(&mut self) -> BudgetoResult<WizardStep> {
        let previous = self.current_step().previous();
        self.go_to_step(previous)
    }

    /// Mark setup as completed; returns false if it already was
    pub fn complete_setup(&mut self) -> BudgetoResult<bool> {
        if self.state.has_completed_setup {
            return Ok(false);
        }
        let entry = AuditEntry::update(
            EntityType::Wizard,
            "setup",
            None,
            &false,
            &true,
            Some("hasCompletedSetup: false -> true".to_string()),
        );
        self.transition(BudgetState::complete_setup, entry)?;
        Ok(true)
    }

    // ---------------------------------------------------------------------
    // Whole budget
    // ---------------------------------------------------------------------

    /// Discard the whole budget, in memory and in storage
    pub fn reset(&mut self) -> BudgetoResult<()> {
        let discarded = self.state.clone();
        self.state = std::mem::take(&mut self.state).reset_all();
        let cleared = self.surface.clear();

        let count = discarded.income.len()
            + discarded.fixed_expenses.len()
            + discarded.variable_expenses.len()
            + discarded.savings_goals.len();
        self.log(AuditEntry::reset(
            &discarded,
            Some(format!("{} items discarded", count)),
        ))?;
        cleared
    }

    /// Replace the budget with a snapshot blob
    ///
    /// On `MalformedSnapshot` the current budget is left as it was.
    pub fn import_snapshot(&mut self, blob: &str) -> BudgetoResult<()> {
        let before = self.state.clone();
        self.state.apply_snapshot(blob)?;
        let saved = self.save();

        let diff = match (
            serde_json::to_value(&before),
            serde_json::to_value(&self.state),
        ) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.log(AuditEntry::update(
            EntityType::Budget,
            "budget",
            Some("import".to_string()),
            &before,
            &self.state,
            diff,
        ))?;
        saved
    }

    pub fn export_snapshot(&self) -> BudgetoResult<String> {
        self.state.to_snapshot_pretty()
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Apply a transition in memory, then persist it and record `entry`
    ///
    /// The entry is logged whether or not the save succeeds.
    fn transition<F>(&mut self, apply: F, entry: AuditEntry) -> BudgetoResult<()>
    where
        F: FnOnce(BudgetState) -> BudgetState,
    {
        let current = std::mem::take(&mut self.state);
        self.state = apply(current);
        let saved = self.save();
        self.log(entry)?;
        saved
    }

    fn log(&self, entry: AuditEntry) -> BudgetoResult<()> {
        match self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

fn created_entry<T: BudgetEntry + Serialize>(entity_type: EntityType, item: &T) -> AuditEntry {
    AuditEntry::create(
        entity_type,
        item.id().to_string(),
        Some(item.name().to_string()),
        item,
    )
}

fn deleted_entry<T: BudgetEntry + Serialize>(entity_type: EntityType, item: &T) -> AuditEntry {
    AuditEntry::delete(
        entity_type,
        item.id().to_string(),
        Some(item.name().to_string()),
        item,
    )
}

/// A copy of `items` with `item` appended, after validating it
fn appended<T: BudgetEntry + Clone>(items: &[T], item: T) -> BudgetoResult<Vec<T>> {
    item.validate()
        .map_err(|e| BudgetoError::Validation(e.to_string()))?;

    if items.iter().any(|existing| existing.id() == item.id()) {
        return Err(BudgetoError::duplicate_item(T::KIND, item.id().as_str()));
    }

    let mut next = items.to_vec();
    next.push(item);
    debug_assert!(ids_unique(&next));
    Ok(next)
}

/// A copy of `items` without the one `reference` names, plus that item
fn without<T: BudgetEntry + Clone>(items: &[T], reference: &str) -> BudgetoResult<(Vec<T>, T)> {
    // An exact id match wins over prefix matches
    let exact = items.iter().position(|item| item.id().as_str() == reference.trim());
    let index = match exact {
        Some(index) => index,
        None => {
            let matches: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.id().matches(reference))
                .map(|(index, _)| index)
                .collect();
            match matches.as_slice() {
                [index] => *index,
                [] => return Err(BudgetoError::item_not_found(T::KIND, reference)),
                _ => {
                    return Err(BudgetoError::Validation(format!(
                        "'{}' matches {} items; use more characters of the id",
                        reference,
                        matches.len()
                    )))
                }
            }
        }
    };

    let removed = items[index].clone();
    let remaining = items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect();
    Ok((remaining, removed))
}
