//! Recommendation engine
//!
//! Assesses a budget's four totals against an allocation rule and proposes
//! concrete amounts to cut from needs or wants, or to add to savings.
//!
//! `recommend` is total: any numeric input (including zero or negative
//! totals) yields a recommendation.

use crate::models::{
    Adjustment, AdjustmentCategory, BudgetRecommendation, BudgetRules, RecommendationStatus,
};
use crate::store::BudgetState;

/// Percentage points a bucket may deviate before an adjustment is proposed.
/// A deviation of exactly this much is not flagged.
pub const DEVIATION_THRESHOLD: f64 = 5.0;

const NO_INCOME_MESSAGE: &str = "Please add your income to get personalized recommendations.";
const OVERSPENDING_MESSAGE: &str =
    "Your expenses exceed your income. Consider reducing some expenses to avoid debt.";
const EXCELLENT_MESSAGE: &str =
    "Your budget is well balanced! You're following the 50/30/20 rule nicely.";
const GOOD_MESSAGE: &str = "Your budget is good but could use a small adjustment.";
const WARNING_MESSAGE: &str = "Your budget needs some rebalancing to follow the 50/30/20 rule.";

/// Assess four monthly totals against `rules`
///
/// Adjustments are evaluated in the order needs, wants, savings. The status is
/// `danger` whenever needs + wants + savings exceed income, regardless of how
/// many adjustments were flagged.
pub fn recommend(
    total_income: f64,
    total_needs: f64,
    total_wants: f64,
    total_savings: f64,
    rules: &BudgetRules,
) -> BudgetRecommendation {
    if total_income == 0.0 {
        return BudgetRecommendation {
            status: RecommendationStatus::Warning,
            message: NO_INCOME_MESSAGE.to_string(),
            adjustments: None,
        };
    }

    // Scale before dividing so whole-number inputs give exact percentages
    let percent_of_income = |amount: f64| amount * 100.0 / total_income;
    let recommended_for = |target_pct: f64| target_pct * total_income / 100.0;

    let needs_dev = percent_of_income(total_needs) - rules.needs;
    let wants_dev = percent_of_income(total_wants) - rules.wants;
    // Savings are flagged on shortfall, not excess
    let savings_dev = rules.savings - percent_of_income(total_savings);

    let mut adjustments = Vec::new();

    if needs_dev > DEVIATION_THRESHOLD {
        let recommended = recommended_for(rules.needs);
        adjustments.push(Adjustment {
            category: AdjustmentCategory::Needs,
            current_amount: total_needs,
            recommended_amount: recommended,
            difference: total_needs - recommended,
        });
    }

    if wants_dev > DEVIATION_THRESHOLD {
        let recommended = recommended_for(rules.wants);
        adjustments.push(Adjustment {
            category: AdjustmentCategory::Wants,
            current_amount: total_wants,
            recommended_amount: recommended,
            difference: total_wants - recommended,
        });
    }

    if savings_dev > DEVIATION_THRESHOLD {
        let recommended = recommended_for(rules.savings);
        adjustments.push(Adjustment {
            category: AdjustmentCategory::Savings,
            current_amount: total_savings,
            recommended_amount: recommended,
            difference: recommended - total_savings,
        });
    }

    let (status, message) = if total_needs + total_wants + total_savings > total_income {
        (RecommendationStatus::Danger, OVERSPENDING_MESSAGE)
    } else {
        match adjustments.len() {
            0 => (RecommendationStatus::Excellent, EXCELLENT_MESSAGE),
            1 => (RecommendationStatus::Good, GOOD_MESSAGE),
            _ => (RecommendationStatus::Warning, WARNING_MESSAGE),
        }
    };

    BudgetRecommendation {
        status,
        message: message.to_string(),
        adjustments: if adjustments.is_empty() {
            None
        } else {
            Some(adjustments)
        },
    }
}

/// Assess a budget state: fixed expenses are needs, variable expenses wants
pub fn recommend_for_state(state: &BudgetState, rules: &BudgetRules) -> BudgetRecommendation {
    recommend(
        state.total_income(),
        state.total_fixed_expenses(),
        state.total_variable_expenses(),
        state.total_savings_goals(),
        rules,
    )
}
