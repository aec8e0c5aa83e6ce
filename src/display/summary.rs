//! Budget summary and recommendation display
//!
//! Renders the final wizard step: totals with their share of income, the
//! remaining funds, balance feedback and the 50/30/20 assessment.

use crate::models::{Adjustment, AdjustmentCategory, BudgetRecommendation, BudgetRules};
use crate::store::BudgetTotals;

use super::format::{format_bar, format_currency, format_percentage, separator};

const WIDTH: usize = 52;
const BAR_WIDTH: usize = 20;

/// Format totals, percentages and remaining funds
pub fn format_budget_summary(totals: &BudgetTotals, rules: &BudgetRules, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Your Monthly Budget\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<28}{:>12}\n",
        "Total Income",
        format_currency(totals.income, symbol)
    ));

    let rows = [
        ("Fixed Expenses (Needs)", totals.fixed_expenses, totals.needs_percentage, rules.needs),
        ("Variable Expenses (Wants)", totals.variable_expenses, totals.wants_percentage, rules.wants),
        ("Savings Goals", totals.savings_goals, totals.savings_percentage, rules.savings),
    ];
    for (label, amount, pct, target) in rows {
        output.push_str(&format!(
            "{:<28}{:>12}  {:>6} of {}\n",
            label,
            format_currency(amount, symbol),
            format_percentage(pct),
            format_percentage(target),
        ));
        output.push_str(&format!(
            "{:<28}{}\n",
            "",
            format_bar(pct, 100.0, BAR_WIDTH)
        ));
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<28}{:>12}\n",
        "Remaining Funds",
        format_currency(totals.remaining, symbol)
    ));
    output.push('\n');
    output.push_str(&format_balance_feedback(totals, symbol));

    output
}

/// Balanced / over-budget feedback
pub fn format_balance_feedback(totals: &BudgetTotals, symbol: &str) -> String {
    if totals.is_balanced() {
        format!(
            "✓ Your budget is balanced!\n  You have {} left to allocate or save.\n  \
             Consider putting extra funds toward savings goals or debt repayment.\n",
            format_currency(totals.remaining, symbol)
        )
    } else {
        format!(
            "⚠ Your expenses exceed your income.\n  You're spending {} more than you earn.\n  \
             Try reducing some variable expenses or finding additional income sources.\n",
            format_currency(totals.remaining.abs(), symbol)
        )
    }
}

/// One line of guidance for an adjustment
pub fn format_adjustment(adjustment: &Adjustment, symbol: &str) -> String {
    let verb = if adjustment.is_increase() {
        "Increase"
    } else {
        "Reduce"
    };
    let bucket = match adjustment.category {
        AdjustmentCategory::Needs => "needs (fixed expenses)",
        AdjustmentCategory::Wants => "wants (variable expenses)",
        AdjustmentCategory::Savings => "savings",
    };
    format!(
        "{} {} by {} (currently {}, recommended {})",
        verb,
        bucket,
        format_currency(adjustment.difference, symbol),
        format_currency(adjustment.current_amount, symbol),
        format_currency(adjustment.recommended_amount, symbol),
    )
}

/// Status, message and adjustment guidance
pub fn format_recommendation(recommendation: &BudgetRecommendation, symbol: &str) -> String {
    let mut output = format!(
        "Budget health: {}\n{}\n",
        recommendation.status, recommendation.message
    );

    if recommendation.has_adjustments() {
        output.push_str("\nSuggested adjustments:\n");
        for adjustment in recommendation.adjustments() {
            output.push_str(&format!("  - {}\n", format_adjustment(adjustment, symbol)));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::recommend;
    use crate::store::BudgetState;

    #[test]
    fn test_summary_contains_totals() {
        let totals = BudgetState::new().totals();
        let output = format_budget_summary(&totals, &BudgetRules::default(), "$");
        assert!(output.contains("Total Income"));
        assert!(output.contains("0.0% of 50.0%"));
        assert!(output.contains("Your budget is balanced!"));
    }

    #[test]
    fn test_over_budget_feedback() {
        let totals = BudgetTotals {
            income: 1000.0,
            fixed_expenses: 900.0,
            variable_expenses: 300.0,
            savings_goals: 0.0,
            remaining: -200.0,
            needs_percentage: 90.0,
            wants_percentage: 30.0,
            savings_percentage: 0.0,
        };
        let output = format_balance_feedback(&totals, "$");
        assert!(output.contains("exceed your income"));
        assert!(output.contains("$200 more than you earn"));
    }

    #[test]
    fn test_recommendation_guidance() {
        let rec = recommend(1000.0, 600.0, 300.0, 100.0, &BudgetRules::default());
        let output = format_recommendation(&rec, "$");

        assert!(output.contains("Budget health: Warning"));
        assert!(output.contains("Reduce needs (fixed expenses) by $100"));
        assert!(output.contains("Increase savings by $100"));
    }

    #[test]
    fn test_recommendation_without_adjustments() {
        let rec = recommend(1000.0, 500.0, 300.0, 200.0, &BudgetRules::default());
        let output = format_recommendation(&rec, "$");

        assert!(output.contains("Excellent"));
        assert!(!output.contains("Suggested adjustments"));
    }
}
