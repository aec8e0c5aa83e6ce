//! Summary and recommendation CLI commands

use crate::config::settings::Settings;
use crate::display::{format_budget_summary, format_recommendation};
use crate::error::{BudgetoError, BudgetoResult};
use crate::services::{recommend, BudgetService};

/// Show totals, remaining funds and the assessment of the stored budget
pub fn handle_summary_command(service: &BudgetService, settings: &Settings) -> BudgetoResult<()> {
    let symbol = settings.currency_symbol.as_str();

    println!(
        "{}",
        format_budget_summary(&service.totals(), &settings.rules, symbol)
    );
    println!(
        "{}",
        format_recommendation(&service.recommendation(&settings.rules), symbol)
    );

    if !service.state().has_completed_setup {
        println!("Run 'budgeto complete' once you are happy with this budget.");
    }

    Ok(())
}

/// Assess either the stored budget or four explicit figures
///
/// `figures` is income, needs, wants and savings; all four or none.
pub fn handle_recommend_command(
    service: Option<&BudgetService>,
    settings: &Settings,
    figures: [Option<f64>; 4],
) -> BudgetoResult<()> {
    let symbol = settings.currency_symbol.as_str();

    let recommendation = match (figures, service) {
        ([Some(income), Some(needs), Some(wants), Some(savings)], _) => {
            recommend(income, needs, wants, savings, &settings.rules)
        }
        ([None, None, None, None], Some(service)) => service.recommendation(&settings.rules),
        ([None, None, None, None], None) => {
            return Err(BudgetoError::Validation(
                "No budget loaded to assess".to_string(),
            ))
        }
        _ => {
            return Err(BudgetoError::Validation(
                "Give all four of income, needs, wants and savings, or none".to_string(),
            ))
        }
    };

    println!("{}", format_recommendation(&recommendation, symbol));
    Ok(())
}
