//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_currency;
use crate::display::items::{format_item_list, savings_detail};
use crate::error::BudgetoResult;
use crate::models::{SavingsCategory, SavingsGoalItem};
use crate::services::BudgetService;

use super::{parse_amount, parse_date, unknown_category};

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Add a savings goal
    Add {
        /// Name (e.g., "Emergency fund")
        name: String,
        /// Monthly contribution
        amount: String,
        /// Category (emergency, retirement, vacation, big_purchase, education, other)
        #[arg(short, long, default_value = "emergency")]
        category: String,
        /// Total amount to reach
        #[arg(short, long)]
        target: Option<String>,
        /// Date to reach the goal by (YYYY-MM-DD)
        #[arg(short, long)]
        by: Option<String>,
    },
    /// Remove a savings goal
    Remove {
        /// Item ID (or unambiguous prefix)
        id: String,
    },
    /// List savings goals
    List,
}

/// Handle a savings goal command
pub fn handle_savings_command(
    service: &mut BudgetService,
    settings: &Settings,
    cmd: SavingsCommands,
) -> BudgetoResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SavingsCommands::Add {
            name,
            amount,
            category,
            target,
            by,
        } => {
            let amount = parse_amount(&amount)?;
            let category = SavingsCategory::parse(&category)
                .ok_or_else(|| unknown_category(&category, SavingsCategory::VALID))?;

            let mut item = SavingsGoalItem::new(name, amount, category);
            if let Some(target) = target {
                item = item.with_target_amount(parse_amount(&target)?);
            }
            if let Some(by) = by {
                item = item.with_target_date(parse_date(&by)?);
            }

            let detail = savings_detail(&item, symbol);
            let name = item.name.clone();
            let id = service.add_savings_goal(item)?;

            println!(
                "Added savings goal: {} ({} per month)",
                name,
                format_currency(amount, symbol)
            );
            if !detail.is_empty() {
                println!("  {}", detail);
            }
            println!("  ID: {}", id.short());
        }

        SavingsCommands::Remove { id } => {
            let removed = service.remove_savings_goal(&id)?;
            println!(
                "Removed savings goal: {} ({})",
                removed.name,
                format_currency(removed.amount, symbol)
            );
        }

        SavingsCommands::List => {
            println!(
                "{}",
                format_item_list(&service.state().savings_goals, symbol, |item| {
                    savings_detail(item, symbol)
                })
            );
        }
    }

    Ok(())
}
