//! Income CLI commands
//!
//! Implements the first wizard step: adding, removing and listing income.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::items::{format_item_list, income_detail};
use crate::display::format_currency;
use crate::error::{BudgetoError, BudgetoResult};
use crate::models::{IncomeCategory, IncomeFrequency, IncomeItem};
use crate::services::BudgetService;

use super::{parse_amount, unknown_category};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an income source
    Add {
        /// Name (e.g., "Part-time job")
        name: String,
        /// Monthly amount (e.g., "1200" or "1,200.50")
        amount: String,
        /// Category (salary, grant, side_job, other)
        #[arg(short, long, default_value = "salary")]
        category: String,
        /// How often it is paid (monthly, biweekly, weekly)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
    },
    /// Remove an income source
    Remove {
        /// Item ID (or unambiguous prefix)
        id: String,
    },
    /// List income sources
    List,
}

/// Handle an income command
pub fn handle_income_command(
    service: &mut BudgetService,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetoResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            category,
            frequency,
        } => {
            let amount = parse_amount(&amount)?;
            let category = IncomeCategory::parse(&category)
                .ok_or_else(|| unknown_category(&category, IncomeCategory::VALID))?;
            let frequency = IncomeFrequency::parse(&frequency).ok_or_else(|| {
                BudgetoError::Validation(format!(
                    "Unknown frequency '{}'. Valid frequencies: {}",
                    frequency,
                    IncomeFrequency::VALID
                ))
            })?;

            let item = IncomeItem::new(name, amount, category).with_frequency(frequency);
            let name = item.name.clone();
            let id = service.add_income(item)?;

            println!("Added income: {} ({})", name, format_currency(amount, symbol));
            println!("  ID: {}", id.short());
            println!(
                "  Total income: {}",
                format_currency(service.state().total_income(), symbol)
            );
        }

        IncomeCommands::Remove { id } => {
            let removed = service.remove_income(&id)?;
            println!(
                "Removed income: {} ({})",
                removed.name,
                format_currency(removed.amount, symbol)
            );
        }

        IncomeCommands::List => {
            println!("{}", format_item_list(&service.state().income, symbol, income_detail));
        }
    }

    Ok(())
}
