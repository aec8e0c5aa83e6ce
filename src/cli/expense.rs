//! Expense CLI commands
//!
//! Fixed expenses (needs) and variable expenses (wants) share the same shape:
//! add, remove and list.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_currency;
use crate::display::items::format_item_list;
use crate::error::BudgetoResult;
use crate::models::{
    FixedExpenseCategory, FixedExpenseItem, VariableExpenseCategory, VariableExpenseItem,
};
use crate::services::BudgetService;

use super::{parse_amount, unknown_category};

/// Fixed expense subcommands
#[derive(Subcommand)]
pub enum FixedCommands {
    /// Add a fixed monthly expense
    Add {
        /// Name (e.g., "Rent")
        name: String,
        /// Monthly amount
        amount: String,
        /// Category (housing, transport, utilities, insurance, subscription, debt, other)
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// Remove a fixed expense
    Remove {
        /// Item ID (or unambiguous prefix)
        id: String,
    },
    /// List fixed expenses
    List,
}

/// Variable expense subcommands
#[derive(Subcommand)]
pub enum VariableCommands {
    /// Add a variable monthly expense
    Add {
        /// Name (e.g., "Groceries")
        name: String,
        /// Estimated monthly amount
        amount: String,
        /// Category (food, shopping, entertainment, health, education, travel, other)
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// Remove a variable expense
    Remove {
        /// Item ID (or unambiguous prefix)
        id: String,
    },
    /// List variable expenses
    List,
}

/// Handle a fixed expense command
pub fn handle_fixed_command(
    service: &mut BudgetService,
    settings: &Settings,
    cmd: FixedCommands,
) -> BudgetoResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        FixedCommands::Add {
            name,
            amount,
            category,
        } => {
            let amount = parse_amount(&amount)?;
            let category = FixedExpenseCategory::parse(&category)
                .ok_or_else(|| unknown_category(&category, FixedExpenseCategory::VALID))?;

            let item = FixedExpenseItem::new(name, amount, category);
            let name = item.name.clone();
            let id = service.add_fixed_expense(item)?;

            println!(
                "Added fixed expense: {} ({})",
                name,
                format_currency(amount, symbol)
            );
            println!("  ID: {}", id.short());
        }

        FixedCommands::Remove { id } => {
            let removed = service.remove_fixed_expense(&id)?;
            println!(
                "Removed fixed expense: {} ({})",
                removed.name,
                format_currency(removed.amount, symbol)
            );
        }

        FixedCommands::List => {
            println!(
                "{}",
                format_item_list(&service.state().fixed_expenses, symbol, |_| String::new())
            );
        }
    }

    Ok(())
}

/// Handle a variable expense command
pub fn handle_variable_command(
    service: &mut BudgetService,
    settings: &Settings,
    cmd: VariableCommands,
) -> BudgetoResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        VariableCommands::Add {
            name,
            amount,
            category,
        } => {
            let amount = parse_amount(&amount)?;
            let category = VariableExpenseCategory::parse(&category)
                .ok_or_else(|| unknown_category(&category, VariableExpenseCategory::VALID))?;

            let item = VariableExpenseItem::new(name, amount, category);
            let name = item.name.clone();
            let id = service.add_variable_expense(item)?;

            println!(
                "Added variable expense: {} ({})",
                name,
                format_currency(amount, symbol)
            );
            println!("  ID: {}", id.short());
        }

        VariableCommands::Remove { id } => {
            let removed = service.remove_variable_expense(&id)?;
            println!(
                "Removed variable expense: {} ({})",
                removed.name,
                format_currency(removed.amount, symbol)
            );
        }

        VariableCommands::List => {
            println!(
                "{}",
                format_item_list(&service.state().variable_expenses, symbol, |_| String::new())
            );
        }
    }

    Ok(())
}
