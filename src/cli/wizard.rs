//! Wizard CLI commands
//!
//! Moves the step cursor, marks setup complete and resets the budget.

use clap::Subcommand;

use crate::error::{BudgetoError, BudgetoResult};
use crate::models::WizardStep;
use crate::services::BudgetService;

/// Step subcommands
#[derive(Subcommand)]
pub enum StepCommands {
    /// Show the current step
    Show,
    /// Jump to a step (0-4 or income, fixed, variable, savings, summary)
    Set {
        /// Step number or name
        step: String,
    },
    /// Move to the next step
    Next,
    /// Move to the previous step
    Prev,
}

fn print_progress(step: WizardStep) {
    println!(
        "Step {} of {}: {}",
        step.index() + 1,
        WizardStep::ALL.len(),
        step.title()
    );
}

/// Handle a step command
pub fn handle_step_command(service: &mut BudgetService, cmd: StepCommands) -> BudgetoResult<()> {
    match cmd {
        StepCommands::Show => {
            let step = service.current_step();
            print_progress(step);
            if service.state().has_completed_setup {
                println!("Setup completed.");
            }
        }

        StepCommands::Set { step } => {
            let target = WizardStep::parse(&step).ok_or_else(|| {
                BudgetoError::Validation(format!(
                    "Unknown step '{}'. Use 0-4 or income, fixed, variable, savings, summary",
                    step
                ))
            })?;
            print_progress(service.go_to_step(target)?);
        }

        StepCommands::Next => {
            if service.current_step().is_last() {
                println!("Already at the last step.");
            }
            print_progress(service.next_step()?);
        }

        StepCommands::Prev => {
            let before = service.current_step();
            let step = service.previous_step()?;
            if step == before {
                println!("Already at the first step.");
            }
            print_progress(step);
        }
    }

    Ok(())
}

/// Mark setup as completed
pub fn handle_complete_command(service: &mut BudgetService) -> BudgetoResult<()> {
    if service.complete_setup()? {
        println!("Budget setup completed.");
    } else {
        println!("Budget setup was already completed.");
    }
    Ok(())
}

/// Discard the whole budget
pub fn handle_reset_command(service: &mut BudgetService, force: bool) -> BudgetoResult<()> {
    if !force && !service.state().is_empty() {
        return Err(BudgetoError::Validation(
            "This discards every item. Re-run with --force to confirm.".to_string(),
        ));
    }

    service.reset()?;
    println!("Budget reset. All items have been removed.");
    Ok(())
}
