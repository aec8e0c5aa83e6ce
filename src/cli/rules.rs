//! Allocation rule CLI commands

use clap::Subcommand;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{BudgetoPaths, Settings};
use crate::error::BudgetoResult;
use crate::models::BudgetRules;

/// Rules subcommands
#[derive(Subcommand)]
pub enum RulesCommands {
    /// Show the active allocation rule
    Show,
    /// Set the needs/wants/savings split in percent
    Set {
        needs: f64,
        wants: f64,
        savings: f64,
    },
    /// Go back to 50/30/20
    Reset,
}

/// Handle a rules command
pub fn handle_rules_command(
    paths: &BudgetoPaths,
    settings: &mut Settings,
    audit: &AuditLogger,
    cmd: RulesCommands,
) -> BudgetoResult<()> {
    let new_rules = match cmd {
        RulesCommands::Show => {
            println!("Allocation rule: {} (needs/wants/savings)", settings.rules);
            return Ok(());
        }
        RulesCommands::Set {
            needs,
            wants,
            savings,
        } => BudgetRules::new(needs, wants, savings),
        RulesCommands::Reset => BudgetRules::default(),
    };

    let before = settings.rules;
    settings.rules = new_rules;
    settings.save(paths)?;

    audit.log(&AuditEntry::update(
        EntityType::Rules,
        "rules",
        None,
        &before,
        &new_rules,
        Some(format!("{} -> {}", before, new_rules)),
    ))?;

    println!("Allocation rule set to {}", new_rules);
    if !new_rules.is_balanced() {
        println!(
            "Warning: percentages add up to {}, not 100.",
            new_rules.total()
        );
    }

    Ok(())
}
