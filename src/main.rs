use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use budgeto::audit::AuditLogger;
use budgeto::cli::{
    handle_audit_command, handle_complete_command, handle_export_command, handle_fixed_command,
    handle_import_command, handle_income_command, handle_recommend_command,
    handle_reset_command, handle_rules_command, handle_savings_command, handle_step_command,
    handle_summary_command, handle_variable_command,
};
use budgeto::config::{BudgetoPaths, Settings};
use budgeto::services::BudgetService;
use budgeto::storage::{load_state, FileSnapshotSurface, SnapshotSurface};
use budgeto::store::BudgetState;
use budgeto::BudgetoError;

#[derive(Parser)]
#[command(
    name = "budgeto",
    version,
    about = "Monthly budget builder with 50/30/20 recommendations",
    long_about = "Budgeto walks you through entering income, fixed expenses, \
                  variable expenses and savings goals, then checks the result \
                  against the 50/30/20 rule and suggests adjustments."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income sources (step 1)
    #[command(subcommand)]
    Income(budgeto::cli::IncomeCommands),

    /// Fixed expenses, the needs (step 2)
    #[command(subcommand, alias = "needs")]
    Fixed(budgeto::cli::FixedCommands),

    /// Variable expenses, the wants (step 3)
    #[command(subcommand, alias = "wants")]
    Variable(budgeto::cli::VariableCommands),

    /// Savings goals (step 4)
    #[command(subcommand)]
    Savings(budgeto::cli::SavingsCommands),

    /// Wizard step navigation
    #[command(subcommand)]
    Step(budgeto::cli::StepCommands),

    /// Mark budget setup as completed
    Complete,

    /// Show totals, remaining funds and the recommendation (step 5)
    Summary,

    /// Assess the stored budget, or four explicit figures
    #[command(allow_negative_numbers = true)]
    Recommend {
        /// Monthly income
        income: Option<f64>,
        /// Needs (fixed expenses)
        needs: Option<f64>,
        /// Wants (variable expenses)
        wants: Option<f64>,
        /// Savings
        savings: Option<f64>,
    },

    /// Discard the whole budget
    Reset {
        /// Skip the confirmation check
        #[arg(short, long)]
        force: bool,
    },

    /// Print the budget snapshot as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the budget with a snapshot file
    Import {
        /// Path to a snapshot JSON file
        file: PathBuf,
    },

    /// Allocation rule used by the recommendation
    #[command(subcommand)]
    Rules(budgeto::cli::RulesCommands),

    /// Show recent changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

/// Load the stored budget, pointing at `reset` when the snapshot is unreadable
fn open_budget<'a>(
    surface: &'a dyn SnapshotSurface,
    audit: &'a AuditLogger,
) -> Result<BudgetService<'a>> {
    match BudgetService::open(surface) {
        Ok(service) => Ok(service.with_audit(audit)),
        Err(e @ BudgetoError::MalformedSnapshot(_)) => Err(anyhow!(
            "{}\nThe stored budget cannot be read. Run 'budgeto reset' to start over \
             or 'budgeto import <file>' to replace it.",
            e
        )),
        Err(e) => Err(e.into()),
    }
}

/// Load the stored budget, treating an unreadable snapshot as empty
fn load_or_start_over(surface: &dyn SnapshotSurface) -> Result<BudgetState> {
    match load_state(surface) {
        Ok(state) => Ok(state),
        Err(BudgetoError::MalformedSnapshot(_)) => Ok(BudgetState::new()),
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetoPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let surface = FileSnapshotSurface::from_paths(&paths);
    let audit = AuditLogger::new(paths.audit_log());

    let Some(command) = cli.command else {
        println!("Budgeto - monthly budget builder");
        println!();
        println!("Run 'budgeto --help' for usage information.");
        println!("Start with 'budgeto income add <name> <amount>'.");
        return Ok(());
    };

    match command {
        Commands::Income(cmd) => {
            let mut service = open_budget(&surface, &audit)?;
            handle_income_command(&mut service, &settings, cmd)?;
        }
        Commands::Fixed(cmd) => {
            let mut service = open_budget(&surface, &audit)?;
            handle_fixed_command(&mut service, &settings, cmd)?;
        }
        Commands::Variable(cmd) => {
            let mut service = open_budget(&surface, &audit)?;
            handle_variable_command(&mut service, &settings, cmd)?;
        }
        Commands::Savings(cmd) => {
            let mut service = open_budget(&surface, &audit)?;
            handle_savings_command(&mut service, &settings, cmd)?;
        }
        Commands::Step(cmd) => {
            let mut service = open_budget(&surface, &audit)?;
            handle_step_command(&mut service, cmd)?;
        }
        Commands::Complete => {
            let mut service = open_budget(&surface, &audit)?;
            handle_complete_command(&mut service)?;
        }
        Commands::Summary => {
            let service = open_budget(&surface, &audit)?;
            handle_summary_command(&service, &settings)?;
        }
        Commands::Recommend {
            income,
            needs,
            wants,
            savings,
        } => {
            let figures = [income, needs, wants, savings];
            if figures.iter().all(Option::is_none) {
                let service = open_budget(&surface, &audit)?;
                handle_recommend_command(Some(&service), &settings, figures)?;
            } else {
                handle_recommend_command(None, &settings, figures)?;
            }
        }
        Commands::Reset { force } => {
            let state = load_or_start_over(&surface)?;
            let mut service = BudgetService::new(&surface, state).with_audit(&audit);
            handle_reset_command(&mut service, force)?;
        }
        Commands::Export { output } => {
            let service = open_budget(&surface, &audit)?;
            handle_export_command(&service, output.as_deref())?;
        }
        Commands::Import { file } => {
            let state = load_or_start_over(&surface)?;
            let mut service = BudgetService::new(&surface, state).with_audit(&audit);
            handle_import_command(&mut service, &file)?;
        }
        Commands::Rules(cmd) => {
            handle_rules_command(&paths, &mut settings, &audit, cmd)?;
        }
        Commands::Audit { limit } => {
            handle_audit_command(&audit, limit)?;
        }
        Commands::Config => {
            println!("Budgeto Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Budget snapshot: {}", surface.path().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Allocation rule: {}", settings.rules);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
    }

    Ok(())
}
