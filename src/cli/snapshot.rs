//! Export and import of the budget snapshot

use std::path::Path;

use crate::error::{BudgetoError, BudgetoResult};
use crate::services::BudgetService;
use crate::storage::file_io::{read_text, write_text_atomic};

/// Print the snapshot JSON, or write it to `output`
pub fn handle_export_command(service: &BudgetService, output: Option<&Path>) -> BudgetoResult<()> {
    let blob = service.export_snapshot()?;

    match output {
        Some(path) => {
            write_text_atomic(path, &blob)?;
            println!("Exported budget to {}", path.display());
        }
        None => println!("{}", blob),
    }

    Ok(())
}

/// Replace the budget with the snapshot stored in `file`
pub fn handle_import_command(service: &mut BudgetService, file: &Path) -> BudgetoResult<()> {
    let blob = read_text(file)?.ok_or_else(|| {
        BudgetoError::Io(format!("Import file not found: {}", file.display()))
    })?;

    service.import_snapshot(&blob)?;

    let state = service.state();
    println!("Imported budget from {}", file.display());
    println!(
        "  {} income, {} fixed, {} variable, {} savings items",
        state.income.len(),
        state.fixed_expenses.len(),
        state.variable_expenses.len(),
        state.savings_goals.len()
    );
    Ok(())
}
