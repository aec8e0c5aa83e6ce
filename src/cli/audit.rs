//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::error::BudgetoResult;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(audit: &AuditLogger, limit: usize) -> BudgetoResult<()> {
    let entries = audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    let total = audit.entry_count()?;
    if total > entries.len() {
        println!();
        println!("Showing {} of {} entries.", entries.len(), total);
    }

    Ok(())
}
