//! JSON Lines file of budget changes
//!
//! Lines are only ever appended. Blank lines are skipped when reading.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{BudgetoError, BudgetoResult};

use super::entry::AuditEntry;

/// Appends to and reads back one audit file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Write `entry` as a line, creating the file and its directory on first use
    pub fn log(&self, entry: &AuditEntry) -> BudgetoResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BudgetoError::Io(format!("Cannot create audit directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                BudgetoError::Io(format!(
                    "Cannot open {} for appending: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        let json = serde_json::to_string(entry)
            .map_err(|e| BudgetoError::Json(format!("Audit entry is not serializable: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| BudgetoError::Io(format!("Cannot append to audit log: {}", e)))?;

        file.flush()
            .map_err(|e| BudgetoError::Io(format!("Cannot sync audit log: {}", e)))?;

        Ok(())
    }

    /// Every entry in file order; a missing file reads as empty
    pub fn read_all(&self) -> BudgetoResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| {
            BudgetoError::Io(format!("Cannot open {}: {}", self.log_path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                BudgetoError::Io(format!(
                    "Audit log line {} is unreadable: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                BudgetoError::Json(format!(
                    "Audit log line {} is not a valid entry: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, still oldest first
    pub fn read_recent(&self, count: usize) -> BudgetoResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn entry_count(&self) -> BudgetoResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        (AuditLogger::new(log_path), temp_dir)
    }

    fn income_entry(i: usize) -> AuditEntry {
        AuditEntry::create(
            EntityType::Income,
            format!("inc-{}", i),
            Some(format!("Income {}", i)),
            &json!({"name": format!("Income {}", i), "amount": 100 * i}),
        )
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&income_entry(1)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Income);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..5 {
            logger.log(&income_entry(i)).unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity_id, "inc-3");
        assert_eq!(recent[1].entity_id, "inc-4");
        assert_eq!(logger.entry_count().unwrap(), 5);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert_eq!(logger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_skips_blank_lines() {
        let (logger, _temp) = create_test_logger();
        logger.log(&income_entry(1)).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .and_then(|mut f| writeln!(f))
            .unwrap();
        logger.log(&income_entry(2)).unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (logger, _temp) = create_test_logger();
        logger.log(&income_entry(1)).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .and_then(|mut f| writeln!(f, "not json"))
            .unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
