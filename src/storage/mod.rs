//! Storage layer for Budgeto
//!
//! The budget is persisted as a single snapshot blob in one named slot. The
//! core only needs `load`, `save` and `clear` from that slot, expressed by the
//! `SnapshotSurface` trait. `FileSnapshotSurface` is the on-disk slot used by
//! the CLI; `MemorySnapshotSurface` backs tests and sessions without durable
//! storage.
//!
//! Any failure of the surface is reported as `StorageUnavailable`. The
//! in-memory `BudgetState` stays usable regardless.

pub mod file_io;

use std::cell::RefCell;
use std::path::PathBuf;

use crate::config::paths::BudgetoPaths;
use crate::error::{BudgetoError, BudgetoResult};
use crate::store::BudgetState;

pub use file_io::{read_text, write_json_atomic, write_text_atomic};

/// A durable key-value slot holding one snapshot blob
pub trait SnapshotSurface {
    /// Read the stored blob, or `None` if nothing has been saved
    fn load(&self) -> BudgetoResult<Option<String>>;

    /// Overwrite the stored blob
    fn save(&self, blob: &str) -> BudgetoResult<()>;

    /// Discard the stored blob
    fn clear(&self) -> BudgetoResult<()>;
}

/// Snapshot slot backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileSnapshotSurface {
    path: PathBuf,
}

impl FileSnapshotSurface {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The well-known slot inside the data directory
    pub fn from_paths(paths: &BudgetoPaths) -> Self {
        Self::new(paths.snapshot_file())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SnapshotSurface for FileSnapshotSurface {
    fn load(&self) -> BudgetoResult<Option<String>> {
        file_io::read_text(&self.path)
    }

    fn save(&self, blob: &str) -> BudgetoResult<()> {
        file_io::write_text_atomic(&self.path, blob)
    }

    fn clear(&self) -> BudgetoResult<()> {
        file_io::remove_if_exists(&self.path)
    }
}

/// Snapshot slot held in memory
///
/// A `disabled` surface fails every call, standing in for storage that has
/// been switched off.
#[derive(Debug, Default)]
pub struct MemorySnapshotSurface {
    blob: RefCell<Option<String>>,
    disabled: bool,
}

impl MemorySnapshotSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
            disabled: false,
        }
    }

    pub fn disabled() -> Self {
        Self {
            blob: RefCell::new(None),
            disabled: true,
        }
    }

    /// The currently stored blob, if any
    pub fn contents(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    fn check_enabled(&self) -> BudgetoResult<()> {
        if self.disabled {
            return Err(BudgetoError::StorageUnavailable(
                "Storage is disabled".into(),
            ));
        }
        Ok(())
    }
}

impl SnapshotSurface for MemorySnapshotSurface {
    fn load(&self) -> BudgetoResult<Option<String>> {
        self.check_enabled()?;
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> BudgetoResult<()> {
        self.check_enabled()?;
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> BudgetoResult<()> {
        self.check_enabled()?;
        *self.blob.borrow_mut() = None;
        Ok(())
    }
}

/// Load the persisted budget, or the empty state if nothing was saved
///
/// Fails with `StorageUnavailable` if the slot can't be read and with
/// `MalformedSnapshot` if its contents don't parse.
pub fn load_state(surface: &dyn SnapshotSurface) -> BudgetoResult<BudgetState> {
    match surface.load()? {
        Some(blob) => BudgetState::from_snapshot(&blob),
        None => Ok(BudgetState::new()),
    }
}

/// Persist the whole budget into the slot
pub fn save_state(surface: &dyn SnapshotSurface, state: &BudgetState) -> BudgetoResult<()> {
    let blob = state.to_snapshot()?;
    surface.save(&blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeCategory, IncomeItem};
    use tempfile::TempDir;

    fn sample_state() -> BudgetState {
        BudgetState::new()
            .replace_income(vec![IncomeItem::new("Job", 2000.0, IncomeCategory::Salary)])
            .set_step(1)
    }

    #[test]
    fn test_file_surface_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let surface = FileSnapshotSurface::new(temp_dir.path().join("data").join("slot.json"));

        assert!(surface.load().unwrap().is_none());
        assert_eq!(load_state(&surface).unwrap(), BudgetState::new());

        let state = sample_state();
        save_state(&surface, &state).unwrap();
        assert_eq!(load_state(&surface).unwrap(), state);

        surface.clear().unwrap();
        assert!(surface.load().unwrap().is_none());
    }

    #[test]
    fn test_file_surface_uses_well_known_slot() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let surface = FileSnapshotSurface::from_paths(&paths);

        assert_eq!(surface.path(), &paths.snapshot_file());
    }

    #[test]
    fn test_corrupt_file_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slot.json");
        std::fs::write(&path, "{\"income\": 12").unwrap();

        let surface = FileSnapshotSurface::new(path);
        let err = load_state(&surface).unwrap_err();
        assert!(err.is_malformed_snapshot());
    }

    #[test]
    fn test_memory_surface() {
        let surface = MemorySnapshotSurface::new();
        let state = sample_state();

        save_state(&surface, &state).unwrap();
        assert!(surface.contents().is_some());
        assert_eq!(load_state(&surface).unwrap(), state);

        surface.clear().unwrap();
        assert_eq!(surface.contents(), None);
    }

    #[test]
    fn test_disabled_surface_keeps_state_usable() {
        let surface = MemorySnapshotSurface::disabled();
        let state = sample_state();

        let err = save_state(&surface, &state).unwrap_err();
        assert!(err.is_storage_unavailable());
        assert!(load_state(&surface).unwrap_err().is_storage_unavailable());

        // The in-memory snapshot is unaffected by the failed save
        assert_eq!(state.total_income(), 2000.0);
    }

    #[test]
    fn test_load_from_prefilled_blob() {
        let state = sample_state();
        let surface = MemorySnapshotSurface::with_blob(state.to_snapshot().unwrap());
        assert_eq!(load_state(&surface).unwrap(), state);
    }
}
