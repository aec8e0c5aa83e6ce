//! Where budgeto keeps its files
//!
//! The base directory is `BUDGETO_DATA_DIR` when set. Otherwise it is
//! `budgeto` under `$XDG_CONFIG_HOME` (falling back to `~/.config`), or under
//! `%APPDATA%` on Windows. The snapshot lives in `data/`, next to
//! `config.json` and `audit.log`.

use std::path::PathBuf;

use crate::error::BudgetoError;

/// Slot key; the snapshot file is `<key>.json`
pub const SNAPSHOT_KEY: &str = "budgeto-data";

/// File layout under one base directory
#[derive(Debug, Clone)]
pub struct BudgetoPaths {
    base_dir: PathBuf,
}

impl BudgetoPaths {
    /// Base directory from `BUDGETO_DATA_DIR` or the platform default
    ///
    /// Fails with a config error when neither the override nor a home or
    /// APPDATA variable is set.
    pub fn new() -> Result<Self, BudgetoError> {
        let base_dir = if let Ok(custom) = std::env::var("BUDGETO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Layout rooted at `base_dir`, ignoring the environment
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// `<base>/data`, home of the snapshot
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// `<base>/config.json`
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// `<base>/audit.log`
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// `<base>/data/budgeto-data.json`
    pub fn snapshot_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", SNAPSHOT_KEY))
    }

    /// Create `<base>` and `<base>/data` if missing
    pub fn ensure_directories(&self) -> Result<(), BudgetoError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            BudgetoError::Io(format!("Cannot create {}: {}", self.base_dir.display(), e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            BudgetoError::Io(format!("Cannot create {}: {}", self.data_dir().display(), e))
        })?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetoError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| BudgetoError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budgeto"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetoError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetoError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budgeto"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("BUDGETO_DATA_DIR", custom_path);

        let paths = BudgetoPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("BUDGETO_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetoPaths::with_base_dir(temp_dir.path().join("fresh"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.snapshot_file(),
            temp_dir.path().join("data").join("budgeto-data.json")
        );
    }
}
