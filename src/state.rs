//! Persisted record of when each section last mirrored successfully.
//!
//! Loading never fails: a missing, unreadable, corrupt, or foreign-version
//! state file is treated as "nothing has ever been backed up". Saving does
//! fail loudly, since losing a write means losing bookkeeping.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::PersistError;
use crate::types::RunMode;

pub const STATE_VERSION: &str = "v1";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackupState {
    pub version: String,
    #[serde(default)]
    pub backups: BTreeMap<String, SectionState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SectionState {
    #[serde(rename = "lastBackup")]
    pub last_backup: DateTime<Local>,
}

impl Default for BackupState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION.to_string(),
            backups: BTreeMap::new(),
        }
    }
}

impl BackupState {
    pub fn record_success(&mut self, name: &str, timestamp: DateTime<Local>) {
        self.backups.insert(
            name.to_string(),
            SectionState {
                last_backup: timestamp,
            },
        );
    }

    pub fn last_success(&self, name: &str) -> Option<DateTime<Local>> {
        self.backups.get(name).map(|s| s.last_backup)
    }
}

pub struct StateStore {
    path: PathBuf,
    run_mode: RunMode,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>, run_mode: RunMode) -> Self {
        Self {
            path: path.into(),
            run_mode,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> BackupState {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!("no usable state at {}: {}", self.path.display(), err);
                return BackupState::default();
            }
        };
        match serde_yaml::from_str::<BackupState>(&contents) {
            Ok(state) if state.version == STATE_VERSION => state,
            Ok(state) => {
                tracing::debug!(
                    "ignoring state {} with version {}",
                    self.path.display(),
                    state.version
                );
                BackupState::default()
            }
            Err(err) => {
                tracing::debug!("ignoring unparsable state {}: {}", self.path.display(), err);
                BackupState::default()
            }
        }
    }

    /// Replaces the state file atomically. Skipped on a dry run.
    pub fn save(&self, state: &BackupState) -> Result<(), PersistError> {
        let data = serde_yaml::to_string(state).map_err(|e| PersistError::Encode(e.to_string()))?;
        if self.run_mode.dry_run {
            tracing::info!("dry-run: would write state {}", self.path.display());
            return Ok(());
        }
        let write_err = |source: std::io::Error| PersistError::Write {
            path: self.path.clone(),
            source,
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(write_err)?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
        tmp.write_all(data.as_bytes()).map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
