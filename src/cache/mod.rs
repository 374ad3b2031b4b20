//! Local session cache: the single durable slot holding the current timer
//! session. One logical session per device; every write is a full
//! overwrite of the slot, never a merge.

use crate::errors::{AppError, AppResult};
use crate::models::TimerSession;
use crate::ui::messages;
use std::fs;
use std::path::{Path, PathBuf};

pub trait SessionCache {
    /// Read the cached session. Absent or unparseable content is "no
    /// session", never an error.
    fn read_session(&self) -> Option<TimerSession>;

    /// Overwrite the slot with the full session.
    fn write_session(&self, session: &TimerSession) -> AppResult<()>;

    /// Empty the slot.
    fn clear_session(&self) -> AppResult<()>;
}

/// File-backed cache: one JSON document at a fixed path.
pub struct FileSessionCache {
    path: PathBuf,
}

impl FileSessionCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionCache for FileSessionCache {
    fn read_session(&self) -> Option<TimerSession> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<TimerSession>(&content) {
            Ok(session) => Some(session),
            Err(_) => {
                messages::warning(format!(
                    "Session cache at {} is unreadable; starting idle",
                    self.path.display()
                ));
                None
            }
        }
    }

    fn write_session(&self, session: &TimerSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(session)
            .map_err(|e| AppError::Cache(format!("serialize session: {}", e)))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear_session(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
