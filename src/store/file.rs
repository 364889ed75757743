//! File-backed token store: one pretty-printed JSON document.
//!
//! Single-process, single-writer. No locking.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{TokenRecord, TokenStore};
use crate::error::AppError;

pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, record: &TokenRecord) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, json)?;
        debug!("Token saved to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Option<TokenRecord> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring malformed token file {}: {e}", self.path.display());
                None
            }
        }
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
