use std::sync::RwLock;

use super::{TokenRecord, TokenStore};
use crate::error::AppError;

/// In-process token store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryTokenStore {
    record: RwLock<Option<TokenRecord>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, record: &TokenRecord) -> Result<(), AppError> {
        let mut slot = self
            .record
            .write()
            .map_err(|e| AppError::Storage(format!("token lock poisoned: {e}")))?;
        *slot = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> Option<TokenRecord> {
        self.record.read().ok().and_then(|slot| slot.clone())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
