//! Token store: a single access-token record, overwritten on every
//! successful code exchange.

pub mod file;
pub mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The persisted result of a code exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub fetched_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Build a record fetched at `now` that lives for `expires_in_secs`.
    pub fn issued(access_token: String, expires_in_secs: u64, now: DateTime<Utc>) -> Self {
        let lifetime = i64::try_from(expires_in_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX);
        Self {
            access_token,
            expires_at: now.checked_add_signed(lifetime).unwrap_or(DateTime::<Utc>::MAX_UTC),
            fetched_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Storage seam for the token record.
///
/// `load` never fails: absent or unreadable state is reported as `None`.
pub trait TokenStore: Send + Sync {
    fn save(&self, record: &TokenRecord) -> Result<(), AppError>;

    fn load(&self) -> Option<TokenRecord>;

    /// Short label shown on the status page.
    fn describe(&self) -> String;
}
