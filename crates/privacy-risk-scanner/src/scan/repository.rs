use chrono::{DateTime, Utc};

use super::domain::{ScanSessionRecord, SessionId};

/// Short-lived storage for scan handoffs so the service can be exercised in isolation.
pub trait HandoffStore: Send + Sync {
    fn insert(&self, record: ScanSessionRecord) -> Result<ScanSessionRecord, StoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<ScanSessionRecord>, StoreError>;
    fn remove(&self, id: &SessionId) -> Result<Option<ScanSessionRecord>, StoreError>;
    /// Drop every record created strictly before `cutoff`, returning how many went.
    fn purge_created_before(&self, cutoff: DateTime<Utc>) -> Result<usize, StoreError>;
}

/// Error enumeration for handoff store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session already exists")]
    Conflict,
    #[error("handoff store unavailable: {0}")]
    Unavailable(String),
}
