use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::scan::domain::{ScanSessionRecord, ScanSubmission, SessionId};
use crate::scan::repository::{HandoffStore, StoreError};
use crate::scan::{scan_router, ScanService};
use crate::scoring::{PermissionSignals, Signal};

pub(super) const TTL_SECS: u64 = 600;

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<HashMap<SessionId, ScanSessionRecord>>>,
}

impl HandoffStore for MemoryStore {
    fn insert(&self, record: ScanSessionRecord) -> Result<ScanSessionRecord, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<ScanSessionRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<Option<ScanSessionRecord>, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.remove(id))
    }

    fn purge_created_before(&self, cutoff: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let before = guard.len();
        guard.retain(|_, record| record.created_at >= cutoff);
        Ok(before - guard.len())
    }
}

pub(super) struct UnavailableStore;

impl HandoffStore for UnavailableStore {
    fn insert(&self, _record: ScanSessionRecord) -> Result<ScanSessionRecord, StoreError> {
        Err(StoreError::Unavailable("maintenance".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<ScanSessionRecord>, StoreError> {
        Err(StoreError::Unavailable("maintenance".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<Option<ScanSessionRecord>, StoreError> {
        Err(StoreError::Unavailable("maintenance".to_string()))
    }

    fn purge_created_before(&self, _cutoff: DateTime<Utc>) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("maintenance".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<ScanService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(ScanService::new(store.clone(), TTL_SECS));
    (service, store)
}

pub(super) fn router_with_service(service: Arc<ScanService<MemoryStore>>) -> axum::Router {
    scan_router(service)
}

pub(super) fn location_without_policy() -> PermissionSignals {
    PermissionSignals::default().with(Signal::LocationAccess, true)
}

pub(super) fn submission(name: &str) -> ScanSubmission {
    ScanSubmission::new(name, &location_without_policy())
}

pub(super) async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
