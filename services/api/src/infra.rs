use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use privacy_risk_scanner::scan::{HandoffStore, ScanSessionRecord, SessionId, StoreError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local handoff store; sessions vanish with the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHandoffStore {
    records: Arc<Mutex<HashMap<SessionId, ScanSessionRecord>>>,
}

impl HandoffStore for InMemoryHandoffStore {
    fn insert(&self, record: ScanSessionRecord) -> Result<ScanSessionRecord, StoreError> {
        let mut guard = self.records.lock().expect("handoff mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<ScanSessionRecord>, StoreError> {
        let guard = self.records.lock().expect("handoff mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<Option<ScanSessionRecord>, StoreError> {
        let mut guard = self.records.lock().expect("handoff mutex poisoned");
        Ok(guard.remove(id))
    }

    fn purge_created_before(&self, cutoff: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut guard = self.records.lock().expect("handoff mutex poisoned");
        let before = guard.len();
        guard.retain(|_, record| record.created_at >= cutoff);
        Ok(before - guard.len())
    }
}
