use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::domain::{
    ScanHandoff, ScanReceipt, ScanResultsView, ScanSessionRecord, ScanSubmission, SessionId,
};
use super::repository::{HandoffStore, StoreError};
use crate::scoring::{ScoreEngine, SignalValidationError};

/// Default lifetime of a handoff between the scan form and the results view.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

/// Service carrying scan answers across the form/results navigation boundary.
pub struct ScanService<S> {
    store: Arc<S>,
    engine: ScoreEngine,
    ttl: Duration,
}

/// Random v4 id; sessions must not be enumerable.
fn next_session_id() -> SessionId {
    SessionId(Uuid::new_v4().to_string())
}

impl<S> ScanService<S>
where
    S: HandoffStore + 'static,
{
    pub fn new(store: Arc<S>, ttl_seconds: u64) -> Self {
        let ttl = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::seconds(DEFAULT_SESSION_TTL_SECS as i64));

        Self {
            store,
            engine: ScoreEngine::new(),
            ttl,
        }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Validate a form submission and park it under a fresh session id.
    pub fn submit(&self, submission: ScanSubmission) -> Result<ScanReceipt, ScanServiceError> {
        self.submit_at(submission, Utc::now())
    }

    pub(crate) fn submit_at(
        &self,
        submission: ScanSubmission,
        now: DateTime<Utc>,
    ) -> Result<ScanReceipt, ScanServiceError> {
        let handoff = ScanHandoff::from_submission(submission)?;
        self.purge_expired(now)?;

        let record = ScanSessionRecord {
            session_id: next_session_id(),
            handoff,
            created_at: now,
        };

        let stored = self.store.insert(record)?;
        let receipt = ScanReceipt::for_record(&stored);
        info!(
            session_id = %receipt.session_id,
            selected = receipt.selected_count,
            "scan submission stored"
        );
        Ok(receipt)
    }

    /// Score the stored answers for a session.
    ///
    /// A missing or expired handoff is reported as `MissingHandoff`; callers
    /// must send the user back to the scan form instead of rendering a default.
    pub fn results(&self, session_id: &SessionId) -> Result<ScanResultsView, ScanServiceError> {
        self.results_at(session_id, Utc::now())
    }

    pub(crate) fn results_at(
        &self,
        session_id: &SessionId,
        now: DateTime<Utc>,
    ) -> Result<ScanResultsView, ScanServiceError> {
        self.purge_expired(now)?;

        let record = match self.store.fetch(session_id)? {
            Some(record) if record.is_expired(now, self.ttl) => {
                debug!(%session_id, "scan handoff expired");
                self.store.remove(session_id)?;
                return Err(ScanServiceError::MissingHandoff(session_id.clone()));
            }
            Some(record) => record,
            None => return Err(ScanServiceError::MissingHandoff(session_id.clone())),
        };

        let result = self.engine.score(&record.handoff.permissions);
        Ok(ScanResultsView {
            session_id: record.session_id,
            target_name: record.handoff.target_name,
            result,
        })
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> Result<(), StoreError> {
        let purged = self.store.purge_created_before(now - self.ttl)?;
        if purged > 0 {
            debug!(purged, "expired scan handoffs removed");
        }
        Ok(())
    }

    /// Drop a session's handoff, e.g. when the user starts a new scan.
    pub fn discard(&self, session_id: &SessionId) -> Result<bool, ScanServiceError> {
        Ok(self.store.remove(session_id)?.is_some())
    }
}

/// Error raised by the scan service.
#[derive(Debug, thiserror::Error)]
pub enum ScanServiceError {
    #[error(transparent)]
    Validation(#[from] SignalValidationError),
    #[error("no scan data for session {0}")]
    MissingHandoff(SessionId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
