//! Handoff between the scan form and the results view.
//!
//! The form posts a label plus the seven answers; they are validated, stored
//! under a session id for a short time, and scored when the results view asks
//! for them. A results request for a missing or expired session yields a
//! redirect back to the form, never a default result.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    normalize_target_name, results_path, ScanHandoff, ScanReceipt, ScanResultsView,
    ScanSessionRecord, ScanSubmission, SessionId, UNKNOWN_TARGET,
};
pub use repository::{HandoffStore, StoreError};
pub use router::{scan_router, SCAN_FORM_PATH};
pub use service::{ScanService, ScanServiceError, DEFAULT_SESSION_TTL_SECS};
