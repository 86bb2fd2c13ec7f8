use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::scoring::{PermissionSignals, ScoreResult, Signal, SignalValidationError};

/// Label used when the user leaves the app/website name blank.
pub const UNKNOWN_TARGET: &str = "Unknown App";

/// Opaque key tying a scan submission to its results view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw form payload posted by the collection surface.
///
/// `permissions` stays untyped until validated so non-boolean answers can be
/// reported per signal instead of as a generic decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSubmission {
    #[serde(default)]
    pub target_name: Option<String>,
    #[serde(default)]
    pub permissions: Value,
}

impl ScanSubmission {
    pub fn new(target_name: impl Into<String>, permissions: &PermissionSignals) -> Self {
        let answers: Map<String, Value> = Signal::ALL
            .into_iter()
            .map(|signal| (signal.key().to_string(), Value::Bool(permissions.get(signal))))
            .collect();

        Self {
            target_name: Some(target_name.into()),
            permissions: Value::Object(answers),
        }
    }
}

/// Validated label and answers carried from the scan form to the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanHandoff {
    pub target_name: String,
    pub permissions: PermissionSignals,
}

impl ScanHandoff {
    pub fn from_submission(submission: ScanSubmission) -> Result<Self, SignalValidationError> {
        let permissions = if submission.permissions.is_null() {
            PermissionSignals::default()
        } else {
            PermissionSignals::from_value(&submission.permissions)?
        };

        Ok(Self {
            target_name: normalize_target_name(submission.target_name.as_deref()),
            permissions,
        })
    }
}

pub fn normalize_target_name(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNKNOWN_TARGET.to_string(),
    }
}

/// Stored handoff with the time it was written, for expiry checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSessionRecord {
    pub session_id: SessionId,
    pub handoff: ScanHandoff,
    pub created_at: DateTime<Utc>,
}

impl ScanSessionRecord {
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at > ttl
    }
}

/// Response to a successful submission; tells the client where results live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReceipt {
    pub session_id: SessionId,
    pub target_name: String,
    pub selected_count: usize,
    pub results_url: String,
}

impl ScanReceipt {
    pub fn for_record(record: &ScanSessionRecord) -> Self {
        Self {
            session_id: record.session_id.clone(),
            target_name: record.handoff.target_name.clone(),
            selected_count: record.handoff.permissions.selected_count(),
            results_url: results_path(&record.session_id),
        }
    }
}

/// Everything the results surface renders for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResultsView {
    pub session_id: SessionId,
    pub target_name: String,
    pub result: ScoreResult,
}

pub fn results_path(session_id: &SessionId) -> String {
    format!("/api/v1/scans/{}/results", session_id.0)
}
