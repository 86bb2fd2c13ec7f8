use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::domain::{ScanReceipt, ScanResultsView, ScanSubmission, SessionId};
use super::repository::HandoffStore;
use super::service::{ScanService, ScanServiceError};
use crate::error::AppError;
use crate::scoring::{RuleKind, ScoreEngine, ScoreResult, Signal};

/// Where the results surface sends users whose scan data is gone.
pub const SCAN_FORM_PATH: &str = "/scan";

/// Router builder exposing scoring, rule transparency, and the scan handoff.
pub fn scan_router<S>(service: Arc<ScanService<S>>) -> Router
where
    S: HandoffStore + 'static,
{
    Router::new()
        .route("/api/v1/rules", get(rules_handler::<S>))
        .route("/api/v1/score", post(score_handler::<S>))
        .route("/api/v1/scans", post(submit_handler::<S>))
        .route("/api/v1/scans/:session_id", delete(discard_handler::<S>))
        .route(
            "/api/v1/scans/:session_id/results",
            get(results_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct RuleView {
    signal: Signal,
    label: &'static str,
    kind: RuleKind,
    risk_weight: i16,
    description: &'static str,
    recommendation: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RuleTableView {
    normalization_ceiling: u16,
    rules: Vec<RuleView>,
}

impl RuleTableView {
    fn from_engine(engine: &ScoreEngine) -> Self {
        Self {
            normalization_ceiling: engine.normalization_ceiling(),
            rules: engine
                .rules()
                .iter()
                .map(|rule| RuleView {
                    signal: rule.signal,
                    label: rule.signal.label(),
                    kind: rule.kind,
                    risk_weight: rule.risk_weight,
                    description: rule.description,
                    recommendation: rule.recommendation,
                })
                .collect(),
        }
    }
}

pub(crate) async fn rules_handler<S>(State(service): State<Arc<ScanService<S>>>) -> Json<RuleTableView>
where
    S: HandoffStore + 'static,
{
    Json(RuleTableView::from_engine(service.engine()))
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<ScanService<S>>>,
    Json(payload): Json<Value>,
) -> Result<Json<ScoreResult>, AppError>
where
    S: HandoffStore + 'static,
{
    let result = service.engine().score_value(&payload)?;
    Ok(Json(result))
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<ScanService<S>>>,
    Json(submission): Json<ScanSubmission>,
) -> Result<(StatusCode, Json<ScanReceipt>), AppError>
where
    S: HandoffStore + 'static,
{
    let receipt = service.submit(submission)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub(crate) async fn results_handler<S>(
    State(service): State<Arc<ScanService<S>>>,
    Path(session_id): Path<String>,
) -> Result<Json<ScanResultsView>, AppError>
where
    S: HandoffStore + 'static,
{
    let view = service
        .results(&SessionId(session_id))
        .inspect_err(|error| {
            if let ScanServiceError::MissingHandoff(id) = error {
                info!(session_id = %id, "scan data missing, redirecting to scan form");
            }
        })?;
    Ok(Json(view))
}

pub(crate) async fn discard_handler<S>(
    State(service): State<Arc<ScanService<S>>>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError>
where
    S: HandoffStore + 'static,
{
    let id = SessionId(session_id);
    if service.discard(&id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SessionNotFound(id))
    }
}
