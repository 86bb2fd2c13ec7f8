//! Privacy risk scanner: heuristic scoring of app and website permission profiles.

pub mod config;
pub mod error;
pub mod scan;
pub mod scoring;
pub mod telemetry;

pub use scoring::{
    calculate_privacy_score, PermissionSignals, RiskTier, ScoreEngine, ScoreResult, Signal,
};
