//! Heuristic privacy risk scoring.
//!
//! A fixed table of weighted rules turns seven yes/no answers about an app or
//! website into a 0-100 privacy score, a risk tier, a per-signal breakdown, and
//! a short list of advisories. Scoring is pure: no I/O, no logging, no state.

mod policy;
mod rules;
mod signals;

#[cfg(test)]
mod tests;

pub use policy::RiskTier;
pub use rules::{RuleKind, ScoringRule, NORMALIZATION_CEILING, SCORING_RULES};
pub use signals::{PermissionSignals, Signal, SignalValidationError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stateless engine that applies a rule table to a set of permission signals.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEngine {
    rules: &'static [ScoringRule],
    ceiling: u16,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self {
            rules: &SCORING_RULES,
            ceiling: NORMALIZATION_CEILING,
        }
    }

    pub fn rules(&self) -> &'static [ScoringRule] {
        self.rules
    }

    pub fn normalization_ceiling(&self) -> u16 {
        self.ceiling
    }

    pub fn score(&self, signals: &PermissionSignals) -> ScoreResult {
        let (breakdown, total_risk) = rules::score_signals(self.rules, signals);
        let risk_percentage = rules::risk_percentage(total_risk, self.ceiling);
        let risk_tier = RiskTier::from_percentage(risk_percentage);

        ScoreResult {
            score: 100 - risk_percentage,
            risk_tier,
            risk_percentage,
            total_risk,
            breakdown,
            summary: risk_tier.summary().to_string(),
            advisories: policy::advisories(signals),
        }
    }

    /// Validate an untyped JSON payload and score it.
    pub fn score_value(&self, payload: &Value) -> Result<ScoreResult, SignalValidationError> {
        let signals = PermissionSignals::from_value(payload)?;
        Ok(self.score(&signals))
    }
}

/// Score a set of signals against the built-in rule table.
pub fn calculate_privacy_score(signals: &PermissionSignals) -> ScoreResult {
    ScoreEngine::new().score(signals)
}

/// Contribution of a single rule, kept in rule-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub signal: Signal,
    pub label: String,
    pub active: bool,
    pub points: i16,
    pub description: String,
    pub recommendation: String,
}

/// Full scoring output handed to whichever surface renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0-100, higher is a better privacy posture.
    pub score: u8,
    pub risk_tier: RiskTier,
    /// 0-100, the complement of `score`.
    pub risk_percentage: u8,
    pub total_risk: u16,
    pub breakdown: Vec<BreakdownEntry>,
    pub summary: String,
    pub advisories: Vec<String>,
}
