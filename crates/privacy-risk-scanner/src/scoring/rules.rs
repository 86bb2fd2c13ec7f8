use serde::Serialize;

use super::signals::{PermissionSignals, Signal};
use super::BreakdownEntry;

/// Fixed divisor used to turn raw risk points into a percentage.
///
/// Equal to the sum of the standard rule weights. Must be updated by hand when
/// the table is reweighted; `normalization_ceiling_matches_standard_weights`
/// guards the coupling.
pub const NORMALIZATION_CEILING: u16 = 108;

/// How a rule turns its signal into risk points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Presence of the capability is the risk.
    Standard,
    /// Absence of the practice is the risk; the configured weight is negative.
    InvertedRisk,
}

/// One row of the static scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringRule {
    pub signal: Signal,
    pub kind: RuleKind,
    pub risk_weight: i16,
    pub description: &'static str,
    pub recommendation: &'static str,
}

impl ScoringRule {
    /// Risk points this rule contributes for the given answer.
    pub fn points(&self, active: bool) -> i16 {
        match (self.kind, active) {
            (RuleKind::Standard, true) => self.risk_weight,
            (RuleKind::Standard, false) => 0,
            (RuleKind::InvertedRisk, true) => 0,
            (RuleKind::InvertedRisk, false) => self.risk_weight.abs(),
        }
    }
}

pub static SCORING_RULES: [ScoringRule; 7] = [
    ScoringRule {
        signal: Signal::LocationAccess,
        kind: RuleKind::Standard,
        risk_weight: 20,
        description: "Location tracking can reveal your home, workplace, and daily patterns",
        recommendation: "Only grant location access when absolutely necessary, and prefer 'While Using' over 'Always'",
    },
    ScoringRule {
        signal: Signal::CameraAccess,
        kind: RuleKind::Standard,
        risk_weight: 18,
        description: "Camera access could potentially be used for unauthorized surveillance",
        recommendation: "Be cautious of apps requesting camera access without clear functionality need",
    },
    ScoringRule {
        signal: Signal::MicrophoneAccess,
        kind: RuleKind::Standard,
        risk_weight: 18,
        description: "Microphone access can capture conversations and ambient audio",
        recommendation: "Grant microphone access only to calling, recording, or voice assistant apps",
    },
    ScoringRule {
        signal: Signal::ContactsAccess,
        kind: RuleKind::Standard,
        risk_weight: 15,
        description: "Contacts access exposes your personal network and relationships",
        recommendation: "Consider if the app truly needs your contacts or if manual entry is possible",
    },
    ScoringRule {
        signal: Signal::StorageAccess,
        kind: RuleKind::Standard,
        risk_weight: 12,
        description: "Storage access allows reading files, photos, and documents on your device",
        recommendation: "Use scoped storage options when available to limit what apps can access",
    },
    ScoringRule {
        signal: Signal::HasPrivacyPolicy,
        kind: RuleKind::InvertedRisk,
        risk_weight: -10,
        description: "A privacy policy shows transparency about data handling practices",
        recommendation: "Always read privacy policies, especially sections on data sharing and retention",
    },
    ScoringRule {
        signal: Signal::SharesWithThirdParties,
        kind: RuleKind::Standard,
        risk_weight: 25,
        description: "Third-party data sharing means your information goes beyond the original app",
        recommendation: "Avoid apps that share data with third parties, or opt-out where possible",
    },
];

/// Walk the table in order, returning the breakdown and the raw point total.
pub(crate) fn score_signals(
    rules: &[ScoringRule],
    signals: &PermissionSignals,
) -> (Vec<BreakdownEntry>, u16) {
    let mut breakdown = Vec::with_capacity(rules.len());
    let mut total: i32 = 0;

    for rule in rules {
        let active = signals.get(rule.signal);
        let points = rule.points(active);
        total += i32::from(points);

        breakdown.push(BreakdownEntry {
            signal: rule.signal,
            label: rule.signal.label().to_string(),
            active,
            points,
            description: rule.description.to_string(),
            recommendation: rule.recommendation.to_string(),
        });
    }

    let total_risk = u16::try_from(total.max(0)).unwrap_or(u16::MAX);
    (breakdown, total_risk)
}

/// `round(min(100, total / ceiling * 100))`, half rounding up.
pub(crate) fn risk_percentage(total_risk: u16, ceiling: u16) -> u8 {
    let ceiling = u32::from(ceiling.max(1));
    let scaled = (u32::from(total_risk) * 100 + ceiling / 2) / ceiling;
    scaled.min(100) as u8
}
