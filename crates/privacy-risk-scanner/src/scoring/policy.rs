use serde::{Deserialize, Serialize};

use super::signals::PermissionSignals;

/// Risk band derived from the normalized risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Bands are inclusive on their upper edge: 30 is low, 70 is medium.
    pub fn from_percentage(risk_percentage: u8) -> Self {
        match risk_percentage {
            0..=30 => RiskTier::Low,
            31..=70 => RiskTier::Medium,
            _ => RiskTier::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    pub fn headline(&self) -> String {
        format!("{} Risk", self.label())
    }

    pub fn summary(&self) -> &'static str {
        match self {
            RiskTier::Low => "This app or website appears to have good privacy practices. It requests minimal permissions and handles your data responsibly.",
            RiskTier::Medium => "This app or website has some privacy concerns. While not alarming, you should be aware of what data is being collected and how it's used.",
            RiskTier::High => "This app or website poses significant privacy risks. It requests extensive permissions and/or shares your data with third parties. Consider whether you truly need this app.",
        }
    }
}

pub(crate) const LOCATION_ADVISORY: &str =
    "Consider disabling location access or setting it to 'Only While Using'";
pub(crate) const CAPTURE_ADVISORY: &str =
    "Review if camera and microphone access are essential for your use case";
pub(crate) const SHARING_ADVISORY: &str =
    "Look for privacy settings within the app to limit third-party data sharing";
pub(crate) const NO_POLICY_ADVISORY: &str =
    "Be cautious with apps lacking privacy policies - they may not be transparent about data usage";
pub(crate) const FALLBACK_ADVISORY: &str =
    "Continue practicing good privacy hygiene by regularly reviewing app permissions";

/// Advisories keyed off the raw answers, never the computed score.
pub(crate) fn advisories(signals: &PermissionSignals) -> Vec<String> {
    let mut advisories = Vec::new();

    if signals.location_access {
        advisories.push(LOCATION_ADVISORY.to_string());
    }
    if signals.camera_access || signals.microphone_access {
        advisories.push(CAPTURE_ADVISORY.to_string());
    }
    if signals.shares_with_third_parties {
        advisories.push(SHARING_ADVISORY.to_string());
    }
    if !signals.has_privacy_policy {
        advisories.push(NO_POLICY_ADVISORY.to_string());
    }
    if advisories.is_empty() {
        advisories.push(FALLBACK_ADVISORY.to_string());
    }

    advisories
}
