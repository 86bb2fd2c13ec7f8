use super::common::*;
use crate::scoring::{RiskTier, Signal};

#[test]
fn tier_bands_are_inclusive_on_their_upper_edge() {
    assert_eq!(RiskTier::from_percentage(0), RiskTier::Low);
    assert_eq!(RiskTier::from_percentage(30), RiskTier::Low);
    assert_eq!(RiskTier::from_percentage(31), RiskTier::Medium);
    assert_eq!(RiskTier::from_percentage(70), RiskTier::Medium);
    assert_eq!(RiskTier::from_percentage(71), RiskTier::High);
    assert_eq!(RiskTier::from_percentage(100), RiskTier::High);
}

#[test]
fn thirty_percent_through_the_engine_is_low() {
    // 20 + 12 with a policy present: 32 points, 29.6%
    let signals = signals_with(&[
        Signal::LocationAccess,
        Signal::StorageAccess,
        Signal::HasPrivacyPolicy,
    ]);
    let result = engine().score(&signals);
    assert_eq!(result.total_risk, 32);
    assert_eq!(result.risk_percentage, 30);
    assert_eq!(result.risk_tier, RiskTier::Low);
}

#[test]
fn thirty_one_percent_through_the_engine_is_medium() {
    let signals = signals_with(&[
        Signal::CameraAccess,
        Signal::ContactsAccess,
        Signal::HasPrivacyPolicy,
    ]);
    let result = engine().score(&signals);
    assert_eq!(result.total_risk, 33);
    assert_eq!(result.risk_percentage, 31);
    assert_eq!(result.risk_tier, RiskTier::Medium);
}

#[test]
fn seventy_percent_through_the_engine_is_medium() {
    let signals = signals_with(&[
        Signal::CameraAccess,
        Signal::MicrophoneAccess,
        Signal::ContactsAccess,
        Signal::SharesWithThirdParties,
        Signal::HasPrivacyPolicy,
    ]);
    let result = engine().score(&signals);
    assert_eq!(result.total_risk, 76);
    assert_eq!(result.risk_percentage, 70);
    assert_eq!(result.risk_tier, RiskTier::Medium);
}

#[test]
fn just_past_seventy_percent_is_high() {
    let signals = signals_with(&[
        Signal::LocationAccess,
        Signal::CameraAccess,
        Signal::ContactsAccess,
        Signal::SharesWithThirdParties,
        Signal::HasPrivacyPolicy,
    ]);
    let result = engine().score(&signals);
    assert_eq!(result.total_risk, 78);
    assert_eq!(result.risk_percentage, 72);
    assert_eq!(result.risk_tier, RiskTier::High);
}

#[test]
fn summary_follows_tier() {
    for signals in all_combinations() {
        let result = engine().score(&signals);
        assert_eq!(result.summary, result.risk_tier.summary());
    }
}

#[test]
fn headline_reads_naturally() {
    assert_eq!(RiskTier::Medium.headline(), "Medium Risk");
    assert_eq!(RiskTier::High.label(), "High");
}
