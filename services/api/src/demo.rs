use clap::Args;
use privacy_risk_scanner::error::AppError;
use privacy_risk_scanner::scan::normalize_target_name;
use privacy_risk_scanner::scoring::{RuleKind, ScoreEngine};
use privacy_risk_scanner::{PermissionSignals, ScoreResult};

#[derive(Args, Debug, Default)]
pub(crate) struct ScanArgs {
    /// App name or website URL being scanned
    #[arg(long)]
    pub(crate) target: Option<String>,
    /// The app requests location access
    #[arg(long)]
    pub(crate) location: bool,
    /// The app requests camera access
    #[arg(long)]
    pub(crate) camera: bool,
    /// The app requests microphone access
    #[arg(long)]
    pub(crate) microphone: bool,
    /// The app requests contacts access
    #[arg(long)]
    pub(crate) contacts: bool,
    /// The app requests storage access
    #[arg(long)]
    pub(crate) storage: bool,
    /// The app or website publishes a privacy policy
    #[arg(long)]
    pub(crate) privacy_policy: bool,
    /// The app or website shares data with third parties
    #[arg(long)]
    pub(crate) third_party_sharing: bool,
    /// Emit the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScanArgs {
    fn signals(&self) -> PermissionSignals {
        PermissionSignals {
            location_access: self.location,
            camera_access: self.camera,
            microphone_access: self.microphone,
            contacts_access: self.contacts,
            storage_access: self.storage,
            has_privacy_policy: self.privacy_policy,
            shares_with_third_parties: self.third_party_sharing,
        }
    }
}

pub(crate) fn run_scan(args: ScanArgs) -> Result<(), AppError> {
    let target_name = normalize_target_name(args.target.as_deref());
    let result = ScoreEngine::new().score(&args.signals());

    if args.json {
        let payload = serde_json::json!({
            "target_name": target_name,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", render_result(&target_name, &result));
    }

    Ok(())
}

pub(crate) fn run_rules() -> Result<(), AppError> {
    let engine = ScoreEngine::new();
    println!("Privacy scoring rules");
    for rule in engine.rules() {
        let kind = match rule.kind {
            RuleKind::Standard => "risk when present",
            RuleKind::InvertedRisk => "risk when absent",
        };
        println!(
            "- {:<20} {:>4} pts ({})",
            rule.signal.label(),
            rule.risk_weight,
            kind
        );
        println!("    {}", rule.description);
    }
    println!(
        "Risk percentage = points / {} (capped at 100%)",
        engine.normalization_ceiling()
    );
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let engine = ScoreEngine::new();
    println!("Privacy risk scanner demo");

    for (name, signals) in demo_profiles() {
        let result = engine.score(&signals);
        println!();
        print!("{}", render_result(name, &result));
    }

    Ok(())
}

fn demo_profiles() -> Vec<(&'static str, PermissionSignals)> {
    vec![
        (
            "Pocket Flashlight",
            PermissionSignals {
                has_privacy_policy: true,
                ..PermissionSignals::default()
            },
        ),
        (
            "Trail Maps",
            PermissionSignals {
                location_access: true,
                ..PermissionSignals::default()
            },
        ),
        (
            "Quiz Party",
            PermissionSignals {
                shares_with_third_parties: true,
                ..PermissionSignals::default()
            },
        ),
        (
            "ChatterBox Social",
            PermissionSignals {
                location_access: true,
                camera_access: true,
                microphone_access: true,
                contacts_access: true,
                storage_access: true,
                has_privacy_policy: false,
                shares_with_third_parties: true,
            },
        ),
    ]
}

pub(crate) fn render_result(target_name: &str, result: &ScoreResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Privacy analysis for {target_name}\n"));
    out.push_str(&format!(
        "Score {}/100 | {} | {}% risk\n",
        result.score,
        result.risk_tier.headline(),
        result.risk_percentage
    ));
    out.push_str(&format!("{}\n", result.summary));

    out.push_str("Breakdown\n");
    for entry in &result.breakdown {
        let marker = if entry.active { "x" } else { " " };
        out.push_str(&format!(
            "  [{marker}] {:<20} {:>+4}\n",
            entry.label, entry.points
        ));
    }

    out.push_str("Recommendations\n");
    for advisory in &result.advisories {
        out.push_str(&format!("  - {advisory}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_args_map_onto_signals() {
        let args = ScanArgs {
            camera: true,
            privacy_policy: true,
            ..ScanArgs::default()
        };
        let signals = args.signals();
        assert!(signals.camera_access);
        assert!(signals.has_privacy_policy);
        assert_eq!(signals.selected_count(), 2);
    }

    #[test]
    fn rendered_report_lists_every_rule_and_advisory() {
        let result = ScoreEngine::new().score(&PermissionSignals {
            location_access: true,
            ..PermissionSignals::default()
        });

        let text = render_result("Trail Maps", &result);

        assert!(text.contains("Privacy analysis for Trail Maps"));
        assert!(text.contains("Score 72/100 | Low Risk | 28% risk"));
        assert!(text.contains("[x] Location Access"));
        assert!(text.contains("[ ] Privacy Policy"));
        assert_eq!(text.matches("  - ").count(), result.advisories.len());
    }

    #[test]
    fn demo_profiles_span_every_tier() {
        let engine = ScoreEngine::new();
        let tiers: Vec<_> = demo_profiles()
            .iter()
            .map(|(_, signals)| engine.score(signals).risk_tier)
            .collect();
        assert!(tiers.contains(&privacy_risk_scanner::RiskTier::Low));
        assert!(tiers.contains(&privacy_risk_scanner::RiskTier::Medium));
        assert!(tiers.contains(&privacy_risk_scanner::RiskTier::High));
    }
}
