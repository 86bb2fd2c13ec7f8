use crate::scoring::{PermissionSignals, ScoreEngine, Signal};

pub(super) fn engine() -> ScoreEngine {
    ScoreEngine::new()
}

pub(super) fn signals_with(active: &[Signal]) -> PermissionSignals {
    active
        .iter()
        .fold(PermissionSignals::default(), |signals, signal| {
            signals.with(*signal, true)
        })
}

/// Every combination of the seven answers.
pub(super) fn all_combinations() -> impl Iterator<Item = PermissionSignals> {
    (0u8..128).map(|mask| {
        Signal::ALL
            .into_iter()
            .enumerate()
            .fold(PermissionSignals::default(), |signals, (bit, signal)| {
                signals.with(signal, mask & (1 << bit) != 0)
            })
    })
}

pub(super) const ACCESS_SIGNALS: [Signal; 5] = [
    Signal::LocationAccess,
    Signal::CameraAccess,
    Signal::MicrophoneAccess,
    Signal::ContactsAccess,
    Signal::StorageAccess,
];
