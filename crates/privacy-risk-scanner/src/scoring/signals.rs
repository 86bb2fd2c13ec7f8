use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Names one of the seven yes/no answers collected for a scanned app or site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    LocationAccess,
    CameraAccess,
    MicrophoneAccess,
    ContactsAccess,
    StorageAccess,
    HasPrivacyPolicy,
    SharesWithThirdParties,
}

impl Signal {
    pub const ALL: [Signal; 7] = [
        Signal::LocationAccess,
        Signal::CameraAccess,
        Signal::MicrophoneAccess,
        Signal::ContactsAccess,
        Signal::StorageAccess,
        Signal::HasPrivacyPolicy,
        Signal::SharesWithThirdParties,
    ];

    /// Key used for this signal in JSON payloads.
    pub fn key(self) -> &'static str {
        match self {
            Signal::LocationAccess => "location_access",
            Signal::CameraAccess => "camera_access",
            Signal::MicrophoneAccess => "microphone_access",
            Signal::ContactsAccess => "contacts_access",
            Signal::StorageAccess => "storage_access",
            Signal::HasPrivacyPolicy => "has_privacy_policy",
            Signal::SharesWithThirdParties => "shares_with_third_parties",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Signal::LocationAccess => "Location Access",
            Signal::CameraAccess => "Camera Access",
            Signal::MicrophoneAccess => "Microphone Access",
            Signal::ContactsAccess => "Contacts Access",
            Signal::StorageAccess => "Storage Access",
            Signal::HasPrivacyPolicy => "Privacy Policy",
            Signal::SharesWithThirdParties => "Third-Party Sharing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|signal| signal.key() == key)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Permission requests and data-handling practices reported for one scan.
///
/// Unanswered questions are `false`: absence of evidence, not evidence of absence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionSignals {
    pub location_access: bool,
    pub camera_access: bool,
    pub microphone_access: bool,
    pub contacts_access: bool,
    pub storage_access: bool,
    pub has_privacy_policy: bool,
    pub shares_with_third_parties: bool,
}

impl PermissionSignals {
    pub fn get(&self, signal: Signal) -> bool {
        match signal {
            Signal::LocationAccess => self.location_access,
            Signal::CameraAccess => self.camera_access,
            Signal::MicrophoneAccess => self.microphone_access,
            Signal::ContactsAccess => self.contacts_access,
            Signal::StorageAccess => self.storage_access,
            Signal::HasPrivacyPolicy => self.has_privacy_policy,
            Signal::SharesWithThirdParties => self.shares_with_third_parties,
        }
    }

    pub fn set(&mut self, signal: Signal, value: bool) {
        let slot = match signal {
            Signal::LocationAccess => &mut self.location_access,
            Signal::CameraAccess => &mut self.camera_access,
            Signal::MicrophoneAccess => &mut self.microphone_access,
            Signal::ContactsAccess => &mut self.contacts_access,
            Signal::StorageAccess => &mut self.storage_access,
            Signal::HasPrivacyPolicy => &mut self.has_privacy_policy,
            Signal::SharesWithThirdParties => &mut self.shares_with_third_parties,
        };
        *slot = value;
    }

    pub fn with(mut self, signal: Signal, value: bool) -> Self {
        self.set(signal, value);
        self
    }

    /// Number of checked answers, as echoed back by the collection form.
    pub fn selected_count(&self) -> usize {
        Signal::ALL
            .into_iter()
            .filter(|signal| self.get(*signal))
            .count()
    }

    /// Strictly decode a JSON object of signal answers.
    ///
    /// Missing keys default to `false`. Non-boolean values and unknown keys are
    /// rejected, never coerced.
    pub fn from_value(value: &Value) -> Result<Self, SignalValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| SignalValidationError::NotAnObject {
                found: json_kind(value),
            })?;

        let mut signals = Self::default();
        for (key, raw) in object {
            let signal =
                Signal::from_key(key).ok_or_else(|| SignalValidationError::UnknownSignal {
                    key: key.clone(),
                })?;
            let flag = raw
                .as_bool()
                .ok_or_else(|| SignalValidationError::NotBoolean {
                    signal,
                    found: json_kind(raw),
                })?;
            signals.set(signal, flag);
        }

        Ok(signals)
    }
}

/// Rejection raised before scoring when a payload is not a set of booleans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalValidationError {
    #[error("permission signals must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("signal '{}' must be a boolean, found {found}", .signal.key())]
    NotBoolean { signal: Signal, found: &'static str },
    #[error("unknown permission signal '{key}'")]
    UnknownSignal { key: String },
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
