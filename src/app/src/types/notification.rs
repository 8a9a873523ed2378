use serde::{Deserialize, Serialize};

/// Visual severity of a toast notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Danger,
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Danger => "fa-exclamation-triangle",
            Self::Info => "fa-info-circle",
        }
    }
}

/// A transient toast message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Set once the visible period is over and the fade-out has started
    pub fading: bool,
}
