//! View model types produced by [`crate::view::view`]
//!
//! The shell maps these one-to-one onto markup; it never inspects the
//! [`crate::Model`] directly.

use serde::{Deserialize, Serialize};

use super::network::NetworkStatus;
use super::notification::Severity;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub scan_button: ScanButton,
    /// Width of the progress bar in percent
    pub progress_percent: u8,
    pub network_list: NetworkList,
    pub counters: Counters,
    /// Pulsing emphasis on the "dangerous" counter
    pub danger_pulse: bool,
    pub notifications: Vec<NotificationView>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanButton {
    pub label: String,
    /// Show the spinner animation next to the label
    pub busy: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NetworkList {
    Empty { message: String },
    Cards(Vec<NetworkCard>),
}

impl Default for NetworkList {
    fn default() -> Self {
        Self::Empty {
            message: String::new(),
        }
    }
}

/// Colour family used for signal bars and card emphasis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

impl From<NetworkStatus> for Tone {
    fn from(status: NetworkStatus) -> Self {
        match status {
            NetworkStatus::Safe => Tone::Success,
            NetworkStatus::Warning => Tone::Warning,
            NetworkStatus::Danger => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignalBar {
    pub height_px: u8,
    pub lit: bool,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: NetworkStatus,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkCard {
    pub ssid: String,
    pub signal_percent: i32,
    pub signal_bars: Vec<SignalBar>,
    pub mac: String,
    pub security: String,
    pub vendor: String,
    pub channel: u32,
    pub reason: Option<String>,
    pub badge: StatusBadge,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Counters {
    pub total: usize,
    pub safe: usize,
    pub suspicious: usize,
    pub dangerous: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationView {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub icon: String,
    pub fading: bool,
}
