use serde::{Deserialize, Serialize};

/// Number of segments in the signal strength indicator
pub const SIGNAL_BAR_COUNT: u8 = 5;

/// Classification assigned to a network by the backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    #[default]
    Safe,
    Warning,
    Danger,
}

impl NetworkStatus {
    /// Fixed badge label shown on a network card
    pub fn badge_label(self) -> &'static str {
        match self {
            NetworkStatus::Safe => "SAFE",
            NetworkStatus::Warning => "SUSPICIOUS",
            NetworkStatus::Danger => "EVIL TWIN",
        }
    }

    pub fn badge_icon(self) -> &'static str {
        match self {
            NetworkStatus::Safe => "fa-check-circle",
            NetworkStatus::Warning => "fa-exclamation-triangle",
            NetworkStatus::Danger => "fa-radiation",
        }
    }
}

/// A single access point as reported by the backend.
///
/// Records are replaced wholesale on every fetch, `ssid` is not unique and
/// `mac` is only displayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    pub ssid: String,
    pub mac: String,
    /// Signal quality in percent (0-100)
    pub signal: i32,
    pub security: String,
    pub vendor: String,
    pub status: NetworkStatus,
    pub channel: u32,
    /// Only present for warning and danger entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Network {
    /// Number of lit segments in the signal indicator: floor(signal / 20) within [0, 5]
    pub fn lit_signal_bars(&self) -> u8 {
        (self.signal / 20).clamp(0, i32::from(SIGNAL_BAR_COUNT)) as u8
    }
}

fn safe_network(
    ssid: &str,
    mac: &str,
    signal: i32,
    security: &str,
    vendor: &str,
    channel: u32,
) -> Network {
    Network {
        ssid: ssid.to_string(),
        mac: mac.to_string(),
        signal,
        security: security.to_string(),
        vendor: vendor.to_string(),
        status: NetworkStatus::Safe,
        channel,
        reason: None,
    }
}

/// Static data used whenever the backend cannot be reached
pub fn fallback_networks() -> Vec<Network> {
    vec![
        safe_network("CafeFreeWiFi", "A4:56:02:3F:8C:71", 85, "WPA2", "Cisco", 6),
        safe_network("Airport_Guest", "B8:27:EB:D5:A1:9C", 72, "Open", "TP-Link", 11),
        safe_network("Library_Public", "9C:5C:8E:12:F3:A7", 65, "WPA2", "Netgear", 1),
    ]
}
