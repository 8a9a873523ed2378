//! Network renderer: a pure projection from [`Model`] to [`ViewModel`]

use crate::model::Model;
use crate::types::*;

pub const EMPTY_LIST_MESSAGE: &str = "No networks detected. Click \"Scan Networks\" to begin.";

const SCAN_LABEL: &str = "Scan Networks";
const SCANNING_LABEL: &str = "Scanning...";

/// Height of the first signal bar; each following bar is 3px taller
const BASE_BAR_HEIGHT_PX: u8 = 5;
const BAR_HEIGHT_STEP_PX: u8 = 3;

pub fn view(model: &Model) -> ViewModel {
    let scanning = model.scan_state.is_scanning();

    ViewModel {
        scan_button: ScanButton {
            label: if scanning { SCANNING_LABEL } else { SCAN_LABEL }.to_string(),
            busy: scanning,
            enabled: !scanning,
        },
        progress_percent: model.progress,
        network_list: render_networks(&model.networks),
        counters: Counters::tally(&model.networks),
        danger_pulse: model.danger_pulse.is_some(),
        notifications: model
            .notifications
            .iter()
            .map(|n| NotificationView {
                id: n.id,
                message: n.message.clone(),
                severity: n.severity,
                icon: n.severity.icon().to_string(),
                fading: n.fading,
            })
            .collect(),
    }
}

pub fn render_networks(networks: &[Network]) -> NetworkList {
    if networks.is_empty() {
        return NetworkList::Empty {
            message: EMPTY_LIST_MESSAGE.to_string(),
        };
    }

    NetworkList::Cards(networks.iter().map(render_card).collect())
}

pub fn render_card(network: &Network) -> NetworkCard {
    let tone = Tone::from(network.status);

    NetworkCard {
        ssid: network.ssid.clone(),
        signal_percent: network.signal,
        signal_bars: signal_bars(network.lit_signal_bars(), tone),
        mac: network.mac.clone(),
        security: network.security.clone(),
        vendor: network.vendor.clone(),
        channel: network.channel,
        reason: network.reason.clone().filter(|r| !r.is_empty()),
        badge: StatusBadge {
            status: network.status,
            label: network.status.badge_label().to_string(),
            icon: network.status.badge_icon().to_string(),
        },
        tone,
    }
}

fn signal_bars(lit: u8, tone: Tone) -> Vec<SignalBar> {
    (0..SIGNAL_BAR_COUNT)
        .map(|i| SignalBar {
            height_px: BASE_BAR_HEIGHT_PX + i * BAR_HEIGHT_STEP_PX,
            lit: i < lit,
            tone,
        })
        .collect()
}

impl Counters {
    /// Count networks per status
    pub fn tally(networks: &[Network]) -> Self {
        let count = |status| networks.iter().filter(|n| n.status == status).count();

        Self {
            total: networks.len(),
            safe: count(NetworkStatus::Safe),
            suspicious: count(NetworkStatus::Warning),
            dangerous: count(NetworkStatus::Danger),
        }
    }
}
