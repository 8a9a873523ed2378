use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
///
/// The network list is the only source of truth for anything the view
/// shows about networks; counters are derived from it on every render.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Networks from the last successful (or substituted) fetch
    pub networks: Vec<Network>,

    // Scan state
    pub scan_state: ScanState,
    pub progress: u8,
    /// Cancellation token. Bumped on reset; internal events carrying an
    /// older epoch are dropped.
    pub epoch: u64,
    /// An attack simulation waits for the running scan to finish
    pub attack_queued: bool,

    // Danger counter emphasis
    pub danger_pulse: Option<u64>,
    pub last_pulse: u64,

    // Notifications
    pub notifications: Vec<Notification>,
    pub next_notification_id: u64,
}

impl Model {
    /// Append a notification and return its id
    pub fn push_notification(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id,
            message: message.into(),
            severity,
            fading: false,
        });
        id
    }

    /// Start a new danger pulse and return its token
    pub fn start_pulse(&mut self) -> u64 {
        self.last_pulse += 1;
        self.danger_pulse = Some(self.last_pulse);
        self.last_pulse
    }

    /// Whether an internal event issued under `epoch` is still current
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Invalidate every running sequence and return to an empty, idle state
    pub fn cancel_all(&mut self) {
        self.epoch += 1;
        self.networks.clear();
        self.scan_state = ScanState::Idle;
        self.progress = 0;
        self.attack_queued = false;
        self.danger_pulse = None;
    }
}
