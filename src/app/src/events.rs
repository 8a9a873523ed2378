use serde::{Deserialize, Serialize};

use crate::types::Network;

/// Scan controller events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Start,
    Reset,

    // Internal events, tagged with the epoch they were issued under
    #[serde(skip)]
    Tick { epoch: u64 },
    #[serde(skip)]
    Response {
        epoch: u64,
        result: Result<Vec<Network>, String>,
    },
}

/// Evil twin simulation events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AttackEvent {
    Simulate,

    #[serde(skip)]
    Begin { epoch: u64 },
    #[serde(skip)]
    Response {
        epoch: u64,
        result: Result<Vec<Network>, String>,
    },
    #[serde(skip)]
    Alert { epoch: u64 },
    #[serde(skip)]
    PulseEnded { pulse: u64 },
}

/// Notification lifecycle events (timer driven)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    #[serde(skip)]
    Fade { id: u64 },
    #[serde(skip)]
    Remove { id: u64 },
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Scan(ScanEvent),
    Attack(AttackEvent),
    Notification(NotificationEvent),
}
