use serde::{Deserialize, Serialize};

/// State of the scan controller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
}

impl ScanState {
    pub fn is_scanning(self) -> bool {
        matches!(self, Self::Scanning)
    }
}
