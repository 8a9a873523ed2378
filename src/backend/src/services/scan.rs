//! Scan service
//!
//! Turns raw scanner output into the lists served by the scan API.

use crate::scanner::WifiScanner;
use log::{error, info};
use twinwatch_core::{Network, NetworkStatus, fallback_networks};

/// Service for network discovery and the evil twin simulation
pub struct ScanService;

impl ScanService {
    /// Scan for nearby networks
    ///
    /// # Arguments
    /// * `scanner` - Platform scanner used to discover access points
    ///
    /// # Returns
    /// The discovered networks, or the sample networks if none were found
    pub async fn scan<Scanner: WifiScanner>(scanner: &Scanner) -> Vec<Network> {
        let networks = Self::discover(scanner).await;

        if networks.is_empty() {
            info!("no networks found, serving sample data");
            return Self::sample_networks();
        }

        networks
    }

    /// Scan and append simulated evil twin access points
    ///
    /// # Arguments
    /// * `scanner` - Platform scanner used to discover access points
    ///
    /// # Returns
    /// The discovered networks (or the first two samples) followed by the evil twins
    pub async fn simulate_attack<Scanner: WifiScanner>(scanner: &Scanner) -> Vec<Network> {
        let mut networks = Self::discover(scanner).await;

        if networks.is_empty() {
            info!("no networks found, simulating attack on sample data");
            networks = Self::sample_networks().into_iter().take(2).collect();
        }

        networks.extend(Self::evil_twins());
        networks
    }

    /// Scanner failures are never reported to the client
    async fn discover<Scanner: WifiScanner>(scanner: &Scanner) -> Vec<Network> {
        match scanner.scan().await {
            Ok(networks) => networks,
            Err(e) => {
                error!("wifi scan failed: {e:#}");
                vec![]
            }
        }
    }

    pub fn sample_networks() -> Vec<Network> {
        fallback_networks()
    }

    pub fn evil_twins() -> Vec<Network> {
        vec![
            Network {
                ssid: "CafeFreeWiFi".to_string(),
                mac: "00:0C:42:1F:AB:39".to_string(),
                signal: 95,
                security: "Open".to_string(),
                vendor: "Unknown".to_string(),
                status: NetworkStatus::Danger,
                channel: 6,
                reason: Some(
                    "Duplicate SSID with different MAC and unusually high signal strength"
                        .to_string(),
                ),
            },
            Network {
                ssid: "Airport_Guest".to_string(),
                mac: "A4:56:02:AA:BB:CC".to_string(),
                signal: 68,
                security: "WEP".to_string(),
                vendor: "Mismatch".to_string(),
                status: NetworkStatus::Warning,
                channel: 11,
                reason: Some(
                    "SSID matches known network but security protocol is weaker than expected"
                        .to_string(),
                ),
            },
        ]
    }
}
