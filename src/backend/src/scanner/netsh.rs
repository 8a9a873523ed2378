use super::{WifiScanner, run_command};
use anyhow::Result;
use log::info;
use std::time::Duration;
use twinwatch_core::{Network, NetworkStatus};

/// WLAN service based scanner for Windows hosts
#[derive(Clone, Debug)]
pub struct NetshScanner {
    timeout: Duration,
}

impl NetshScanner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl WifiScanner for NetshScanner {
    async fn scan(&self) -> Result<Vec<Network>> {
        let stdout = run_command(
            "netsh",
            &["wlan", "show", "networks", "mode=bssid"],
            self.timeout,
        )
        .await?;
        let networks = parse_netsh_output(&stdout);

        info!("netsh reported {} networks", networks.len());
        Ok(networks)
    }
}

/// Parse `netsh wlan show networks mode=bssid`.
///
/// Every BSSID block becomes one record inheriting SSID and authentication
/// from its enclosing SSID block. A BSSID seen twice is only kept once.
pub fn parse_netsh_output(output: &str) -> Vec<Network> {
    let mut networks: Vec<Network> = Vec::new();
    let mut ssid = String::new();
    let mut authentication: Option<String> = None;
    let mut pending: Option<Network> = None;

    for line in output.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if key.starts_with("BSSID") {
            flush(&mut networks, pending.take());
            pending = Some(Network {
                ssid: ssid.clone(),
                mac: value.to_string(),
                signal: 0,
                security: authentication
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                vendor: "Unknown".to_string(),
                status: NetworkStatus::Safe,
                channel: 1,
                reason: None,
            });
        } else if key.starts_with("SSID") {
            flush(&mut networks, pending.take());
            ssid = value.to_string();
            authentication = None;
        } else if key == "Authentication" {
            authentication = Some(value.to_string());
        } else if let Some(network) = pending.as_mut() {
            match key {
                "Signal" => network.signal = value.trim_end_matches('%').trim().parse().unwrap_or(0),
                "Channel" => network.channel = value.parse().ok().filter(|c| *c > 0).unwrap_or(1),
                _ => {}
            }
        }
    }
    flush(&mut networks, pending);

    networks
}

fn flush(networks: &mut Vec<Network>, network: Option<Network>) {
    let Some(network) = network else {
        return;
    };

    if !networks.iter().any(|n| n.mac.eq_ignore_ascii_case(&network.mac)) {
        networks.push(network);
    }
}
