use super::{WifiScanner, run_command};
use anyhow::Result;
use log::info;
use std::time::Duration;
use twinwatch_core::{Network, NetworkStatus};

const FIELDS: &str = "SSID,BSSID,SIGNAL,CHAN,SECURITY";

/// NetworkManager based scanner for Linux hosts
#[derive(Clone, Debug)]
pub struct NmcliScanner {
    timeout: Duration,
}

impl NmcliScanner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl WifiScanner for NmcliScanner {
    async fn scan(&self) -> Result<Vec<Network>> {
        let stdout = run_command("nmcli", &["-t", "-f", FIELDS, "dev", "wifi"], self.timeout).await?;
        let networks = parse_nmcli_output(&stdout);

        info!("nmcli reported {} networks", networks.len());
        Ok(networks)
    }
}

/// Parse `nmcli -t` output with the fields SSID, BSSID, SIGNAL, CHAN and SECURITY.
///
/// Lines with fewer than five fields are skipped.
pub fn parse_nmcli_output(output: &str) -> Vec<Network> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let fields = split_terse_line(line);
            let [ssid, mac, signal, channel, security, ..] = fields.as_slice() else {
                return None;
            };

            let security = security.trim();

            Some(Network {
                ssid: ssid.clone(),
                mac: mac.clone(),
                signal: signal.trim().parse().unwrap_or(0),
                security: if security.is_empty() {
                    "Open".to_string()
                } else {
                    security.to_string()
                },
                vendor: "Unknown".to_string(),
                status: NetworkStatus::Safe,
                channel: channel.trim().parse().unwrap_or(1),
                reason: None,
            })
        })
        .collect()
}

/// Split on unescaped `:`; `\:` and `\\` stand for literal characters
fn split_terse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}
