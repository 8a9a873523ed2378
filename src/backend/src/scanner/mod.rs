//! Wi-Fi discovery through the platform's command line tools
//!
//! - nmcli: NetworkManager on Linux
//! - netsh: WLAN service on Windows

pub mod netsh;
pub mod nmcli;

use crate::config::{ScannerBackend, ScannerConfig};
use anyhow::{Context, Result};
use log::{debug, info};
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use std::time::Duration;
use tokio::process::Command;
use trait_variant::make;
use twinwatch_core::Network;

pub use netsh::NetshScanner;
pub use nmcli::NmcliScanner;

#[make(Send)]
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait WifiScanner {
    /// List the access points currently in range
    async fn scan(&self) -> Result<Vec<Network>>;
}

/// Scanner chosen from configuration at startup
#[derive(Clone, Debug)]
pub enum PlatformScanner {
    Nmcli(NmcliScanner),
    Netsh(NetshScanner),
    Disabled,
}

impl PlatformScanner {
    pub fn from_config(config: &ScannerConfig) -> Self {
        let scanner = match config.backend {
            ScannerBackend::Nmcli => Self::Nmcli(NmcliScanner::new(config.timeout)),
            ScannerBackend::Netsh => Self::Netsh(NetshScanner::new(config.timeout)),
            ScannerBackend::Disabled => Self::Disabled,
            ScannerBackend::Auto if cfg!(target_os = "linux") => {
                Self::Nmcli(NmcliScanner::new(config.timeout))
            }
            ScannerBackend::Auto if cfg!(target_os = "windows") => {
                Self::Netsh(NetshScanner::new(config.timeout))
            }
            ScannerBackend::Auto => Self::Disabled,
        };

        info!("using {} wifi scanner", scanner.name());
        scanner
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Nmcli(_) => "nmcli",
            Self::Netsh(_) => "netsh",
            Self::Disabled => "disabled",
        }
    }
}

impl WifiScanner for PlatformScanner {
    async fn scan(&self) -> Result<Vec<Network>> {
        match self {
            Self::Nmcli(scanner) => scanner.scan().await,
            Self::Netsh(scanner) => scanner.scan().await,
            Self::Disabled => {
                debug!("scanning disabled");
                Ok(vec![])
            }
        }
    }
}

/// Run `program` and return its stdout, failing on timeout or a non-zero exit
pub(crate) async fn run_command(program: &str, args: &[&str], timeout: Duration) -> Result<String> {
    debug!("running {program} {}", args.join(" "));

    let output = tokio::time::timeout(
        timeout,
        Command::new(program).args(args).kill_on_drop(true).output(),
    )
    .await
    .with_context(|| format!("{program} timed out after {}s", timeout.as_secs()))?
    .with_context(|| format!("failed to run {program}"))?;

    anyhow::ensure!(
        output.status.success(),
        "{program} failed with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    );

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
