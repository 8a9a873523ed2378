use anyhow::{Context, Result};
use std::{env, path::PathBuf, str::FromStr, sync::OnceLock, time::Duration};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// UI server configuration
    pub ui: UiConfig,

    /// Wi-Fi scanner configuration
    pub scanner: ScannerConfig,

    /// Path configuration
    pub paths: PathConfig,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub bind_addr: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct ScannerConfig {
    pub backend: ScannerBackend,
    /// Upper bound for a single scan command run
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct PathConfig {
    /// Directory holding `index.html` and the assets served under `/static`
    pub static_dir: PathBuf,
}

/// Which system tool is used to list nearby access points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScannerBackend {
    /// nmcli on Linux, netsh on Windows, nothing elsewhere
    #[default]
    Auto,
    Nmcli,
    Netsh,
    /// Never scan; every request is answered with sample data
    Disabled,
}

impl FromStr for ScannerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "nmcli" => Ok(Self::Nmcli),
            "netsh" => Ok(Self::Netsh),
            "disabled" => Ok(Self::Disabled),
            other => anyhow::bail!(
                "unknown scanner backend '{other}', expected one of: auto, nmcli, netsh, disabled"
            ),
        }
    }
}

impl AppConfig {
    /// Load the configuration from the environment on first call and cache it.
    pub fn init() -> Result<&'static Self> {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

        if let Some(config) = APP_CONFIG.get() {
            return Ok(config);
        }

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        Ok(APP_CONFIG.get_or_init(|| config))
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ui = UiConfig::load(&lookup)?;
        let scanner = ScannerConfig::load(&lookup)?;
        let paths = PathConfig::load(&lookup);

        Ok(Self { ui, scanner, paths })
    }
}

impl UiConfig {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("UI_BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("UI_PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u16>()
            .context("failed to parse UI_PORT: invalid format")?;

        Ok(Self { bind_addr, port })
    }
}

impl ScannerConfig {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = match lookup("SCANNER_BACKEND") {
            Some(value) => value
                .parse::<ScannerBackend>()
                .context("failed to parse SCANNER_BACKEND")?,
            None => ScannerBackend::default(),
        };

        let timeout_secs = lookup("SCAN_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("failed to parse SCAN_TIMEOUT_SECS: invalid format")?;
        anyhow::ensure!(timeout_secs > 0, "SCAN_TIMEOUT_SECS must be positive");

        Ok(Self {
            backend,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl PathConfig {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let static_dir = lookup("STATIC_DIR")
            .unwrap_or_else(|| "static".to_string())
            .into();

        Self { static_dir }
    }

    pub fn index_html(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
