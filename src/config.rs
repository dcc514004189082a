// src/config.rs
//! Layered configuration: defaults, then an optional YAML/TOML file, then
//! `DASHBOARD_*` environment variables. CLI flags are applied last by the
//! binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";
pub const DEFAULT_PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const DEFAULT_LOG_FILTER: &str = "job_market=info,rocket=warn";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigManager {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
    /// JSON log file, truncated on startup.
    pub json_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub page_title: String,
    pub plotly_cdn: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: IpAddr::from([127, 0, 0, 1]),
            port: 8501,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json_file: None,
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            page_title: "Indian Job Market Intelligence".to_string(),
            plotly_cdn: DEFAULT_PLOTLY_CDN.to_string(),
        }
    }
}

/// On-disk shape; every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerSettings,
    logging: LoggingSettings,
    dashboard: DashboardSettings,
}

impl From<ConfigFile> for ConfigManager {
    fn from(file: ConfigFile) -> Self {
        Self {
            server: file.server,
            logging: file.logging,
            dashboard: file.dashboard,
        }
    }
}

impl ConfigManager {
    /// Load configuration from `path` (or `DASHBOARD_CONFIG`) and the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match path.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a config file, picking the format from its extension.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => anyhow::bail!(
                "Unsupported config format: {}. Use .yaml, .yml or .toml",
                path.display()
            ),
        }
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content).context("Invalid YAML")?;
        Ok(file.into())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).context("Invalid TOML")?;
        Ok(file.into())
    }

    /// Apply `DASHBOARD_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup("DASHBOARD_ADDRESS") {
            self.server.address = address
                .parse()
                .map_err(|_| anyhow::anyhow!("DASHBOARD_ADDRESS must be an IP address"))?;
        }
        if let Some(port) = lookup("DASHBOARD_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("DASHBOARD_PORT must be a valid port number"))?;
        }
        if let Some(path) = lookup("DASHBOARD_LOG_FILE") {
            self.logging.json_file = Some(PathBuf::from(path));
        }
        if let Some(filter) = lookup("DASHBOARD_LOG_FILTER") {
            self.logging.filter = filter;
        }
        if let Some(cdn) = lookup("DASHBOARD_PLOTLY_CDN") {
            self.dashboard.plotly_cdn = cdn;
        }
        Ok(())
    }

    pub fn with_address(mut self, address: Option<IpAddr>) -> Self {
        if let Some(address) = address {
            self.server.address = address;
        }
        self
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}
