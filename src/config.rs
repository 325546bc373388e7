use serde::{Deserialize, Serialize};
use anyhow::Result;
use std::env::VarError;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

/// Public playlist listing served by the local playlist service.
pub const DEFAULT_URL: &str = "http://localhost:8000/playlists/public";

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "PROBE_CONFIG";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProbeConfig {
    #[serde(default = "default_url")]
    pub url: String,
    // None keeps the client default, which never times out
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Unset or blank means defaults; a value that cannot be read is an error.
fn config_path(var: Result<String, VarError>) -> Result<Option<String>> {
    match var {
        Ok(file) if file.trim().is_empty() => Ok(None),
        Ok(file) => Ok(Some(file)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(anyhow::anyhow!(
            "{} is not valid unicode: {:?}",
            CONFIG_ENV,
            raw
        )),
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: None,
            log_level: default_log_level(),
        }
    }
}

impl ProbeConfig {
    /// Defaults, or the file named by `PROBE_CONFIG` when it is set.
    pub async fn load() -> Result<Self> {
        match config_path(std::env::var(CONFIG_ENV))? {
            Some(file) => Self::load_file(&file).await,
            None => Ok(Self::default()),
        }
    }

    pub async fn load_file(file_path: &str) -> Result<Self> {
        if !Path::new(file_path).exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", file_path));
        }

        let content = fs::read_to_string(file_path).await?;
        let config = Self::from_json(&content)?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: ProbeConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Get the log level as a tracing::Level
    pub fn get_tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" | "warning" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            _ => Err(anyhow::anyhow!("Invalid log level: {}. Valid levels are: trace, debug, info, warn, error", self.log_level))
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.get_tracing_level()?;
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| anyhow::anyhow!("Invalid url {}: {}", self.url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!("Unsupported scheme in url: {}", self.url));
        }
        if self.timeout_ms == Some(0) {
            return Err(anyhow::anyhow!("timeout_ms must be greater than zero"));
        }
        Ok(())
    }
}
