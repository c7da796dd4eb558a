use crate::errors::ChatError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Runtime knobs for the view-model. Loaded from a camelCase JSON file when
/// one is given; every field falls back to its default otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Simulated delivery latency for outbound messages.
    pub send_latency_ms: u64,
    /// Lifetime of a pairing token before it must be refreshed.
    pub pairing_ttl_secs: u64,
    /// Whether new stores start from the fixed sample data.
    pub load_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            send_latency_ms: 1000,
            pairing_ttl_secs: 30,
            load_sample_data: true,
        }
    }
}

impl Config {
    pub fn send_latency(&self) -> Duration {
        Duration::from_millis(self.send_latency_ms)
    }

    pub fn pairing_ttl(&self) -> Duration {
        Duration::from_secs(self.pairing_ttl_secs)
    }
}

pub fn load_config(config_path: Option<&Path>) -> Result<Config, ChatError> {
    let Some(path) = config_path else {
        return Ok(Config::default());
    };
    let content = fs::read_to_string(path).map_err(|e| {
        ChatError::Config(format!("Failed to read config from {}: {}", path.display(), e))
    })?;
    let config: Config = serde_json::from_str(&content).map_err(|e| {
        ChatError::Config(format!(
            "Failed to parse config JSON from {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(config)
}
