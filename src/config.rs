// File: src/config.rs
use crate::core::dedup::Probes;
use crate::error::{Result, StyleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "stylized-text";

fn default_catalog_cap() -> usize {
    1400
}

fn default_batch_size() -> usize {
    28
}

fn default_debounce_ms() -> u64 {
    60
}

fn default_probe_a() -> String {
    "Shivam".to_string()
}

fn default_probe_b() -> String {
    "instagram".to_string()
}

fn default_placeholder() -> String {
    "Type something…".to_string()
}

/// Engine tunables. Every field may be omitted from the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Most styles kept in the shuffled catalog.
    #[serde(default = "default_catalog_cap")]
    pub catalog_cap: usize,

    /// Styles appended per near-edge signal.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Quiet period before an input edit re-renders.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_probe_a")]
    pub probe_a: String,

    #[serde(default = "default_probe_b")]
    pub probe_b: String,

    /// Rendered in place of empty input.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Fixed shuffle seed; `None` draws from OS entropy.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_cap: default_catalog_cap(),
            batch_size: default_batch_size(),
            debounce_ms: default_debounce_ms(),
            probe_a: default_probe_a(),
            probe_b: default_probe_b(),
            placeholder: default_placeholder(),
            shuffle_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StyleError::Json {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Missing files are normal; anything else is logged. Both give defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Styles added per batch. A configured `0` counts as 1.
    pub fn batch(&self) -> usize {
        self.batch_size.max(1)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn probes(&self) -> Probes {
        Probes::new(&self.probe_a, &self.probe_b)
    }
}

/// `<config dir>/stylized-text`, or the working directory when the platform
/// has no config dir.
pub fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_config_path() -> PathBuf {
    default_data_dir().join("config.json")
}

pub fn default_store_path() -> PathBuf {
    default_data_dir().join("store.json")
}
