// ⚙️ Configuration - defaults, optional JSON file, environment overrides

use crate::error::ConfigError;
use crate::storage::LoadMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DESTINATION: &str = "expenses.csv";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_FEEDBACK_MS: u64 = 1000;

/// Path of an optional JSON config file
pub const ENV_CONFIG: &str = "EXPENSE_TRACKER_CONFIG";
pub const ENV_FILE: &str = "EXPENSE_TRACKER_FILE";
pub const ENV_ADDR: &str = "EXPENSE_TRACKER_ADDR";
pub const ENV_LOAD_MODE: &str = "EXPENSE_TRACKER_LOAD_MODE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where `save` writes (and where the CLI loads from)
    pub destination: PathBuf,
    pub load_mode: LoadMode,
    /// Listen address for the web server
    pub bind_addr: String,
    /// How long the "expense added" notice stays up
    pub feedback_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
            load_mode: LoadMode::Strict,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            feedback_ms: DEFAULT_FEEDBACK_MS,
        }
    }
}

impl Config {
    /// Defaults, then the file named by `EXPENSE_TRACKER_CONFIG` (if set),
    /// then individual environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim()))?,
            _ => Self::default(),
        };

        if let Some(file) = lookup(ENV_FILE).filter(|v| !v.trim().is_empty()) {
            config.destination = PathBuf::from(file.trim());
        }
        if let Some(addr) = lookup(ENV_ADDR).filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }
        if let Some(mode) = lookup(ENV_LOAD_MODE).filter(|v| !v.trim().is_empty()) {
            config.load_mode = mode
                .parse()
                .map_err(|value| ConfigError::InvalidValue { key: ENV_LOAD_MODE, value })?;
        }

        Ok(config)
    }
}
