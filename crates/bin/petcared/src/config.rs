//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `petcare.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use petcare_domain::error::ValidationError;
use petcare_domain::schedule::PetCareSchedule;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Care engine rates, cooldowns, and effect sizes.
    pub schedule: PetCareSchedule,
    /// Background decay sweep settings.
    pub sweeper: SweeperConfig,
    /// Snapshot storage settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Event bus settings.
    pub events: EventsConfig,
}

/// Background decay sweep configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SweeperConfig {
    /// Run the sweeper at all.
    pub enabled: bool,
    /// Seconds between two sweeps.
    pub interval_secs: u64,
}

/// Snapshot storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file pets are loaded from at startup and written to at shutdown.
    pub snapshot_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// In-process event bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Broadcast channel capacity.
    pub capacity: usize,
}

impl Config {
    /// Load configuration from `petcare.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("petcare.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("PETCARE_SNAPSHOT") {
            self.storage.snapshot_path = PathBuf::from(val);
        }
        if let Some(val) = lookup("PETCARE_SWEEP_INTERVAL_SECS") {
            if let Ok(secs) = val.parse() {
                self.sweeper.interval_secs = secs;
            }
        }
        if let Some(val) = lookup("PETCARE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.schedule.validate()?;
        if self.sweeper.enabled && self.sweeper.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "sweeper interval must be non-zero".to_string(),
            ));
        }
        if self.events.capacity == 0 {
            return Err(ConfigError::Validation(
                "event capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Interval between two decay sweeps.
    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweeper.interval_secs)
    }
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 3600,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("petcare.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "petcared=info,petcare_app=info,petcare_adapter_storage_memory=info"
                .to_string(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The `[schedule]` section is unusable.
    #[error("invalid schedule")]
    Schedule(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
