//! Configuration for the fireflies clock.
//!
//! Settings live in `config.toml` under the platform config directory.
//! A missing file means defaults; every field may be omitted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fireflies_core::{Face, TimeFormat, Timing, Tuning, TuningError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "fireflies.log";

/// Errors raised while reading or writing the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] TuningError),
    #[error("no home directory to hold the configuration")]
    NoConfigDir,
}

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 12- or 24-hour display.
    pub time_format: TimeFormat,
    /// Which digits the swarm forms.
    pub face: Face,
    /// Fixed seed for a reproducible swarm; random when absent.
    pub seed: Option<u32>,
    pub timing: Timing,
    pub tuning: Tuning,
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    /// Load and validate `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path()?)
    }

    /// Write `self` to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(io_error)?;
        debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Check the tuning and timing tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        self.timing.validate()?;
        Ok(())
    }
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "fireflies").ok_or(ConfigError::NoConfigDir)
}

/// Path of the configuration file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Path of the log file written when logging is enabled.
pub fn log_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_local_dir().join(LOG_FILE))
}
