//! Load and validate the optional settings file.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod history;
pub mod starter;
pub mod telemetry;

pub use history::{
    parse_history_section, HistorySettings, RawHistorySection, DEFAULT_HISTORY_FILE,
    DEFAULT_MAX_ENTRIES, MAX_ENTRIES_LIMIT,
};
pub use starter::{parse_starter_section, RawStarterSection, StarterSettings};

/// Settings file looked up in the working directory when `--config` is not given.
pub const DEFAULT_SETTINGS_PATH: &str = "basestart.toml";

/// Top-level settings container.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub starter: StarterSettings,
    pub history: HistorySettings,
    /// File the settings were read from; `None` when built-in defaults are used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    starter: Option<RawStarterSection>,
    history: Option<RawHistorySection>,
}

impl Settings {
    /// Load `explicit` if given (it must exist); otherwise read `basestart.toml`
    /// when present and fall back to defaults when it is not.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            telemetry::log_source(&path, true);
            return Self::load_from_path(path);
        }

        let default_path = PathBuf::from(DEFAULT_SETTINGS_PATH);
        if default_path.is_file() {
            telemetry::log_source(&default_path, false);
            return Self::load_from_path(default_path);
        }

        telemetry::log_defaults();
        Ok(Self::default())
    }

    /// Load settings from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            log_failure(&path, &error, "Failed to read settings file");
            error
        })?;

        let raw: RawSettings = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            log_failure(&path, &error, "Failed to parse settings file");
            error
        })?;

        let settings = Self::from_raw(raw, path.clone()).map_err(|err| {
            log_failure(&path, &err, "Failed to validate settings file");
            err
        })?;

        telemetry::log_loaded(&settings);
        Ok(settings)
    }

    fn from_raw(raw: RawSettings, path: PathBuf) -> Result<Self, ConfigError> {
        let starter = parse_starter_section(raw.starter, &path)?;
        let history = parse_history_section(raw.history, &path)?;

        Ok(Self {
            starter,
            history,
            source_path: Some(path),
        })
    }
}

fn log_failure(path: &Path, error: &ConfigError, message: &'static str) {
    error!(
        target: "basestart::config",
        path = %path.display(),
        reason = %error,
        "{message}"
    );
}
