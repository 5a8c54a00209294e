use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths};

pub const DEFAULT_HISTORY_FILE: &str = "basestart_history.txt";
pub const DEFAULT_MAX_ENTRIES: usize = 50;
pub const MAX_ENTRIES_LIMIT: usize = 1000;

/// `[history]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySettings {
    pub enabled: bool,
    pub path: PathBuf,
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_HISTORY_FILE),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawHistorySection {
    pub enabled: Option<bool>,
    pub path: Option<PathBuf>,
    pub max_entries: Option<usize>,
}

pub fn parse_history_section(
    raw: Option<RawHistorySection>,
    path: &Path,
) -> Result<HistorySettings, ConfigError> {
    let history_raw = raw.unwrap_or_default();
    let defaults = HistorySettings::default();

    let history_path = history_raw.path.unwrap_or(defaults.path);
    if paths::is_blank(&history_path) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "history.path",
            message: "History path cannot be empty".into(),
        });
    }

    let max_entries = history_raw.max_entries.unwrap_or(defaults.max_entries);
    validate_max_entries(path, max_entries)?;

    Ok(HistorySettings {
        enabled: history_raw.enabled.unwrap_or(defaults.enabled),
        path: history_path,
        max_entries,
    })
}

fn validate_max_entries(path: &Path, max_entries: usize) -> Result<(), ConfigError> {
    if (1..=MAX_ENTRIES_LIMIT).contains(&max_entries) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "history.max_entries",
        message: format!("Use a value in the range 1-{MAX_ENTRIES_LIMIT}"),
    })
}
