use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    launch::DEFAULT_STARTER_PATH,
    lib::{errors::ConfigError, paths},
};

/// `[starter]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterSettings {
    pub path: PathBuf,
    pub wait: bool,
}

impl Default for StarterSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STARTER_PATH),
            wait: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawStarterSection {
    pub path: Option<PathBuf>,
    pub wait: Option<bool>,
}

pub fn parse_starter_section(
    raw: Option<RawStarterSection>,
    path: &Path,
) -> Result<StarterSettings, ConfigError> {
    let starter_raw = raw.unwrap_or_default();
    let defaults = StarterSettings::default();

    let starter_path = starter_raw.path.unwrap_or(defaults.path);
    if paths::is_blank(&starter_path) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "starter.path",
            message: "Starter path cannot be empty".into(),
        });
    }

    Ok(StarterSettings {
        path: starter_path,
        wait: starter_raw.wait.unwrap_or(defaults.wait),
    })
}
