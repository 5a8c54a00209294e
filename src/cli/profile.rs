//! LaunchProfile resolution from settings and CLI overrides.
use std::path::PathBuf;

use crate::{
    history::History,
    launch::Starter,
    lib::errors::HistoryError,
    settings::Settings,
};

/// Flags given on the command line that take precedence over settings.
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub starter: Option<PathBuf>,
    pub no_wait: bool,
    pub dry_run: bool,
    pub no_history: bool,
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub starter_path: PathBuf,
    pub wait: bool,
    pub dry_run: bool,
    pub record_history: bool,
    pub history_path: PathBuf,
    pub history_limit: usize,
    pub settings_source: Option<PathBuf>,
}

impl LaunchProfile {
    /// Merge settings with overrides in the order: CLI flag → settings file → default.
    pub fn resolve(overrides: ProfileOverrides, settings: Settings) -> Self {
        Self {
            starter_path: overrides.starter.unwrap_or(settings.starter.path),
            wait: settings.starter.wait && !overrides.no_wait,
            dry_run: overrides.dry_run,
            record_history: settings.history.enabled && !overrides.no_history,
            history_path: settings.history.path,
            history_limit: settings.history.max_entries,
            settings_source: settings.source_path,
        }
    }

    pub fn starter(&self) -> Starter {
        Starter::new(&self.starter_path)
    }

    pub fn load_history(&self) -> Result<History, HistoryError> {
        History::load(&self.history_path, self.history_limit)
    }
}
