use std::path::Path;

use tracing::{debug, info};

use super::{Settings, DEFAULT_SETTINGS_PATH};

pub fn log_source(path: &Path, explicit: bool) {
    if explicit {
        info!(
            target: "basestart::config",
            path = %path.display(),
            "Loading settings from --config"
        );
    } else {
        debug!(
            target: "basestart::config",
            path = %path.display(),
            "Loading settings from the working directory"
        );
    }
}

pub fn log_defaults() {
    debug!(
        target: "basestart::config",
        default = DEFAULT_SETTINGS_PATH,
        "No settings file found; using built-in defaults"
    );
}

pub fn log_loaded(settings: &Settings) {
    info!(
        target: "basestart::config",
        path = ?settings.source_path,
        starter = %settings.starter.path.display(),
        wait = settings.starter.wait,
        history_enabled = settings.history.enabled,
        history_path = %settings.history.path.display(),
        history_max_entries = settings.history.max_entries,
        "Settings loaded"
    );
}
