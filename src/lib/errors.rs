use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the settings file.
    #[error("Failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Settings file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// The connection string matched none of the known forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("Could not parse connection string `{input}`: expected pattern: {expected}")]
    UnrecognizedFormat {
        input: String,
        expected: &'static str,
    },
}

/// Failures while starting the external starter executable.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Could not locate 1C starter app: '{}'", path.display())]
    ExecutableNotFound { path: PathBuf },
    #[error("Failed to start {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for the starter to exit: {source}")]
    Wait {
        #[source]
        source: io::Error,
    },
}

/// Errors raised while reading or writing the launch history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to read history file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write history file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
