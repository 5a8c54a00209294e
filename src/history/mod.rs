//! Most-recently-used list of launched connection strings.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::lib::{errors::HistoryError, paths};

/// Plain-text history file, one connection string per line, newest first.
#[derive(Debug, Clone)]
pub struct History {
    path: PathBuf,
    entries: Vec<String>,
    max_entries: usize,
}

impl History {
    /// Read the history at `path`; a missing file yields an empty history.
    pub fn load(path: impl Into<PathBuf>, max_entries: usize) -> Result<Self, HistoryError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .take(max_entries)
                .map(str::to_string)
                .collect(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(HistoryError::Read { path, source }),
        };

        debug!(
            target: "basestart::history",
            path = %path.display(),
            entries = entries.len(),
            "History loaded"
        );
        Ok(Self {
            path,
            entries,
            max_entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move `entry` to the front, inserting it if new, and trim to capacity.
    ///
    /// Returns false when the entry cannot be stored (blank or multi-line).
    pub fn record(&mut self, entry: &str) -> bool {
        let entry = entry.trim();
        if entry.is_empty() || entry.contains(['\n', '\r']) {
            return false;
        }

        self.entries.retain(|existing| existing != entry);
        self.entries.insert(0, entry.to_string());
        self.entries.truncate(self.max_entries);
        true
    }

    /// Drop `entry`; returns whether it was present.
    pub fn remove(&mut self, entry: &str) -> bool {
        let entry = entry.trim();
        let before = self.entries.len();
        self.entries.retain(|existing| existing != entry);
        self.entries.len() != before
    }

    /// Drop every entry and return how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Rewrite the history file with the current entries.
    pub fn save(&self) -> Result<(), HistoryError> {
        let write_error = |source| HistoryError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = paths::parent_to_create(&self.path) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let mut content = self.entries.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(write_error)?;

        debug!(
            target: "basestart::history",
            path = %self.path.display(),
            entries = self.entries.len(),
            "History saved"
        );
        Ok(())
    }
}
