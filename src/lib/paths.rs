//! Shared path helpers used by settings validation and the history store.

use std::path::Path;

/// Returns true if the path has no characters besides whitespace.
pub fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

/// Parent directory that must exist before writing `path`, if any.
pub fn parent_to_create(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}
