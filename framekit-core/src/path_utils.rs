//! Cross-platform path utilities
//!
//! Host applications expect forward slashes in file parameters, even on
//! Windows. Paths handed back to callers go through these helpers.

use std::path::Path;

/// Normalize path to forward slashes
#[inline]
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Convert a Path to a normalized string
#[inline]
pub fn path_to_string(path: &Path) -> String {
    normalize_path(&path.to_string_lossy())
}

/// Join a file name onto a directory, returning a normalized string
pub fn join_file_name(dir: &Path, file_name: &str) -> String {
    path_to_string(&dir.join(file_name))
}

/// Split `dir/name.ext` into its directory (if any) and file name
pub fn split_file_name(path: &str) -> (Option<&str>, &str) {
    match path.rfind(['/', '\\']) {
        Some(idx) => (Some(&path[..idx]), &path[idx + 1..]),
        None => (None, path),
    }
}
