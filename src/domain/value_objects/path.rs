//! File Path Checks
//!
//! Generated file paths are POSIX-style, `/`-separated and relative to
//! whatever directory a host tool writes into. They must be:
//! - Relative (no leading `/`)
//! - Normalized (equal to their POSIX-normalized form)
//!
//! The host platform's path rules are deliberately not consulted, so a
//! path is valid or invalid identically on every OS.

use std::fmt;

/// Error when path validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Path starts with a separator
    NotRelative,
    /// Path is empty, or has a `.`, `..` or empty segment
    NotNormalized,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotRelative => write!(f, "Path must be relative"),
            PathError::NotNormalized => write!(f, "Path must be normalized"),
        }
    }
}

impl std::error::Error for PathError {}

/// Check that `path` is relative and normalized
///
/// A single trailing `/` survives POSIX normalization and is accepted.
pub fn check_path(path: &str) -> Result<(), PathError> {
    if path.starts_with('/') {
        return Err(PathError::NotRelative);
    }

    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Err(PathError::NotNormalized);
    }

    let normalized = trimmed
        .split('/')
        .all(|segment| !matches!(segment, "" | "." | ".."));
    if !normalized {
        return Err(PathError::NotNormalized);
    }

    Ok(())
}
