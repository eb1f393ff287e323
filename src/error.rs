//! Error types for filegen
//!
//! Uses `thiserror` for library errors. Every variant aborts the whole
//! generation call; no partial output is ever returned alongside one.

use thiserror::Error;

use crate::domain::value_objects::PathError;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Main error type for generation operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A definition or change path starts with `/`
    #[error("The specified file path \"{path}\" must be relative.")]
    PathNotRelative { path: String },

    /// A definition or change path is not in normalized form
    #[error("The specified file path \"{path}\" must be normalized.")]
    PathNotNormalized { path: String },

    /// Two definitions share a path
    #[error("A file with the path \"{path}\" is defined more than once.")]
    DuplicateDefinition { path: String },

    /// A change predicate rejected the accumulated value
    #[error("Unable to change the incompatible content of file \"{path}\".")]
    IncompatibleForChange { path: String },

    /// The definition's own predicate rejected the final value
    #[error("Unable to serialize the malformed content of file \"{path}\".")]
    MalformedForSerialization { path: String },
}

impl GenerateError {
    /// Build the error for a path that failed validation
    pub fn from_path_error(error: PathError, path: &str) -> Self {
        let path = path.to_string();
        match error {
            PathError::NotRelative => GenerateError::PathNotRelative { path },
            PathError::NotNormalized => GenerateError::PathNotNormalized { path },
        }
    }

    /// The file path this error is about
    pub fn path(&self) -> &str {
        match self {
            GenerateError::PathNotRelative { path }
            | GenerateError::PathNotNormalized { path }
            | GenerateError::DuplicateDefinition { path }
            | GenerateError::IncompatibleForChange { path }
            | GenerateError::MalformedForSerialization { path } => path,
        }
    }
}
