//! Filegen - deterministic file content generation
//!
//! Callers declare files (a path, optional metadata, optional typed content)
//! and contribute ordered, predicate-gated changes to their content. A run
//! checks every path, reduces each file's value through its changes and
//! serializes the result. Writing the output anywhere is the host's job.

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::entities::{
    FileChange, FileContent, FileDefinition, GeneratedFile, ReducerArgs, SiblingDefinition,
};
pub use domain::services::{generate_content, generate_files, GeneratorConfig};
pub use domain::value_objects::{ChangeOptions, PathError, Predicate, Priority};
pub use error::{GenerateError, GenerateResult};
