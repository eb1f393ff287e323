//! Domain Entities
//!
//! - `FileDefinition` - A declared file with optional metadata and content
//! - `FileChange` - An ordered, predicate-gated modification of a file's value
//! - `GeneratedFile` - The serialized result for one definition

mod change;
mod definition;
mod generated_file;

pub use change::{FileChange, ReducerArgs};
pub(crate) use definition::Value;
pub use definition::{FileContent, FileDefinition, SiblingDefinition};
pub use generated_file::GeneratedFile;
