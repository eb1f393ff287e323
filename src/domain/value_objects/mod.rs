//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod path;
mod predicate;
mod priority;

pub use path::{check_path, PathError};
pub use predicate::Predicate;
pub use priority::{ChangeOptions, InvalidPriority, Priority};
