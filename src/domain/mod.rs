//! Domain Layer
//!
//! The core of filegen - pure value transformation without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Definitions, changes and generated files
//! - `value_objects/` - Path checks, predicates, priorities
//! - `services/` - Ordering, reduction and the generator itself

pub mod entities;
pub mod services;
pub mod value_objects;
