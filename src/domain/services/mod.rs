//! Domain Services
//!
//! Pure, stateless services over domain entities. Nothing here touches the
//! file system.

mod change_order;
mod generator;
mod reducer;

pub use change_order::select;
pub use generator::{generate_content, generate_files, GeneratorConfig};
