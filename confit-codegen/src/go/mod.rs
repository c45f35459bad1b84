//! Go code generation modules.

pub mod functions;
pub mod imports;
pub mod structs;

pub use functions::append_functions;
pub use imports::{append_header, append_imports};
pub use structs::{StructGenerator, append_struct};
