//! # Confit
//!
//! Typed Go configuration loaders generated from JSON schemas.
//!
//! A schema such as `guidebook.confit.schema.json` describes the shape of a
//! configuration. Confit turns it into a Go file containing one struct per
//! object, a zero-value constructor and a loader reading a matching values
//! file.
//!
//! ## Quick Start
//!
//! ```
//! use confit::prelude::*;
//!
//! let schema = br#"{
//!     "title": "GuidebookConfitSchema",
//!     "type": "object",
//!     "properties": {
//!         "Display": { "type": "object", "properties": { "Theme": { "type": "string" } } }
//!     }
//! }"#;
//!
//! let mut out = Vec::new();
//! generate(&mut out, schema)?;
//! let source = String::from_utf8(out).expect("UTF-8 source");
//! assert!(source.contains("func Load(path string) (Guidebook, error)"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, parsing, naming policy and type resolution
//! - [`codegen`] - Formatting emitter and Go generation

pub mod prelude;

/// Schema parsing, naming and type resolution.
pub mod schema {
    pub use confit_schema::*;
}

/// Go code generation from confit schemas.
pub mod codegen {
    pub use confit_codegen::*;
}

// Re-export commonly used items at the crate root
pub use confit_codegen::{
    CodegenError, FormattingBuilder, Generator, GeneratorConfig, generate, generate_from_file,
    generate_to_file, generate_to_string,
};
pub use confit_schema::{Schema, SchemaError, SchemaIr, SchemaNode, parse_schema, resolve_schema};
