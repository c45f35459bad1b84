//! Prelude module for convenient imports.
//!
//! ```
//! use confit::prelude::*;
//! ```

pub use confit_codegen::{
    CodegenError, FormattingBuilder, Generator, GeneratorConfig, generate, generate_to_string,
};
pub use confit_schema::{
    FieldType, ScalarKind, Schema, SchemaError, SchemaIr, SchemaNode, TypeDefinition,
    parse_schema, resolve_schema,
};
