//! # Confit Schema
//!
//! Confit JSON schema model and type resolution.
//!
//! This crate provides:
//! - Schema document parsing into a tagged node model
//! - Naming policy for exported type, field and package names
//! - Type resolution into an ordered list of emission-ready type definitions

pub mod error;
pub mod ir;
pub mod naming;
pub mod parser;
pub mod types;

pub use error::SchemaError;
pub use ir::{FieldType, ResolvedField, SchemaIr, TypeDefinition};
pub use naming::{
    SCHEMA_ROOT_SUFFIX, package_name, root_identifier_for, root_type_name, schema_file_name,
    values_file_name,
};
pub use parser::{parse_schema, parse_schema_str};
pub use types::{FieldNode, ObjectNode, ScalarKind, Schema, SchemaNode};

/// Parses and resolves a schema in one step.
///
/// # Errors
/// Returns `SchemaError` if parsing, naming or resolution fails.
pub fn resolve_schema(bytes: &[u8]) -> Result<SchemaIr, SchemaError> {
    let schema = parse_schema(bytes)?;
    SchemaIr::from_schema(&schema)
}
