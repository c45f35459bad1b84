//! # Confit Codegen
//!
//! Go code generation from confit JSON schemas.
//!
//! This crate provides:
//! - A formatting emitter producing gofmt-layout text without a separate pass
//! - Go struct, import and constructor/loader fragment writers
//! - The generator tying schema parsing, type resolution and emission together

pub mod emitter;
pub mod error;
pub mod generator;
pub mod go;

pub use emitter::FormattingBuilder;
pub use error::CodegenError;
pub use generator::{Generator, GeneratorConfig};

use std::io::Write;
use std::path::Path;

/// Generates Go source from a confit schema and writes it to `output`.
///
/// # Arguments
/// * `output` - Sink receiving the generated source
/// * `schema` - JSON schema content
///
/// # Errors
/// Returns `CodegenError` if parsing, generation or writing fails. Nothing is
/// written to `output` when the schema is rejected.
pub fn generate<W>(output: &mut W, schema: &[u8]) -> Result<(), CodegenError>
where
    W: Write + ?Sized,
{
    Generator::new().generate(output, schema)
}

/// Generates Go source from a confit schema.
///
/// # Arguments
/// * `schema` - JSON schema content
///
/// # Returns
/// Generated Go code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_to_string(schema: &[u8]) -> Result<String, CodegenError> {
    Generator::new().render(schema)
}

/// Generates Go source from a confit schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &Path) -> Result<String, CodegenError> {
    let schema = std::fs::read(path)?;
    generate_to_string(&schema)
}

/// Generates Go source from `schema_path` into `out_path`.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, generation or writing fails.
/// The output file is not created on failure.
pub fn generate_to_file(schema_path: &Path, out_path: &Path) -> Result<(), CodegenError> {
    Generator::new().generate_file(schema_path, out_path)
}
