//! Struct declarations.

use crate::emitter::FormattingBuilder;
use crate::error::CodegenError;
use confit_schema::ir::{SchemaIr, TypeDefinition};

/// Generator for every struct declaration of a schema.
pub struct StructGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Appends all type declarations, root first, nested types in discovery order.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if a block cannot be closed.
    pub fn generate(&self, b: &mut FormattingBuilder) -> Result<(), CodegenError> {
        for def in &self.ir.types {
            append_struct(b, def)?;
        }
        Ok(())
    }
}

/// Appends one struct declaration with aligned, tagged fields.
///
/// # Errors
/// Returns `CodegenError::Generation` if the block cannot be closed.
pub fn append_struct(
    b: &mut FormattingBuilder,
    def: &TypeDefinition,
) -> Result<(), CodegenError> {
    tracing::trace!(type_name = %def.name, fields = def.fields.len(), "emitting struct");

    let rows: Vec<[String; 3]> = def
        .fields
        .iter()
        .map(|f| [f.name.clone(), f.field_type.go_type(), f.tag()])
        .collect();

    b.blank_line();
    b.open_block(&format!("type {} struct", def.name));
    b.aligned(&rows);
    b.close()?;
    Ok(())
}
