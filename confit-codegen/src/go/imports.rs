//! Package clause and import block.

use crate::emitter::FormattingBuilder;
use crate::error::CodegenError;

/// Packages the generated loader needs, in gofmt order.
pub const IMPORTS: [&str; 2] = ["encoding/json", "os"];

/// Marker line recognised by Go tooling as generated code.
pub const GENERATED_HEADER: &str = "// Code generated by confitgen. DO NOT EDIT.";

/// Appends the generated-code marker comment.
pub fn append_header(b: &mut FormattingBuilder) {
    b.line(GENERATED_HEADER);
}

/// Appends the package clause followed by the import block.
///
/// # Errors
/// Returns `CodegenError::Generation` if the block cannot be closed.
pub fn append_imports(b: &mut FormattingBuilder, package: &str) -> Result<(), CodegenError> {
    b.blank_line();
    b.line(format!("package {package}"));
    b.blank_line();
    b.open_group("import");
    for import in IMPORTS {
        b.line(format!("\"{import}\""));
    }
    b.close()?;
    Ok(())
}
