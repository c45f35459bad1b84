//! Constructor and loader for the root type.

use crate::emitter::FormattingBuilder;
use crate::error::CodegenError;

/// Appends `New` and `Load` for `type_name`.
///
/// `New` returns the zero value. `Load` reads a JSON values file and decodes
/// it into the type, returning read and decode errors unchanged.
///
/// # Errors
/// Returns `CodegenError::Generation` if a block cannot be closed.
pub fn append_functions(b: &mut FormattingBuilder, type_name: &str) -> Result<(), CodegenError> {
    tracing::trace!(type_name, "emitting constructor and loader");

    b.blank_line();
    b.line(format!("// New returns a zero-valued {type_name}."));
    b.line(format!("func New() {type_name} {{ return {type_name}{{}} }}"));

    b.blank_line();
    b.line(format!(
        "// Load reads the JSON values file at path into a {type_name}."
    ));
    b.open_block(&format!("func Load(path string) ({type_name}, error)"));
    b.line("data, err := os.ReadFile(path)");
    b.open_block("if err != nil");
    b.line(format!("return {type_name}{{}}, err"));
    b.close()?;
    b.line(format!("var cfg {type_name}"));
    b.open_block("if err := json.Unmarshal(data, &cfg); err != nil");
    b.line(format!("return {type_name}{{}}, err"));
    b.close()?;
    b.line("return cfg, nil");
    b.close()?;
    Ok(())
}
