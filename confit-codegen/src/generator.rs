//! Generator orchestration.

use crate::emitter::FormattingBuilder;
use crate::error::CodegenError;
use crate::go::{StructGenerator, append_functions, append_header, append_imports};
use confit_schema::SchemaIr;
use confit_schema::naming;
use std::io::Write;
use std::path::Path;

/// Generator options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Write the `Code generated ... DO NOT EDIT.` marker line.
    pub header: bool,
    /// Package name to use instead of the one derived from the root type.
    pub package: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            header: true,
            package: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the generated-code marker is written.
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Overrides the package name.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

/// Turns schema bytes into a complete Go source file.
///
/// Each call builds its own model and emitter; a generator holds nothing
/// but its configuration and can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders the Go source for a schema document.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` for any parsing, naming or resolution failure.
    pub fn render(&self, schema: &[u8]) -> Result<String, CodegenError> {
        let ir = confit_schema::resolve_schema(schema)?;
        self.render_ir(&ir)
    }

    /// Renders the Go source for an already resolved schema.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the package override is not a valid name,
    /// or `CodegenError::Generation` if the IR holds no root type.
    pub fn render_ir(&self, ir: &SchemaIr) -> Result<String, CodegenError> {
        let package = match &self.config.package {
            Some(package) => naming::validate_package_name(package)?,
            None => ir.package.clone(),
        };
        let root = ir
            .root()
            .ok_or_else(|| CodegenError::generation("schema has no root type"))?;

        let mut b = FormattingBuilder::new();
        if self.config.header {
            append_header(&mut b);
        }
        append_imports(&mut b, &package)?;
        StructGenerator::new(ir).generate(&mut b)?;
        append_functions(&mut b, &root.name)?;
        let source = b.finish()?;

        tracing::debug!(
            package = %package,
            root = %root.name,
            types = ir.types.len(),
            bytes = source.len(),
            "generated Go source"
        );
        Ok(source)
    }

    /// Generates the Go source for `schema` and writes it to `output`.
    ///
    /// The document is fully rendered before the first byte is written, so on
    /// error nothing reaches `output`.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails.
    pub fn generate<W>(&self, output: &mut W, schema: &[u8]) -> Result<(), CodegenError>
    where
        W: Write + ?Sized,
    {
        let source = self.render(schema)?;
        output.write_all(source.as_bytes())?;
        output.flush()?;
        Ok(())
    }

    /// Reads a schema file and writes the generated source to `out_path`.
    ///
    /// The output file is only created once generation has succeeded.
    ///
    /// # Errors
    /// Returns `CodegenError` if reading, generation or writing fails.
    pub fn generate_file(&self, schema_path: &Path, out_path: &Path) -> Result<(), CodegenError> {
        let schema = std::fs::read(schema_path)?;
        let source = self.render(&schema)?;
        std::fs::write(out_path, source)?;
        tracing::debug!(
            schema = %schema_path.display(),
            output = %out_path.display(),
            "wrote generated file"
        );
        Ok(())
    }
}
