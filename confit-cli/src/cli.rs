//! Minimal CLI: `<package>.confit.schema.json` → `<package>.go`
use anyhow::Context;
use clap::{ArgAction, Parser};
use confit::schema::naming::{root_identifier_for, schema_file_name, values_file_name};
use confit::{Generator, GeneratorConfig};
use std::io::Write;
use std::path::PathBuf;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate a typed Go configuration loader from `<package>.confit.schema.json`
#[derive(Parser, Debug)]
#[command(name = "confitgen", version)]
pub struct CommandLineInterface {
    /// package name; reads `<package>.confit.schema.json`
    #[arg(long, short, env = "CONFITGEN_SCHEMA", required_unless_present = "more")]
    schema: Option<String>,

    /// directory containing the schema file
    #[arg(long, env = "CONFITGEN_DIR", default_value = ".")]
    dir: PathBuf,

    /// output .go file (defaults to `<dir>/<package>.go`)
    #[arg(short, long, conflicts_with = "stdout")]
    out: Option<PathBuf>,

    /// print the generated source instead of writing a file
    #[arg(long, default_value_t = false)]
    stdout: bool,

    /// Go package name (defaults to the lowercased root type name)
    #[arg(long)]
    package: Option<String>,

    /// leave out the `Code generated ... DO NOT EDIT.` marker
    #[arg(long, default_value_t = false)]
    no_header: bool,

    /// show extended help
    #[arg(long, default_value_t = false)]
    more: bool,

    /// more logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> anyhow::Result<()> {
        if self.more {
            print!("{}", extended_help());
            return Ok(());
        }

        let package = self
            .schema
            .as_deref()
            .context("missing `--schema <package>`")?;
        let schema_path = self.dir.join(schema_file_name(package));
        tracing::debug!(schema = %schema_path.display(), "reading schema");

        let schema = std::fs::read(&schema_path)
            .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
        let source = Generator::with_config(self.generator_config())
            .render(&schema)
            .with_context(|| format!("failed to generate code from {}", schema_path.display()))?;

        if self.stdout {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(source.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        }

        let out = self
            .out
            .clone()
            .unwrap_or_else(|| self.dir.join(format!("{package}.go")));
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(&out, &source)
            .with_context(|| format!("failed to write {}", out.display()))?;

        tracing::info!(
            schema = %schema_path.display(),
            output = %out.display(),
            "generated Go source"
        );
        Ok(())
    }

    fn generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new().with_header(!self.no_header);
        match &self.package {
            Some(package) => config.with_package(package.clone()),
            None => config,
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn extended_help() -> String {
    let rule = "-".repeat(60);
    let example = "mypackage";
    format!(
        "{rule}\n\
         Example:\n  \
         confitgen --schema {example}\n\
         \n       \
         required schema: {schema}\n  \
         required schema root: {root}\n        \
         file generated: {example}.go\n\
         \n\
         The generated package loads values with:\n  \
         {example}.Load(\"{values}\")\n\
         \n\
         In your own app, drop the generated file here:\n  \
         internal/confit/{example}/{example}.go\n\
         {rule}\n",
        schema = schema_file_name(example),
        root = root_identifier_for("MyPackage"),
        values = values_file_name(example),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CommandLineInterface::command().debug_assert();
    }

    #[test]
    fn test_extended_help_names_files() {
        let help = extended_help();
        assert!(help.contains("required schema: mypackage.confit.schema.json"));
        assert!(help.contains("required schema root: MyPackageConfitSchema"));
        assert!(help.contains("file generated: mypackage.go"));
    }

    #[test]
    fn test_generator_config_from_flags() {
        let cli = CommandLineInterface::try_parse_from([
            "confitgen",
            "--schema",
            "guidebook",
            "--no-header",
            "--package",
            "hhgttg",
        ])
        .expect("valid arguments");

        let config = cli.generator_config();
        assert!(!config.header);
        assert_eq!(config.package.as_deref(), Some("hhgttg"));
    }

    #[test]
    fn test_more_does_not_need_schema() {
        let cli = CommandLineInterface::try_parse_from(["confitgen", "--more"])
            .expect("--more alone is valid");
        assert!(cli.more);
        assert!(cli.schema.is_none());
    }

    #[test]
    fn test_out_conflicts_with_stdout() {
        let result = CommandLineInterface::try_parse_from([
            "confitgen",
            "--schema",
            "guidebook",
            "--stdout",
            "--out",
            "x.go",
        ]);
        assert!(result.is_err());
    }
}
