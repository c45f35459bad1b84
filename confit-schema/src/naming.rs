//! Naming policy.
//!
//! Pure functions deriving Go identifiers from schema names. Nothing here
//! needs a parsed schema.

use crate::error::SchemaError;

/// Suffix every schema root identifier must carry.
pub const SCHEMA_ROOT_SUFFIX: &str = "ConfitSchema";

/// File extension of schema documents.
pub const SCHEMA_FILE_SUFFIX: &str = ".confit.schema.json";

/// File extension of values documents read by the generated loader.
pub const VALUES_FILE_SUFFIX: &str = ".confit.values.json";

/// Package-level names declared by the generated constructor and loader.
pub const RESERVED_TYPE_NAMES: [&str; 2] = ["New", "Load"];

const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Uppercases the first character of `s`.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns true if `s` is a Go identifier: an ASCII letter or `_` followed by
/// ASCII letters, ASCII digits or `_`. Non-ASCII names are rejected.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Returns true if `s` is an exported Go identifier (starts with an uppercase letter).
#[must_use]
pub fn is_exported_identifier(s: &str) -> bool {
    is_identifier(s) && s.starts_with(|c: char| c.is_ascii_uppercase())
}

/// Returns true if `name` is taken by a function every generated file declares.
#[must_use]
pub fn is_reserved_type_name(name: &str) -> bool {
    RESERVED_TYPE_NAMES.contains(&name)
}

/// Returns true if `s` is a reserved Go keyword.
#[must_use]
pub fn is_go_keyword(s: &str) -> bool {
    GO_KEYWORDS.contains(&s)
}

/// Derives the exported root type name from a root identifier.
///
/// `GuidebookConfitSchema` becomes `Guidebook`.
///
/// # Errors
/// Returns `SchemaError::InvalidRoot` when the suffix is missing and
/// `SchemaError::InvalidIdentifier` when the remainder is not an identifier.
pub fn root_type_name(identifier: &str) -> Result<String, SchemaError> {
    let stem = identifier.strip_suffix(SCHEMA_ROOT_SUFFIX).ok_or_else(|| {
        SchemaError::invalid_root(format!(
            "root identifier `{identifier}` must end with `{SCHEMA_ROOT_SUFFIX}`"
        ))
    })?;

    if stem.is_empty() {
        return Err(SchemaError::invalid_identifier(
            identifier,
            "no type name before the schema suffix",
        ));
    }

    let name = capitalize(stem);
    if !is_exported_identifier(&name) {
        return Err(SchemaError::invalid_identifier(
            name,
            "root type name is not a valid identifier",
        ));
    }
    Ok(name)
}

/// Derives the Go package name from the root type name (`MyPackage` becomes `mypackage`).
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if the result is not usable as a package name.
pub fn package_name(root_type: &str) -> Result<String, SchemaError> {
    validate_package_name(&root_type.to_lowercase())
}

/// Checks a package name and returns it owned.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` for non-identifiers and Go keywords.
pub fn validate_package_name(name: &str) -> Result<String, SchemaError> {
    if !is_identifier(name) {
        return Err(SchemaError::invalid_identifier(
            name,
            "package name is not a valid identifier",
        ));
    }
    if is_go_keyword(name) {
        return Err(SchemaError::invalid_identifier(
            name,
            "package name is a reserved keyword",
        ));
    }
    Ok(name.to_string())
}

/// Returns the exported field name for a schema property key.
///
/// Keys are used verbatim, so they must already be exported identifiers.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if the key is not an exported identifier.
pub fn field_name(key: &str) -> Result<String, SchemaError> {
    if !is_exported_identifier(key) {
        return Err(SchemaError::invalid_identifier(
            key,
            "field names must be exported identifiers (leading uppercase letter)",
        ));
    }
    Ok(key.to_string())
}

/// Returns the serialization key written into a field's tag.
#[must_use]
pub fn serialization_key(key: &str) -> &str {
    key
}

/// Returns the exported type name for an object introduced by `field`.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if the capitalized name is not an identifier.
pub fn nested_type_name(field: &str) -> Result<String, SchemaError> {
    let name = capitalize(field);
    if !is_exported_identifier(&name) {
        return Err(SchemaError::invalid_identifier(
            field,
            "nested type name is not a valid identifier",
        ));
    }
    Ok(name)
}

/// Schema file name for a package: `guidebook` gives `guidebook.confit.schema.json`.
#[must_use]
pub fn schema_file_name(package: &str) -> String {
    format!("{package}{SCHEMA_FILE_SUFFIX}")
}

/// Values file name for a package: `guidebook` gives `guidebook.confit.values.json`.
#[must_use]
pub fn values_file_name(package: &str) -> String {
    format!("{package}{VALUES_FILE_SUFFIX}")
}

/// Root identifier a schema for `type_name` must declare.
#[must_use]
pub fn root_identifier_for(type_name: &str) -> String {
    format!("{type_name}{SCHEMA_ROOT_SUFFIX}")
}
