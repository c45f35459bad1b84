//! Error types for schema parsing, naming and type resolution.

use thiserror::Error;

/// Error type for everything that can go wrong between raw schema bytes and
/// resolved type definitions.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document is not well-formed JSON, or a node has the wrong JSON shape.
    #[error("malformed schema at `{path}`: {source}")]
    Json {
        /// Path of the offending node inside the document.
        path: String,
        /// Underlying decoder error (carries line and column).
        #[source]
        source: serde_json::Error,
    },

    /// The document root is not an object carrying a valid root identifier.
    #[error("invalid root: {reason}")]
    InvalidRoot {
        /// Why the root was rejected.
        reason: String,
    },

    /// A node declares a kind other than object, array, string, number or boolean.
    #[error("unsupported kind `{kind}` for field `{field}`")]
    UnsupportedKind {
        /// Dotted path of the field.
        field: String,
        /// Declared kind, as written in the schema.
        kind: String,
    },

    /// A name cannot be used as an exported identifier in generated code.
    #[error("invalid identifier `{name}`: {reason}")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// Two objects in the schema derive the same type name.
    #[error("duplicate type name `{name}` introduced by field `{field}`")]
    DuplicateTypeName {
        /// Derived type name.
        name: String,
        /// Dotted path of the field that introduced the second definition.
        field: String,
    },

    /// A property key appears twice in the same object.
    #[error("duplicate field `{field}` in object `{object}`")]
    DuplicateField {
        /// Name of the enclosing object.
        object: String,
        /// Repeated property key.
        field: String,
    },

    /// A node is missing a required keyword.
    #[error("invalid schema structure at `{field}`: {message}")]
    InvalidStructure {
        /// Dotted path of the node.
        field: String,
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates an invalid root error.
    pub fn invalid_root(reason: impl Into<String>) -> Self {
        Self::InvalidRoot {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported kind error.
    pub fn unsupported_kind(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            field: field.into(),
            kind: kind.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate type name error.
    pub fn duplicate_type(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateTypeName {
            name: name.into(),
            field: field.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SchemaError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Json {
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }
}
