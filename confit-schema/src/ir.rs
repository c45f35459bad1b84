//! Intermediate representation for code generation.
//!
//! The type resolver flattens the schema tree into an ordered list of named
//! type definitions: the root first, then every nested object in depth-first
//! pre-order.

use crate::error::SchemaError;
use crate::naming;
use crate::types::{ObjectNode, ScalarKind, Schema, SchemaNode};
use std::collections::HashSet;
use std::fmt;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaIr {
    /// Go package name.
    pub package: String,
    /// Root identifier the schema declared.
    pub root_identifier: String,
    /// Type definitions, root first.
    pub types: Vec<TypeDefinition>,
}

impl SchemaIr {
    /// Resolves a parsed schema.
    ///
    /// # Errors
    /// Returns `SchemaError` on naming failures or duplicate type names.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        let root_name = naming::root_type_name(&schema.root_identifier)?;
        let package = naming::package_name(&root_name)?;

        let mut resolver = TypeResolver::default();
        resolver.register(root_name, &schema.root, "")?;

        tracing::debug!(
            package = %package,
            types = resolver.types.len(),
            "resolved type definitions"
        );

        Ok(Self {
            package,
            root_identifier: schema.root_identifier.clone(),
            types: resolver.types,
        })
    }

    /// Returns the root type definition, or `None` for a hand-built IR with
    /// no types.
    #[must_use]
    pub fn root(&self) -> Option<&TypeDefinition> {
        self.types.first()
    }

    /// Returns the nested type definitions in discovery order.
    #[must_use]
    pub fn nested(&self) -> &[TypeDefinition] {
        self.types.get(1..).unwrap_or_default()
    }

    /// Gets a type definition by exported name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// A resolved, emission-ready struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    /// Exported type name.
    pub name: String,
    /// Fields in schema declaration order.
    pub fields: Vec<ResolvedField>,
}

impl TypeDefinition {
    /// Creates a type definition with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Gets a field by exported name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the types this definition references directly.
    pub fn referenced_types(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| f.field_type.named())
    }
}

/// Resolved field information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Exported field name.
    pub name: String,
    /// Field type.
    pub field_type: FieldType,
    /// Key used in the serialization tag.
    pub key: String,
}

impl ResolvedField {
    /// Returns the Go struct tag, including backquotes.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("`json:\"{}\"`", self.key)
    }
}

/// Resolved field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Scalar.
    Primitive(ScalarKind),
    /// Reference to another type definition.
    Named(String),
    /// Sequence of the inner type.
    Sequence(Box<FieldType>),
}

impl FieldType {
    /// Returns the referenced type name, looking through sequences.
    #[must_use]
    pub fn named(&self) -> Option<&str> {
        match self {
            Self::Primitive(_) => None,
            Self::Named(name) => Some(name),
            Self::Sequence(inner) => inner.named(),
        }
    }

    /// Returns the Go spelling of this type.
    #[must_use]
    pub fn go_type(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.go_type()),
            Self::Named(name) => f.write_str(name),
            Self::Sequence(inner) => write!(f, "[]{inner}"),
        }
    }
}

/// Walks the schema tree and registers every object as a type definition.
#[derive(Debug, Default)]
struct TypeResolver {
    types: Vec<TypeDefinition>,
    seen: HashSet<String>,
}

impl TypeResolver {
    /// Registers `object` under `name` before visiting its fields.
    fn register(
        &mut self,
        name: String,
        object: &ObjectNode,
        path: &str,
    ) -> Result<(), SchemaError> {
        if naming::is_reserved_type_name(&name) || !self.seen.insert(name.clone()) {
            let field = if path.is_empty() { "title" } else { path };
            return Err(SchemaError::duplicate_type(name, field));
        }
        tracing::trace!(type_name = %name, fields = object.fields.len(), "registering type");

        let index = self.types.len();
        self.types.push(TypeDefinition::new(name));

        let mut fields = Vec::with_capacity(object.fields.len());
        for field in &object.fields {
            let field_path = if path.is_empty() {
                field.name.clone()
            } else {
                format!("{path}.{}", field.name)
            };
            let name = naming::field_name(&field.name)?;
            let field_type = self.resolve(&field.node, &field_path)?;
            fields.push(ResolvedField {
                name,
                field_type,
                key: naming::serialization_key(&field.name).to_string(),
            });
        }

        self.types[index].fields = fields;
        Ok(())
    }

    fn resolve(&mut self, node: &SchemaNode, path: &str) -> Result<FieldType, SchemaError> {
        match node {
            SchemaNode::Scalar(kind) => Ok(FieldType::Primitive(*kind)),
            SchemaNode::Object(object) => {
                let name = naming::nested_type_name(&object.name)?;
                self.register(name.clone(), object, path)?;
                Ok(FieldType::Named(name))
            }
            SchemaNode::Array(element) => {
                let inner = self.resolve(element, path)?;
                Ok(FieldType::Sequence(Box::new(inner)))
            }
        }
    }
}
