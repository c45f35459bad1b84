//! Schema model.
//!
//! An explicit tagged representation of a parsed confit schema document:
//! scalars, objects with ordered fields, and arrays of a single element kind.

use crate::error::SchemaError;

/// Scalar kinds a schema may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// JSON string.
    String,
    /// JSON number (always decoded as a 64-bit float).
    Number,
    /// JSON boolean.
    Boolean,
}

impl ScalarKind {
    /// Parses a declared schema kind. Returns `None` for anything that is not a scalar.
    #[must_use]
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// Returns the kind name as written in a schema.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Returns the Go type used for this kind.
    #[must_use]
    pub const fn go_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "float64",
            Self::Boolean => "bool",
        }
    }
}

/// A node in the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Scalar value.
    Scalar(ScalarKind),
    /// Object with named, ordered fields.
    Object(ObjectNode),
    /// Array of a single element kind.
    Array(Box<SchemaNode>),
}

impl SchemaNode {
    /// Returns true if this node is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns the object node, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// Object node.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    /// Object name: the root identifier for the root, otherwise the field
    /// name that introduced the object.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldNode>,
}

impl ObjectNode {
    /// Creates an empty object node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping declaration order.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateField` if the name is already present.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        node: SchemaNode,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        if self.has_field(&name) {
            return Err(SchemaError::DuplicateField {
                object: self.name.clone(),
                field: name,
            });
        }
        self.fields.push(FieldNode { name, node });
        Ok(())
    }

    /// Returns true if a field with the given name exists.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Gets a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldNode> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Counts this object and every object nested below it.
    #[must_use]
    pub fn object_count(&self) -> usize {
        fn count(node: &SchemaNode) -> usize {
            match node {
                SchemaNode::Scalar(_) => 0,
                SchemaNode::Object(object) => object.object_count(),
                SchemaNode::Array(element) => count(element),
            }
        }

        1 + self.fields.iter().map(|f| count(&f.node)).sum::<usize>()
    }
}

/// A named field inside an object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    /// Property key exactly as written in the schema.
    pub name: String,
    /// Field schema.
    pub node: SchemaNode,
}

/// A parsed schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Declared root identifier, e.g. `GuidebookConfitSchema`.
    pub root_identifier: String,
    /// Root object. Its name equals the root identifier.
    pub root: ObjectNode,
}

impl Schema {
    /// Creates a schema from a root object.
    #[must_use]
    pub fn new(root: ObjectNode) -> Self {
        Self {
            root_identifier: root.name.clone(),
            root,
        }
    }
}
