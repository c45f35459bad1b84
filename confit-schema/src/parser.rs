//! Confit schema parser.
//!
//! Decodes a JSON schema document into the [`Schema`] model. The document is
//! first read into a loose serde representation (so JSON shape errors carry a
//! path and line/column), then checked node by node.

use crate::error::SchemaError;
use crate::types::{ObjectNode, ScalarKind, Schema, SchemaNode};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Schema node as it appears on the wire.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type", default)]
    kind: Option<serde_json::Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, deserialize_with = "ordered_properties")]
    properties: Option<Vec<(String, RawNode)>>,
    #[serde(default, deserialize_with = "single_items")]
    items: Option<Box<RawNode>>,
}

/// Whole document. Only a JSON object is accepted at the top level.
struct RawDocument(RawNode);

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NodeVisitor).map(RawDocument)
    }
}

/// Parses a confit schema from raw bytes.
///
/// # Arguments
/// * `bytes` - JSON schema document
///
/// # Returns
/// Parsed schema or schema error.
///
/// # Errors
/// Returns `SchemaError` if the JSON is malformed, the root is not a titled
/// object, or any node declares an unsupported or incomplete kind.
pub fn parse_schema(bytes: &[u8]) -> Result<Schema, SchemaError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let RawDocument(raw) = serde_path_to_error::deserialize(&mut de)?;
    de.end().map_err(|source| SchemaError::Json {
        path: ".".to_string(),
        source,
    })?;

    let kind = declared_kind(&raw, "")
        .map_err(|_| SchemaError::invalid_root("root must declare `\"type\": \"object\"`"))?;
    if kind != "object" {
        return Err(SchemaError::invalid_root(format!(
            "root must be an object, found `{kind}`"
        )));
    }

    let identifier = match raw.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => {
            return Err(SchemaError::invalid_root(
                "root object must carry a `title` root identifier",
            ));
        }
    };

    let root = convert_object(raw, identifier, "")?;
    tracing::debug!(
        root = %root.name,
        fields = root.fields.len(),
        objects = root.object_count(),
        "parsed schema"
    );

    Ok(Schema::new(root))
}

/// Parses a confit schema from a string.
///
/// # Errors
/// See [`parse_schema`].
pub fn parse_schema_str(json: &str) -> Result<Schema, SchemaError> {
    parse_schema(json.as_bytes())
}

/// Converts one raw node found at `path`. `name` is the field name that
/// introduced it and becomes the object name for nested objects.
fn convert_node(raw: RawNode, name: &str, path: &str) -> Result<SchemaNode, SchemaError> {
    let kind = declared_kind(&raw, path)?;

    match kind.as_str() {
        "object" => convert_object(raw, name.to_string(), path).map(SchemaNode::Object),
        "array" => {
            let items = raw.items.ok_or_else(|| {
                SchemaError::invalid_structure(path, "array requires a single `items` schema")
            })?;
            let element = convert_node(*items, name, &format!("{path}[]"))?;
            Ok(SchemaNode::Array(Box::new(element)))
        }
        other => ScalarKind::parse(other)
            .map(SchemaNode::Scalar)
            .ok_or_else(|| SchemaError::unsupported_kind(path, other)),
    }
}

fn convert_object(raw: RawNode, name: String, path: &str) -> Result<ObjectNode, SchemaError> {
    let mut object = ObjectNode::new(name);

    for (key, child) in raw.properties.unwrap_or_default() {
        let child_path = field_path(path, &key);
        let node = convert_node(child, &key, &child_path)?;
        object.add_field(key, node)?;
    }

    Ok(object)
}

/// Reads the `type` keyword of a node as a string.
fn declared_kind(raw: &RawNode, path: &str) -> Result<String, SchemaError> {
    match &raw.kind {
        Some(serde_json::Value::String(kind)) => Ok(kind.clone()),
        Some(other) => Err(SchemaError::unsupported_kind(path, other.to_string())),
        None => Err(SchemaError::invalid_structure(path, "missing `type` keyword")),
    }
}

/// Joins a parent path and a field name with a dot.
fn field_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Accepts a node only when it is written as a JSON object. Derived struct
/// impls would also take a positional array, which is never a schema node.
struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = RawNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a schema node object")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        RawNode::deserialize(de::value::MapAccessDeserializer::new(map))
    }
}

impl<'de> DeserializeSeed<'de> for NodeVisitor {
    type Value = RawNode;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

fn single_items<'de, D>(deserializer: D) -> Result<Option<Box<RawNode>>, D::Error>
where
    D: Deserializer<'de>,
{
    NodeVisitor
        .deserialize(deserializer)
        .map(|node| Some(Box::new(node)))
}

/// Deserializes `properties` keeping document order and every entry, so
/// repeated keys reach the model instead of being silently overwritten.
fn ordered_properties<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<(String, RawNode)>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PropertiesVisitor;

    impl<'de> Visitor<'de> for PropertiesVisitor {
        type Value = Vec<(String, RawNode)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of property schemas")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(key) = map.next_key::<String>()? {
                let node = map.next_value_seed(NodeVisitor)?;
                out.push((key, node));
            }
            Ok(out)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(PropertiesVisitor).map(Some)
}
