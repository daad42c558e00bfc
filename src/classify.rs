//! Schema Node Classification
//!
//! Inspects a raw property definition (`{ type, enum?, items?, properties? }`)
//! once and turns it into a closed [`SchemaNode`]. Everything downstream
//! matches on the node instead of re-reading the raw JSON.
//!
//! Classification is total: shapes it cannot interpret become
//! [`SchemaNode::Opaque`] rather than failing the run.

use serde_json::{Map, Value};

// =============================================================================
// Kinds
// =============================================================================

/// Target primitive kinds. Schema `integer` and `number` collapse into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Number,
}

impl PrimitiveKind {
    /// Map a schema `type` label onto a primitive kind
    pub fn from_json_type(type_str: &str) -> Option<Self> {
        match type_str {
            "string" => Some(Self::String),
            "integer" | "number" => Some(Self::Number),
            _ => None,
        }
    }
}

/// Element kind of an array node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// No `items.type` declared
    Any,
    /// `items.type` is a known primitive label
    Primitive(PrimitiveKind),
    /// Any other `items.type` label, passed through untouched
    Raw(String),
}

// =============================================================================
// Schema Node
// =============================================================================

/// Classified shape of a single property definition
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode<'a> {
    /// `{"type": "string"}`, `{"type": "integer"}`, `{"type": "number"}`
    Primitive(PrimitiveKind),

    /// `{"type": "string", "enum": [...]}`
    EnumString { values: Vec<String> },

    /// `{"type": "array", "items"?: {"type"?: ...}}`
    Array { element: ElementKind },

    /// `{"type": "object", "properties": {...}}`, possibly with no properties
    Object { properties: &'a Map<String, Value> },

    /// Object without `properties`, or anything unrecognized
    Opaque,
}

impl SchemaNode<'_> {
    /// True for objects that declare at least one property
    pub fn has_properties(&self) -> bool {
        matches!(self, SchemaNode::Object { properties } if !properties.is_empty())
    }
}

/// Classify a raw schema definition.
pub fn classify(definition: &Value) -> SchemaNode<'_> {
    let json_type = definition.get("type").and_then(Value::as_str);

    match json_type {
        Some("string") => match definition.get("enum").and_then(Value::as_array) {
            Some(members) => SchemaNode::EnumString {
                values: enum_values(members),
            },
            None => SchemaNode::Primitive(PrimitiveKind::String),
        },

        Some("integer") | Some("number") => SchemaNode::Primitive(PrimitiveKind::Number),

        Some("array") => {
            let element = match definition
                .get("items")
                .and_then(|items| items.get("type"))
                .and_then(Value::as_str)
            {
                Some(label) => match PrimitiveKind::from_json_type(label) {
                    Some(kind) => ElementKind::Primitive(kind),
                    None => ElementKind::Raw(label.to_string()),
                },
                None => ElementKind::Any,
            };
            SchemaNode::Array { element }
        }

        Some("object") => match definition.get("properties") {
            Some(Value::Object(properties)) => SchemaNode::Object { properties },
            Some(other) => {
                tracing::warn!(properties = %other, "ignoring non-mapping properties");
                SchemaNode::Opaque
            }
            None => SchemaNode::Opaque,
        },

        other => {
            tracing::debug!(json_type = ?other, "unrecognized schema type, using opaque object");
            SchemaNode::Opaque
        }
    }
}

/// Human-readable description attached to a definition, if any
pub fn description(definition: &Value) -> Option<&str> {
    definition
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

// Order and duplicates are kept as declared; only non-strings are dropped.
fn enum_values(members: &[Value]) -> Vec<String> {
    members
        .iter()
        .filter_map(|member| match member.as_str() {
            Some(value) => Some(value.to_string()),
            None => {
                tracing::warn!(member = %member, "dropping non-string enum member");
                None
            }
        })
        .collect()
}
