//! Declaration Synthesis
//!
//! Walks a classified property tree and produces the flat list of record
//! declarations the printer emits.
//!
//! Every recursive call returns its own [`Synthesized`] value: the type
//! reference the parent should use plus the declarations produced underneath.
//! Parents append child declarations before their own, so a declaration is
//! always emitted after everything it references.

use serde_json::{Map, Value};

use crate::classify::{self, ElementKind, PrimitiveKind, SchemaNode};
use crate::names::NamePath;

// =============================================================================
// Data Model
// =============================================================================

/// Type of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    /// Inline union of string literals
    StringUnion(Vec<String>),
    Array(Box<TypeRef>),
    /// Unconstrained element type
    Any,
    /// Type label passed through from the schema
    Raw(String),
    /// Generic structural object
    Opaque,
    /// Reference to an already emitted declaration
    Named(String),
}

impl TypeRef {
    fn from_element(element: &ElementKind) -> Self {
        match element {
            ElementKind::Any => TypeRef::Any,
            ElementKind::Primitive(kind) => TypeRef::Primitive(*kind),
            ElementKind::Raw(label) => TypeRef::Raw(label.clone()),
        }
    }
}

/// A named field with its type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
    pub description: Option<String>,
}

/// One named record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

/// Top-level output item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declaration(TypeDeclaration),
    /// Root entry that is not an object with properties
    Field(Field),
}

/// Result of synthesizing one object node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesized {
    pub type_ref: TypeRef,
    /// Declarations in dependency order; the last one is `type_ref`'s target
    pub declarations: Vec<TypeDeclaration>,
}

// =============================================================================
// Synthesis
// =============================================================================

/// Synthesize declarations for an object with the given properties.
///
/// The returned declarations end with the declaration named after `path`.
pub fn synthesize(path: &NamePath, properties: &Map<String, Value>, description: Option<&str>) -> Synthesized {
    let mut declarations = Vec::new();
    let mut fields = Vec::with_capacity(properties.len());

    for (key, definition) in properties {
        let resolved = resolve_property(path, key, definition);
        declarations.extend(resolved.declarations);
        fields.push(Field {
            name: key.clone(),
            ty: resolved.type_ref,
            description: classify::description(definition).map(String::from),
        });
    }

    let name = path.type_name();
    tracing::debug!(path = %path, name = %name, fields = fields.len(), "synthesized declaration");

    declarations.push(TypeDeclaration {
        name: name.clone(),
        description: description.map(String::from),
        fields,
    });

    Synthesized {
        type_ref: TypeRef::Named(name),
        declarations,
    }
}

/// Resolve the type of one property of the object at `path`.
fn resolve_property(path: &NamePath, key: &str, definition: &Value) -> Synthesized {
    match classify::classify(definition) {
        SchemaNode::Object { properties } if !properties.is_empty() => {
            synthesize(&path.child(key), properties, classify::description(definition))
        }
        node => Synthesized {
            type_ref: inline_type(&node),
            declarations: Vec::new(),
        },
    }
}

/// Field type for nodes that never produce a declaration
fn inline_type(node: &SchemaNode<'_>) -> TypeRef {
    match node {
        SchemaNode::Primitive(kind) => TypeRef::Primitive(*kind),
        SchemaNode::EnumString { values } => TypeRef::StringUnion(values.clone()),
        SchemaNode::Array { element } => TypeRef::Array(Box::new(TypeRef::from_element(element))),
        SchemaNode::Object { .. } | SchemaNode::Opaque => TypeRef::Opaque,
    }
}

/// Generate statements for every entry of a root mapping.
///
/// Entries that are objects with properties yield their declarations (children
/// first); all other entries yield a free-standing field.
pub fn generate(root: &Map<String, Value>) -> Vec<Statement> {
    let mut statements = Vec::new();

    for (key, definition) in root {
        let node = classify::classify(definition);
        match node {
            SchemaNode::Object { properties } if !properties.is_empty() => {
                let synthesized = synthesize(
                    &NamePath::root(key.as_str()),
                    properties,
                    classify::description(definition),
                );
                statements.extend(synthesized.declarations.into_iter().map(Statement::Declaration));
            }
            node => statements.push(Statement::Field(Field {
                name: key.clone(),
                ty: inline_type(&node),
                description: classify::description(definition).map(String::from),
            })),
        }
    }

    statements
}
