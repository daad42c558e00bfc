//! TypeScript Printer
//!
//! Serializes synthesized statements into TypeScript source. Statements are
//! printed in the order given; the printer never reorders or splits them.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::PrimitiveKind;
use crate::synth::{Field, Statement, TypeDeclaration, TypeRef};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Layout options for printed declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Spaces per indentation level inside interface bodies
    pub indent: usize,
    /// Prefix interfaces with `export`
    pub export: bool,
    /// Emit `/** ... */` comments from schema descriptions
    pub docs: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            export: true,
            docs: false,
        }
    }
}

/// Print all statements into one TypeScript source string
pub fn print(statements: &[Statement], options: &PrintOptions) -> String {
    let mut output = String::new();

    for statement in statements {
        match statement {
            Statement::Declaration(declaration) => print_declaration(&mut output, declaration, options),
            Statement::Field(field) => print_field(&mut output, field, "", options),
        }
    }

    output
}

fn print_declaration(output: &mut String, declaration: &TypeDeclaration, options: &PrintOptions) {
    if options.docs {
        if let Some(ref description) = declaration.description {
            print_doc(output, description, "");
        }
    }

    if options.export {
        output.push_str("export ");
    }
    output.push_str(&format!("interface {} {{\n", declaration.name));

    let indent = " ".repeat(options.indent);
    for field in &declaration.fields {
        print_field(output, field, &indent, options);
    }

    output.push_str("}\n");
}

fn print_field(output: &mut String, field: &Field, indent: &str, options: &PrintOptions) {
    if options.docs {
        if let Some(ref description) = field.description {
            print_doc(output, description, indent);
        }
    }

    output.push_str(&format!(
        "{}{}: {};\n",
        indent,
        property_key(&field.name),
        render_type(&field.ty)
    ));
}

fn print_doc(output: &mut String, text: &str, indent: &str) {
    let text = text.replace("*/", "*\\/");
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    if lines.len() <= 1 {
        output.push_str(&format!("{}/** {} */\n", indent, text.trim()));
        return;
    }

    output.push_str(&format!("{}/**\n", indent));
    for line in lines {
        if line.is_empty() {
            output.push_str(&format!("{} *\n", indent));
        } else {
            output.push_str(&format!("{} * {}\n", indent, line));
        }
    }
    output.push_str(&format!("{} */\n", indent));
}

/// Property key, quoted when it is not a plain identifier
pub fn property_key(name: &str) -> String {
    if IDENTIFIER.is_match(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Render a type reference in TypeScript syntax
pub fn render_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive(PrimitiveKind::String) => "string".to_string(),
        TypeRef::Primitive(PrimitiveKind::Number) => "number".to_string(),
        TypeRef::StringUnion(values) if values.is_empty() => "never".to_string(),
        TypeRef::StringUnion(values) => values
            .iter()
            .map(|value| string_literal(value))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeRef::Array(element) => format!("{}[]", render_type(element)),
        TypeRef::Any => "any".to_string(),
        TypeRef::Raw(label) => label.clone(),
        TypeRef::Opaque => "object".to_string(),
        TypeRef::Named(name) => name.clone(),
    }
}

// JSON string escaping is valid TypeScript string-literal syntax.
fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
