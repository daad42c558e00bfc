//! Code Generation
//!
//! Entry point that turns a whole schema document into TypeScript source.
//!
//! The document must contain a root entry (default `context`) describing an
//! object; without it generation is refused. Every entry of the document is
//! then synthesized and printed, not only the root one.

use serde_json::Value;

use crate::error::{Result, TypegenError};
use crate::printer::{self, PrintOptions};
use crate::synth::{self, Statement};

/// Default root entry a document must define
pub const DEFAULT_ROOT_KEY: &str = "context";

/// Options for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Entry that must exist and be an object
    pub root_key: String,
    /// JSON pointer selecting the sub-document holding the entries (e.g. `/meta`)
    pub pointer: Option<String>,
    /// Comment line placed above the generated code
    pub banner: Option<String>,
    /// Printer layout
    pub print: PrintOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root_key: DEFAULT_ROOT_KEY.to_string(),
            pointer: None,
            banner: None,
            print: PrintOptions::default(),
        }
    }
}

/// Output from code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// Generated code as a string
    pub code: String,
    /// Number of interfaces emitted
    pub declaration_count: usize,
    /// Number of free-standing field signatures emitted
    pub field_count: usize,
}

/// Generate TypeScript declarations for a schema document
pub fn generate(document: &Value, options: &GenerateOptions) -> Result<GeneratedOutput> {
    let missing_root = || TypegenError::MissingRoot {
        key: options.root_key.clone(),
    };

    let selected = match options.pointer.as_deref() {
        Some(pointer) => document.pointer(pointer).ok_or_else(missing_root)?,
        None => document,
    };

    let entries = selected.as_object().ok_or_else(missing_root)?;
    let has_root = entries
        .get(&options.root_key)
        .and_then(|root| root.get("type"))
        .and_then(Value::as_str)
        == Some("object");
    if !has_root {
        return Err(missing_root());
    }

    let statements = synth::generate(entries);
    let declaration_count = statements
        .iter()
        .filter(|s| matches!(s, Statement::Declaration(_)))
        .count();
    let field_count = statements.len() - declaration_count;

    let mut code = String::new();
    if let Some(ref banner) = options.banner {
        for line in banner.lines() {
            code.push_str(&format!("// {}\n", line));
        }
        code.push('\n');
    }
    code.push_str(&printer::print(&statements, &options.print));

    tracing::info!(
        root = %options.root_key,
        declarations = declaration_count,
        fields = field_count,
        "generated type declarations"
    );

    Ok(GeneratedOutput {
        code,
        declaration_count,
        field_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context_document() -> Value {
        json!({
            "context": {
                "type": "object",
                "properties": {
                    "suffix": { "type": "string" },
                    "dataset": {
                        "type": "object",
                        "properties": { "ignored": { "type": "array" } }
                    }
                }
            }
        })
    }

    #[test]
    fn test_generate_context() {
        let output = generate(&context_document(), &GenerateOptions::default()).unwrap();

        assert_eq!(
            output.code,
            "export interface ContextDataset {\n    ignored: any[];\n}\n\
             export interface Context {\n    suffix: string;\n    dataset: ContextDataset;\n}\n"
        );
        assert_eq!(output.declaration_count, 2);
        assert_eq!(output.field_count, 0);
    }

    #[test]
    fn test_generate_with_banner() {
        let options = GenerateOptions {
            banner: Some("Generated from context.yaml - DO NOT EDIT".to_string()),
            ..Default::default()
        };
        let output = generate(&context_document(), &options).unwrap();

        assert!(output.code.starts_with("// Generated from context.yaml - DO NOT EDIT\n\nexport interface"));
    }

    #[test]
    fn test_generate_with_pointer() {
        let document = json!({ "meta": context_document() });
        let options = GenerateOptions {
            pointer: Some("/meta".to_string()),
            ..Default::default()
        };

        assert_eq!(generate(&document, &options).unwrap().declaration_count, 2);
    }

    #[test]
    fn test_missing_root_is_refused() {
        let documents = [
            json!({ "other": { "type": "object", "properties": {} } }),
            json!({ "context": { "type": "string" } }),
            json!(["context"]),
        ];

        for document in &documents {
            match generate(document, &GenerateOptions::default()) {
                Err(TypegenError::MissingRoot { key }) => assert_eq!(key, "context"),
                other => panic!("Expected MissingRoot, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_missing_pointer_target_is_refused() {
        let options = GenerateOptions {
            pointer: Some("/meta".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            generate(&context_document(), &options),
            Err(TypegenError::MissingRoot { .. })
        ));
    }

    #[test]
    fn test_root_without_properties_is_accepted() {
        let document = json!({ "context": { "type": "object" }, "n_cols": { "type": "integer" } });
        let output = generate(&document, &GenerateOptions::default()).unwrap();

        assert_eq!(output.code, "context: object;\nn_cols: number;\n");
        assert_eq!(output.declaration_count, 0);
        assert_eq!(output.field_count, 2);
    }
}
