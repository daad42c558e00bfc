//! Schema Document Loading
//!
//! Reads YAML or JSON schema documents into order-preserving
//! `serde_json::Value` trees.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TypegenError};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse an in-memory document
pub fn parse_document(text: &str, format: Format) -> Result<Value> {
    let document: Value = match format {
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Json => serde_json::from_str(text)?,
    };
    Ok(document)
}

/// Load a schema document from disk
pub fn load_document(path: &Path) -> Result<Value> {
    let format = Format::from_path(path).ok_or_else(|| TypegenError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading schema document");
    parse_document(&text, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("meta/context.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("context.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("context.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("context.toml")), None);
        assert_eq!(Format::from_path(Path::new("context")), None);
    }

    #[test]
    fn test_yaml_preserves_key_order() {
        let text = "zeta:\n  type: string\nalpha:\n  type: integer\nmid:\n  type: array\n";
        let document = parse_document(text, Format::Yaml).unwrap();
        let keys: Vec<_> = document.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_json_preserves_key_order() {
        let text = r#"{"b": {"type": "string"}, "a": {"type": "string"}}"#;
        let document = parse_document(text, Format::Json).unwrap();
        let keys: Vec<_> = document.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_load_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.yaml");
        fs::write(&path, "context:\n  type: object\n").unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document["context"]["type"], "object");
    }

    #[test]
    fn test_unsupported_extension() {
        match load_document(&PathBuf::from("schema.toml")) {
            Err(TypegenError::UnsupportedFormat(path)) => assert_eq!(path, PathBuf::from("schema.toml")),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(matches!(
            parse_document("context: [unclosed", Format::Yaml),
            Err(TypegenError::Yaml(_))
        ));
    }
}
