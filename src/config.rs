//! Configuration management for type generation
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (typegen.toml)
//! - Environment variables (TYPEGEN__*)
//!
//! ## Example config file (typegen.toml):
//! ```toml
//! [input]
//! path = "src/schema/meta/context.yaml"
//!
//! [generate]
//! root_key = "context"
//! banner = true
//!
//! [output]
//! path = "tools/typescript/output/src/context.ts"
//! indent = 4
//! export = true
//! docs = false
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::codegen::{GenerateOptions, DEFAULT_ROOT_KEY};
use crate::error::Result;
use crate::printer::PrintOptions;

/// Main configuration for type generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypegenConfig {
    /// Schema document settings
    #[serde(default)]
    pub input: InputConfig,

    /// Generation settings
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the schema document (YAML or JSON)
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    /// JSON pointer to the mapping holding the entries
    #[serde(default)]
    pub pointer: Option<String>,
}

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Entry the document must define as an object
    #[serde(default = "default_root_key")]
    pub root_key: String,

    /// Prepend a "do not edit" banner naming the input file
    #[serde(default = "default_true")]
    pub banner: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated TypeScript file
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Export generated interfaces
    #[serde(default = "default_true")]
    pub export: bool,

    /// Emit doc comments from schema descriptions
    #[serde(default)]
    pub docs: bool,
}

// Default value functions
fn default_input_path() -> PathBuf {
    PathBuf::from("src/schema/meta/context.yaml")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("tools/typescript/output/src/context.ts")
}

fn default_root_key() -> String {
    DEFAULT_ROOT_KEY.to_string()
}

fn default_indent() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            pointer: None,
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            root_key: default_root_key(),
            banner: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            indent: default_indent(),
            export: true,
            docs: false,
        }
    }
}

impl TypegenConfig {
    /// Load configuration, layering an explicit file over the default locations
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = ["typegen.toml", ".typegen.toml", "config/typegen.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "schema-typegen") {
            let xdg_config = config_dir.config_dir().join("typegen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // Load from environment variables (TYPEGEN__SECTION__KEY)
        builder = builder.add_source(
            Environment::with_prefix("TYPEGEN")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Options for one generation run
    pub fn generate_options(&self) -> GenerateOptions {
        let banner = self.generate.banner.then(|| {
            let source = self
                .input
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.input.path.display().to_string());
            format!("Generated from {} - DO NOT EDIT", source)
        });

        GenerateOptions {
            root_key: self.generate.root_key.clone(),
            pointer: self.input.pointer.clone(),
            banner,
            print: PrintOptions {
                indent: self.output.indent,
                export: self.output.export,
                docs: self.output.docs,
            },
        }
    }
}
