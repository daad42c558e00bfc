//! Schema Type Generator
//!
//! Compiles a nested property schema into TypeScript interface declarations.
//!
//! ## Pipeline
//!
//! ```text
//! schema document ─► classify ─► synth ─► printer ─► TypeScript source
//!                   (SchemaNode)  (Statement list,
//!                                  children first)
//! ```
//!
//! - **classify**: turns each raw definition into a closed [`SchemaNode`]
//! - **names**: derives declaration names from property paths
//! - **synth**: produces declarations in dependency order
//! - **printer**: renders the statements as TypeScript
//! - **codegen**: whole-document entry point with the root-entry check
//! - **output**: writing generated files and drift checks
//!
//! ```
//! use schema_typegen::{generate, GenerateOptions};
//! use serde_json::json;
//!
//! let document = json!({
//!     "context": {
//!         "type": "object",
//!         "properties": { "suffix": { "type": "string" } }
//!     }
//! });
//! let output = generate(&document, &GenerateOptions::default()).unwrap();
//! assert_eq!(output.code, "export interface Context {\n    suffix: string;\n}\n");
//! ```
//!
//! ## Known limitation
//!
//! Declaration names are neither deduplicated nor validated:
//!
//! - Distinct paths that flatten to the same identifier (`a_b.c` and `a.b_c`)
//!   yield two declarations sharing a name.
//! - Only `_` is treated as a separator. Other characters are kept, so a nested
//!   key such as `dim-info` produces `interface ContextDim-info`, which is not
//!   valid TypeScript. Field keys are quoted; declaration names are not.
//! - A key made only of underscores adds nothing to the name, so its object is
//!   declared under its parent's name.
//!
//! Schemas meant for this generator should use snake_case identifier keys for
//! nested objects.

pub mod classify;
pub mod codegen;
pub mod config;
pub mod error;
pub mod loader;
pub mod names;
pub mod output;
pub mod printer;
pub mod synth;

pub use classify::{classify, ElementKind, PrimitiveKind, SchemaNode};
pub use codegen::{generate, GenerateOptions, GeneratedOutput};
pub use config::TypegenConfig;
pub use error::{Result, TypegenError};
pub use names::{derive_name, NamePath};
pub use printer::{print, PrintOptions};
pub use synth::{synthesize, Field, Statement, Synthesized, TypeDeclaration, TypeRef};
