//! Compile API contracts to JSON Schema and OpenAPI documents.
//!
//! This crate ties the Cairn compilers together:
//!
//! - [`Target`] - which document to produce
//! - [`GeneratorConfig`] - target, text format and API version, read from TOML
//! - [`generate`] - compile a contract and render it as text
//!
//! The IR, the shared codegen layer, each target and the differ are
//! re-exported for callers that need the typed documents.
//!
//! # Example
//!
//! ```ignore
//! let config: GeneratorConfig = r#"
//! target = "openapi2"
//! format = "yaml"
//! api_version = "1.0.0"
//! "#.parse()?;
//! let text = cairn::generate(&contract, &config)?;
//! ```

#![allow(unused_assignments)]

mod config;
mod error;
mod generate;
mod target;

pub use cairn_codegen as codegen;
pub use cairn_codegen_jsonschema as jsonschema;
pub use cairn_codegen_openapi2 as openapi2;
pub use cairn_codegen_openapi3 as openapi3;
pub use cairn_diff as diff;
pub use cairn_ir as ir;
pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use generate::{generate, generate_type};
pub use target::Target;
