//! Shared schema compilation utilities for Cairn.
//!
//! This crate provides the target-agnostic pieces used by the schema
//! compilers (e.g., `cairn-codegen-openapi3`).
//!
//! # Module Organization
//!
//! - [`CompileError`] / [`TypePath`] - fatal compilation errors pointing at the offending type
//! - [`SchemaCompiler`] - the interface every target implements
//! - [`UnionShape`] - classification of the union shapes targets special-case
//! - [`ApiInfo`] / [`security_header_scheme`] - document pieces shared by the OpenAPI targets
//! - [`OutputFormat`] - JSON / YAML rendering of compiled documents
//! - [`lint`] - union-shape lints sharing discriminator inference

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod compiler;
mod content;
mod document;
mod error;
pub mod lint;
mod output;
mod parameter;
mod path;
mod schema;
mod union;

pub use compiler::{DocumentOptions, SchemaCompiler};
pub use content::ContentType;
pub use document::{
    ApiInfo, ApiKeyScheme, SECURITY_SCHEME_NAME, SecurityRequirement, body_content,
    response_description, security_header_scheme,
};
pub use error::{CompileError, ResolveResultExt, Result};
pub use output::{OutputFormat, RenderError};
pub use parameter::ensure_parameter_type;
pub use path::TypePath;
pub use schema::{SchemaFormat, SchemaType, literal_base_type};
pub use union::UnionShape;
