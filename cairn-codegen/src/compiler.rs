//! The interface every schema target implements.

use cairn_ir::{ContractDefinition, DataType, TypeTable};
use serde::Serialize;

use crate::Result;

/// Settings for whole-document compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Version string written to the document's `info` block.
    pub api_version: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            api_version: "0.0.0".to_string(),
        }
    }
}

/// A schema target (JSON Schema, OpenAPI 2, OpenAPI 3...).
///
/// Implementations are pure: compiling never mutates the contract, so a
/// compiler can be shared across threads and invoked concurrently.
pub trait SchemaCompiler {
    /// Schema node produced for a single type.
    type Schema: Serialize;
    /// Document produced for a whole contract.
    type Document: Serialize;

    /// Target identifier (e.g., "json-schema", "openapi2").
    fn target(&self) -> &'static str;

    /// Compile a single type.
    fn type_schema(&self, table: &TypeTable, ty: &DataType) -> Result<Self::Schema>;

    /// Compile a whole contract into a document.
    fn document(
        &self,
        contract: &ContractDefinition,
        options: &DocumentOptions,
    ) -> Result<Self::Document>;
}
