//! Generator configuration.

use std::str::FromStr;

use cairn_codegen::{DocumentOptions, OutputFormat};
use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};

use crate::{GenerateError, Target};

/// What to generate from a contract.
///
/// ```toml
/// target = "openapi3"
/// format = "yaml"
/// api_version = "1.4.0"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub target: Target,
    pub format: OutputFormat,
    /// Version written to the document's `info` block.
    pub api_version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: Target::default(),
            format: OutputFormat::default(),
            api_version: DocumentOptions::default().api_version,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self, GenerateError> {
        toml::from_str(content).map_err(|source| GenerateError::Config {
            src: NamedSource::new(filename, content.to_string()),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            api_version: self.api_version.clone(),
        }
    }
}

impl FromStr for GeneratorConfig {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_filename(s, "cairn.toml")
    }
}
