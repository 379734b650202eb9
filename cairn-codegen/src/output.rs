//! Text rendering of compiled documents.

use std::str::FromStr;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while rendering a document to text.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("failed to render JSON")]
    #[diagnostic(code(cairn::render_json))]
    Json(#[from] serde_json::Error),

    #[error("failed to render YAML")]
    #[diagnostic(code(cairn::render_yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown output format '{name}'")]
    #[diagnostic(code(cairn::unknown_format), help("valid formats are: json, yaml"))]
    UnknownFormat { name: String },
}

/// Text format of a rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// File extension for documents in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yml",
        }
    }

    /// Render a value as text.
    ///
    /// Fields skipped during serialization (absent optionals) never appear
    /// in either format.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, RenderError> {
        Ok(match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        })
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(RenderError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}
