//! Output targets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Document a contract is compiled to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Target {
    /// Draft-07 JSON Schema holding every named type
    #[serde(rename = "json-schema")]
    JsonSchema,
    /// Swagger 2.0
    #[serde(rename = "openapi2")]
    OpenApi2,
    /// OpenAPI 3.0.0
    #[default]
    #[serde(rename = "openapi3")]
    OpenApi3,
}

impl Target {
    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::JsonSchema => "json-schema",
            Target::OpenApi2 => "openapi2",
            Target::OpenApi3 => "openapi3",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json-schema" | "jsonschema" => Ok(Target::JsonSchema),
            "openapi2" | "swagger" => Ok(Target::OpenApi2),
            "openapi3" => Ok(Target::OpenApi3),
            _ => Err(format!(
                "unknown target '{}', expected 'json-schema', 'openapi2' or 'openapi3'",
                s
            )),
        }
    }
}
