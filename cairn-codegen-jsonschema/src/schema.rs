//! JSON Schema (draft-07) nodes.

use cairn_codegen::SchemaType;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Identifier of the JSON Schema dialect documents are written in.
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// A JSON Schema node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSchema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<SchemaType>,
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, JsonSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<JsonSchema>>,
}

impl JsonSchema {
    /// A schema with only a `type`.
    pub fn typed(ty: SchemaType) -> Self {
        Self {
            ty: Some(ty),
            ..Default::default()
        }
    }

    /// A `$ref` to a named definition.
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("#/definitions/{}", name)),
            ..Default::default()
        }
    }

    /// Attach a description unless this is a `$ref`, whose siblings are ignored.
    pub(crate) fn describe(mut self, description: Option<&String>) -> Self {
        if self.reference.is_none() {
            self.description = description.cloned();
        }
        self
    }
}

/// A self-contained JSON Schema document holding every named type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSchemaDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub definitions: IndexMap<String, JsonSchema>,
}
