//! OpenAPI 2 document model.

use cairn_codegen::{ApiInfo, ApiKeyScheme, SchemaFormat, SchemaType, SecurityRequirement};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// An OpenAPI 2 schema object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpenApi2Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<SchemaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SchemaFormat>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, OpenApi2Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<OpenApi2Schema>>,
    #[serde(rename = "x-nullable", skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
}

impl OpenApi2Schema {
    pub fn typed(ty: SchemaType) -> Self {
        Self {
            ty: Some(ty),
            ..Default::default()
        }
    }

    pub fn formatted(ty: SchemaType, format: SchemaFormat) -> Self {
        Self {
            ty: Some(ty),
            format: Some(format),
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

    pub(crate) fn describe(mut self, description: Option<&String>) -> Self {
        if self.reference.is_none() {
            self.description = description.cloned();
        }
        self
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
}

/// How array query parameters are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFormat {
    /// `?id=1&id=2`
    Multi,
    /// `?id=1,2`
    Csv,
}

/// An operation parameter.
///
/// Non-body parameters carry their type inline; the body parameter carries a
/// `schema`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi2Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(flatten)]
    pub inline: OpenApi2Schema,
    #[serde(rename = "collectionFormat", skip_serializing_if = "Option::is_none")]
    pub collection_format: Option<CollectionFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<OpenApi2Schema>,
}

/// A response header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi2Header {
    #[serde(flatten)]
    pub inline: OpenApi2Schema,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi2Response {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<OpenApi2Schema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, OpenApi2Header>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi2Operation {
    pub operation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Overrides the document-wide `produces` when a response isn't JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<OpenApi2Parameter>,
    pub responses: IndexMap<String, OpenApi2Response>,
}

/// A complete Swagger 2.0 document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi2Document {
    pub swagger: String,
    pub info: ApiInfo,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    /// Operations keyed by path template, then lowercase method.
    pub paths: IndexMap<String, IndexMap<String, OpenApi2Operation>>,
    pub definitions: IndexMap<String, OpenApi2Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_definitions: Option<IndexMap<String, ApiKeyScheme>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}
