//! OpenAPI 3 document model.

use cairn_codegen::{ApiInfo, ApiKeyScheme, SchemaFormat, SchemaType, SecurityRequirement};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// An OpenAPI 3 schema object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi3Schema {
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
    pub nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, OpenApi3Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<OpenApi3Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<OpenApi3Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<OpenApi3Discriminator>,
}

impl OpenApi3Schema {
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

    /// A `$ref` to a component schema.
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(component_ref(name)),
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

pub(crate) fn component_ref(name: &str) -> String {
    format!("#/components/schemas/{}", name)
}

/// Tells a `oneOf` apart by the value of one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi3Discriminator {
    pub property_name: String,
    /// Literal value to component schema `$ref`.
    pub mapping: IndexMap<String, String>,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
}

/// Serialization style of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStyle {
    Form,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi3Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ParameterStyle>,
    /// `true` repeats the parameter per array element, `false` joins them
    /// with commas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    pub schema: OpenApi3Schema,
}

/// The schema of one content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaType {
    pub schema: OpenApi3Schema,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi3RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: IndexMap<String, MediaType>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi3Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    pub schema: OpenApi3Schema,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi3Response {
    pub description: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, OpenApi3Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi3Operation {
    pub operation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<OpenApi3Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<OpenApi3RequestBody>,
    pub responses: IndexMap<String, OpenApi3Response>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi3Components {
    pub schemas: IndexMap<String, OpenApi3Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<IndexMap<String, ApiKeyScheme>>,
}

/// A complete OpenAPI 3.0.0 document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi3Document {
    pub openapi: String,
    pub info: ApiInfo,
    /// Operations keyed by path template, then lowercase method.
    pub paths: IndexMap<String, IndexMap<String, OpenApi3Operation>>,
    pub components: OpenApi3Components,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}
