//! Contract Intermediate Representation.
//!
//! A [`ContractDefinition`] is the unit every compiler and the differ operate
//! on: API metadata, the endpoints and the table of named types they refer to.
//!
//! # Architecture
//!
//! ```text
//! annotated source → parser → ContractDefinition → schema compilers / differ
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DataType, TypeTable};

/// A complete API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDefinition {
    pub api: ApiDefinition,
    #[serde(default)]
    pub config: ContractConfig,
    #[serde(default)]
    pub endpoints: Vec<EndpointDefinition>,
    #[serde(default)]
    pub types: TypeTable,
}

impl ContractDefinition {
    /// Get an endpoint by name.
    pub fn endpoint(&self, name: &str) -> Option<&EndpointDefinition> {
        self.endpoints.iter().find(|endpoint| endpoint.name == name)
    }
}

/// API metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_header: Option<SecurityHeader>,
}

/// Header carrying the API credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityHeader {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: DataType,
}

/// Contract-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// How array-valued query parameters are serialized.
    #[serde(default)]
    pub query_array_strategy: QueryArrayStrategy,
}

/// Serialization of array-valued query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryArrayStrategy {
    /// `?id=1&id=2`
    #[default]
    Ampersand,
    /// `?id=1,2`
    Comma,
}

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Get the lowercase method name, as used for OpenAPI path item keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// A segment of an endpoint path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PathComponent {
    /// Literal segment text, including any slashes.
    Static(String),
    /// Named path parameter.
    Dynamic(String),
}

/// An API endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDefinition {
    /// Stable identity of the endpoint across contract versions.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub method: HttpMethod,
    pub path: Vec<PathComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_response: Option<DefaultResponse>,
    #[serde(default)]
    pub draft: bool,
}

impl EndpointDefinition {
    /// Render the path with `{param}` placeholders (e.g., `/users/{id}`).
    pub fn path_template(&self) -> String {
        self.path
            .iter()
            .map(|component| match component {
                PathComponent::Static(value) => value.clone(),
                PathComponent::Dynamic(name) => format!("{{{}}}", name),
            })
            .collect()
    }

    /// Get the request body, if any.
    pub fn request_body(&self) -> Option<&Body> {
        self.request.as_ref().and_then(|request| request.body.as_ref())
    }

    /// Get the response declared for a status code.
    pub fn response(&self, status: u16) -> Option<&Response> {
        self.responses
            .iter()
            .find(|response| response.status == status)
    }

    /// Iterate over every body declared by the endpoint, labelled for
    /// diagnostics (`request`, `response[200]`, `response[default]`).
    pub fn bodies(&self) -> Vec<(String, &Body)> {
        let mut bodies = Vec::new();
        if let Some(body) = self.request_body() {
            bodies.push(("request".to_string(), body));
        }
        for response in &self.responses {
            if let Some(body) = &response.body {
                bodies.push((format!("response[{}]", response.status), body));
            }
        }
        if let Some(body) = self
            .default_response
            .as_ref()
            .and_then(|response| response.body.as_ref())
        {
            bodies.push(("response[default]".to_string(), body));
        }
        bodies
    }
}

/// An endpoint request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub path_params: Vec<PathParam>,
    #[serde(default)]
    pub query_params: Vec<QueryParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: DataType,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: DataType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: DataType,
    #[serde(default)]
    pub optional: bool,
}

/// A request or response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(rename = "type")]
    pub ty: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Body {
    pub fn new(ty: DataType) -> Self {
        Self {
            ty,
            description: None,
        }
    }
}

/// A response for a specific status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// The fallback response for undeclared status codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}
