//! Document-level pieces shared by the OpenAPI targets.

use cairn_ir::{Body, ContractDefinition, TypeTable, resolve_type};
use indexmap::IndexMap;
use serde::Serialize;

use crate::{DocumentOptions, ResolveResultExt, Result, TypePath};

/// Key the security header scheme is registered under.
pub const SECURITY_SCHEME_NAME: &str = "SecurityHeader";

/// The `info` block of an OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
}

impl ApiInfo {
    pub fn new(contract: &ContractDefinition, options: &DocumentOptions) -> Self {
        Self {
            title: contract.api.name.clone(),
            description: contract.api.description.clone(),
            version: options.api_version.clone(),
        }
    }
}

/// An API key passed in a request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyScheme {
    #[serde(rename = "type")]
    pub ty: &'static str,
    #[serde(rename = "in")]
    pub location: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Security requirement list referencing registered schemes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Build the security scheme map and document-wide requirement for the
/// contract's security header, if it declares one.
pub fn security_header_scheme(
    contract: &ContractDefinition,
) -> Option<(IndexMap<String, ApiKeyScheme>, Vec<SecurityRequirement>)> {
    let header = contract.api.security_header.as_ref()?;
    let scheme = ApiKeyScheme {
        ty: "apiKey",
        location: "header",
        name: header.name.clone(),
        description: header.description.clone(),
    };
    let schemes = IndexMap::from([(SECURITY_SCHEME_NAME.to_string(), scheme)]);
    let requirement = IndexMap::from([(SECURITY_SCHEME_NAME.to_string(), Vec::new())]);
    Some((schemes, vec![requirement]))
}

/// Description of a response, falling back to one derived from its status.
pub fn response_description(description: Option<&String>, status: Option<u16>) -> String {
    match (description, status) {
        (Some(description), _) => description.clone(),
        (None, Some(status)) => format!("{} response", status),
        (None, None) => "default response".to_string(),
    }
}

/// A body that carries content.
///
/// Returns `Ok(None)` when there is no body or the body resolves to `null`.
pub fn body_content<'a>(
    table: &TypeTable,
    body: Option<&'a Body>,
    path: &TypePath,
) -> Result<Option<&'a Body>> {
    let Some(body) = body else {
        return Ok(None);
    };
    if resolve_type(&body.ty, table).at(path)?.is_null() {
        return Ok(None);
    }
    Ok(Some(body))
}
