//! Comparison results.

use std::fmt;

use cairn_ir::TypeKind;
use serde::Serialize;
use serde_json::Value;

/// Differences between two versions of a contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractDiff {
    /// Endpoints only in the newer contract, in its declaration order.
    pub added_endpoints: Vec<String>,
    /// Endpoints only in the older contract, in its declaration order.
    pub removed_endpoints: Vec<String>,
    /// Endpoints in both contracts whose bodies differ.
    pub changed_endpoints: Vec<EndpointDiff>,
}

impl ContractDiff {
    pub fn is_empty(&self) -> bool {
        self.added_endpoints.is_empty()
            && self.removed_endpoints.is_empty()
            && self.changed_endpoints.is_empty()
    }

    /// Get the changes to an endpoint, if it changed.
    pub fn endpoint(&self, name: &str) -> Option<&EndpointDiff> {
        self.changed_endpoints
            .iter()
            .find(|endpoint| endpoint.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointDiff {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BodyDiff>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<ResponseDiff>,
}

impl EndpointDiff {
    pub fn is_empty(&self) -> bool {
        self.request.is_none() && self.responses.is_empty()
    }
}

/// Identifies a response: a status code or the default response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKey {
    Status(u16),
    Default,
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseKey::Status(status) => write!(f, "{}", status),
            ResponseKey::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum ResponseDiff {
    Added { key: ResponseKey },
    Removed { key: ResponseKey },
    Changed { key: ResponseKey, body: BodyDiff },
}

impl ResponseDiff {
    pub fn key(&self) -> ResponseKey {
        match self {
            ResponseDiff::Added { key }
            | ResponseDiff::Removed { key }
            | ResponseDiff::Changed { key, .. } => *key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", content = "diff", rename_all = "lowercase")]
pub enum BodyDiff {
    Added,
    Removed,
    Changed(TypeDiff),
}

impl BodyDiff {
    /// Get the type changes of a body present on both sides.
    pub fn type_diff(&self) -> Option<&TypeDiff> {
        match self {
            BodyDiff::Changed(diff) => Some(diff),
            BodyDiff::Added | BodyDiff::Removed => None,
        }
    }
}

/// A structural change to a type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum TypeDiff {
    /// The type became a different kind of type altogether.
    Kind { before: TypeKind, after: TypeKind },
    /// A literal type now holds another value.
    Literal { before: Value, after: Value },
    Object(ObjectDiff),
    /// The element type of an array changed.
    Array { elements: Box<TypeDiff> },
    Union(UnionDiff),
}

impl TypeDiff {
    pub fn as_object(&self) -> Option<&ObjectDiff> {
        match self {
            TypeDiff::Object(diff) => Some(diff),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectDiff {
    pub added_properties: Vec<String>,
    pub removed_properties: Vec<String>,
    pub changed_properties: Vec<PropertyDiff>,
}

impl ObjectDiff {
    pub fn is_empty(&self) -> bool {
        self.added_properties.is_empty()
            && self.removed_properties.is_empty()
            && self.changed_properties.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDiff {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optionality: Option<OptionalityChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_diff: Option<TypeDiff>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionalityChange {
    BecameOptional,
    BecameRequired,
}

/// Union members added, removed or changed, identified by their rendered type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnionDiff {
    pub added_members: Vec<String>,
    pub removed_members: Vec<String>,
    pub changed_members: Vec<MemberDiff>,
}

impl UnionDiff {
    pub fn is_empty(&self) -> bool {
        self.added_members.is_empty()
            && self.removed_members.is_empty()
            && self.changed_members.is_empty()
    }
}

/// A member present in both unions whose definition changed, such as a
/// referenced object gaining a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDiff {
    pub member: String,
    pub type_diff: TypeDiff,
}
