//! Contract type definitions.
//!
//! [`DataType`] is the closed set of shapes a contract can describe. Every
//! consumer matches on it exhaustively, so adding a variant is a compile
//! error everywhere it has to be handled.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A contract type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DataType {
    Null,
    Boolean,
    String,
    Float,
    Double,
    Int32,
    Int64,
    Date,
    DateTime,
    BooleanLiteral {
        value: bool,
    },
    StringLiteral {
        value: String,
    },
    NumberLiteral {
        value: Number,
    },
    /// Object literal. Property order is significant.
    Object {
        properties: Vec<Property>,
    },
    Array {
        elements: Box<DataType>,
    },
    /// Union of alternatives, in declaration order.
    Union {
        types: Vec<DataType>,
    },
    /// Named pointer into the type table.
    Reference(TypeReference),
}

/// The kind of a [`DataType`], without its payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKind {
    Null,
    Boolean,
    String,
    Float,
    Double,
    Int32,
    Int64,
    Date,
    DateTime,
    BooleanLiteral,
    StringLiteral,
    NumberLiteral,
    Object,
    Array,
    Union,
    Reference,
}

impl TypeKind {
    /// Get the kebab-case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Null => "null",
            TypeKind::Boolean => "boolean",
            TypeKind::String => "string",
            TypeKind::Float => "float",
            TypeKind::Double => "double",
            TypeKind::Int32 => "int32",
            TypeKind::Int64 => "int64",
            TypeKind::Date => "date",
            TypeKind::DateTime => "date-time",
            TypeKind::BooleanLiteral => "boolean-literal",
            TypeKind::StringLiteral => "string-literal",
            TypeKind::NumberLiteral => "number-literal",
            TypeKind::Object => "object",
            TypeKind::Array => "array",
            TypeKind::Union => "union",
            TypeKind::Reference => "reference",
        }
    }

    /// Returns true for kinds that serialize as a single scalar value.
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            TypeKind::Object | TypeKind::Array | TypeKind::Union | TypeKind::Reference
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property of an object literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: DataType,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Property {
    /// Create a required property.
    pub fn required(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            description: None,
        }
    }

    /// Create an optional property.
    pub fn optional(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A reference to a named type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
    /// Name of the referenced definition.
    pub name: String,
    /// Source location the reference was declared at.
    #[serde(default)]
    pub location: String,
    /// Kind of the concrete type behind the reference, cached so kind checks
    /// don't need a full resolve.
    pub reference_kind: TypeKind,
}

impl DataType {
    /// Get the kind of this type.
    pub fn kind(&self) -> TypeKind {
        match self {
            DataType::Null => TypeKind::Null,
            DataType::Boolean => TypeKind::Boolean,
            DataType::String => TypeKind::String,
            DataType::Float => TypeKind::Float,
            DataType::Double => TypeKind::Double,
            DataType::Int32 => TypeKind::Int32,
            DataType::Int64 => TypeKind::Int64,
            DataType::Date => TypeKind::Date,
            DataType::DateTime => TypeKind::DateTime,
            DataType::BooleanLiteral { .. } => TypeKind::BooleanLiteral,
            DataType::StringLiteral { .. } => TypeKind::StringLiteral,
            DataType::NumberLiteral { .. } => TypeKind::NumberLiteral,
            DataType::Object { .. } => TypeKind::Object,
            DataType::Array { .. } => TypeKind::Array,
            DataType::Union { .. } => TypeKind::Union,
            DataType::Reference(_) => TypeKind::Reference,
        }
    }

    /// Create an object type from its properties.
    pub fn object(properties: impl IntoIterator<Item = Property>) -> Self {
        DataType::Object {
            properties: properties.into_iter().collect(),
        }
    }

    /// Create an array type.
    pub fn array(elements: DataType) -> Self {
        DataType::Array {
            elements: Box::new(elements),
        }
    }

    /// Create a union type.
    pub fn union(types: impl IntoIterator<Item = DataType>) -> Self {
        DataType::Union {
            types: types.into_iter().collect(),
        }
    }

    /// Create a reference to a named type with the given concrete kind.
    pub fn reference(name: impl Into<String>, reference_kind: TypeKind) -> Self {
        DataType::Reference(TypeReference {
            name: name.into(),
            location: String::new(),
            reference_kind,
        })
    }

    pub fn string_literal(value: impl Into<String>) -> Self {
        DataType::StringLiteral {
            value: value.into(),
        }
    }

    pub fn boolean_literal(value: bool) -> Self {
        DataType::BooleanLiteral { value }
    }

    pub fn number_literal(value: impl Into<Number>) -> Self {
        DataType::NumberLiteral {
            value: value.into(),
        }
    }

    /// Returns true if this is the `null` type.
    pub fn is_null(&self) -> bool {
        matches!(self, DataType::Null)
    }

    /// Returns the reference payload if this is a reference.
    pub fn as_reference(&self) -> Option<&TypeReference> {
        match self {
            DataType::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Returns the constant value of a literal type.
    pub fn literal_value(&self) -> Option<Value> {
        match self {
            DataType::BooleanLiteral { value } => Some(Value::Bool(*value)),
            DataType::StringLiteral { value } => Some(Value::String(value.clone())),
            DataType::NumberLiteral { value } => Some(Value::Number(value.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Null => f.write_str("null"),
            DataType::Boolean => f.write_str("boolean"),
            DataType::String => f.write_str("string"),
            DataType::Float => f.write_str("float"),
            DataType::Double => f.write_str("double"),
            DataType::Int32 => f.write_str("int32"),
            DataType::Int64 => f.write_str("int64"),
            DataType::Date => f.write_str("date"),
            DataType::DateTime => f.write_str("date-time"),
            DataType::BooleanLiteral { value } => write!(f, "{}", value),
            DataType::StringLiteral { value } => write!(f, "\"{}\"", value),
            DataType::NumberLiteral { value } => write!(f, "{}", value),
            DataType::Object { properties } if properties.is_empty() => f.write_str("{}"),
            DataType::Object { properties } => {
                f.write_str("{ ")?;
                for (i, property) in properties.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    let marker = if property.optional { "?" } else { "" };
                    write!(f, "{}{}: {}", property.name, marker, property.ty)?;
                }
                f.write_str(" }")
            }
            DataType::Array { elements } => match elements.as_ref() {
                DataType::Union { types } if types.len() > 1 => write!(f, "({})[]", elements),
                _ => write!(f, "{}[]", elements),
            },
            DataType::Union { types } => {
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", ty)?;
                }
                Ok(())
            }
            DataType::Reference(reference) => f.write_str(&reference.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(DataType::Int64.kind(), TypeKind::Int64);
        assert_eq!(DataType::string_literal("a").kind(), TypeKind::StringLiteral);
        assert_eq!(
            DataType::reference("User", TypeKind::Object).kind(),
            TypeKind::Reference
        );
        assert_eq!(DataType::union([DataType::Null]).kind(), TypeKind::Union);
    }

    #[test]
    fn test_kind_is_primitive() {
        assert!(TypeKind::DateTime.is_primitive());
        assert!(TypeKind::NumberLiteral.is_primitive());
        assert!(!TypeKind::Object.is_primitive());
        assert!(!TypeKind::Array.is_primitive());
    }

    #[test]
    fn test_literal_value() {
        assert_eq!(DataType::boolean_literal(true).literal_value(), Some(json!(true)));
        assert_eq!(DataType::number_literal(42).literal_value(), Some(json!(42)));
        assert_eq!(DataType::string_literal("dog").literal_value(), Some(json!("dog")));
        assert_eq!(DataType::String.literal_value(), None);
    }

    #[test]
    fn test_display() {
        let ty = DataType::object([
            Property::required("id", DataType::String),
            Property::optional(
                "tags",
                DataType::array(DataType::union([DataType::string_literal("a"), DataType::Null])),
            ),
            Property::required("owner", DataType::reference("User", TypeKind::Object)),
        ]);
        assert_eq!(
            ty.to_string(),
            "{ id: string; tags?: (\"a\" | null)[]; owner: User }"
        );
        assert_eq!(DataType::object([]).to_string(), "{}");
    }

    #[test]
    fn test_serde_tagged_representation() {
        let ty = DataType::union([
            DataType::reference("Cat", TypeKind::Object),
            DataType::Null,
        ]);
        let value = serde_json::to_value(&ty).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "union",
                "types": [
                    {"kind": "reference", "name": "Cat", "location": "", "reference_kind": "object"},
                    {"kind": "null"}
                ]
            })
        );

        let back: DataType = serde_json::from_value(value).unwrap();
        assert_eq!(back, ty);
    }

    #[test]
    fn test_property_defaults_when_deserializing() {
        let property: Property =
            serde_json::from_value(json!({"name": "id", "type": {"kind": "date-time"}})).unwrap();
        assert!(!property.optional);
        assert_eq!(property.ty, DataType::DateTime);
        assert!(property.description.is_none());
    }
}
