//! Vocabulary shared by every schema target.

use cairn_ir::DataType;
use serde::Serialize;

/// Value of a schema's `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Null,
    Boolean,
    String,
    Number,
    Integer,
    Object,
    Array,
}

/// Value of a schema's `format` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaFormat {
    Int32,
    Int64,
    Float,
    Double,
    Date,
    DateTime,
}

/// The `type` keyword of a literal type's constant.
///
/// Number literals holding an integral value are `integer`.
pub fn literal_base_type(ty: &DataType) -> Option<SchemaType> {
    match ty {
        DataType::BooleanLiteral { .. } => Some(SchemaType::Boolean),
        DataType::StringLiteral { .. } => Some(SchemaType::String),
        DataType::NumberLiteral { value } if value.is_f64() => Some(SchemaType::Number),
        DataType::NumberLiteral { .. } => Some(SchemaType::Integer),
        _ => None,
    }
}
