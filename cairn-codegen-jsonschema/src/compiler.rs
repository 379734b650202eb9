//! Type-level JSON Schema compilation.

use cairn_codegen::{
    CompileError, ResolveResultExt, Result, SchemaType, TypePath, literal_base_type,
};
use cairn_ir::{DataType, Property, ResolveError, TypeTable, resolve_type};
use indexmap::IndexMap;

use crate::JsonSchema;

/// Compile a type into a JSON Schema node.
///
/// References become `$ref`s into `#/definitions` and are never inlined.
pub fn json_type_schema(table: &TypeTable, ty: &DataType) -> Result<JsonSchema> {
    Compiler { table }.compile(ty, &TypePath::root("Type"))
}

/// Compile an optional body into a JSON Schema node.
///
/// Returns `Ok(None)` ("no schema") when there is no body or the body
/// resolves to `null`.
pub fn json_body_schema(table: &TypeTable, body: Option<&DataType>) -> Result<Option<JsonSchema>> {
    let path = TypePath::root("Body");
    let Some(ty) = body else {
        return Ok(None);
    };
    if resolve_type(ty, table).at(&path)?.is_null() {
        return Ok(None);
    }
    Compiler { table }.compile(ty, &path).map(Some)
}

/// Compile a body that must be present.
///
/// # Errors
///
/// Fails with [`CompileError::MissingBody`] when there is no body.
pub fn require_json_body_schema(table: &TypeTable, body: Option<&DataType>) -> Result<JsonSchema> {
    json_body_schema(table, body)?.ok_or_else(|| CompileError::MissingBody {
        path: TypePath::root("Body"),
    })
}

/// Compile a body, translating its absence into `{"type": "null"}`.
pub fn json_body_schema_or_null(table: &TypeTable, body: Option<&DataType>) -> Result<JsonSchema> {
    Ok(json_body_schema(table, body)?.unwrap_or_else(|| JsonSchema::typed(SchemaType::Null)))
}

pub(crate) struct Compiler<'a> {
    pub(crate) table: &'a TypeTable,
}

impl Compiler<'_> {
    pub(crate) fn compile(&self, ty: &DataType, path: &TypePath) -> Result<JsonSchema> {
        Ok(match ty {
            DataType::Null => JsonSchema::typed(SchemaType::Null),
            DataType::Boolean => JsonSchema::typed(SchemaType::Boolean),
            DataType::String | DataType::Date | DataType::DateTime => {
                JsonSchema::typed(SchemaType::String)
            }
            DataType::Float | DataType::Double => JsonSchema::typed(SchemaType::Number),
            DataType::Int32 | DataType::Int64 => JsonSchema::typed(SchemaType::Integer),
            DataType::BooleanLiteral { .. }
            | DataType::StringLiteral { .. }
            | DataType::NumberLiteral { .. } => JsonSchema {
                ty: literal_base_type(ty),
                constant: ty.literal_value(),
                ..Default::default()
            },
            DataType::Object { properties } => self.compile_object(properties, path)?,
            DataType::Array { elements } => JsonSchema {
                ty: Some(SchemaType::Array),
                items: Some(Box::new(self.compile(elements, &path.items())?)),
                ..Default::default()
            },
            DataType::Union { types } => match types.as_slice() {
                [] => return Err(CompileError::EmptyUnion { path: path.clone() }),
                [single] => self.compile(single, &path.member(0))?,
                _ => JsonSchema {
                    one_of: Some(
                        types
                            .iter()
                            .enumerate()
                            .map(|(index, member)| self.compile(member, &path.member(index)))
                            .collect::<Result<_>>()?,
                    ),
                    ..Default::default()
                },
            },
            DataType::Reference(reference) => {
                if !self.table.contains(&reference.name) {
                    return Err(CompileError::Resolve {
                        source: ResolveError::Unresolved {
                            name: reference.name.clone(),
                        },
                        path: path.clone(),
                    });
                }
                JsonSchema::reference(&reference.name)
            }
        })
    }

    fn compile_object(&self, properties: &[Property], path: &TypePath) -> Result<JsonSchema> {
        let mut schemas = IndexMap::new();
        let mut required = Vec::new();

        for property in properties {
            let schema = self
                .compile(&property.ty, &path.property(&property.name))?
                .describe(property.description.as_ref());
            schemas.insert(property.name.clone(), schema);
            if !property.optional {
                required.push(property.name.clone());
            }
        }

        Ok(JsonSchema {
            ty: Some(SchemaType::Object),
            properties: Some(schemas),
            required: (!required.is_empty()).then_some(required),
            ..Default::default()
        })
    }
}
