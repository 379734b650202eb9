//! Type-level OpenAPI 3 compilation.

use cairn_codegen::{
    CompileError, ResolveResultExt, Result, SchemaFormat, SchemaType, TypePath, UnionShape,
    ensure_parameter_type, literal_base_type,
};
use cairn_ir::{DataType, Property, ResolveError, TypeTable, infer_discriminator};
use indexmap::IndexMap;
use serde_json::Value;

use crate::{OpenApi3Discriminator, OpenApi3Schema, schema::component_ref};

/// Compile a type into an OpenAPI 3 schema.
///
/// References become `$ref`s into `#/components/schemas`.
pub fn openapi3_type_schema(table: &TypeTable, ty: &DataType) -> Result<OpenApi3Schema> {
    Compiler { table }.compile(ty, &TypePath::root("Type"))
}

/// Compile the schema of a path, query or header parameter.
///
/// # Errors
///
/// Fails with [`CompileError::UnsupportedObjectParameter`] when the type can
/// be an object or an array of objects.
pub fn openapi3_parameter_schema(
    table: &TypeTable,
    ty: &DataType,
    path: &TypePath,
) -> Result<OpenApi3Schema> {
    ensure_parameter_type(table, ty, path)?;
    Compiler { table }.compile(ty, path)
}

pub(crate) struct Compiler<'a> {
    pub(crate) table: &'a TypeTable,
}

impl Compiler<'_> {
    pub(crate) fn compile(&self, ty: &DataType, path: &TypePath) -> Result<OpenApi3Schema> {
        Ok(match ty {
            DataType::Null => OpenApi3Schema {
                nullable: Some(true),
                ..Default::default()
            },
            DataType::Boolean => OpenApi3Schema::typed(SchemaType::Boolean),
            DataType::String => OpenApi3Schema::typed(SchemaType::String),
            DataType::Float => OpenApi3Schema::typed(SchemaType::Number),
            DataType::Double => {
                OpenApi3Schema::formatted(SchemaType::Number, SchemaFormat::Double)
            }
            DataType::Int32 => OpenApi3Schema::formatted(SchemaType::Integer, SchemaFormat::Int32),
            DataType::Int64 => OpenApi3Schema::formatted(SchemaType::Integer, SchemaFormat::Int64),
            DataType::Date => OpenApi3Schema::formatted(SchemaType::String, SchemaFormat::Date),
            DataType::DateTime => {
                OpenApi3Schema::formatted(SchemaType::String, SchemaFormat::DateTime)
            }
            DataType::BooleanLiteral { .. }
            | DataType::StringLiteral { .. }
            | DataType::NumberLiteral { .. } => OpenApi3Schema {
                ty: literal_base_type(ty),
                enum_values: ty.literal_value().map(|value| vec![value]),
                ..Default::default()
            },
            DataType::Object { properties } => self.compile_object(properties, path)?,
            DataType::Array { elements } => OpenApi3Schema {
                ty: Some(SchemaType::Array),
                items: Some(Box::new(self.compile(elements, &path.items())?)),
                ..Default::default()
            },
            DataType::Union { types } => self.compile_union(types, path)?,
            DataType::Reference(reference) => {
                if !self.table.contains(&reference.name) {
                    return Err(CompileError::Resolve {
                        source: ResolveError::Unresolved {
                            name: reference.name.clone(),
                        },
                        path: path.clone(),
                    });
                }
                OpenApi3Schema::reference(&reference.name)
            }
        })
    }

    fn compile_object(&self, properties: &[Property], path: &TypePath) -> Result<OpenApi3Schema> {
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

        Ok(OpenApi3Schema {
            ty: Some(SchemaType::Object),
            properties: Some(schemas),
            required: (!required.is_empty()).then_some(required),
            ..Default::default()
        })
    }

    fn compile_union(&self, types: &[DataType], path: &TypePath) -> Result<OpenApi3Schema> {
        match UnionShape::of(types) {
            UnionShape::Empty => Err(CompileError::EmptyUnion { path: path.clone() }),
            UnionShape::Single(member) => self.compile(member, &path.member(0)),
            UnionShape::StringLiterals(values) => Ok(OpenApi3Schema {
                ty: Some(SchemaType::String),
                enum_values: Some(values.into_iter().map(Value::from).collect()),
                ..Default::default()
            }),
            UnionShape::Nullable(member) => {
                let index = types.iter().position(|ty| !ty.is_null()).unwrap_or(0);
                let mut schema = self.compile(member, &path.member(index))?;
                schema.nullable = Some(true);
                Ok(schema)
            }
            UnionShape::NullableMany(_) => Ok(OpenApi3Schema {
                nullable: Some(true),
                one_of: Some(self.compile_members(types, path)?),
                ..Default::default()
            }),
            UnionShape::Plain(members) => Ok(OpenApi3Schema {
                one_of: Some(self.compile_members(members, path)?),
                discriminator: self.discriminator(members, path)?,
                ..Default::default()
            }),
        }
    }

    /// Compile the non-null members of a union, keeping their original
    /// positions in error paths.
    fn compile_members(&self, types: &[DataType], path: &TypePath) -> Result<Vec<OpenApi3Schema>> {
        types
            .iter()
            .enumerate()
            .filter(|(_, member)| !member.is_null())
            .map(|(index, member)| self.compile(member, &path.member(index)))
            .collect()
    }

    fn discriminator(
        &self,
        members: &[DataType],
        path: &TypePath,
    ) -> Result<Option<OpenApi3Discriminator>> {
        let Some(discriminator) = infer_discriminator(self.table, members).at(path)? else {
            return Ok(None);
        };

        // inline objects can't be targeted by a mapping
        let mut mapping = IndexMap::new();
        for (value, member) in discriminator.mapping {
            let DataType::Reference(reference) = member else {
                return Ok(None);
            };
            mapping.insert(value.to_string(), component_ref(&reference.name));
        }

        Ok(Some(OpenApi3Discriminator {
            property_name: discriminator.property_name.to_string(),
            mapping,
        }))
    }
}
