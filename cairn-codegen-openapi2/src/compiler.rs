//! Type-level OpenAPI 2 compilation.

use cairn_codegen::{
    CompileError, ResolveResultExt, Result, SchemaFormat, SchemaType, TypePath, UnionShape,
    ensure_parameter_type, literal_base_type,
};
use cairn_ir::{DataType, Property, ResolveError, TypeTable, resolve_type};
use indexmap::IndexMap;
use serde_json::Value;

use crate::OpenApi2Schema;

/// Compile a type into an OpenAPI 2 schema.
///
/// References become `$ref`s into `#/definitions`.
pub fn openapi2_type_schema(table: &TypeTable, ty: &DataType) -> Result<OpenApi2Schema> {
    Compiler::new(table).compile(ty, &TypePath::root("Type"))
}

/// Compile the inline type of a path, query or header parameter.
///
/// Parameters can't hold a `$ref`, so references are resolved and inlined.
///
/// # Errors
///
/// Fails with [`CompileError::UnsupportedObjectParameter`] when the type can
/// be an object or an array of objects.
pub fn openapi2_parameter_schema(
    table: &TypeTable,
    ty: &DataType,
    path: &TypePath,
) -> Result<OpenApi2Schema> {
    ensure_parameter_type(table, ty, path)?;
    Compiler::inline(table).compile(ty, path)
}

pub(crate) struct Compiler<'a> {
    table: &'a TypeTable,
    /// Names of the references being inlined, outermost first. `None` emits
    /// `$ref`s instead.
    inlining: Option<Vec<String>>,
}

impl<'a> Compiler<'a> {
    pub(crate) fn new(table: &'a TypeTable) -> Self {
        Self {
            table,
            inlining: None,
        }
    }

    fn inline(table: &'a TypeTable) -> Self {
        Self {
            table,
            inlining: Some(Vec::new()),
        }
    }

    pub(crate) fn compile(&self, ty: &DataType, path: &TypePath) -> Result<OpenApi2Schema> {
        Ok(match ty {
            DataType::Null => {
                return Err(CompileError::unsupported(
                    "null type is only supported within a union in OpenAPI 2",
                    path,
                ));
            }
            DataType::Boolean => OpenApi2Schema::typed(SchemaType::Boolean),
            DataType::String => OpenApi2Schema::typed(SchemaType::String),
            DataType::Float => OpenApi2Schema::formatted(SchemaType::Number, SchemaFormat::Float),
            DataType::Double => {
                OpenApi2Schema::formatted(SchemaType::Number, SchemaFormat::Double)
            }
            DataType::Int32 => OpenApi2Schema::formatted(SchemaType::Integer, SchemaFormat::Int32),
            DataType::Int64 => OpenApi2Schema::formatted(SchemaType::Integer, SchemaFormat::Int64),
            DataType::Date => OpenApi2Schema::formatted(SchemaType::String, SchemaFormat::Date),
            DataType::DateTime => {
                OpenApi2Schema::formatted(SchemaType::String, SchemaFormat::DateTime)
            }
            DataType::BooleanLiteral { .. }
            | DataType::StringLiteral { .. }
            | DataType::NumberLiteral { .. } => OpenApi2Schema {
                ty: literal_base_type(ty),
                enum_values: ty.literal_value().map(|value| vec![value]),
                ..Default::default()
            },
            DataType::Object { properties } => self.compile_object(properties, path)?,
            DataType::Array { elements } => OpenApi2Schema {
                ty: Some(SchemaType::Array),
                items: Some(Box::new(self.compile(elements, &path.items())?)),
                ..Default::default()
            },
            DataType::Union { types } => self.compile_union(types, path)?,
            DataType::Reference(reference) => {
                if let Some(inlining) = &self.inlining {
                    if inlining.contains(&reference.name) {
                        return Err(CompileError::unsupported(
                            "recursive type cannot be inlined in an OpenAPI 2 parameter",
                            path,
                        ));
                    }
                    let resolved = resolve_type(ty, self.table).at(path)?;
                    let mut inlining = inlining.clone();
                    inlining.push(reference.name.clone());
                    let nested = Compiler {
                        table: self.table,
                        inlining: Some(inlining),
                    };
                    return nested.compile(resolved, path);
                }
                if !self.table.contains(&reference.name) {
                    return Err(CompileError::Resolve {
                        source: ResolveError::Unresolved {
                            name: reference.name.clone(),
                        },
                        path: path.clone(),
                    });
                }
                OpenApi2Schema::reference(&reference.name)
            }
        })
    }

    fn compile_object(&self, properties: &[Property], path: &TypePath) -> Result<OpenApi2Schema> {
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

        Ok(OpenApi2Schema {
            ty: Some(SchemaType::Object),
            properties: Some(schemas),
            required: (!required.is_empty()).then_some(required),
            ..Default::default()
        })
    }

    fn compile_union(&self, types: &[DataType], path: &TypePath) -> Result<OpenApi2Schema> {
        match UnionShape::of(types) {
            UnionShape::Empty => Err(CompileError::EmptyUnion { path: path.clone() }),
            UnionShape::Single(member) => self.compile(member, &path.member(0)),
            UnionShape::StringLiterals(values) => Ok(OpenApi2Schema {
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
            UnionShape::NullableMany(_) | UnionShape::Plain(_) => Err(CompileError::unsupported(
                "unions are not supported in OpenAPI 2",
                path,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use cairn_ir::{TypeDefinition, TypeKind};
    use serde_json::json;

    use super::*;

    fn to_json(schema: &OpenApi2Schema) -> Value {
        serde_json::to_value(schema).unwrap()
    }

    fn compile(ty: &DataType) -> Value {
        to_json(&openapi2_type_schema(&TypeTable::new(), ty).unwrap())
    }

    #[test]
    fn test_bare_null_rejected() {
        let error = openapi2_type_schema(&TypeTable::new(), &DataType::Null).unwrap_err();
        assert_eq!(
            error,
            CompileError::unsupported(
                "null type is only supported within a union in OpenAPI 2",
                &TypePath::root("Type")
            )
        );
    }

    #[test]
    fn test_formats() {
        assert_eq!(compile(&DataType::Float), json!({"type": "number", "format": "float"}));
        assert_eq!(compile(&DataType::Double), json!({"type": "number", "format": "double"}));
        assert_eq!(compile(&DataType::Int32), json!({"type": "integer", "format": "int32"}));
        assert_eq!(compile(&DataType::Int64), json!({"type": "integer", "format": "int64"}));
        assert_eq!(compile(&DataType::Date), json!({"type": "string", "format": "date"}));
        assert_eq!(
            compile(&DataType::DateTime),
            json!({"type": "string", "format": "date-time"})
        );
    }

    #[test]
    fn test_literal_is_single_value_enum() {
        assert_eq!(
            compile(&DataType::string_literal("dog")),
            json!({"type": "string", "enum": ["dog"]})
        );
        assert_eq!(
            compile(&DataType::boolean_literal(false)),
            json!({"type": "boolean", "enum": [false]})
        );
    }

    #[test]
    fn test_nullable_union() {
        assert_eq!(
            compile(&DataType::union([DataType::String, DataType::Null])),
            json!({"type": "string", "x-nullable": true})
        );
    }

    #[test]
    fn test_string_literal_union_is_enum() {
        let ty = DataType::union([
            DataType::string_literal("small"),
            DataType::string_literal("large"),
        ]);
        assert_eq!(
            compile(&ty),
            json!({"type": "string", "enum": ["small", "large"]})
        );
    }

    #[test]
    fn test_other_unions_rejected() {
        let table = TypeTable::new();
        let path = TypePath::root("Type");
        for ty in [
            DataType::union([DataType::String, DataType::Float, DataType::Boolean]),
            DataType::union([DataType::String, DataType::Float, DataType::Null]),
        ] {
            assert_eq!(
                openapi2_type_schema(&table, &ty),
                Err(CompileError::unsupported(
                    "unions are not supported in OpenAPI 2",
                    &path
                ))
            );
        }
    }

    #[test]
    fn test_reference() {
        let table =
            TypeTable::from_definitions([TypeDefinition::new("Pet", DataType::object([]))]).unwrap();
        let schema = openapi2_type_schema(&table, &DataType::reference("Pet", TypeKind::Object));
        assert_eq!(to_json(&schema.unwrap()), json!({"$ref": "#/definitions/Pet"}));
    }

    #[test]
    fn test_nullable_reference() {
        let table =
            TypeTable::from_definitions([TypeDefinition::new("Pet", DataType::object([]))]).unwrap();
        let ty = DataType::union([DataType::Null, DataType::reference("Pet", TypeKind::Object)]);
        let schema = openapi2_type_schema(&table, &ty).map(|schema| to_json(&schema));
        assert_eq!(
            schema,
            Ok(json!({"$ref": "#/definitions/Pet", "x-nullable": true}))
        );
    }

    #[test]
    fn test_recursive_parameter_rejected() {
        let table = TypeTable::from_definitions([TypeDefinition::new(
            "Tags",
            DataType::array(DataType::reference("Tags", TypeKind::Array)),
        )])
        .unwrap();
        let ty = DataType::reference("Tags", TypeKind::Array);
        let path = TypePath::root("tags");
        assert_eq!(
            openapi2_parameter_schema(&table, &ty, &path),
            Err(CompileError::unsupported(
                "recursive type cannot be inlined in an OpenAPI 2 parameter",
                &path.items()
            ))
        );

        // a referenced type is inlined again when it isn't nested in itself
        let nullable_id = DataType::union([
            DataType::reference("Id", TypeKind::Int64),
            DataType::Null,
        ]);
        let table = TypeTable::from_definitions([TypeDefinition::new("Id", DataType::Int64)])
            .unwrap();
        let schema = openapi2_parameter_schema(&table, &DataType::array(nullable_id), &path).unwrap();
        assert_eq!(
            to_json(&schema),
            json!({"type": "array", "items": {"type": "integer", "format": "int64", "x-nullable": true}})
        );
    }

    #[test]
    fn test_parameter_inlines_references() {
        let table = TypeTable::from_definitions([TypeDefinition::new(
            "Size",
            DataType::union([
                DataType::string_literal("small"),
                DataType::string_literal("large"),
            ]),
        )])
        .unwrap();
        let ty = DataType::array(DataType::reference("Size", TypeKind::Union));
        let schema = openapi2_parameter_schema(&table, &ty, &TypePath::root("sizes")).unwrap();
        assert_eq!(
            to_json(&schema),
            json!({"type": "array", "items": {"type": "string", "enum": ["small", "large"]}})
        );
    }

    #[test]
    fn test_object_parameter_rejected() {
        let table = TypeTable::new();
        let ty = DataType::object([Property::required("q", DataType::String)]);
        let path = TypePath::root("filter");
        assert_eq!(
            openapi2_parameter_schema(&table, &ty, &path),
            Err(CompileError::UnsupportedObjectParameter { path })
        );
    }
}
