//! Union discriminator inference.
//!
//! A union of object types can be represented as a tagged `oneOf` when one
//! property is required in every alternative and holds a distinct string
//! literal in each of them.

use indexmap::IndexMap;

use crate::{DataType, Result, TypeTable, resolve_type};

/// A property that distinguishes every member of a union.
#[derive(Debug, Clone, PartialEq)]
pub struct Discriminator<'a> {
    /// Name of the discriminating property.
    pub property_name: &'a str,
    /// Literal value → union member carrying it, in member order.
    pub mapping: IndexMap<&'a str, &'a DataType>,
}

/// Infer the discriminator of a union from its members.
///
/// Returns `Ok(None)` when any member resolves to something other than an
/// object, or when no required string-literal property has a distinct value
/// in every member. When several properties qualify, the first one found in
/// member/property declaration order wins; that choice is
/// implementation-defined.
///
/// Callers decide which unions need a discriminator at all: nullable
/// singletons and string-literal-only unions should be filtered out before
/// calling this.
///
/// # Errors
///
/// Fails only if a member or property references an undefined type.
pub fn infer_discriminator<'a, I>(
    table: &'a TypeTable,
    members: I,
) -> Result<Option<Discriminator<'a>>>
where
    I: IntoIterator<Item = &'a DataType>,
{
    let members: Vec<&'a DataType> = members.into_iter().collect();
    let mut candidates: IndexMap<&'a str, IndexMap<&'a str, &'a DataType>> = IndexMap::new();

    for &member in &members {
        let DataType::Object { properties } = resolve_type(member, table)? else {
            return Ok(None);
        };

        for property in properties.iter().filter(|property| !property.optional) {
            if let DataType::StringLiteral { value } = resolve_type(&property.ty, table)? {
                candidates
                    .entry(property.name.as_str())
                    .or_default()
                    .insert(value.as_str(), member);
            }
        }
    }

    Ok(candidates
        .into_iter()
        .find(|(_, mapping)| mapping.len() == members.len())
        .map(|(property_name, mapping)| Discriminator {
            property_name,
            mapping,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Property, TypeDefinition, TypeKind};

    fn animal(kind: DataType, extra: &str) -> DataType {
        DataType::object([
            Property::required("name", DataType::String),
            Property::required("kind", kind),
            Property::required(extra, DataType::Boolean),
        ])
    }

    fn zoo() -> TypeTable {
        TypeTable::from_definitions([
            TypeDefinition::new("Dog", animal(DataType::string_literal("dog"), "barks")),
            TypeDefinition::new("Cat", animal(DataType::string_literal("cat"), "meows")),
            TypeDefinition::new("BirdKind", DataType::string_literal("bird")),
            TypeDefinition::new(
                "Bird",
                animal(DataType::reference("BirdKind", TypeKind::StringLiteral), "sings"),
            ),
        ])
        .expect("valid test table")
    }

    fn refs(names: &[&str]) -> Vec<DataType> {
        names
            .iter()
            .map(|name| DataType::reference(*name, TypeKind::Object))
            .collect()
    }

    #[test]
    fn test_infers_complete_discriminator() {
        let table = zoo();
        let members = refs(&["Dog", "Cat", "Bird"]);

        let discriminator = infer_discriminator(&table, &members)
            .unwrap()
            .expect("discriminator");

        assert_eq!(discriminator.property_name, "kind");
        assert_eq!(discriminator.mapping.len(), 3);
        let keys: Vec<&str> = discriminator.mapping.keys().copied().collect();
        assert_eq!(keys, ["dog", "cat", "bird"]);
        assert_eq!(discriminator.mapping["bird"], &members[2]);
    }

    #[test]
    fn test_shared_literal_value_fails() {
        let table = TypeTable::new();
        let members = [
            animal(DataType::string_literal("dog"), "barks"),
            animal(DataType::string_literal("dog"), "howls"),
        ];
        assert_eq!(infer_discriminator(&table, &members).unwrap(), None);
    }

    #[test]
    fn test_optional_property_is_not_a_candidate() {
        let table = TypeTable::new();
        let members = [
            DataType::object([Property::optional("type", DataType::string_literal("a"))]),
            DataType::object([Property::optional("type", DataType::string_literal("b"))]),
        ];
        assert_eq!(infer_discriminator(&table, &members).unwrap(), None);
    }

    #[test]
    fn test_missing_from_one_member_fails() {
        let table = TypeTable::new();
        let members = [
            DataType::object([Property::required("type", DataType::string_literal("a"))]),
            DataType::object([Property::required("other", DataType::string_literal("b"))]),
        ];
        assert_eq!(infer_discriminator(&table, &members).unwrap(), None);
    }

    #[test]
    fn test_non_object_member_fails() {
        let table = zoo();
        let mut members = refs(&["Dog", "Cat"]);
        members.push(DataType::Null);
        assert_eq!(infer_discriminator(&table, &members).unwrap(), None);
    }

    #[test]
    fn test_first_complete_candidate_wins() {
        let table = TypeTable::new();
        let members = [
            DataType::object([
                Property::required("version", DataType::string_literal("v1")),
                Property::required("type", DataType::string_literal("a")),
            ]),
            DataType::object([
                Property::required("type", DataType::string_literal("b")),
                Property::required("version", DataType::string_literal("v2")),
            ]),
        ];
        let discriminator = infer_discriminator(&table, &members).unwrap().unwrap();
        assert_eq!(discriminator.property_name, "version");
    }

    #[test]
    fn test_unresolved_member_is_an_error() {
        let table = TypeTable::new();
        let members = refs(&["Nowhere"]);
        assert!(infer_discriminator(&table, &members).is_err());
    }
}
