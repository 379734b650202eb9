//! The named-type symbol table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{DataType, ResolveError, Result};

/// A named type declared by the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Name, unique across the contract.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: DataType,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered, immutable symbol table of [`TypeDefinition`]s keyed by name.
///
/// Serializes as the ordered list of definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TypeDefinition>", into = "Vec<TypeDefinition>")]
pub struct TypeTable {
    definitions: IndexMap<String, TypeDefinition>,
}

impl TypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, rejecting duplicate names.
    pub fn from_definitions(definitions: impl IntoIterator<Item = TypeDefinition>) -> Result<Self> {
        let mut table = IndexMap::new();
        for definition in definitions {
            if table.contains_key(&definition.name) {
                return Err(ResolveError::DuplicateType {
                    name: definition.name,
                });
            }
            table.insert(definition.name.clone(), definition);
        }
        Ok(Self { definitions: table })
    }

    /// Get a definition by name.
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions.get(name)
    }

    /// Get the type behind a name, failing if it isn't defined.
    pub fn lookup(&self, name: &str) -> Result<&DataType> {
        self.get(name)
            .map(|definition| &definition.ty)
            .ok_or_else(|| ResolveError::unresolved(name))
    }

    /// Returns true if a definition with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.definitions.values()
    }
}

impl TryFrom<Vec<TypeDefinition>> for TypeTable {
    type Error = ResolveError;

    fn try_from(definitions: Vec<TypeDefinition>) -> Result<Self> {
        Self::from_definitions(definitions)
    }
}

impl From<TypeTable> for Vec<TypeDefinition> {
    fn from(table: TypeTable) -> Self {
        table.definitions.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a TypeTable {
    type Item = &'a TypeDefinition;
    type IntoIter = indexmap::map::Values<'a, String, TypeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.values()
    }
}
