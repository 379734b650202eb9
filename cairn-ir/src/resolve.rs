//! Reference resolution.
//!
//! Resolution follows [`DataType::Reference`] indirection through the
//! [`TypeTable`] and collapses degenerate single-member unions until a
//! concrete shape is reached.

use std::collections::{BTreeSet, HashSet};

use crate::{DataType, ResolveError, Result, TypeKind, TypeTable};

/// Resolve a type to its concrete shape.
///
/// The returned type is never a reference and never a single-member union.
/// Chains such as `A → B → C` are followed to the end.
///
/// # Errors
///
/// Fails if a reference names a type missing from `table`, or if a chain of
/// references loops back on itself.
pub fn resolve_type<'a>(ty: &'a DataType, table: &'a TypeTable) -> Result<&'a DataType> {
    let mut current = ty;
    let mut chain: Vec<&str> = Vec::new();

    loop {
        match current {
            DataType::Reference(reference) => {
                if chain.contains(&reference.name.as_str()) {
                    let mut names: Vec<String> = chain.iter().map(|s| s.to_string()).collect();
                    names.push(reference.name.clone());
                    return Err(ResolveError::Cycle { chain: names });
                }
                chain.push(&reference.name);
                current = table.lookup(&reference.name)?;
            }
            DataType::Union { types } if types.len() == 1 => current = &types[0],
            _ => return Ok(current),
        }
    }
}

/// Compute the concrete kinds a type can manifest as.
///
/// Unions contribute the root kinds of every member, so the result never
/// contains [`TypeKind::Union`] or [`TypeKind::Reference`].
pub fn possible_root_kinds(ty: &DataType, table: &TypeTable) -> Result<BTreeSet<TypeKind>> {
    let mut kinds = BTreeSet::new();
    let mut visited = HashSet::new();
    collect_root_kinds(ty, table, &mut kinds, &mut visited)?;
    Ok(kinds)
}

fn collect_root_kinds<'a>(
    ty: &'a DataType,
    table: &'a TypeTable,
    kinds: &mut BTreeSet<TypeKind>,
    visited: &mut HashSet<&'a str>,
) -> Result<()> {
    // Unions may point back at themselves through references
    if let DataType::Reference(reference) = ty
        && !visited.insert(reference.name.as_str())
    {
        return Ok(());
    }

    match resolve_type(ty, table)? {
        DataType::Union { types } => {
            for member in types {
                collect_root_kinds(member, table, kinds, visited)?;
            }
        }
        concrete => {
            kinds.insert(concrete.kind());
        }
    }
    Ok(())
}

/// Returns true if the type can only ever be a single scalar value, which
/// makes it usable in a URL or header.
pub fn is_url_safe(ty: &DataType, table: &TypeTable) -> Result<bool> {
    Ok(possible_root_kinds(ty, table)?
        .iter()
        .all(TypeKind::is_primitive))
}
