//! Checks shared by parameter compilation in every target.

use cairn_ir::{DataType, TypeKind, TypeTable, possible_root_kinds, resolve_type};

use crate::{CompileError, ResolveResultExt, Result, TypePath};

/// Ensure a type can be carried by a path, query or header parameter.
///
/// A parameter whose type can manifest as an object, or as an array of
/// objects, fails with [`CompileError::UnsupportedObjectParameter`].
pub fn ensure_parameter_type(table: &TypeTable, ty: &DataType, path: &TypePath) -> Result<()> {
    ensure_not_object(table, ty, path)?;

    if let DataType::Array { elements } = resolve_type(ty, table).at(path)? {
        ensure_not_object(table, elements, &path.items())?;
    }
    Ok(())
}

fn ensure_not_object(table: &TypeTable, ty: &DataType, path: &TypePath) -> Result<()> {
    if possible_root_kinds(ty, table)
        .at(path)?
        .contains(&TypeKind::Object)
    {
        return Err(CompileError::UnsupportedObjectParameter { path: path.clone() });
    }
    Ok(())
}
