//! Lint for nullable arrays.

use cairn_ir::{ContractDefinition, DataType, TypeKind};

use super::super::{Diagnostic, Lint, visit_types};

/// Lint that warns about `T[] | null`; an empty array says the same thing.
pub struct NoNullableArraysLint;

impl Lint for NoNullableArraysLint {
    fn name(&self) -> &'static str {
        "no-nullable-arrays"
    }

    fn description(&self) -> &'static str {
        "Disallow unions of an array and null"
    }

    fn check(&self, contract: &ContractDefinition, diagnostics: &mut Vec<Diagnostic>) {
        visit_types(contract, |path, ty| {
            let DataType::Union { types } = ty else {
                return;
            };
            let is_array = |member: &DataType| match member {
                DataType::Array { .. } => true,
                DataType::Reference(reference) => reference.reference_kind == TypeKind::Array,
                _ => false,
            };
            if types.iter().any(DataType::is_null) && types.iter().any(is_array) {
                diagnostics.push(
                    Diagnostic::warning(self.name(), format!("array type '{}' is nullable", ty))
                        .at(path.to_string()),
                );
            }
        });
    }
}
