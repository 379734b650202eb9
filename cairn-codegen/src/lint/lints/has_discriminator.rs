//! Lint for unions that can't be told apart by a discriminator.

use cairn_ir::{ContractDefinition, DataType, infer_discriminator};

use super::super::{Diagnostic, Lint, visit_types};
use crate::UnionShape;

/// Lint that errors on unions of two or more alternatives without an
/// inferable discriminator property.
///
/// Nullable singletons (`X | null`) and string-literal-only unions don't need
/// a discriminator and are skipped.
pub struct HasDiscriminatorLint;

impl Lint for HasDiscriminatorLint {
    fn name(&self) -> &'static str {
        "has-discriminator"
    }

    fn description(&self) -> &'static str {
        "Require a discriminator property on unions of several alternatives"
    }

    fn check(&self, contract: &ContractDefinition, diagnostics: &mut Vec<Diagnostic>) {
        visit_types(contract, |path, ty| {
            let DataType::Union { types } = ty else {
                return;
            };
            let members: Vec<&DataType> = match UnionShape::of(types) {
                UnionShape::Plain(types) => types.iter().collect(),
                UnionShape::NullableMany(others) => others,
                UnionShape::Empty
                | UnionShape::Single(_)
                | UnionShape::StringLiterals(_)
                | UnionShape::Nullable(_) => return,
            };

            match infer_discriminator(&contract.types, members) {
                Ok(Some(_)) => {}
                Ok(None) => diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("union '{}' has no discriminator property", ty),
                    )
                    .at(path.to_string()),
                ),
                Err(error) => diagnostics.push(
                    Diagnostic::error(self.name(), error.to_string()).at(path.to_string()),
                ),
            }
        });
    }
}
