//! Lint for object literals written directly inside unions.

use cairn_ir::{ContractDefinition, DataType};

use super::super::{Diagnostic, Lint, visit_types};

/// Lint that warns when a union member is an inline object.
///
/// Inline members can't be named in an OpenAPI 3 discriminator mapping.
pub struct NoInlineObjectsWithinUnionsLint;

impl Lint for NoInlineObjectsWithinUnionsLint {
    fn name(&self) -> &'static str {
        "no-inline-objects-within-unions"
    }

    fn description(&self) -> &'static str {
        "Require union members to reference named object types"
    }

    fn check(&self, contract: &ContractDefinition, diagnostics: &mut Vec<Diagnostic>) {
        visit_types(contract, |path, ty| {
            let DataType::Union { types } = ty else {
                return;
            };
            for (index, member) in types.iter().enumerate() {
                if matches!(member, DataType::Object { .. }) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            "union member is an inline object; declare it as a named type",
                        )
                        .at(path.member(index).to_string()),
                    );
                }
            }
        });
    }
}
