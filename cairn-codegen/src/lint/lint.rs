//! Lint trait for contract validation.

use cairn_ir::ContractDefinition;

use super::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    /// The lint name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A lint that checks the contract for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the contract and add any diagnostics.
    fn check(&self, contract: &ContractDefinition, diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
