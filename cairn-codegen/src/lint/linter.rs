//! A configurable set of lints run over a contract.

use cairn_ir::ContractDefinition;

use super::{
    Diagnostic, HasDiscriminatorLint, Lint, LintInfo, NoInlineObjectsWithinUnionsLint,
    NoNullableArraysLint,
};

/// Runs lints over a contract and collects their diagnostics.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter {
    /// Create a linter with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(HasDiscriminatorLint),
                Box::new(NoInlineObjectsWithinUnionsLint),
                Box::new(NoNullableArraysLint),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|lint| lint.info()).collect()
    }

    /// Run every lint, in registration order.
    pub fn check(&self, contract: &ContractDefinition) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(contract, &mut diagnostics);
        }
        diagnostics
    }
}
