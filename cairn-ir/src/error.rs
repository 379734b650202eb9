use miette::Diagnostic;
use thiserror::Error;

/// Result type for IR operations.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

/// Errors raised while looking up or resolving named types.
///
/// All of these indicate a contract that should have been rejected before
/// reaching this crate, so none of them are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    #[error("unresolved type reference '{name}'")]
    #[diagnostic(
        code(cairn::unresolved_reference),
        help("define a type named '{name}' in the contract")
    )]
    Unresolved { name: String },

    #[error("reference cycle detected: {}", chain.join(" -> "))]
    #[diagnostic(
        code(cairn::reference_cycle),
        help("a type alias must eventually point at a concrete type")
    )]
    Cycle { chain: Vec<String> },

    #[error("duplicate type definition '{name}'")]
    #[diagnostic(code(cairn::duplicate_type))]
    DuplicateType { name: String },
}

impl ResolveError {
    pub(crate) fn unresolved(name: impl Into<String>) -> Self {
        ResolveError::Unresolved { name: name.into() }
    }
}
