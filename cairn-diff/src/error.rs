use cairn_ir::ResolveError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for contract comparison.
pub type Result<T, E = DiffError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DiffError {
    #[error("cannot compare endpoint '{endpoint}': {source}")]
    #[diagnostic(
        code(cairn::diff::resolve),
        help("both contract versions must define every type their endpoints reference")
    )]
    Resolve {
        endpoint: String,
        #[source]
        source: ResolveError,
    },
}
