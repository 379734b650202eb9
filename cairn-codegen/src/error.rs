use cairn_ir::ResolveError;
use miette::Diagnostic;
use thiserror::Error;

use crate::TypePath;

/// Result type for schema compilation.
pub type Result<T, E = CompileError> = std::result::Result<T, E>;

/// A fatal schema compilation error.
///
/// Every variant points at the offending type so the contract author can
/// fix it. None of them is recoverable within the failing compile call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    #[error("{message} (at {path})")]
    #[diagnostic(code(cairn::unsupported_type))]
    UnsupportedType { message: String, path: TypePath },

    #[error("parameter '{path}' must not be an object")]
    #[diagnostic(
        code(cairn::object_parameter),
        help("path, query and header parameters only accept primitives and arrays of primitives")
    )]
    UnsupportedObjectParameter { path: TypePath },

    #[error("union has no members (at {path})")]
    #[diagnostic(code(cairn::empty_union))]
    EmptyUnion { path: TypePath },

    #[error("expected a body (at {path})")]
    #[diagnostic(code(cairn::missing_body))]
    MissingBody { path: TypePath },

    #[error("{source} (at {path})")]
    #[diagnostic(code(cairn::resolve))]
    Resolve {
        #[source]
        source: ResolveError,
        path: TypePath,
    },
}

impl CompileError {
    /// Create an unsupported type error.
    pub fn unsupported(message: impl Into<String>, path: &TypePath) -> Self {
        CompileError::UnsupportedType {
            message: message.into(),
            path: path.clone(),
        }
    }

    /// Get the path of the offending type.
    pub fn path(&self) -> &TypePath {
        match self {
            CompileError::UnsupportedType { path, .. }
            | CompileError::UnsupportedObjectParameter { path }
            | CompileError::EmptyUnion { path }
            | CompileError::MissingBody { path }
            | CompileError::Resolve { path, .. } => path,
        }
    }
}

/// Attach a [`TypePath`] to resolution failures.
pub trait ResolveResultExt<T> {
    fn at(self, path: &TypePath) -> Result<T>;
}

impl<T> ResolveResultExt<T> for std::result::Result<T, ResolveError> {
    fn at(self, path: &TypePath) -> Result<T> {
        self.map_err(|source| CompileError::Resolve {
            source,
            path: path.clone(),
        })
    }
}
