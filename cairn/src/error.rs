use cairn_codegen::{CompileError, RenderError};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for document generation.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error("failed to parse generator config")]
    #[diagnostic(
        code(cairn::config),
        help("valid keys are: target, format, api_version")
    )]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}
