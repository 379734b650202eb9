//! Lints over union shapes.
//!
//! These rules share discriminator inference with the OpenAPI 3 compiler.
//! Each rule is self-contained; [`Linter`] runs a chosen set of them and
//! collects the findings, and how they are reported is up to the caller.

mod diagnostic;
mod lint;
mod linter;
pub mod lints;
mod walk;

pub use diagnostic::{Diagnostic, Severity};
pub use lint::{Lint, LintInfo};
pub use linter::Linter;
pub use lints::{HasDiscriminatorLint, NoInlineObjectsWithinUnionsLint, NoNullableArraysLint};
pub use walk::visit_types;
