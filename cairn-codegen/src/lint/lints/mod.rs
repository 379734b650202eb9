//! Built-in union-shape lints.

mod has_discriminator;
mod no_inline_objects_within_unions;
mod no_nullable_arrays;

pub use has_discriminator::HasDiscriminatorLint;
pub use no_inline_objects_within_unions::NoInlineObjectsWithinUnionsLint;
pub use no_nullable_arrays::NoNullableArraysLint;
