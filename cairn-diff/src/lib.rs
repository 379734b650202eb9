//! Compatibility differ for Cairn contracts.
//!
//! [`compare`] matches endpoints by name across two versions of a contract
//! and reports how their request and response bodies changed. Bodies are
//! compared structurally after resolving references, so renaming a type
//! without changing its shape is not a change.

#![allow(unused_assignments)]

mod compare;
mod diff;
mod error;

pub use compare::compare;
pub use diff::{
    BodyDiff, ContractDiff, EndpointDiff, MemberDiff, ObjectDiff, OptionalityChange, PropertyDiff,
    ResponseDiff, ResponseKey, TypeDiff, UnionDiff,
};
pub use error::{DiffError, Result};
