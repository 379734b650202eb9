//! Contract type IR for Cairn.
//!
//! This crate provides the canonical representation of an API contract
//! together with the two algorithms every schema target shares:
//!
//! - [`resolve_type`] / [`possible_root_kinds`] - follow references through
//!   the [`TypeTable`] to concrete shapes
//! - [`infer_discriminator`] - find the property that tags each member of an
//!   object union
//!
//! # Architecture
//!
//! ```text
//! parser → cairn-ir (contract IR) → cairn-codegen-* (schemas) / cairn-diff
//! ```
//!
//! The IR is immutable once built; everything here borrows it.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod contract;
mod discriminator;
mod error;
mod resolve;
mod table;
mod types;

pub use contract::{
    ApiDefinition, Body, ContractConfig, ContractDefinition, DefaultResponse, EndpointDefinition,
    Header, HttpMethod, PathComponent, PathParam, QueryArrayStrategy, QueryParam, Request,
    Response, SecurityHeader,
};
pub use discriminator::{Discriminator, infer_discriminator};
pub use error::{ResolveError, Result};
pub use resolve::{is_url_safe, possible_root_kinds, resolve_type};
pub use table::{TypeDefinition, TypeTable};
pub use types::{DataType, Property, TypeKind, TypeReference};
