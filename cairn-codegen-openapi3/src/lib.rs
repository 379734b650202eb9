//! OpenAPI 3 compiler for Cairn contracts.
//!
//! Unlike OpenAPI 2, every union shape is expressible:
//!
//! - `null` is `{nullable: true}`
//! - `X | null` is `X` with `nullable: true`
//! - other unions are `oneOf`, carrying a `discriminator` when the members
//!   are named object types sharing a string literal property
//!
//! Named types live under `components.schemas` and are addressed with
//! `$ref: "#/components/schemas/<name>"`. Bodies are wrapped per content type.

mod compiler;
mod document;
mod schema;

pub use compiler::{openapi3_parameter_schema, openapi3_type_schema};
pub use document::{OpenApi3Compiler, openapi3_document};
pub use schema::{
    MediaType, OpenApi3Components, OpenApi3Discriminator, OpenApi3Document, OpenApi3Header,
    OpenApi3Operation, OpenApi3Parameter, OpenApi3RequestBody, OpenApi3Response, OpenApi3Schema,
    ParameterLocation, ParameterStyle,
};
