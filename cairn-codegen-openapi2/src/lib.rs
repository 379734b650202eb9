//! OpenAPI 2 (Swagger) compiler for Cairn contracts.
//!
//! OpenAPI 2 has no union construct. Only the shapes it can express are
//! accepted:
//!
//! - unions of string literals become an `enum`
//! - `X | null` becomes `X` marked with `x-nullable: true`
//!
//! Every other union, and bare `null`, is a compile error. Named types live
//! under `definitions` and are addressed with `$ref: "#/definitions/<name>"`.

mod compiler;
mod document;
mod schema;

pub use compiler::{openapi2_parameter_schema, openapi2_type_schema};
pub use document::{OpenApi2Compiler, openapi2_document};
pub use schema::{
    CollectionFormat, OpenApi2Document, OpenApi2Header, OpenApi2Operation, OpenApi2Parameter,
    OpenApi2Response, OpenApi2Schema, ParameterLocation,
};
