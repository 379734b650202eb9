//! JSON Schema compiler for Cairn contracts.
//!
//! Types compile to draft-07 schema nodes. Named types live under a local
//! `definitions` map and are addressed with `$ref: "#/definitions/<name>"`.

mod compiler;
mod document;
mod schema;

pub use compiler::{
    json_body_schema, json_body_schema_or_null, json_type_schema, require_json_body_schema,
};
pub use document::{JsonSchemaCompiler, json_definitions, json_schema_document};
pub use schema::{DRAFT_07, JsonSchema, JsonSchemaDocument};
