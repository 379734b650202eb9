//! Whole-contract JSON Schema documents.

use cairn_codegen::{DocumentOptions, Result, SchemaCompiler, TypePath};
use cairn_ir::{ContractDefinition, DataType, TypeTable};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{DRAFT_07, JsonSchema, JsonSchemaDocument, compiler::Compiler, json_type_schema};

/// Compile every named type of a contract into a draft-07 document.
///
/// Each definition is compiled independently; `$ref`s between them are by
/// name, so declaration order doesn't matter.
pub fn json_schema_document(contract: &ContractDefinition) -> Result<JsonSchemaDocument> {
    debug!(
        api = %contract.api.name,
        definitions = contract.types.len(),
        "compiling JSON Schema document"
    );

    Ok(JsonSchemaDocument {
        schema: DRAFT_07.to_string(),
        title: Some(contract.api.name.clone()),
        description: contract.api.description.clone(),
        definitions: json_definitions(&contract.types)?,
    })
}

/// Compile the `definitions` map of a type table.
pub fn json_definitions(table: &TypeTable) -> Result<IndexMap<String, JsonSchema>> {
    let compiler = Compiler { table };
    let mut definitions = IndexMap::new();
    for definition in table {
        trace!(name = %definition.name, "compiling definition");
        let schema = compiler
            .compile(&definition.ty, &TypePath::root(&definition.name))?
            .describe(definition.description.as_ref());
        definitions.insert(definition.name.clone(), schema);
    }
    Ok(definitions)
}

/// JSON Schema target.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaCompiler;

impl SchemaCompiler for JsonSchemaCompiler {
    type Schema = JsonSchema;
    type Document = JsonSchemaDocument;

    fn target(&self) -> &'static str {
        "json-schema"
    }

    fn type_schema(&self, table: &TypeTable, ty: &DataType) -> Result<JsonSchema> {
        json_type_schema(table, ty)
    }

    fn document(
        &self,
        contract: &ContractDefinition,
        _options: &DocumentOptions,
    ) -> Result<JsonSchemaDocument> {
        json_schema_document(contract)
    }
}
