//! Compile and render in one step.

use cairn_codegen::SchemaCompiler;
use cairn_codegen_jsonschema::JsonSchemaCompiler;
use cairn_codegen_openapi2::OpenApi2Compiler;
use cairn_codegen_openapi3::OpenApi3Compiler;
use cairn_ir::{ContractDefinition, DataType, TypeTable};
use tracing::debug;

use crate::{GeneratorConfig, Result, Target};

/// Compile a contract to the configured target and render it as text.
pub fn generate(contract: &ContractDefinition, config: &GeneratorConfig) -> Result<String> {
    debug!(
        api = %contract.api.name,
        target = %config.target,
        format = config.format.extension(),
        "generating document"
    );

    match config.target {
        Target::JsonSchema => document(JsonSchemaCompiler, contract, config),
        Target::OpenApi2 => document(OpenApi2Compiler, contract, config),
        Target::OpenApi3 => document(OpenApi3Compiler, contract, config),
    }
}

/// Compile a single type to the configured target and render it as text.
pub fn generate_type(table: &TypeTable, ty: &DataType, config: &GeneratorConfig) -> Result<String> {
    match config.target {
        Target::JsonSchema => type_schema(JsonSchemaCompiler, table, ty, config),
        Target::OpenApi2 => type_schema(OpenApi2Compiler, table, ty, config),
        Target::OpenApi3 => type_schema(OpenApi3Compiler, table, ty, config),
    }
}

fn document<C: SchemaCompiler>(
    compiler: C,
    contract: &ContractDefinition,
    config: &GeneratorConfig,
) -> Result<String> {
    let document = compiler.document(contract, &config.document_options())?;
    Ok(config.format.render(&document)?)
}

fn type_schema<C: SchemaCompiler>(
    compiler: C,
    table: &TypeTable,
    ty: &DataType,
    config: &GeneratorConfig,
) -> Result<String> {
    let schema = compiler.type_schema(table, ty)?;
    Ok(config.format.render(&schema)?)
}
