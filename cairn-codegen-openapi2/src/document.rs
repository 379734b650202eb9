//! Whole-contract OpenAPI 2 documents.

use cairn_codegen::{
    ApiInfo, ContentType, DocumentOptions, ResolveResultExt, Result, SchemaCompiler, SchemaType,
    TypePath, body_content, response_description, security_header_scheme,
};
use cairn_ir::{
    Body, ContractConfig, ContractDefinition, DataType, EndpointDefinition, Header,
    QueryArrayStrategy, TypeTable, resolve_type,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    CollectionFormat, OpenApi2Document, OpenApi2Header, OpenApi2Operation, OpenApi2Parameter,
    OpenApi2Response, OpenApi2Schema, ParameterLocation, compiler::Compiler,
    openapi2_parameter_schema, openapi2_type_schema,
};

/// Compile a contract into a Swagger 2.0 document.
pub fn openapi2_document(
    contract: &ContractDefinition,
    options: &DocumentOptions,
) -> Result<OpenApi2Document> {
    debug!(
        api = %contract.api.name,
        endpoints = contract.endpoints.len(),
        definitions = contract.types.len(),
        "compiling OpenAPI 2 document"
    );

    let mut paths: IndexMap<String, IndexMap<String, OpenApi2Operation>> = IndexMap::new();
    for endpoint in &contract.endpoints {
        trace!(endpoint = %endpoint.name, "compiling operation");
        let operation = operation(&contract.types, &contract.config, endpoint)?;
        paths
            .entry(endpoint.path_template())
            .or_default()
            .insert(endpoint.method.as_str().to_string(), operation);
    }

    let compiler = Compiler::new(&contract.types);
    let mut definitions = IndexMap::new();
    for definition in &contract.types {
        trace!(name = %definition.name, "compiling definition");
        let schema = compiler
            .compile(&definition.ty, &TypePath::root(&definition.name))?
            .describe(definition.description.as_ref());
        definitions.insert(definition.name.clone(), schema);
    }

    let (security_definitions, security) = security_header_scheme(contract).unzip();
    let json = ContentType::Json.mime().to_string();

    Ok(OpenApi2Document {
        swagger: "2.0".to_string(),
        info: ApiInfo::new(contract, options),
        consumes: vec![json.clone()],
        produces: vec![json],
        paths,
        definitions,
        security_definitions,
        security,
    })
}

fn operation(
    table: &TypeTable,
    config: &ContractConfig,
    endpoint: &EndpointDefinition,
) -> Result<OpenApi2Operation> {
    let root = |label: &str| TypePath::root(format!("{}.{}", endpoint.name, label));

    let mut parameters = Vec::new();
    if let Some(request) = &endpoint.request {
        for param in &request.path_params {
            let path = root(&format!("path.{}", param.name));
            parameters.push(OpenApi2Parameter {
                name: param.name.clone(),
                location: ParameterLocation::Path,
                description: param.description.clone(),
                required: true,
                inline: openapi2_parameter_schema(table, &param.ty, &path)?,
                collection_format: None,
                schema: None,
            });
        }
        for param in &request.query_params {
            let path = root(&format!("query.{}", param.name));
            let inline = openapi2_parameter_schema(table, &param.ty, &path)?;
            let collection_format = matches!(
                resolve_type(&param.ty, table).at(&path)?,
                DataType::Array { .. }
            )
            .then_some(match config.query_array_strategy {
                QueryArrayStrategy::Ampersand => CollectionFormat::Multi,
                QueryArrayStrategy::Comma => CollectionFormat::Csv,
            });
            parameters.push(OpenApi2Parameter {
                name: param.name.clone(),
                location: ParameterLocation::Query,
                description: param.description.clone(),
                required: !param.optional,
                inline,
                collection_format,
                schema: None,
            });
        }
        for header in &request.headers {
            let path = root(&format!("header.{}", header.name));
            parameters.push(OpenApi2Parameter {
                name: header.name.clone(),
                location: ParameterLocation::Header,
                description: header.description.clone(),
                required: !header.optional,
                inline: openapi2_parameter_schema(table, &header.ty, &path)?,
                collection_format: None,
                schema: None,
            });
        }
        let path = root("request");
        if let Some(body) = body_content(table, request.body.as_ref(), &path)? {
            parameters.push(OpenApi2Parameter {
                name: "body".to_string(),
                location: ParameterLocation::Body,
                description: body.description.clone(),
                required: true,
                inline: OpenApi2Schema::default(),
                collection_format: None,
                schema: Some(Compiler::new(table).compile(&body.ty, &path)?),
            });
        }
    }

    let mut responses = IndexMap::new();
    let mut content_types = Vec::new();
    for response in &endpoint.responses {
        let label = format!("response[{}]", response.status);
        let (compiled, content_type) = compile_response(
            table,
            response_description(response.description.as_ref(), Some(response.status)),
            &response.headers,
            response.body.as_ref(),
            &root(&label),
        )?;
        content_types.push(content_type);
        responses.insert(response.status.to_string(), compiled);
    }
    if let Some(response) = &endpoint.default_response {
        let (compiled, content_type) = compile_response(
            table,
            response_description(response.description.as_ref(), None),
            &response.headers,
            response.body.as_ref(),
            &root("response[default]"),
        )?;
        content_types.push(content_type);
        responses.insert("default".to_string(), compiled);
    }

    let produces = content_types
        .contains(&ContentType::Html)
        .then(|| {
            let mut mimes: Vec<String> = Vec::new();
            for content_type in content_types {
                let mime = content_type.mime().to_string();
                if !mimes.contains(&mime) {
                    mimes.push(mime);
                }
            }
            mimes
        });

    Ok(OpenApi2Operation {
        operation_id: endpoint.name.clone(),
        description: endpoint.description.clone(),
        tags: endpoint.tags.clone(),
        produces,
        parameters,
        responses,
    })
}

fn compile_response(
    table: &TypeTable,
    description: String,
    headers: &[Header],
    body: Option<&Body>,
    path: &TypePath,
) -> Result<(OpenApi2Response, ContentType)> {
    let content_type = ContentType::from_headers(headers, table).at(path)?;

    let schema = match body_content(table, body, path)? {
        Some(_) if content_type == ContentType::Html => {
            Some(OpenApi2Schema::typed(SchemaType::String))
        }
        Some(body) => Some(Compiler::new(table).compile(&body.ty, path)?),
        None => None,
    };

    let mut compiled_headers = IndexMap::new();
    for header in headers {
        let header_path = path.property(&header.name);
        let inline = openapi2_parameter_schema(table, &header.ty, &header_path)?
            .describe(header.description.as_ref());
        compiled_headers.insert(header.name.clone(), OpenApi2Header { inline });
    }

    Ok((
        OpenApi2Response {
            description,
            schema,
            headers: compiled_headers,
        },
        content_type,
    ))
}

/// OpenAPI 2 target.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenApi2Compiler;

impl SchemaCompiler for OpenApi2Compiler {
    type Schema = OpenApi2Schema;
    type Document = OpenApi2Document;

    fn target(&self) -> &'static str {
        "openapi2"
    }

    fn type_schema(&self, table: &TypeTable, ty: &DataType) -> Result<OpenApi2Schema> {
        openapi2_type_schema(table, ty)
    }

    fn document(
        &self,
        contract: &ContractDefinition,
        options: &DocumentOptions,
    ) -> Result<OpenApi2Document> {
        openapi2_document(contract, options)
    }
}
