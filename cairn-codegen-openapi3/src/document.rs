//! Whole-contract OpenAPI 3 documents.

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
    MediaType, OpenApi3Components, OpenApi3Document, OpenApi3Header,
    OpenApi3Operation, OpenApi3Parameter, OpenApi3RequestBody, OpenApi3Response, OpenApi3Schema,
    ParameterLocation, ParameterStyle, compiler::Compiler, openapi3_parameter_schema,
    openapi3_type_schema,
};

/// Compile a contract into an OpenAPI 3.0.0 document.
pub fn openapi3_document(
    contract: &ContractDefinition,
    options: &DocumentOptions,
) -> Result<OpenApi3Document> {
    debug!(
        api = %contract.api.name,
        endpoints = contract.endpoints.len(),
        definitions = contract.types.len(),
        "compiling OpenAPI 3 document"
    );

    let mut paths: IndexMap<String, IndexMap<String, OpenApi3Operation>> = IndexMap::new();
    for endpoint in &contract.endpoints {
        trace!(endpoint = %endpoint.name, "compiling operation");
        let operation = operation(&contract.types, &contract.config, endpoint)?;
        paths
            .entry(endpoint.path_template())
            .or_default()
            .insert(endpoint.method.as_str().to_string(), operation);
    }

    let compiler = Compiler {
        table: &contract.types,
    };
    let mut schemas = IndexMap::new();
    for definition in &contract.types {
        trace!(name = %definition.name, "compiling component schema");
        let schema = compiler
            .compile(&definition.ty, &TypePath::root(&definition.name))?
            .describe(definition.description.as_ref());
        schemas.insert(definition.name.clone(), schema);
    }

    let (security_schemes, security) = security_header_scheme(contract).unzip();

    Ok(OpenApi3Document {
        openapi: "3.0.0".to_string(),
        info: ApiInfo::new(contract, options),
        paths,
        components: OpenApi3Components {
            schemas,
            security_schemes,
        },
        security,
    })
}

fn operation(
    table: &TypeTable,
    config: &ContractConfig,
    endpoint: &EndpointDefinition,
) -> Result<OpenApi3Operation> {
    let root = |label: &str| TypePath::root(format!("{}.{}", endpoint.name, label));

    let mut parameters = Vec::new();
    let mut request_body = None;
    if let Some(request) = &endpoint.request {
        for param in &request.path_params {
            let path = root(&format!("path.{}", param.name));
            parameters.push(OpenApi3Parameter {
                name: param.name.clone(),
                location: ParameterLocation::Path,
                description: param.description.clone(),
                required: true,
                style: None,
                explode: None,
                schema: openapi3_parameter_schema(table, &param.ty, &path)?,
            });
        }
        for param in &request.query_params {
            let path = root(&format!("query.{}", param.name));
            let schema = openapi3_parameter_schema(table, &param.ty, &path)?;
            let is_array = matches!(
                resolve_type(&param.ty, table).at(&path)?,
                DataType::Array { .. }
            );
            parameters.push(OpenApi3Parameter {
                name: param.name.clone(),
                location: ParameterLocation::Query,
                description: param.description.clone(),
                required: !param.optional,
                style: is_array.then_some(ParameterStyle::Form),
                explode: is_array.then_some(
                    config.query_array_strategy == QueryArrayStrategy::Ampersand,
                ),
                schema,
            });
        }
        for header in &request.headers {
            let path = root(&format!("header.{}", header.name));
            parameters.push(OpenApi3Parameter {
                name: header.name.clone(),
                location: ParameterLocation::Header,
                description: header.description.clone(),
                required: !header.optional,
                style: None,
                explode: None,
                schema: openapi3_parameter_schema(table, &header.ty, &path)?,
            });
        }

        let path = root("request");
        if let Some(body) = body_content(table, request.body.as_ref(), &path)? {
            let content_type = ContentType::from_headers(&request.headers, table).at(&path)?;
            request_body = Some(OpenApi3RequestBody {
                description: body.description.clone(),
                content: content(table, content_type, body, &path)?,
                required: true,
            });
        }
    }

    let mut responses = IndexMap::new();
    for response in &endpoint.responses {
        let label = format!("response[{}]", response.status);
        let compiled = compile_response(
            table,
            response_description(response.description.as_ref(), Some(response.status)),
            &response.headers,
            response.body.as_ref(),
            &root(&label),
        )?;
        responses.insert(response.status.to_string(), compiled);
    }
    if let Some(response) = &endpoint.default_response {
        let compiled = compile_response(
            table,
            response_description(response.description.as_ref(), None),
            &response.headers,
            response.body.as_ref(),
            &root("response[default]"),
        )?;
        responses.insert("default".to_string(), compiled);
    }

    Ok(OpenApi3Operation {
        operation_id: endpoint.name.clone(),
        description: endpoint.description.clone(),
        tags: endpoint.tags.clone(),
        parameters,
        request_body,
        responses,
    })
}

fn compile_response(
    table: &TypeTable,
    description: String,
    headers: &[Header],
    body: Option<&Body>,
    path: &TypePath,
) -> Result<OpenApi3Response> {
    let content = match body_content(table, body, path)? {
        Some(body) => {
            let content_type = ContentType::from_headers(headers, table).at(path)?;
            Some(content(table, content_type, body, path)?)
        }
        None => None,
    };

    let mut compiled_headers = IndexMap::new();
    for header in headers {
        let header_path = path.property(&header.name);
        compiled_headers.insert(
            header.name.clone(),
            OpenApi3Header {
                description: header.description.clone(),
                required: !header.optional,
                schema: openapi3_parameter_schema(table, &header.ty, &header_path)?,
            },
        );
    }

    Ok(OpenApi3Response {
        description,
        headers: compiled_headers,
        content,
    })
}

/// Wrap a body's schema under its content type.
fn content(
    table: &TypeTable,
    content_type: ContentType,
    body: &Body,
    path: &TypePath,
) -> Result<IndexMap<String, MediaType>> {
    let schema = match content_type {
        ContentType::Html => OpenApi3Schema::typed(SchemaType::String),
        ContentType::Json => Compiler { table }.compile(&body.ty, path)?,
    };
    Ok(IndexMap::from([(
        content_type.mime().to_string(),
        MediaType { schema },
    )]))
}

/// OpenAPI 3 target.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenApi3Compiler;

impl SchemaCompiler for OpenApi3Compiler {
    type Schema = OpenApi3Schema;
    type Document = OpenApi3Document;

    fn target(&self) -> &'static str {
        "openapi3"
    }

    fn type_schema(&self, table: &TypeTable, ty: &DataType) -> Result<OpenApi3Schema> {
        openapi3_type_schema(table, ty)
    }

    fn document(
        &self,
        contract: &ContractDefinition,
        options: &DocumentOptions,
    ) -> Result<OpenApi3Document> {
        openapi3_document(contract, options)
    }
}
