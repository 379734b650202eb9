//! Tests for whole-contract OpenAPI 2 documents.

use cairn_codegen::{CompileError, DocumentOptions, OutputFormat, SchemaCompiler};
use cairn_codegen_openapi2::{OpenApi2Compiler, openapi2_document};
use cairn_ir::{ContractDefinition, QueryArrayStrategy};
use serde_json::{Value, json};

fn company_api() -> ContractDefinition {
    serde_json::from_value(json!({
        "api": {
            "name": "Company API",
            "security_header": {"name": "x-auth-token", "type": {"kind": "string"}}
        },
        "types": [
            {
                "name": "Company",
                "type": {"kind": "object", "properties": [
                    {"name": "id", "type": {"kind": "string"}},
                    {"name": "name", "description": "Legal name", "type": {"kind": "string"}},
                    {"name": "size", "optional": true, "type": {"kind": "union", "types": [
                        {"kind": "string-literal", "value": "small"},
                        {"kind": "string-literal", "value": "large"}
                    ]}}
                ]}
            },
            {
                "name": "Error",
                "type": {"kind": "object", "properties": [
                    {"name": "message", "type": {"kind": "string"}}
                ]}
            }
        ],
        "endpoints": [
            {
                "name": "getCompany",
                "tags": ["Company"],
                "method": "GET",
                "path": [
                    {"kind": "static", "value": "/companies/"},
                    {"kind": "dynamic", "value": "companyId"}
                ],
                "request": {
                    "path_params": [{"name": "companyId", "type": {"kind": "string"}}],
                    "query_params": [{
                        "name": "fields",
                        "optional": true,
                        "type": {"kind": "array", "elements": {"kind": "string"}}
                    }]
                },
                "responses": [
                    {"status": 200, "body": {"type": {"kind": "reference", "name": "Company", "reference_kind": "object"}}}
                ],
                "default_response": {
                    "body": {"type": {"kind": "reference", "name": "Error", "reference_kind": "object"}}
                }
            },
            {
                "name": "createCompany",
                "method": "POST",
                "path": [{"kind": "static", "value": "/companies"}],
                "request": {
                    "headers": [{"name": "x-request-id", "optional": true, "type": {"kind": "string"}}],
                    "body": {
                        "description": "Company to create",
                        "type": {"kind": "reference", "name": "Company", "reference_kind": "object"}
                    }
                },
                "responses": [
                    {"status": 201, "description": "Created", "body": {"type": {"kind": "reference", "name": "Company", "reference_kind": "object"}}}
                ]
            }
        ]
    }))
    .expect("valid contract")
}

fn document(contract: &ContractDefinition) -> Value {
    let document = openapi2_document(contract, &DocumentOptions::default()).expect("document compiles");
    serde_json::to_value(document).unwrap()
}

#[test]
fn test_document() {
    assert_eq!(
        document(&company_api()),
        json!({
            "swagger": "2.0",
            "info": {"title": "Company API", "version": "0.0.0"},
            "consumes": ["application/json"],
            "produces": ["application/json"],
            "paths": {
                "/companies/{companyId}": {
                    "get": {
                        "operationId": "getCompany",
                        "tags": ["Company"],
                        "parameters": [
                            {"name": "companyId", "in": "path", "required": true, "type": "string"},
                            {
                                "name": "fields",
                                "in": "query",
                                "required": false,
                                "type": "array",
                                "items": {"type": "string"},
                                "collectionFormat": "multi"
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "200 response",
                                "schema": {"$ref": "#/definitions/Company"}
                            },
                            "default": {
                                "description": "default response",
                                "schema": {"$ref": "#/definitions/Error"}
                            }
                        }
                    }
                },
                "/companies": {
                    "post": {
                        "operationId": "createCompany",
                        "parameters": [
                            {"name": "x-request-id", "in": "header", "required": false, "type": "string"},
                            {
                                "name": "body",
                                "in": "body",
                                "description": "Company to create",
                                "required": true,
                                "schema": {"$ref": "#/definitions/Company"}
                            }
                        ],
                        "responses": {
                            "201": {"description": "Created", "schema": {"$ref": "#/definitions/Company"}}
                        }
                    }
                }
            },
            "definitions": {
                "Company": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "string"},
                        "name": {"type": "string", "description": "Legal name"},
                        "size": {"type": "string", "enum": ["small", "large"]}
                    },
                    "required": ["id", "name"]
                },
                "Error": {
                    "type": "object",
                    "properties": {"message": {"type": "string"}},
                    "required": ["message"]
                }
            },
            "securityDefinitions": {
                "SecurityHeader": {"type": "apiKey", "in": "header", "name": "x-auth-token"}
            },
            "security": [{"SecurityHeader": []}]
        })
    );
}

#[test]
fn test_comma_query_arrays_are_csv() {
    let mut contract = company_api();
    contract.config.query_array_strategy = QueryArrayStrategy::Comma;
    let document = document(&contract);
    assert_eq!(
        document["paths"]["/companies/{companyId}"]["get"]["parameters"][1]["collectionFormat"],
        json!("csv")
    );
}

#[test]
fn test_object_query_parameter_rejected() {
    let mut contract = company_api();
    let request = contract.endpoints[0].request.as_mut().unwrap();
    request.query_params[0].ty = serde_json::from_value(
        json!({"kind": "reference", "name": "Company", "reference_kind": "object"}),
    )
    .unwrap();

    let error = openapi2_document(&contract, &DocumentOptions::default()).unwrap_err();
    assert!(matches!(error, CompileError::UnsupportedObjectParameter { .. }));
    assert_eq!(error.path().to_string(), "getCompany.query.fields");
}

#[test]
fn test_html_response() {
    let mut contract = company_api();
    let response = &mut contract.endpoints[0].responses[0];
    response.headers = serde_json::from_value(json!([
        {"name": "Content-Type", "type": {"kind": "string-literal", "value": "text/html"}}
    ]))
    .unwrap();
    response.body = serde_json::from_value(json!({"type": {"kind": "string"}})).unwrap();

    let document = document(&contract);
    let operation = &document["paths"]["/companies/{companyId}"]["get"];
    assert_eq!(operation["produces"], json!(["text/html", "application/json"]));
    assert_eq!(operation["responses"]["200"]["schema"], json!({"type": "string"}));
}

#[test]
fn test_yaml_output() {
    let contract = company_api();
    let document = OpenApi2Compiler
        .document(&contract, &DocumentOptions::default())
        .expect("document compiles");
    let text = OutputFormat::Yaml.render(&document).expect("document renders");
    assert!(text.starts_with("swagger:"));
    assert!(text.contains("operationId: getCompany"));
}

#[test]
fn test_definition_snapshot() {
    let document = openapi2_document(&company_api(), &DocumentOptions::default()).unwrap();
    let text = OutputFormat::Json
        .render(&document.definitions["Company"])
        .unwrap();

    insta::assert_snapshot!(text, @r###"
    {
      "type": "object",
      "properties": {
        "id": {
          "type": "string"
        },
        "name": {
          "type": "string",
          "description": "Legal name"
        },
        "size": {
          "type": "string",
          "enum": [
            "small",
            "large"
          ]
        }
      },
      "required": [
        "id",
        "name"
      ]
    }
    "###);
}
