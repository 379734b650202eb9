//! Tests for whole-contract OpenAPI 3 documents.

use cairn_codegen::{CompileError, DocumentOptions, OutputFormat, SchemaCompiler};
use cairn_codegen_openapi3::{OpenApi3Compiler, openapi3_document};
use cairn_ir::{ContractDefinition, QueryArrayStrategy};
use serde_json::{Value, json};

fn pet_shop() -> ContractDefinition {
    serde_json::from_value(json!({
        "api": {
            "name": "Pet Shop",
            "description": "Sells pets",
            "security_header": {"name": "x-api-key", "description": "Shop key", "type": {"kind": "string"}}
        },
        "types": [
            {
                "name": "Dog",
                "type": {"kind": "object", "properties": [
                    {"name": "kind", "type": {"kind": "string-literal", "value": "dog"}},
                    {"name": "barks", "type": {"kind": "boolean"}}
                ]}
            },
            {
                "name": "Cat",
                "type": {"kind": "object", "properties": [
                    {"name": "kind", "type": {"kind": "string-literal", "value": "cat"}},
                    {"name": "lives", "optional": true, "type": {"kind": "int32"}}
                ]}
            },
            {
                "name": "Pet",
                "description": "Any pet",
                "type": {"kind": "union", "types": [
                    {"kind": "reference", "name": "Dog", "reference_kind": "object"},
                    {"kind": "reference", "name": "Cat", "reference_kind": "object"}
                ]}
            }
        ],
        "endpoints": [
            {
                "name": "listPets",
                "description": "List pets for sale",
                "method": "GET",
                "path": [{"kind": "static", "value": "/pets"}],
                "request": {
                    "query_params": [{
                        "name": "ids",
                        "optional": true,
                        "type": {"kind": "array", "elements": {"kind": "int64"}}
                    }]
                },
                "responses": [{
                    "status": 200,
                    "headers": [{"name": "x-total", "type": {"kind": "int32"}}],
                    "body": {"type": {"kind": "array", "elements": {"kind": "reference", "name": "Pet", "reference_kind": "union"}}}
                }]
            },
            {
                "name": "addPet",
                "method": "POST",
                "path": [{"kind": "static", "value": "/pets"}],
                "request": {
                    "body": {"type": {"kind": "reference", "name": "Pet", "reference_kind": "union"}}
                },
                "responses": [{"status": 204}]
            }
        ]
    }))
    .expect("valid contract")
}

fn document(contract: &ContractDefinition) -> Value {
    let options = DocumentOptions {
        api_version: "1.2.0".to_string(),
    };
    let document = openapi3_document(contract, &options).expect("document compiles");
    serde_json::to_value(document).unwrap()
}

#[test]
fn test_document() {
    assert_eq!(
        document(&pet_shop()),
        json!({
            "openapi": "3.0.0",
            "info": {"title": "Pet Shop", "description": "Sells pets", "version": "1.2.0"},
            "paths": {
                "/pets": {
                    "get": {
                        "operationId": "listPets",
                        "description": "List pets for sale",
                        "parameters": [{
                            "name": "ids",
                            "in": "query",
                            "required": false,
                            "style": "form",
                            "explode": true,
                            "schema": {"type": "array", "items": {"type": "integer", "format": "int64"}}
                        }],
                        "responses": {
                            "200": {
                                "description": "200 response",
                                "headers": {
                                    "x-total": {
                                        "required": true,
                                        "schema": {"type": "integer", "format": "int32"}
                                    }
                                },
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {"$ref": "#/components/schemas/Pet"}
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "operationId": "addPet",
                        "requestBody": {
                            "content": {
                                "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
                            },
                            "required": true
                        },
                        "responses": {"204": {"description": "204 response"}}
                    }
                }
            },
            "components": {
                "schemas": {
                    "Dog": {
                        "type": "object",
                        "properties": {
                            "kind": {"type": "string", "enum": ["dog"]},
                            "barks": {"type": "boolean"}
                        },
                        "required": ["kind", "barks"]
                    },
                    "Cat": {
                        "type": "object",
                        "properties": {
                            "kind": {"type": "string", "enum": ["cat"]},
                            "lives": {"type": "integer", "format": "int32"}
                        },
                        "required": ["kind"]
                    },
                    "Pet": {
                        "description": "Any pet",
                        "oneOf": [
                            {"$ref": "#/components/schemas/Dog"},
                            {"$ref": "#/components/schemas/Cat"}
                        ],
                        "discriminator": {
                            "propertyName": "kind",
                            "mapping": {
                                "dog": "#/components/schemas/Dog",
                                "cat": "#/components/schemas/Cat"
                            }
                        }
                    }
                },
                "securitySchemes": {
                    "SecurityHeader": {
                        "type": "apiKey",
                        "in": "header",
                        "name": "x-api-key",
                        "description": "Shop key"
                    }
                }
            },
            "security": [{"SecurityHeader": []}]
        })
    );
}

#[test]
fn test_comma_query_arrays_do_not_explode() {
    let mut contract = pet_shop();
    contract.config.query_array_strategy = QueryArrayStrategy::Comma;
    let document = document(&contract);
    let parameter = &document["paths"]["/pets"]["get"]["parameters"][0];
    assert_eq!(parameter["style"], json!("form"));
    assert_eq!(parameter["explode"], json!(false));
}

#[test]
fn test_html_body_is_string_content() {
    let mut contract = pet_shop();
    let request = contract.endpoints[1].request.as_mut().unwrap();
    request.headers = serde_json::from_value(json!([
        {"name": "Content-Type", "type": {"kind": "string-literal", "value": "text/html"}}
    ]))
    .unwrap();

    let document = document(&contract);
    assert_eq!(
        document["paths"]["/pets"]["post"]["requestBody"]["content"],
        json!({"text/html": {"schema": {"type": "string"}}})
    );
}

#[test]
fn test_array_of_objects_parameter_rejected() {
    let mut contract = pet_shop();
    let request = contract.endpoints[0].request.as_mut().unwrap();
    request.query_params[0].ty = serde_json::from_value(json!({
        "kind": "array",
        "elements": {"kind": "reference", "name": "Dog", "reference_kind": "object"}
    }))
    .unwrap();

    let error = OpenApi3Compiler
        .document(&contract, &DocumentOptions::default())
        .unwrap_err();
    assert!(matches!(error, CompileError::UnsupportedObjectParameter { .. }));
    assert_eq!(error.path().to_string(), "listPets.query.ids[]");
}

#[test]
fn test_discriminated_component_snapshot() {
    let document = openapi3_document(&pet_shop(), &DocumentOptions::default()).unwrap();
    let text = OutputFormat::Json
        .render(&document.components.schemas["Pet"])
        .unwrap();

    insta::assert_snapshot!(text, @r###"
    {
      "description": "Any pet",
      "oneOf": [
        {
          "$ref": "#/components/schemas/Dog"
        },
        {
          "$ref": "#/components/schemas/Cat"
        }
      ],
      "discriminator": {
        "propertyName": "kind",
        "mapping": {
          "dog": "#/components/schemas/Dog",
          "cat": "#/components/schemas/Cat"
        }
      }
    }
    "###);
}
