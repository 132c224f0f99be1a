#![deny(missing_docs)]

//! # Schema Path Registration
//!
//! Turns one route declaration (path, method, validation hook) into an
//! OpenAPI operation entry and merges it into the accumulating paths
//! fragment.
//!
//! Lookup failures split by intent: an unresolvable model reference used for
//! header/path/query/body schemas aborts the registration, while the same
//! situation on a response schema only omits that response code. An
//! incomplete response annotation is a documentation gap, not a reason to
//! fail route registration.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use crate::document::{
    MediaType, Operation, Parameter, ParameterLocation, PathsDocument, RequestBody, Response,
};
use crate::error::{PathgenError, PathgenResult};
use crate::naming::{generate_operation_id, to_openapi_path};
use crate::schema::{
    ContentTypes, ModelRegistry, ResponseSpec, RouteHook, SchemaSource, TypeSchema,
    DEFAULT_CONTENT_TYPE,
};

/// Resolves a schema source to a concrete schema, failing on a dangling
/// registry reference.
fn resolve_schema<'a>(
    source: &'a SchemaSource,
    models: &'a ModelRegistry,
) -> PathgenResult<&'a TypeSchema> {
    match source {
        SchemaSource::Inline(schema) => Ok(schema),
        SchemaSource::Reference(name) => models
            .get(name)
            .ok_or_else(|| PathgenError::ModelNotFound(name.clone())),
    }
}

/// Converts a schema's declared properties into parameter descriptors for
/// one location.
///
/// For each property, `type` (or failing that `anyOf`) is consumed into the
/// parameter's `schema`; `anyOf` stays nested under `schema` rather than
/// being hoisted onto the parameter root. All other sub-schema fields pass
/// through onto the parameter unchanged. A property is `required` iff its
/// name appears in the parent schema's `required` list.
pub fn map_properties(
    location: ParameterLocation,
    schema: Option<&SchemaSource>,
    models: &ModelRegistry,
) -> PathgenResult<Vec<Parameter>> {
    let Some(source) = schema else {
        return Ok(Vec::new());
    };
    let schema = resolve_schema(source, models)?;

    let mut parameters = Vec::with_capacity(schema.properties.len());
    for (name, sub_schema) in &schema.properties {
        let mut extra = match sub_schema {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        let schema_type = extra.remove("type");
        let any_of = extra.remove("anyOf");
        let parameter_schema = match (schema_type, any_of) {
            (Some(ty), _) => json!({"type": ty}),
            (None, Some(alternatives)) => json!({"anyOf": alternatives}),
            (None, None) => Value::Object(Map::new()),
        };

        parameters.push(Parameter {
            extra,
            schema: parameter_schema,
            location,
            name: name.clone(),
            required: schema.required.iter().any(|required| required == name),
        });
    }

    Ok(parameters)
}

/// Builds the content map for a request body or response: one media-type
/// entry per content type.
///
/// A registry reference becomes a `$ref` pointer into
/// `#/components/schemas`; an inline schema is copied in place.
pub fn map_types_response(
    content_types: &[String],
    schema: &SchemaSource,
) -> IndexMap<String, MediaType> {
    let schema_value = match schema {
        SchemaSource::Reference(name) => {
            json!({"$ref": format!("#/components/schemas/{}", name)})
        }
        SchemaSource::Inline(inline) => inline.to_value(),
    };

    content_types
        .iter()
        .map(|content_type| {
            (
                content_type.clone(),
                MediaType {
                    schema: schema_value.clone(),
                },
            )
        })
        .collect()
}

/// Adds one response code entry.
///
/// Dangling references are skipped. Contentless inline schemas (void, null,
/// undefined) keep a description but emit no `content`; the schema's own
/// `description` is consumed into the response object, defaulting to `"OK"`.
fn add_response(
    responses: &mut IndexMap<String, Response>,
    code: &str,
    source: &SchemaSource,
    content_types: &[String],
    models: &ModelRegistry,
) {
    match source {
        SchemaSource::Reference(name) => {
            if !models.contains_key(name) {
                return;
            }
            responses.insert(
                code.to_string(),
                Response {
                    description: Some("OK".into()),
                    content: Some(map_types_response(content_types, source)),
                },
            );
        }
        SchemaSource::Inline(schema) => {
            let description = schema.description.clone().unwrap_or_else(|| "OK".into());
            let content = if schema.kind.is_contentless() {
                None
            } else {
                let mut stripped = schema.clone();
                stripped.description = None;
                Some(map_types_response(
                    content_types,
                    &SchemaSource::Inline(stripped),
                ))
            };
            responses.insert(
                code.to_string(),
                Response {
                    description: Some(description),
                    content,
                },
            );
        }
    }
}

/// Registers one (path, method) operation into the accumulating paths
/// fragment.
///
/// The hook is cloned up front so nested reshaping never touches
/// caller-owned data. Existing method entries on the same path are
/// preserved; re-registering the same method overwrites it.
pub fn register_schema_path(
    document: &mut PathsDocument,
    path: &str,
    method: &str,
    hook: Option<&RouteHook>,
    models: &ModelRegistry,
) -> PathgenResult<()> {
    // Owned copy before any reshaping of nested schema data.
    let hook = hook.cloned();

    let content_types = hook
        .as_ref()
        .and_then(|h| h.content_type.as_ref())
        .map(ContentTypes::to_vec)
        .unwrap_or_else(|| vec![DEFAULT_CONTENT_TYPE.to_string()]);

    let path = to_openapi_path(path);

    let mut responses: IndexMap<String, Response> = IndexMap::new();
    if let Some(spec) = hook.as_ref().and_then(|h| h.response.as_ref()) {
        match spec {
            ResponseSpec::One(source) => {
                add_response(&mut responses, "200", source, &content_types, models);
            }
            ResponseSpec::ByStatus(by_status) => {
                for (code, source) in by_status {
                    add_response(&mut responses, code, source, &content_types, models);
                }
            }
        }
    }

    let header_schema = hook.as_ref().and_then(|h| h.headers.as_ref());
    let params_schema = hook.as_ref().and_then(|h| h.params.as_ref());
    let query_schema = hook.as_ref().and_then(|h| h.query.as_ref());
    let body_schema = hook.as_ref().and_then(|h| h.body.as_ref());

    // Fixed order: header, path, query.
    let mut parameters = map_properties(ParameterLocation::Header, header_schema, models)?;
    parameters.extend(map_properties(ParameterLocation::Path, params_schema, models)?);
    parameters.extend(map_properties(ParameterLocation::Query, query_schema, models)?);

    let request_body = match body_schema {
        Some(source) => {
            if let SchemaSource::Reference(name) = source {
                if !models.contains_key(name) {
                    return Err(PathgenError::ModelNotFound(name.clone()));
                }
            }
            Some(RequestBody {
                content: map_types_response(&content_types, source),
            })
        }
        None => None,
    };

    let has_schemas = header_schema.is_some()
        || params_schema.is_some()
        || query_schema.is_some()
        || body_schema.is_some();

    let detail = hook.and_then(|h| h.detail);
    let operation_id = detail
        .as_ref()
        .and_then(|d| d.operation_id.clone())
        .unwrap_or_else(|| generate_operation_id(method, &path));

    let operation = Operation {
        operation_id,
        detail: detail.map(|d| d.extra).unwrap_or_default(),
        parameters: has_schemas.then_some(parameters),
        request_body,
        responses,
    };

    document
        .entry(path)
        .or_default()
        .insert(method.to_lowercase(), operation);

    Ok(())
}
