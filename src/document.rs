#![deny(missing_docs)]

//! # Paths Document
//!
//! Output-side data model: the OpenAPI v3 `paths` fragment assembled by
//! registration. All maps preserve insertion order so the emitted JSON keeps
//! registration/declaration order.
//!
//! Optional members carry `skip_serializing_if` so absent pieces vanish from
//! the serialized fragment instead of appearing as `null`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The accumulating `paths` fragment: OpenAPI path -> path item.
pub type PathsDocument = IndexMap<String, PathItem>;

/// One path's operations, keyed by lowercase HTTP method.
pub type PathItem = IndexMap<String, Operation>;

/// Where a parameter lives in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Request header.
    Header,
    /// Path segment.
    Path,
    /// Query string.
    Query,
}

/// One header/path/query input to an operation.
///
/// Field order mirrors the emitted object: passthrough fields first, then
/// `schema`, `in`, `name`, `required`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Fields carried over from the property sub-schema (description,
    /// format, examples, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// The parameter's value schema (`{"type": ...}` or `{"anyOf": [...]}`).
    pub schema: Value,

    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,

    /// Parameter name.
    pub name: String,

    /// Whether the input is mandatory.
    pub required: bool,
}

impl Parameter {
    /// The required string parameter synthesized for an undeclared `{name}`
    /// path segment during filtering.
    pub fn synthesized_path(name: impl Into<String>) -> Self {
        Parameter {
            extra: Map::new(),
            schema: json!({"type": "string"}),
            location: ParameterLocation::Path,
            name: name.into(),
            required: true,
        }
    }
}

/// Media-type object: the schema of one content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Concrete schema or `$ref` pointer.
    pub schema: Value,
}

/// Request body of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content keyed by content type.
    pub content: IndexMap<String, MediaType>,
}

/// One response entry of an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Human-readable description; defaults to `"OK"` during registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Response content keyed by content type. Absent for no-content
    /// responses (void/null/undefined schemas).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// One HTTP method on one path.
///
/// Serialization order is fixed: `operationId`, user detail fields,
/// `parameters`, `requestBody`, `responses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Stable operation identifier (user-supplied or synthesized).
    #[serde(rename = "operationId")]
    pub operation_id: String,

    /// User-provided operation fields (summary, tags, ...), verbatim.
    #[serde(flatten)]
    pub detail: Map<String, Value>,

    /// Parameter list; present iff the route declared any of
    /// header/params/query/body schemas, or filtering backfilled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    /// Request body; present iff the route declared a body schema.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Response map; always serialized, possibly empty until filtering
    /// backfills the default `200`.
    pub responses: IndexMap<String, Response>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_serialization_shape() {
        let mut extra = Map::new();
        extra.insert("description".into(), json!("User id"));
        let param = Parameter {
            extra,
            schema: json!({"type": "string"}),
            location: ParameterLocation::Path,
            name: "id".into(),
            required: true,
        };

        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({
                "description": "User id",
                "schema": {"type": "string"},
                "in": "path",
                "name": "id",
                "required": true
            })
        );
    }

    #[test]
    fn test_synthesized_path_parameter() {
        let param = Parameter::synthesized_path("postId");
        assert_eq!(param.location, ParameterLocation::Path);
        assert!(param.required);
        assert_eq!(param.schema, json!({"type": "string"}));
        assert!(param.extra.is_empty());
    }

    #[test]
    fn test_default_response_serializes_empty() {
        assert_eq!(serde_json::to_value(Response::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_operation_omits_absent_members() {
        let op = Operation {
            operation_id: "getIndex".into(),
            detail: Map::new(),
            parameters: None,
            request_body: None,
            responses: IndexMap::new(),
        };

        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"operationId": "getIndex", "responses": {}})
        );
    }
}
