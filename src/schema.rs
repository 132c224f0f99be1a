#![deny(missing_docs)]

//! # Route Schemas
//!
//! Input-side data model: the validation schemas a routing layer attaches to
//! its routes (body/params/headers/query/response), either inline or as named
//! references into a shared model registry.
//!
//! Reference-vs-inline and single-vs-by-status choices are represented as sum
//! types so that consumers match exhaustively instead of inspecting values at
//! runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The default request/response content type when a hook declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Lookup table of named, reusable validation schemas.
///
/// Keys are model names as referenced by [`SchemaSource::Reference`]; values
/// land in the host document under `components.schemas`.
pub type ModelRegistry = IndexMap<String, TypeSchema>;

/// Structural discriminant of an inline schema.
///
/// Only the no-content kinds are distinguished; everything else behaves
/// identically during registration. The kind never serializes into the
/// generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaKind {
    /// Any ordinary value-carrying schema.
    #[default]
    Unspecified,
    /// Schema of an absent value.
    Undefined,
    /// Schema of an explicit null.
    Null,
    /// Schema of a handler returning nothing.
    Void,
}

impl SchemaKind {
    /// True for kinds that represent a response without a body.
    pub fn is_contentless(self) -> bool {
        matches!(self, SchemaKind::Undefined | SchemaKind::Null | SchemaKind::Void)
    }
}

/// An inline validation schema.
///
/// Known fields (`type`, `anyOf`, `properties`, `required`, `description`)
/// are typed; everything else (`format`, `example`, vendor extensions, ...)
/// rides along in `extra` and passes through to the output unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeSchema {
    /// Structural discriminant; not part of the serialized form.
    #[serde(skip)]
    pub kind: SchemaKind,

    /// Human-readable description. For response schemas this is consumed
    /// into the response object instead of the media-type schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// JSON Schema `type` keyword.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// JSON Schema `anyOf` alternatives.
    #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Value>>,

    /// Declared properties, in declaration order. Each value is the raw
    /// sub-schema object for that property.
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub properties: IndexMap<String, Value>,

    /// Names of required properties.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,

    /// Any remaining schema fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypeSchema {
    /// An object schema with no properties yet.
    pub fn object() -> Self {
        TypeSchema {
            schema_type: Some("object".into()),
            ..TypeSchema::default()
        }
    }

    /// A schema carrying only a `type` keyword.
    pub fn of_type(ty: impl Into<String>) -> Self {
        TypeSchema {
            schema_type: Some(ty.into()),
            ..TypeSchema::default()
        }
    }

    /// A void schema (no response body).
    pub fn void() -> Self {
        TypeSchema {
            kind: SchemaKind::Void,
            ..TypeSchema::default()
        }
    }

    /// A null schema (no response body).
    pub fn null() -> Self {
        TypeSchema {
            kind: SchemaKind::Null,
            schema_type: Some("null".into()),
            ..TypeSchema::default()
        }
    }

    /// An undefined schema (no response body).
    pub fn undefined() -> Self {
        TypeSchema {
            kind: SchemaKind::Undefined,
            ..TypeSchema::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a property with its raw sub-schema.
    pub fn with_property(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Marks a property name as required.
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Attaches a passthrough field.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Serializes the schema into a JSON object value.
    ///
    /// Built by hand rather than through `serde_json::to_value` so the call
    /// is total; field order matches the serde layout.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(description) = &self.description {
            map.insert("description".into(), Value::String(description.clone()));
        }
        if let Some(ty) = &self.schema_type {
            map.insert("type".into(), Value::String(ty.clone()));
        }
        if let Some(any_of) = &self.any_of {
            map.insert("anyOf".into(), Value::Array(any_of.clone()));
        }
        if !self.properties.is_empty() {
            let mut properties = Map::new();
            for (name, sub) in &self.properties {
                properties.insert(name.clone(), sub.clone());
            }
            map.insert("properties".into(), Value::Object(properties));
        }
        if !self.required.is_empty() {
            map.insert(
                "required".into(),
                Value::Array(self.required.iter().cloned().map(Value::String).collect()),
            );
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

/// A schema attached to a route: either a named reference into the
/// [`ModelRegistry`] or an inline [`TypeSchema`].
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaSource {
    /// Named reference, resolved against the registry.
    Reference(String),
    /// Inline schema, used as-is.
    Inline(TypeSchema),
}

impl From<&str> for SchemaSource {
    fn from(name: &str) -> Self {
        SchemaSource::Reference(name.to_string())
    }
}

impl From<String> for SchemaSource {
    fn from(name: String) -> Self {
        SchemaSource::Reference(name)
    }
}

impl From<TypeSchema> for SchemaSource {
    fn from(schema: TypeSchema) -> Self {
        SchemaSource::Inline(schema)
    }
}

/// Response declaration on a route hook.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseSpec {
    /// A single schema, registered under status code `200`.
    One(SchemaSource),
    /// Explicit mapping from status code to schema.
    ByStatus(IndexMap<String, SchemaSource>),
}

impl From<SchemaSource> for ResponseSpec {
    fn from(source: SchemaSource) -> Self {
        ResponseSpec::One(source)
    }
}

impl From<TypeSchema> for ResponseSpec {
    fn from(schema: TypeSchema) -> Self {
        ResponseSpec::One(SchemaSource::Inline(schema))
    }
}

impl From<&str> for ResponseSpec {
    fn from(name: &str) -> Self {
        ResponseSpec::One(SchemaSource::Reference(name.to_string()))
    }
}

/// Content types declared on a route hook.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentTypes {
    /// A single content type.
    One(String),
    /// An explicit list.
    Many(Vec<String>),
}

impl ContentTypes {
    /// Normalizes into a list of content types.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ContentTypes::One(ty) => vec![ty.clone()],
            ContentTypes::Many(list) => list.clone(),
        }
    }
}

/// User-supplied operation fields, merged into the generated operation.
///
/// `operationId` is typed because it overrides the synthesized id; everything
/// else (`summary`, `tags`, `deprecated`, ...) flows through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationDetail {
    /// Explicit operation id; wins over the synthesized one.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Remaining operation fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OperationDetail {
    /// Detail carrying only an explicit operation id.
    pub fn with_operation_id(id: impl Into<String>) -> Self {
        OperationDetail {
            operation_id: Some(id.into()),
            ..OperationDetail::default()
        }
    }

    /// Attaches a passthrough operation field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// The validation bundle a routing layer attaches to one route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteHook {
    /// Request body schema.
    pub body: Option<SchemaSource>,
    /// Path parameter schema.
    pub params: Option<SchemaSource>,
    /// Header schema.
    pub headers: Option<SchemaSource>,
    /// Query string schema.
    pub query: Option<SchemaSource>,
    /// Response declaration.
    pub response: Option<ResponseSpec>,
    /// Content type override; defaults to `application/json`.
    pub content_type: Option<ContentTypes>,
    /// Operation detail overrides.
    pub detail: Option<OperationDetail>,
}

impl RouteHook {
    /// An empty hook.
    pub fn new() -> Self {
        RouteHook::default()
    }

    /// Sets the request body schema.
    pub fn with_body(mut self, schema: impl Into<SchemaSource>) -> Self {
        self.body = Some(schema.into());
        self
    }

    /// Sets the path parameter schema.
    pub fn with_params(mut self, schema: impl Into<SchemaSource>) -> Self {
        self.params = Some(schema.into());
        self
    }

    /// Sets the header schema.
    pub fn with_headers(mut self, schema: impl Into<SchemaSource>) -> Self {
        self.headers = Some(schema.into());
        self
    }

    /// Sets the query string schema.
    pub fn with_query(mut self, schema: impl Into<SchemaSource>) -> Self {
        self.query = Some(schema.into());
        self
    }

    /// Sets the response declaration.
    pub fn with_response(mut self, response: impl Into<ResponseSpec>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// Overrides the content type(s).
    pub fn with_content_type(mut self, content_type: ContentTypes) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Sets operation detail overrides.
    pub fn with_detail(mut self, detail: OperationDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_to_value_field_order_and_passthrough() {
        let schema = TypeSchema::object()
            .with_property("id", json!({"type": "string"}))
            .with_required("id")
            .with_extra("additionalProperties", json!(false));

        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "properties": {"id": {"type": "string"}},
                "required": ["id"],
                "additionalProperties": false
            })
        );
    }

    #[test]
    fn test_kind_never_serializes() {
        let value = serde_json::to_value(TypeSchema::void()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_contentless_kinds() {
        assert!(SchemaKind::Void.is_contentless());
        assert!(SchemaKind::Null.is_contentless());
        assert!(SchemaKind::Undefined.is_contentless());
        assert!(!SchemaKind::Unspecified.is_contentless());
    }

    #[test]
    fn test_content_types_to_vec() {
        assert_eq!(
            ContentTypes::One("text/plain".into()).to_vec(),
            vec!["text/plain".to_string()]
        );
        assert_eq!(
            ContentTypes::Many(vec!["a/b".into(), "c/d".into()]).to_vec(),
            vec!["a/b".to_string(), "c/d".to_string()]
        );
    }

    #[test]
    fn test_schema_source_conversions() {
        assert_eq!(
            SchemaSource::from("User"),
            SchemaSource::Reference("User".into())
        );
        assert!(matches!(
            SchemaSource::from(TypeSchema::of_type("string")),
            SchemaSource::Inline(_)
        ));
    }

    #[test]
    fn test_operation_detail_deserializes_flattened_fields() {
        let detail: OperationDetail = serde_json::from_value(json!({
            "operationId": "listUsers",
            "summary": "List users",
            "tags": ["users"]
        }))
        .unwrap();

        assert_eq!(detail.operation_id.as_deref(), Some("listUsers"));
        assert_eq!(detail.extra.get("summary"), Some(&json!("List users")));
        assert_eq!(detail.extra.get("tags"), Some(&json!(["users"])));
    }
}
