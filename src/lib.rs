#![deny(missing_docs)]

//! # oas-pathgen
//!
//! Translates a routing layer's route definitions (path, method, validation
//! schemas) into an OpenAPI v3 `paths` fragment.
//!
//! The flow mirrors how a framework documents itself: call
//! [`register_schema_path`] once per declared route while the application
//! boots, then run [`filter_paths`] once at document-assembly time to drop
//! internal/static routes and backfill undeclared path parameters. The
//! resulting [`PathsDocument`] is plain serde data, ready to embed in a full
//! OpenAPI document next to the caller's `components.schemas`.
//!
//! ```
//! use oas_pathgen::{
//!     filter_paths, register_schema_path, FilterOptions, ModelRegistry, PathsDocument,
//!     RouteHook, TypeSchema,
//! };
//!
//! let mut models = ModelRegistry::new();
//! models.insert("User".into(), TypeSchema::object());
//!
//! let mut paths = PathsDocument::new();
//! let hook = RouteHook::new().with_response("User");
//! register_schema_path(&mut paths, "/users/:id", "GET", Some(&hook), &models).unwrap();
//!
//! let paths = filter_paths(&paths, &FilterOptions::default());
//! assert!(paths.contains_key("/users/{id}"));
//! ```

/// Shared error types.
pub mod error;

/// Input data model: hooks, schemas, model registry.
pub mod schema;

/// Output data model: the OpenAPI paths fragment.
pub mod document;

/// Path formatting and operation-id synthesis.
pub mod naming;

/// Route registration into the paths fragment.
pub mod registrar;

/// Document-assembly filtering and parameter backfill.
pub mod filter;

pub use document::{
    MediaType, Operation, Parameter, ParameterLocation, PathItem, PathsDocument, RequestBody,
    Response,
};
pub use error::{PathgenError, PathgenResult};
pub use filter::{filter_paths, FilterOptions, PathMatcher};
pub use naming::{capitalize, generate_operation_id, to_openapi_path};
pub use registrar::{map_properties, map_types_response, register_schema_path};
pub use schema::{
    ContentTypes, ModelRegistry, OperationDetail, ResponseSpec, RouteHook, SchemaKind,
    SchemaSource, TypeSchema, DEFAULT_CONTENT_TYPE,
};
