#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for converting route paths into OpenAPI form and deriving
//! operation ids from method + path.

/// Rewrites a route path's colon-prefixed dynamic segments into OpenAPI brace
/// syntax.
///
/// e.g. `/users/:id/:postId` -> `/users/{id}/{postId}`
///
/// Segments without a leading colon (including empty ones) pass through
/// unchanged, so reapplying the conversion is a no-op.
pub fn to_openapi_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Uppercases the first character of a word.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives a stable operation id from the HTTP method and an
/// OpenAPI-formatted path.
///
/// The root path maps to `<method>Index`; otherwise each segment is
/// capitalized and appended, with `{param}` segments contributing
/// `By<Param>`.
///
/// e.g. `GET /` -> `getIndex`, `POST /users/{id}` -> `postUsersById`
///
/// Distinct paths can collapse to the same id (e.g. `/users/{id}` vs
/// `/users/id`); collisions are not detected here.
pub fn generate_operation_id(method: &str, path: &str) -> String {
    let mut operation_id = method.to_lowercase();

    if path == "/" {
        operation_id.push_str("Index");
        return operation_id;
    }

    for segment in path.split('/') {
        match segment.strip_prefix('{') {
            Some(inner) => {
                let name = inner.strip_suffix('}').unwrap_or(inner);
                operation_id.push_str("By");
                operation_id.push_str(&capitalize(name));
            }
            None => operation_id.push_str(&capitalize(segment)),
        }
    }

    operation_id
}
