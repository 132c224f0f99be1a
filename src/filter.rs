#![deny(missing_docs)]

//! # Path Filtering
//!
//! Document-assembly pass over the accumulated paths fragment: drops
//! internal/static routes and backfills path parameters the registrations
//! left undeclared.
//!
//! The input document is left untouched; surviving entries are cloned into a
//! fresh map. Applying the pass to its own output is a no-op.

use regex::Regex;

use crate::document::{Parameter, ParameterLocation, PathsDocument, Response};

/// Marker segment of the crate's own documentation routes.
const DOCS_ROUTE_MARKER: &str = "/swagger";

/// Wildcard marker; wildcard routes never document well.
const WILDCARD_MARKER: char = '*';

/// One entry of [`FilterOptions::exclude`].
#[derive(Debug, Clone)]
pub enum PathMatcher {
    /// Exact string equality against the OpenAPI-formatted path.
    Exact(String),
    /// Regex test against the OpenAPI-formatted path.
    Pattern(Regex),
}

impl PathMatcher {
    /// True when the matcher excludes the given path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatcher::Exact(exact) => exact == path,
            PathMatcher::Pattern(pattern) => pattern.is_match(path),
        }
    }
}

impl From<&str> for PathMatcher {
    fn from(exact: &str) -> Self {
        PathMatcher::Exact(exact.to_string())
    }
}

impl From<String> for PathMatcher {
    fn from(exact: String) -> Self {
        PathMatcher::Exact(exact)
    }
}

impl From<Regex> for PathMatcher {
    fn from(pattern: Regex) -> Self {
        PathMatcher::Pattern(pattern)
    }
}

/// Options controlling [`filter_paths`].
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Drop any path containing a literal dot.
    ///
    /// This is a deliberately blunt static-asset heuristic: it also rejects
    /// legitimate dotted resource names such as `/v1.2/users` or
    /// `/files/report.pdf`. Switch it off when such routes should stay
    /// documented. Defaults to `true`.
    pub exclude_static_file: bool,

    /// Paths to drop, by exact match or pattern.
    pub exclude: Vec<PathMatcher>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            exclude_static_file: true,
            exclude: Vec::new(),
        }
    }
}

impl FilterOptions {
    fn excludes(&self, path: &str) -> bool {
        self.exclude.iter().any(|matcher| matcher.matches(path))
            || path.contains(DOCS_ROUTE_MARKER)
            || path.contains(WILDCARD_MARKER)
            || (self.exclude_static_file && path.contains('.'))
    }
}

/// Parameter names declared by `{...}` segments of an OpenAPI path, in path
/// order.
fn brace_parameters(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
}

/// Produces the final paths fragment: excluded routes dropped, missing path
/// parameters and default responses backfilled on the survivors.
///
/// For every `{param}` segment not already declared as a path-location
/// parameter on a method, a required string parameter is synthesized and
/// prepended (in path order). Methods whose `responses` map came through
/// empty gain a default `200` entry.
pub fn filter_paths(paths: &PathsDocument, options: &FilterOptions) -> PathsDocument {
    let mut filtered = PathsDocument::new();

    for (path, item) in paths {
        if options.excludes(path) {
            continue;
        }

        let mut item = item.clone();
        for operation in item.values_mut() {
            if path.contains('{') {
                let existing = operation.parameters.take().unwrap_or_default();
                let mut parameters: Vec<Parameter> = brace_parameters(path)
                    .filter(|name| {
                        !existing.iter().any(|parameter| {
                            parameter.location == ParameterLocation::Path
                                && parameter.name == *name
                        })
                    })
                    .map(Parameter::synthesized_path)
                    .collect();
                parameters.extend(existing);
                operation.parameters = Some(parameters);
            }

            if operation.responses.is_empty() {
                operation
                    .responses
                    .insert("200".to_string(), Response::default());
            }
        }

        filtered.insert(path.clone(), item);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Operation, PathItem};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use serde_json::Map;

    fn bare_operation(operation_id: &str) -> Operation {
        Operation {
            operation_id: operation_id.into(),
            detail: Map::new(),
            parameters: None,
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    fn document_with(paths: &[&str]) -> PathsDocument {
        let mut document = PathsDocument::new();
        for path in paths {
            let mut item = PathItem::new();
            item.insert("get".to_string(), bare_operation("op"));
            document.insert((*path).to_string(), item);
        }
        document
    }

    #[test]
    fn test_drops_static_files_and_docs_routes() {
        let document = document_with(&["/users", "/robots.txt", "/swagger/json", "/assets/*"]);

        let filtered = filter_paths(&document, &FilterOptions::default());

        assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["/users"]);
    }

    #[test]
    fn test_static_file_heuristic_can_be_disabled() {
        let document = document_with(&["/v1.2/users"]);

        let kept = filter_paths(
            &document,
            &FilterOptions {
                exclude_static_file: false,
                ..FilterOptions::default()
            },
        );
        assert!(kept.contains_key("/v1.2/users"));

        let dropped = filter_paths(&document, &FilterOptions::default());
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_exact_and_pattern_exclusion() {
        let document = document_with(&["/users", "/internal/users", "/admin"]);
        let options = FilterOptions {
            exclude: vec![
                PathMatcher::from("/admin"),
                PathMatcher::from(Regex::new("^/internal").unwrap()),
            ],
            ..FilterOptions::default()
        };

        let filtered = filter_paths(&document, &options);

        assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["/users"]);
    }

    #[test]
    fn test_exact_exclusion_is_not_substring_match() {
        let document = document_with(&["/users", "/users/all"]);
        let options = FilterOptions {
            exclude: vec![PathMatcher::from("/users")],
            ..FilterOptions::default()
        };

        let filtered = filter_paths(&document, &options);

        assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["/users/all"]);
    }

    #[test]
    fn test_backfills_missing_path_parameter() {
        let document = document_with(&["/users/{id}"]);

        let filtered = filter_paths(&document, &FilterOptions::default());

        let operation = filtered.get("/users/{id}").unwrap().get("get").unwrap();
        let parameters = operation.parameters.as_ref().unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0], Parameter::synthesized_path("id"));
    }

    #[test]
    fn test_backfill_prepends_before_existing_parameters() {
        let mut document = document_with(&["/users/{id}/{postId}"]);
        let operation = document
            .get_mut("/users/{id}/{postId}")
            .unwrap()
            .get_mut("get")
            .unwrap();
        operation.parameters = Some(vec![Parameter::synthesized_path("postId")]);

        let filtered = filter_paths(&document, &FilterOptions::default());

        let parameters = filtered
            .get("/users/{id}/{postId}")
            .unwrap()
            .get("get")
            .unwrap()
            .parameters
            .clone()
            .unwrap();
        let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
        // "id" is synthesized and prepended; the declared "postId" keeps its slot.
        assert_eq!(names, vec!["id", "postId"]);
    }

    #[test]
    fn test_declared_path_parameters_are_not_duplicated() {
        let mut document = document_with(&["/users/{id}"]);
        document
            .get_mut("/users/{id}")
            .unwrap()
            .get_mut("get")
            .unwrap()
            .parameters = Some(vec![Parameter::synthesized_path("id")]);

        let filtered = filter_paths(&document, &FilterOptions::default());

        let parameters = filtered
            .get("/users/{id}")
            .unwrap()
            .get("get")
            .unwrap()
            .parameters
            .clone()
            .unwrap();
        assert_eq!(parameters.len(), 1);
    }

    #[test]
    fn test_backfills_default_response() {
        let document = document_with(&["/users"]);

        let filtered = filter_paths(&document, &FilterOptions::default());

        let responses = &filtered.get("/users").unwrap().get("get").unwrap().responses;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses["200"], Response::default());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let document = document_with(&["/users/{id}", "/health"]);
        let options = FilterOptions::default();

        let once = filter_paths(&document, &options);
        let twice = filter_paths(&once, &options);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_document_is_untouched() {
        let document = document_with(&["/users/{id}"]);
        let before = document.clone();

        let _ = filter_paths(&document, &FilterOptions::default());

        assert_eq!(document, before);
    }
}
