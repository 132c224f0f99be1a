//! # Error Handling
//!
//! Provides the unified `PathgenError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate. The only fatal condition in this
/// crate is a named schema reference that cannot be resolved against the
/// model registry.
#[derive(Debug, Display, From)]
pub enum PathgenError {
    /// A schema reference whose name has no entry in the model registry.
    #[display("Can't find model {_0}")]
    ModelNotFound(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for PathgenError {}

/// Helper type alias for Result using PathgenError.
pub type PathgenResult<T> = Result<T, PathgenError>;
