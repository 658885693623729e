//! Error types for xilian-router

use thiserror::Error;

/// Result type alias for router operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for building and navigating a route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two routes share a path pattern
    #[error("Duplicate route path: {path} (routes `{first}` and `{second}`)")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// Two routes share a name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// Path pattern does not start with `/`
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Route name is empty
    #[error("Invalid route name: {0:?}")]
    InvalidName(String),

    /// History mode selector is not `browser` or `hash`
    #[error("Unknown history mode: {0}")]
    UnknownHistoryMode(String),

    /// No route is registered under this name
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Reverse routing needs a value for a `:param` segment
    #[error("Missing param `{param}` for route `{route}`")]
    MissingParam { route: String, param: String },

    /// No route matches the path
    #[error("No route matches: {0}")]
    NoMatch(String),
}
