//! Error types for table construction, resolution, and URL generation.

use thiserror::Error;

/// Raised when a request path matches no route definition.
///
/// The resolver performs no recovery itself; the caller decides the fallback
/// (typically a not-found view).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches path {path:?}")]
pub struct NoMatchError {
    /// The normalized path that failed to match.
    pub path: String,
}

/// Construction-time validation failures.
///
/// A [`RouteTable`](crate::RouteTable) is built once at application start, so
/// these surface during initialization rather than during navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Route names must be pairwise distinct across the table.
    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    /// The pattern string could not be parsed into segments.
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },
}

/// Failures when generating a URL from a route name and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// No route with the given name is registered.
    #[error("no route named {0:?}")]
    UnknownRoute(String),

    /// A required parameter was not supplied.
    #[error("route {route:?} requires parameter {param:?}")]
    MissingParam { route: String, param: String },
}
