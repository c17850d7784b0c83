//! Domain error types for request-scoped resolution.

use thiserror::Error;

/// Domain-specific errors raised during field resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A resolver read the viewer slot outside any request scope.
    #[error("no viewer bound to the current request scope")]
    ScopeUnset,

    /// The batching loader dropped a key it was asked to resolve.
    #[error("loader returned no value for key: {key}")]
    LoaderMissingKey { key: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
