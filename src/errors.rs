//! Error types for binding operations

use thiserror::Error;

/// Errors that can occur while resolving binding inputs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// Region value still contains an unresolved deferred-value placeholder
    #[error("Region is an unresolved placeholder and cannot be matched against the partition table: {0}")]
    UnresolvedRegion(String),
}

/// Result type for binding operations
pub type BindingResult<T> = Result<T, BindingError>;
