//! Error types for the WOOT sequence.

use thiserror::Error;

use crate::crdt::types::Identity;

/// Result type alias for sequence operations.
pub type WootResult<T> = Result<T, WootError>;

/// Errors returned by the sequence store.
///
/// Every mutating operation that returns one of these leaves the sequence and
/// the site clock exactly as they were before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WootError {
    /// Position outside the valid visible range.
    #[error("Invalid index {index} for sequence with {len} positions")]
    InvalidIndex { index: usize, len: usize },

    /// No adjacent pair in the sequence matches the element's anchors.
    #[error("Unresolvable anchor: no adjacent pair {left} -> {right}")]
    UnresolvableAnchor { left: Identity, right: Identity },

    /// A positional lookup found no visible element of the requested ordinal.
    #[error("No visible element at index {index}")]
    NotFound { index: usize },
}

impl WootError {
    /// Creates an InvalidIndex error.
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    /// Creates an UnresolvableAnchor error.
    pub fn unresolvable_anchor(left: Identity, right: Identity) -> Self {
        Self::UnresolvableAnchor { left, right }
    }

    /// Creates a NotFound error.
    pub fn not_found(index: usize) -> Self {
        Self::NotFound { index }
    }
}
