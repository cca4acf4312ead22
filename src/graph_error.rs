//! ElementGraphError: unified error type for element-graph public APIs
//!
//! Edge and element mutations are infallible by contract (removing a missing
//! edge or re-adding an existing one is a no-op). This type covers the
//! remaining fallible surface: id construction and invariant validation.

use thiserror::Error;

/// Unified error type for element-graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementGraphError {
    /// Attempted to construct an ElementId with a zero value (invalid).
    #[error("ElementId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidElementId,
    /// One side of an edge is recorded without its mirror.
    #[error("Graph error: edge `{parent}` -> `{child}` is not mirrored on both endpoints")]
    AsymmetricEdge { parent: String, child: String },
    /// A relation collection holds the same element twice.
    #[error("Graph error: `{entry}` appears more than once in the relations of `{owner}`")]
    DuplicateEntry { owner: String, entry: String },
    /// A relation collection references an element the graph does not know.
    #[error("Graph error: `{owner}` references unregistered element `{entry}`")]
    DanglingReference { owner: String, entry: String },
}
