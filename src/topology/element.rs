//! `ElementId`: a strong, zero-cost handle for graph elements
//!
//! Every element taking part in the relationship graph is identified by an
//! opaque key. The key is a *weak* handle: it never owns or keeps alive any
//! caller data, it only names a slot in an
//! [`InMemoryElementGraph`](crate::topology::graph::InMemoryElementGraph).
//! Two distinct ids are never equal, regardless of what the caller attaches
//! to them.
//!
//! `ElementId` wraps a `NonZeroU64` so that 0 stays reserved as an invalid or
//! sentinel value and `Option<ElementId>` costs nothing extra.

use std::{fmt, num::NonZeroU64};

use crate::graph_error::ElementGraphError;

/// Identity of one element in the graph.
///
/// # Memory layout
/// `repr(transparent)` over `NonZeroU64`, so it has the ABI of a `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct ElementId(NonZeroU64);

impl ElementId {
    /// Creates a new `ElementId` from a raw `u64` value.
    ///
    /// # Errors
    ///
    /// Returns [`ElementGraphError::InvalidElementId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use element_graph::topology::element::ElementId;
    /// let e = ElementId::new(1).unwrap();
    /// assert_eq!(e.get(), 1);
    /// assert!(ElementId::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, ElementGraphError> {
        NonZeroU64::new(raw)
            .map(ElementId)
            .ok_or(ElementGraphError::InvalidElementId)
    }

    /// Returns the inner `u64` value of this `ElementId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for ElementId {
    #[inline]
    fn from(raw: NonZeroU64) -> Self {
        ElementId(raw)
    }
}

impl TryFrom<u64> for ElementId {
    type Error = ElementGraphError;

    #[inline]
    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        ElementId::new(raw)
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Displays as `ElementId(raw_value)`.
impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementId").field(&self.get()).finish()
    }
}

/// Prints only the raw integer.
impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
