//! Top-level module for the element relationship graph.
//!
//! This module provides:
//! - [`ElementId`](element::ElementId), the weak key naming an element
//! - [`OrderedSet`](ordered_set::OrderedSet), the order-preserving set backing
//!   each side of an element's relations
//! - The [`ElementGraph`] and [`MutableElementGraph`] traits with the
//!   [`InMemoryElementGraph`] implementation
//!
//! Most users create elements through `InMemoryElementGraph::create_element`
//! and link them with the `ElementGraph` mutators.

pub mod bounds;
pub mod element;
pub mod graph;
pub mod ordered_set;

pub use bounds::ElementLike;
pub use element::ElementId;
pub use graph::*;
pub use ordered_set::OrderedSet;
