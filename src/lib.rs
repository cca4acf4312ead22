//! # element-graph
//!
//! element-graph tracks ordered parent/child relations between opaque
//! elements. Every element keeps two ordered collections, its parents and
//! its children, and the graph keeps them mirrored: `c` is a child of `p`
//! exactly when `p` is a parent of `c`.
//!
//! ## Guarantees
//! - Order within each collection is exactly what callers asked for, via
//!   append or "insert before".
//! - Adding an edge that already exists changes nothing, not even its
//!   position.
//! - Removing an element severs every edge touching it before the slot is
//!   released, so neighbours never keep a dangling key.
//! - Cycles are allowed and not detected.
//!
//! Elements are keys into the graph, never owners of caller data. Build a
//! graph with [`InMemoryElementGraph`](topology::graph::InMemoryElementGraph):
//!
//! ```rust
//! use element_graph::prelude::*;
//!
//! let mut g = InMemoryElementGraph::<ElementId>::new();
//! let (a, b, c) = (g.create_element(), g.create_element(), g.create_element());
//! g.add_child(a, b);
//! g.add_child(a, c);
//! let d = g.create_element();
//! g.insert_child(a, Some(c), d);
//! assert_eq!(g.children(a).collect::<Vec<_>>(), vec![b, d, c]);
//!
//! g.remove_element(b);
//! assert_eq!(g.children(a).collect::<Vec<_>>(), vec![d, c]);
//! ```
//!
//! ## Invariant checking
//! Debug builds re-check edge symmetry after every mutation. Enable the
//! `strict-invariants` or `check-invariants` feature to keep the checks in
//! release builds.

pub mod algs;
pub mod debug_invariants;
pub mod graph_error;
pub mod text;
pub mod topology;
pub mod utils;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::traversal::{ancestors, descendants};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph_error::ElementGraphError;
    pub use crate::text::{SurroundingText, Text, TextFormatFlag, TextFormatFlags};
    pub use crate::topology::bounds::ElementLike;
    pub use crate::topology::element::ElementId;
    pub use crate::topology::graph::{ElementGraph, InMemoryElementGraph, MutableElementGraph};
    pub use crate::topology::ordered_set::OrderedSet;
}
