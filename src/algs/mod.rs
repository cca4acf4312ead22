//! Algorithms built on top of [`ElementGraph`](crate::topology::graph::ElementGraph).

pub mod traversal;

pub use traversal::{ancestors, descendants, descendants_with_depth};
