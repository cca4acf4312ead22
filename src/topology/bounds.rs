//! Common bound aliases used across topology code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them.

/// Canonical bound set for element keys.
///
/// - `Copy` so keys are passed by value, never borrowed from a slot
/// - `Eq + Hash` for the hash index of [`OrderedSet`](crate::topology::ordered_set::OrderedSet)
/// - `Ord` for deterministic diagnostics
/// - `Debug` for invariant reports
pub trait ElementLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> ElementLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
