//! Core trait for ordered parent/child relationship graphs.
//!
//! This module defines the [`ElementGraph`] trait: every element keeps an
//! ordered collection of parents and an ordered collection of children, and
//! an edge `parent -> child` exists exactly when each side lists the other.
//!
//! Implementors supply two primitives, [`add_edge`](ElementGraph::add_edge)
//! and [`remove_edge`](ElementGraph::remove_edge), plus read access to both
//! collections. Every other mutator is provided on top of those two, so the
//! symmetry of the two collections only has to be maintained in one place.

use crate::topology::bounds::ElementLike;

/// Bidirectional, order-preserving relationship API.
///
/// # Associated Types
/// - `Element`: key identifying an element (see [`ElementLike`]).
/// - `ChildIter` / `ParentIter`: ordered iterators over one element's
///   relations.
///
/// # Edge policy
/// - Adding an edge that already exists is a no-op and never repositions it,
///   even when a different `before` anchor is requested.
/// - Removing an edge that does not exist is a no-op.
/// - Cycles, including self-edges, are allowed.
pub trait ElementGraph {
    type Element: ElementLike;

    type ChildIter<'a>: Iterator<Item = Self::Element>
    where
        Self: 'a;
    type ParentIter<'a>: Iterator<Item = Self::Element>
    where
        Self: 'a;

    /// Children of `e` in caller order. Empty for unknown elements.
    fn children<'a>(&'a self, e: Self::Element) -> Self::ChildIter<'a>;
    /// Parents of `e` in caller order. Empty for unknown elements.
    fn parents<'a>(&'a self, e: Self::Element) -> Self::ParentIter<'a>;

    fn is_child(&self, e: Self::Element, child: Self::Element) -> bool;
    fn is_parent(&self, e: Self::Element, parent: Self::Element) -> bool;

    fn first_child(&self, e: Self::Element) -> Option<Self::Element>;
    fn first_parent(&self, e: Self::Element) -> Option<Self::Element>;

    fn child_count(&self, e: Self::Element) -> usize;
    fn parent_count(&self, e: Self::Element) -> usize;

    /// Link `parent -> child`.
    ///
    /// `child` is placed in `parent`'s children before `before_child` and
    /// `parent` is placed in `child`'s parents before `before_parent`; a
    /// `None` or unrelated anchor means "at the end". Returns `false` if the
    /// edge already existed, in which case nothing moved.
    fn add_edge(
        &mut self,
        parent: Self::Element,
        child: Self::Element,
        before_child: Option<Self::Element>,
        before_parent: Option<Self::Element>,
    ) -> bool;

    /// Unlink `parent -> child` on both sides. Returns whether anything was
    /// removed.
    fn remove_edge(&mut self, parent: Self::Element, child: Self::Element) -> bool;

    // --- provided mutators ---

    /// Append `child` to `e`'s children and `e` to `child`'s parents.
    fn add_child(&mut self, e: Self::Element, child: Self::Element) -> bool {
        self.add_edge(e, child, None, None)
    }

    /// Append `parent` to `e`'s parents and `e` to `parent`'s children.
    fn add_parent(&mut self, e: Self::Element, parent: Self::Element) -> bool {
        self.add_edge(parent, e, None, None)
    }

    /// Insert `child` into `e`'s children right before `before`.
    fn insert_child(
        &mut self,
        e: Self::Element,
        before: Option<Self::Element>,
        child: Self::Element,
    ) -> bool {
        self.add_edge(e, child, before, None)
    }

    /// Insert `parent` into `e`'s parents right before `before`. `e` is
    /// appended to `parent`'s children.
    fn insert_parent(
        &mut self,
        e: Self::Element,
        before: Option<Self::Element>,
        parent: Self::Element,
    ) -> bool {
        self.add_edge(parent, e, None, before)
    }

    fn remove_child(&mut self, e: Self::Element, child: Self::Element) -> bool {
        self.remove_edge(e, child)
    }

    fn remove_parent(&mut self, e: Self::Element, parent: Self::Element) -> bool {
        self.remove_edge(parent, e)
    }

    /// Sever every edge from a parent into `e`.
    ///
    /// Re-reads the first parent after every removal; the collection being
    /// drained is the one each removal mutates.
    fn remove_all_parents(&mut self, e: Self::Element) {
        while let Some(parent) = self.first_parent(e) {
            self.remove_parent(e, parent);
        }
    }

    /// Sever every edge from `e` into a child.
    ///
    /// Each removal is driven from the child's side (`child.remove_parent(e)`)
    /// and the first child is re-read after every step.
    fn remove_all_children(&mut self, e: Self::Element) {
        while let Some(child) = self.first_child(e) {
            self.remove_parent(child, e);
        }
    }
}
