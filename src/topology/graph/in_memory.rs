use hashbrown::HashMap;
use itertools::Itertools;
use std::fmt;

use super::graph_trait::ElementGraph;
use super::mutable::MutableElementGraph;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::ElementGraphError;
use crate::topology::bounds::ElementLike;
use crate::topology::element::ElementId;
use crate::topology::ordered_set::{self, OrderedSet};

/// Per-element relation slot: who points at it and who it points at.
#[derive(Clone)]
pub(crate) struct Relations<E> {
    pub(crate) parents: OrderedSet<E>,
    pub(crate) children: OrderedSet<E>,
}

impl<E> Default for Relations<E> {
    fn default() -> Self {
        Self {
            parents: OrderedSet::default(),
            children: OrderedSet::default(),
        }
    }
}

impl<E: ElementLike> Relations<E> {
    fn is_empty(&self) -> bool {
        self.parents.is_empty() && self.children.is_empty()
    }
}

impl<E: ElementLike> fmt::Debug for Relations<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relations")
            .field("parents", &self.parents)
            .field("children", &self.children)
            .finish()
    }
}

/// Ordered iterator over one side of an element's relations.
///
/// Yields nothing for an element the graph does not know.
pub struct RelationIter<'a, E> {
    inner: Option<ordered_set::Iter<'a, E>>,
}

impl<'a, E: ElementLike> RelationIter<'a, E> {
    fn new(set: Option<&'a OrderedSet<E>>) -> Self {
        Self {
            inner: set.map(OrderedSet::iter),
        }
    }
}

impl<E: ElementLike> Iterator for RelationIter<'_, E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<E: ElementLike> ExactSizeIterator for RelationIter<'_, E> {}

/// In-memory element graph: an arena of relation slots keyed by element.
///
/// Keys are weak handles. The graph never owns caller data; it only records
/// which keys are related and in which order. Endpoints are registered
/// implicitly the first time they take part in an edge.
#[derive(Clone, Debug)]
pub struct InMemoryElementGraph<E = ElementId>
where
    E: ElementLike,
{
    pub(crate) relations: HashMap<E, Relations<E>>,
    next_id: u64,
}

impl<E: ElementLike> Default for InMemoryElementGraph<E> {
    fn default() -> Self {
        Self {
            relations: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<E: ElementLike> InMemoryElementGraph<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the slot table for `elements` elements.
    pub fn with_capacity(elements: usize) -> Self {
        Self {
            relations: HashMap::with_capacity(elements),
            next_id: 0,
        }
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.relations.values().map(|r| r.children.len()).sum()
    }

    #[inline]
    fn slot_mut(&mut self, e: E) -> &mut Relations<E> {
        self.relations.entry(e).or_default()
    }

    fn children_of(&self, e: E) -> Option<&OrderedSet<E>> {
        self.relations.get(&e).map(|r| &r.children)
    }

    fn parents_of(&self, e: E) -> Option<&OrderedSet<E>> {
        self.relations.get(&e).map(|r| &r.parents)
    }

    /// Both sides agree on whether `parent -> child` exists.
    fn check_edge(&self, parent: E, child: E) -> Result<(), ElementGraphError> {
        if self.is_child(parent, child) == self.is_parent(child, parent) {
            Ok(())
        } else {
            Err(ElementGraphError::AsymmetricEdge {
                parent: format!("{parent:?}"),
                child: format!("{child:?}"),
            })
        }
    }
}

impl InMemoryElementGraph<ElementId> {
    /// Allocate and register a fresh element id.
    ///
    /// Ids are handed out in increasing order and skip any id the caller
    /// already registered by hand.
    pub fn create_element(&mut self) -> ElementId {
        loop {
            self.next_id = self.next_id.wrapping_add(1);
            let Ok(id) = ElementId::new(self.next_id) else {
                continue;
            };
            if !self.relations.contains_key(&id) {
                self.relations.insert(id, Relations::default());
                log::trace!("created element {id:?}");
                return id;
            }
        }
    }
}

impl<E: ElementLike> ElementGraph for InMemoryElementGraph<E> {
    type Element = E;

    type ChildIter<'a>
        = RelationIter<'a, E>
    where
        Self: 'a;
    type ParentIter<'a>
        = RelationIter<'a, E>
    where
        Self: 'a;

    fn children<'a>(&'a self, e: E) -> Self::ChildIter<'a> {
        RelationIter::new(self.children_of(e))
    }

    fn parents<'a>(&'a self, e: E) -> Self::ParentIter<'a> {
        RelationIter::new(self.parents_of(e))
    }

    #[inline]
    fn is_child(&self, e: E, child: E) -> bool {
        self.children_of(e).is_some_and(|s| s.contains(&child))
    }

    #[inline]
    fn is_parent(&self, e: E, parent: E) -> bool {
        self.parents_of(e).is_some_and(|s| s.contains(&parent))
    }

    #[inline]
    fn first_child(&self, e: E) -> Option<E> {
        self.children_of(e).and_then(OrderedSet::front)
    }

    #[inline]
    fn first_parent(&self, e: E) -> Option<E> {
        self.parents_of(e).and_then(OrderedSet::front)
    }

    #[inline]
    fn child_count(&self, e: E) -> usize {
        self.children_of(e).map_or(0, OrderedSet::len)
    }

    #[inline]
    fn parent_count(&self, e: E) -> usize {
        self.parents_of(e).map_or(0, OrderedSet::len)
    }

    fn add_edge(
        &mut self,
        parent: E,
        child: E,
        before_child: Option<E>,
        before_parent: Option<E>,
    ) -> bool {
        // An existing edge keeps its position.
        if self.is_child(parent, child) {
            return false;
        }
        // Clears a stray `parent` entry in `child`'s parents, if any.
        if self.remove_edge(parent, child) {
            log::trace!("dropped one-sided edge {parent:?} -> {child:?} before relinking");
        }
        self.slot_mut(parent).children.insert(before_child, child);
        self.slot_mut(child).parents.insert(before_parent, parent);
        crate::debug_invariants!(self.check_edge(parent, child), "add_edge");
        true
    }

    fn remove_edge(&mut self, parent: E, child: E) -> bool {
        let from_parent = self
            .relations
            .get_mut(&parent)
            .is_some_and(|r| r.children.remove(&child));
        let from_child = self
            .relations
            .get_mut(&child)
            .is_some_and(|r| r.parents.remove(&parent));
        crate::debug_invariants!(self.check_edge(parent, child), "remove_edge");
        from_parent || from_child
    }
}

impl<E: ElementLike> MutableElementGraph for InMemoryElementGraph<E> {
    fn add_element(&mut self, e: E) {
        self.slot_mut(e);
    }

    #[inline]
    fn contains_element(&self, e: E) -> bool {
        self.relations.contains_key(&e)
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.relations.len()
    }

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = E> + 'a> {
        Box::new(self.relations.keys().copied())
    }

    fn remove_element(&mut self, e: E) {
        if !self.relations.contains_key(&e) {
            return;
        }
        log::trace!("destroying element {e:?}");
        self.remove_all_parents(e);
        self.remove_all_children(e);
        if let Some(slot) = self.relations.remove(&e) {
            debug_assert!(slot.is_empty(), "element {e:?} still has edges after teardown");
        }
    }
}

impl<E: ElementLike> DebugInvariants for InMemoryElementGraph<E> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "InMemoryElementGraph");
    }

    fn validate_invariants(&self) -> Result<(), ElementGraphError> {
        let result = self
            .relations
            .keys()
            .copied()
            .sorted()
            .try_for_each(|owner| self.validate_slot(owner));
        if let Err(err) = &result {
            log::warn!("element graph invariant violated: {err}");
        }
        result
    }
}

impl<E: ElementLike> InMemoryElementGraph<E> {
    fn validate_slot(&self, owner: E) -> Result<(), ElementGraphError> {
        let Some(slot) = self.relations.get(&owner) else {
            return Ok(());
        };
        for (set, entry_is_child) in [(&slot.children, true), (&slot.parents, false)] {
            if !set.links_consistent() {
                let entry = set
                    .iter()
                    .duplicates()
                    .next()
                    .map_or_else(|| "<unlinked>".to_string(), |e| format!("{e:?}"));
                return Err(ElementGraphError::DuplicateEntry {
                    owner: format!("{owner:?}"),
                    entry,
                });
            }
            for entry in set {
                if !self.relations.contains_key(&entry) {
                    return Err(ElementGraphError::DanglingReference {
                        owner: format!("{owner:?}"),
                        entry: format!("{entry:?}"),
                    });
                }
                let (parent, child) = if entry_is_child {
                    (owner, entry)
                } else {
                    (entry, owner)
                };
                self.check_edge(parent, child)?;
            }
        }
        Ok(())
    }
}
