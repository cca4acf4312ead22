use super::graph_trait::ElementGraph;

/// Trait for graphs that also manage element lifecycle.
///
/// [`ElementGraph`] covers edges. `MutableElementGraph` adds registration
/// and the destruction protocol: an element is only dropped after every
/// edge touching it has been severed, so no neighbour is left holding a
/// dangling key.
pub trait MutableElementGraph: ElementGraph {
    /// Register `e` with empty relations. No-op if already present.
    fn add_element(&mut self, e: Self::Element);

    fn contains_element(&self, e: Self::Element) -> bool;

    fn element_count(&self) -> usize;

    /// All registered elements, in no particular order.
    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Element> + 'a>;

    /// Destroy `e`: sever all parent edges, then all child edges, then drop
    /// its slot. No-op for unknown elements.
    ///
    /// Implementations drain both sides through
    /// [`remove_all_parents`](ElementGraph::remove_all_parents) and
    /// [`remove_all_children`](ElementGraph::remove_all_children) before
    /// releasing any storage, so no neighbour keeps the key.
    fn remove_element(&mut self, e: Self::Element);

    /// Replace the children of `e` with `children`, in that order.
    ///
    /// All previous child edges are severed first, so `e` moves to the back
    /// of every re-added child's parents. Repeated entries are ignored.
    fn set_children(
        &mut self,
        e: Self::Element,
        children: impl IntoIterator<Item = Self::Element>,
    ) {
        self.remove_all_children(e);
        for child in children {
            self.add_child(e, child);
        }
    }
}
