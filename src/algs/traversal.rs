//! Ordered depth-first walks over an [`ElementGraph`].
//!
//! Walks visit elements in pre-order and follow each element's relations in
//! caller order, so a render pass over `descendants` sees siblings exactly as
//! they were arranged. Every element is emitted at most once, which also
//! makes the walks terminate on cyclic graphs.

use hashbrown::HashSet;

use crate::topology::graph::ElementGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    /// Follow children.
    Down,
    /// Follow parents.
    Up,
}

/// Pre-order walk from `seeds` in direction `dir`, stopping below
/// `max_depth` when given (seeds are depth 0).
pub fn walk<G, I>(graph: &G, seeds: I, dir: Dir, max_depth: Option<u32>) -> Vec<G::Element>
where
    G: ElementGraph,
    I: IntoIterator<Item = G::Element>,
{
    let seeds: Vec<_> = seeds.into_iter().collect();
    let mut seen: HashSet<G::Element> = HashSet::with_capacity(seeds.len());
    let mut out = Vec::new();
    // Reversed so the first seed (and first child) is popped first.
    let mut stack: Vec<(G::Element, u32)> = seeds.into_iter().rev().map(|p| (p, 0)).collect();

    while let Some((p, depth)) = stack.pop() {
        if !seen.insert(p) {
            continue;
        }
        out.push(p);
        if max_depth.is_some_and(|md| depth >= md) {
            continue;
        }
        let next: Vec<G::Element> = match dir {
            Dir::Down => graph.children(p).collect(),
            Dir::Up => graph.parents(p).collect(),
        };
        stack.extend(
            next.into_iter()
                .rev()
                .filter(|q| !seen.contains(q))
                .map(|q| (q, depth + 1)),
        );
    }
    out
}

/// `seeds` and everything reachable through children, in pre-order.
pub fn descendants<G, I>(graph: &G, seeds: I) -> Vec<G::Element>
where
    G: ElementGraph,
    I: IntoIterator<Item = G::Element>,
{
    walk(graph, seeds, Dir::Down, None)
}

/// Like [`descendants`], but no deeper than `max_depth` levels below a seed.
pub fn descendants_with_depth<G, I>(graph: &G, seeds: I, max_depth: u32) -> Vec<G::Element>
where
    G: ElementGraph,
    I: IntoIterator<Item = G::Element>,
{
    walk(graph, seeds, Dir::Down, Some(max_depth))
}

/// `seeds` and everything reachable through parents, in pre-order.
pub fn ancestors<G, I>(graph: &G, seeds: I) -> Vec<G::Element>
where
    G: ElementGraph,
    I: IntoIterator<Item = G::Element>,
{
    walk(graph, seeds, Dir::Up, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::graph::InMemoryElementGraph;

    fn tree() -> InMemoryElementGraph<u32> {
        //        1
        //      / | \
        //     2  3  4
        //    / \    |
        //   5   6   7
        let mut g = InMemoryElementGraph::new();
        for (p, c) in [(1, 2), (1, 3), (1, 4), (2, 5), (2, 6), (4, 7)] {
            g.add_child(p, c);
        }
        g
    }

    #[test]
    fn descendants_follow_child_order() {
        let g = tree();
        assert_eq!(descendants(&g, [1]), vec![1, 2, 5, 6, 3, 4, 7]);
    }

    #[test]
    fn depth_limit() {
        let g = tree();
        assert_eq!(descendants_with_depth(&g, [1], 1), vec![1, 2, 3, 4]);
        assert_eq!(descendants_with_depth(&g, [1], 0), vec![1]);
    }

    #[test]
    fn ancestors_follow_parent_order() {
        let mut g = tree();
        g.add_child(8, 6);
        assert_eq!(ancestors(&g, [6]), vec![6, 2, 1, 8]);
    }

    #[test]
    fn cycles_terminate() {
        let mut g = tree();
        g.add_child(7, 1);
        assert_eq!(descendants(&g, [4]), vec![4, 7, 1, 2, 5, 6, 3]);
    }

    #[test]
    fn shared_descendant_is_emitted_once() {
        let mut g = tree();
        g.add_child(3, 5);
        assert_eq!(descendants(&g, [1, 3]), vec![1, 2, 5, 6, 3, 4, 7]);
    }
}
