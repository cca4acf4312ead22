#![allow(dead_code)]
use element_graph::{
    topology::element::ElementId,
    topology::graph::{ElementGraph, InMemoryElementGraph},
};

pub fn eid(u: u64) -> ElementId {
    ElementId::new(u).unwrap()
}

/// Build a graph from edges (parent -> child), appended in slice order.
pub fn graph_from(edges: &[(u64, u64)]) -> InMemoryElementGraph<ElementId> {
    let mut g = InMemoryElementGraph::<ElementId>::default();
    for &(p, c) in edges {
        g.add_child(eid(p), eid(c));
    }
    g
}

pub fn children_of(g: &InMemoryElementGraph<ElementId>, e: ElementId) -> Vec<ElementId> {
    g.children(e).collect()
}

pub fn parents_of(g: &InMemoryElementGraph<ElementId>, e: ElementId) -> Vec<ElementId> {
    g.parents(e).collect()
}
