use crate::debug_invariants::DebugInvariants;
use crate::graph_error::ElementGraphError;
use crate::topology::graph::{ElementGraph, InMemoryElementGraph, MutableElementGraph};

fn sample() -> InMemoryElementGraph<u32> {
    let mut g = InMemoryElementGraph::<u32>::new();
    g.add_child(1, 2);
    g.add_child(1, 3);
    g.add_child(3, 4);
    g.insert_parent(4, Some(3), 2);
    g
}

#[test]
fn well_formed_graph_validates() {
    let mut g = sample();
    assert_eq!(g.validate_invariants(), Ok(()));
    g.remove_element(3);
    assert_eq!(g.validate_invariants(), Ok(()));
    g.debug_assert_invariants();
}

#[test]
fn one_sided_child_entry_is_reported() {
    let mut g = sample();
    g.relations.get_mut(&2).unwrap().parents.remove(&1);
    assert_eq!(
        g.validate_invariants(),
        Err(ElementGraphError::AsymmetricEdge {
            parent: "1".into(),
            child: "2".into(),
        })
    );
}

#[test]
fn reference_to_unregistered_element_is_reported() {
    let mut g = sample();
    g.relations.get_mut(&4).unwrap().children.push_back(77);
    assert_eq!(
        g.validate_invariants(),
        Err(ElementGraphError::DanglingReference {
            owner: "4".into(),
            entry: "77".into(),
        })
    );
}

#[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
#[test]
#[should_panic(expected = "[invariants]")]
fn debug_assert_panics_on_asymmetry() {
    let mut g = sample();
    g.relations.get_mut(&3).unwrap().children.remove(&4);
    g.debug_assert_invariants();
}

#[test]
fn removing_a_child_element_leaves_no_dangling_key() {
    let mut g = InMemoryElementGraph::<u32>::new();
    g.add_child(1, 2);
    g.add_child(2, 3);
    g.remove_element(2);
    assert!(!g.contains_element(2));
    assert_eq!(g.children(1).count(), 0);
    assert_eq!(g.parents(3).count(), 0);
    assert_eq!(g.validate_invariants(), Ok(()));
}

#[test]
fn relations_debug_lists_both_sides_in_order() {
    let mut g = InMemoryElementGraph::<u32>::new();
    g.add_child(1, 3);
    g.insert_child(1, Some(3), 2);
    g.add_child(0, 1);
    let rendered = format!("{:?}", g.relations.get(&1).unwrap());
    assert_eq!(rendered, "Relations { parents: {0}, children: {2, 3} }");
    assert!(format!("{g:?}").starts_with("InMemoryElementGraph"));
}
