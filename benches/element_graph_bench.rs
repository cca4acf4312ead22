use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use element_graph::algs::traversal::descendants;
use element_graph::topology::element::ElementId;
use element_graph::topology::graph::{ElementGraph, InMemoryElementGraph, MutableElementGraph};

fn eid(raw: u32) -> ElementId {
    ElementId::new(u64::from(raw)).expect("nonzero ElementId")
}

fn build_binary_tree(levels: u32) -> InMemoryElementGraph<ElementId> {
    let mut g = InMemoryElementGraph::new();
    let mut start = 1u32;
    let mut end = 1u32;
    for _ in 1..levels {
        for parent in start..=end {
            g.add_child(eid(parent), eid(parent * 2));
            g.add_child(eid(parent), eid(parent * 2 + 1));
        }
        start = end + 1;
        end = end * 2 + 1;
    }
    g
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for &width in &[1_000u32, 10_000u32] {
        group.bench_with_input(BenchmarkId::new("append_then_destroy", width), &width, |b, &w| {
            b.iter(|| {
                let mut g = InMemoryElementGraph::with_capacity(w as usize + 1);
                let root = eid(1);
                for i in 2..=w + 1 {
                    g.add_child(root, eid(i));
                }
                g.remove_element(root);
                black_box(g.edge_count());
            });
        });

        group.bench_with_input(BenchmarkId::new("insert_before_front", width), &width, |b, &w| {
            b.iter(|| {
                let mut g = InMemoryElementGraph::with_capacity(w as usize + 1);
                let root = eid(1);
                for i in 2..=w + 1 {
                    let front = g.first_child(root);
                    g.insert_child(root, front, eid(i));
                }
                black_box(g.child_count(root));
            });
        });
    }
    group.finish();
}

fn bench_descendants(c: &mut Criterion) {
    let mut group = c.benchmark_group("descendants");
    for &levels in &[10u32, 12u32] {
        let g = build_binary_tree(levels);
        group.bench_with_input(BenchmarkId::new("binary_tree", levels), &levels, |b, _| {
            b.iter(|| black_box(descendants(&g, [eid(1)])));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fan_out, bench_descendants);
criterion_main!(benches);
