use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use loregraph::{
    dedupe_by_id, dedupe_edges_by_pair, nodes_within_depth, Character, Entity, EntityId,
    GraphEdge, GraphNode, PropertyMap, RelationshipKind,
};

fn make_nodes(count: usize) -> Vec<GraphNode> {
    // every id appears twice so dedup has real work to do
    (0..count)
        .map(|i| {
            let character = Character::new(format!("char-{}", i / 2), format!("Character {}", i));
            let label = character.name.clone();
            GraphNode::new(Entity::Character(character), label)
        })
        .collect()
}

fn make_edges(count: usize) -> Vec<GraphEdge> {
    (0..count)
        .map(|i| {
            GraphEdge::new(
                RelationshipKind::Relation,
                EntityId::new(format!("char-{}", i / 2)),
                EntityId::new(format!("char-{}", i / 2 + 1)),
                RelationshipKind::Relation.weight(),
                None,
                PropertyMap::new(),
            )
        })
        .collect()
}

/// A chain of `count` nodes: n0-n1-n2-...
fn make_chain(count: usize) -> Vec<GraphEdge> {
    (0..count.saturating_sub(1))
        .map(|i| {
            GraphEdge::new(
                RelationshipKind::Relation,
                EntityId::new(format!("n{}", i)),
                EntityId::new(format!("n{}", i + 1)),
                RelationshipKind::Relation.weight(),
                None,
                PropertyMap::new(),
            )
        })
        .collect()
}

/// Node dedup throughput. The 1,000-item case is the soft contract: it has
/// to stay comfortably under a millisecond.
fn bench_node_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_dedup");

    for size in [100, 1000, 10_000].iter() {
        let nodes = make_nodes(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let deduped = dedupe_by_id(nodes.clone());
                criterion::black_box(deduped.len());
            });
        });
    }
    group.finish();
}

/// Pair-keyed edge dedup throughput.
fn bench_edge_pair_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_pair_dedup");

    for size in [100, 1000, 10_000].iter() {
        let edges = make_edges(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let deduped = dedupe_edges_by_pair(edges.clone());
                criterion::black_box(deduped.len());
            });
        });
    }
    group.finish();
}

/// Depth-limited traversal latency over a 1,000-node chain.
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    let edges = make_chain(1000);
    let focus = EntityId::new("n500");

    for depth in [1, 4, 16].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| {
                let visible = nodes_within_depth(&focus, &edges, depth);
                criterion::black_box(visible.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_node_dedup, bench_edge_pair_dedup, bench_traversal);
criterion_main!(benches);
