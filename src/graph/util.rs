//! Generic set operations over graph primitives
//!
//! Deduplication, inclusion filtering, id extraction and multi-source
//! merging, shared by the collection and processing layers. Everything here
//! is a pure single-pass function over hash-set seen-guards.

use super::edge::GraphEdge;
use super::node::GraphNode;
use super::types::{EntityId, NodeIdSet};
use rustc_hash::FxHashSet;

/// Anything carrying a stable string identity.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for GraphNode {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for GraphEdge {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

/// Drop items whose id was already seen, keeping first occurrences in order.
pub fn dedupe_by_id<T: Keyed>(items: Vec<T>) -> Vec<T> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    items
        .into_iter()
        .filter(|item| seen.insert(item.key().to_string()))
        .collect()
}

/// Drop edges whose `(source, target)` pair was already seen, keeping first
/// occurrences. Opposite directions are distinct pairs and both survive.
pub fn dedupe_edges_by_pair(edges: Vec<GraphEdge>) -> Vec<GraphEdge> {
    let mut seen: FxHashSet<(EntityId, EntityId)> = FxHashSet::default();
    edges
        .into_iter()
        .filter(|edge| seen.insert((edge.source.clone(), edge.target.clone())))
        .collect()
}

/// Stable-order subset of items whose id is in `ids`. An empty id set keeps
/// nothing.
pub fn filter_by_included_ids<T: Keyed>(items: Vec<T>, ids: &NodeIdSet) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| ids.contains(item.key()))
        .collect()
}

/// Collect the ids of every item, in first-occurrence order.
pub fn extract_ids<T: Keyed>(items: &[T]) -> NodeIdSet {
    items.iter().map(|item| EntityId::from(item.key())).collect()
}

/// Concatenate groups in argument order, then dedupe by id across the whole
/// concatenation (not per group).
pub fn merge_and_dedupe<T: Keyed>(groups: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    dedupe_by_id(groups.into_iter().flatten().collect())
}
