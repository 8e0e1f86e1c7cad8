//! Connectivity analysis over relationship records
//!
//! Component discovery works on the record level, before edge
//! materialization, so it sees links that a weight threshold would drop.
//! Adjacency follows record direction; a bidirectional record contributes
//! both directions.

use super::record::RelationshipRecord;
use crate::graph::types::{EntityId, NodeIdSet};
use rustc_hash::{FxHashMap, FxHashSet};

/// Discover connected subgraphs among `node_ids`.
///
/// Records touching nodes outside `node_ids` are ignored. Each node appears
/// in exactly one component; nodes without any surviving link form
/// singletons. Components come back in first-seen order of `node_ids`, with
/// members in traversal discovery order.
pub fn find_connected_components(
    node_ids: &[EntityId],
    records: &[RelationshipRecord],
) -> Vec<NodeIdSet> {
    let in_scope: FxHashSet<&str> = node_ids.iter().map(|id| id.as_str()).collect();

    let mut adjacency: FxHashMap<&EntityId, Vec<&EntityId>> = FxHashMap::default();
    for record in records {
        if !in_scope.contains(record.source.as_str()) || !in_scope.contains(record.target.as_str())
        {
            continue;
        }
        adjacency.entry(&record.source).or_default().push(&record.target);
        if record.bidirectional {
            adjacency.entry(&record.target).or_default().push(&record.source);
        }
    }

    let mut visited: FxHashSet<&EntityId> = FxHashSet::default();
    let mut components = Vec::new();

    for start in node_ids {
        if visited.contains(start) {
            continue;
        }

        let mut component = NodeIdSet::default();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            component.insert(node.clone());
            if let Some(neighbors) = adjacency.get(node) {
                for &neighbor in neighbors {
                    if !visited.contains(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }
        components.push(component);
    }

    components
}

/// Total weight of records joining `a` and `b`, counting both directions.
/// 0.0 when no record connects them.
pub fn relationship_strength(a: &EntityId, b: &EntityId, records: &[RelationshipRecord]) -> f64 {
    records
        .iter()
        .filter(|record| record.connects(a, b))
        .map(|record| record.weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::RelationshipKind;

    fn id(s: &str) -> EntityId {
        EntityId::new(s)
    }

    fn relation(source: &str, target: &str) -> RelationshipRecord {
        RelationshipRecord::new(RelationshipKind::Relation, id(source), id(target)).two_way()
    }

    /// a->b->c->a and d->e->f->d, oriented as cycles.
    fn two_triangles() -> (Vec<EntityId>, Vec<RelationshipRecord>) {
        let ids = ["a", "b", "c", "d", "e", "f"].map(id).to_vec();
        let records = vec![
            RelationshipRecord::new(RelationshipKind::Relation, id("a"), id("b")),
            RelationshipRecord::new(RelationshipKind::Relation, id("b"), id("c")),
            RelationshipRecord::new(RelationshipKind::Relation, id("c"), id("a")),
            RelationshipRecord::new(RelationshipKind::Relation, id("d"), id("e")),
            RelationshipRecord::new(RelationshipKind::Relation, id("e"), id("f")),
            RelationshipRecord::new(RelationshipKind::Relation, id("f"), id("d")),
        ];
        (ids, records)
    }

    #[test]
    fn test_two_disjoint_triangles() {
        let (ids, records) = two_triangles();
        let components = find_connected_components(&ids, &records);

        assert_eq!(components.len(), 2);
        assert_eq!(components[0].len(), 3);
        assert_eq!(components[1].len(), 3);
        assert!(components[0].contains("a"));
        assert!(components[1].contains("f"));
    }

    #[test]
    fn test_isolated_nodes_are_singletons() {
        let ids = vec![id("a"), id("b"), id("lone")];
        let records = vec![relation("a", "b")];

        let components = find_connected_components(&ids, &records);
        assert_eq!(components.len(), 2);
        assert_eq!(components[1].len(), 1);
        assert!(components[1].contains("lone"));
    }

    #[test]
    fn test_out_of_scope_records_are_ignored() {
        let ids = vec![id("a"), id("b")];
        // the bridge through "x" is outside the requested node set
        let records = vec![relation("a", "x"), relation("x", "b")];

        let components = find_connected_components(&ids, &records);
        assert_eq!(components.len(), 2);
    }

    #[test]
    fn test_bidirectional_flag_feeds_adjacency() {
        let ids = vec![id("b"), id("a")];
        // one-way a->b: starting from b there is no way back to a
        let one_way = vec![RelationshipRecord::new(
            RelationshipKind::Dependency,
            id("a"),
            id("b"),
        )];
        let components = find_connected_components(&ids, &one_way);
        assert_eq!(components.len(), 2);

        let both_ways = vec![RelationshipRecord::new(
            RelationshipKind::Dependency,
            id("a"),
            id("b"),
        )
        .two_way()];
        let components = find_connected_components(&ids, &both_ways);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 2);
    }

    #[test]
    fn test_relationship_strength_sums_both_directions() {
        let records = vec![
            RelationshipRecord::new(RelationshipKind::Requirement, id("p"), id("e")), // 10
            RelationshipRecord::new(RelationshipKind::Reward, id("e"), id("p")),      // 8
            RelationshipRecord::new(RelationshipKind::Reward, id("p"), id("other")),
        ];

        assert_eq!(relationship_strength(&id("p"), &id("e"), &records), 18.0);
        assert_eq!(relationship_strength(&id("e"), &id("p"), &records), 18.0);
        assert_eq!(relationship_strength(&id("p"), &id("missing"), &records), 0.0);
    }
}
