//! Edge implementation for the relationship graph

use super::property::PropertyMap;
use super::types::{EdgeId, EntityId, RelationshipKind};
use serde::{Deserialize, Serialize};

/// A directed, weighted edge materialized from a relationship record.
///
/// The id is composed from `(kind, source, target)`, so identical triples
/// collapse onto one edge id regardless of which pass produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: EdgeId,

    /// Edge goes FROM this node.
    pub source: EntityId,

    /// Edge goes TO this node.
    pub target: EntityId,

    pub kind: RelationshipKind,

    /// Weight from the fixed per-kind table.
    pub weight: f64,

    /// Short display label ("requires", "owns", ...).
    pub label: Option<String>,

    pub metadata: PropertyMap,
}

impl GraphEdge {
    pub fn new(
        kind: RelationshipKind,
        source: EntityId,
        target: EntityId,
        weight: f64,
        label: Option<String>,
        metadata: PropertyMap,
    ) -> Self {
        GraphEdge {
            id: EdgeId::compose(kind, &source, &target),
            source,
            target,
            kind,
            weight,
            label,
            metadata,
        }
    }

    /// Check if this edge joins two specific nodes, in either direction.
    pub fn connects(&self, a: &EntityId, b: &EntityId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    /// Check if this edge goes FROM a specific node.
    pub fn starts_from(&self, node: &EntityId) -> bool {
        &self.source == node
    }

    /// Check if this edge goes TO a specific node.
    pub fn ends_at(&self, node: &EntityId) -> bool {
        &self.target == node
    }
}

impl PartialEq for GraphEdge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GraphEdge {}

impl std::hash::Hash for GraphEdge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(kind: RelationshipKind, source: &str, target: &str) -> GraphEdge {
        GraphEdge::new(
            kind,
            EntityId::new(source),
            EntityId::new(target),
            kind.weight(),
            None,
            PropertyMap::new(),
        )
    }

    #[test]
    fn test_edge_id_format() {
        let e = edge(RelationshipKind::Ownership, "char-1", "elem-1");
        assert_eq!(e.id.as_str(), "ownership-char-1-elem-1");
        assert_eq!(e.weight, 6.0);
    }

    #[test]
    fn test_edge_direction() {
        let e = edge(RelationshipKind::Timeline, "evt-1", "char-1");
        let evt = EntityId::new("evt-1");
        let chr = EntityId::new("char-1");

        assert!(e.starts_from(&evt));
        assert!(e.ends_at(&chr));
        assert!(!e.starts_from(&chr));
    }

    #[test]
    fn test_edge_connects_ignores_direction() {
        let e = edge(RelationshipKind::Relation, "char-1", "char-2");
        let a = EntityId::new("char-1");
        let b = EntityId::new("char-2");
        let c = EntityId::new("char-3");

        assert!(e.connects(&a, &b));
        assert!(e.connects(&b, &a));
        assert!(!e.connects(&a, &c));
    }

    #[test]
    fn test_edge_equality_is_by_id() {
        let a = edge(RelationshipKind::Relation, "char-1", "char-2");
        let b = edge(RelationshipKind::Relation, "char-1", "char-2");
        let c = edge(RelationshipKind::Relation, "char-2", "char-1");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
