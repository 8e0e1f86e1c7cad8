//! Typed relationship records
//!
//! A record is the intermediate description of a link between two entities,
//! produced by extraction and consumed by edge materialization. Its weight
//! is a pure function of its kind.

use crate::graph::edge::GraphEdge;
use crate::graph::property::PropertyMap;
use crate::graph::types::{EntityId, RelationshipKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub kind: RelationshipKind,
    pub source: EntityId,
    pub target: EntityId,
    pub label: Option<String>,
    pub weight: f64,
    /// Whether the link reads the same from both ends. Affects mirror
    /// suppression during extraction and adjacency during component
    /// discovery; materialized edges stay directed either way.
    pub bidirectional: bool,
    pub metadata: PropertyMap,
}

impl RelationshipRecord {
    pub fn new(kind: RelationshipKind, source: EntityId, target: EntityId) -> Self {
        RelationshipRecord {
            kind,
            source,
            target,
            label: None,
            weight: kind.weight(),
            bidirectional: false,
            metadata: PropertyMap::new(),
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn two_way(mut self) -> Self {
        self.bidirectional = true;
        self
    }

    pub fn with_metadata(mut self, metadata: PropertyMap) -> Self {
        self.metadata = metadata;
        self
    }

    /// Check if this record joins two specific nodes, in either direction.
    pub fn connects(&self, a: &EntityId, b: &EntityId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    /// Materialize this record into a directed graph edge.
    pub fn into_edge(self) -> GraphEdge {
        GraphEdge::new(
            self.kind,
            self.source,
            self.target,
            self.weight,
            self.label,
            self.metadata,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_weight_follows_kind() {
        let record = RelationshipRecord::new(
            RelationshipKind::Requirement,
            EntityId::new("puzzle-1"),
            EntityId::new("elem-1"),
        );
        assert_eq!(record.weight, 10.0);
        assert!(!record.bidirectional);
        assert!(record.label.is_none());
    }

    #[test]
    fn test_record_builders() {
        let record = RelationshipRecord::new(
            RelationshipKind::Relation,
            EntityId::new("char-1"),
            EntityId::new("char-2"),
        )
        .labeled("Ada ↔ Brady")
        .two_way();

        assert_eq!(record.label.as_deref(), Some("Ada ↔ Brady"));
        assert!(record.bidirectional);
    }

    #[test]
    fn test_record_connects() {
        let record = RelationshipRecord::new(
            RelationshipKind::Timeline,
            EntityId::new("evt-1"),
            EntityId::new("char-1"),
        );
        assert!(record.connects(&EntityId::new("char-1"), &EntityId::new("evt-1")));
        assert!(!record.connects(&EntityId::new("evt-1"), &EntityId::new("char-2")));
    }

    #[test]
    fn test_into_edge() {
        let edge = RelationshipRecord::new(
            RelationshipKind::Ownership,
            EntityId::new("char-1"),
            EntityId::new("elem-1"),
        )
        .labeled("owns")
        .into_edge();

        assert_eq!(edge.id.as_str(), "ownership-char-1-elem-1");
        assert_eq!(edge.weight, 6.0);
        assert_eq!(edge.label.as_deref(), Some("owns"));
    }
}
