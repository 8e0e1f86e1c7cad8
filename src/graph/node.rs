//! Node implementation for the relationship graph

use super::types::{EntityId, EntityKind, Position};
use crate::entity::Entity;
use serde::{Deserialize, Serialize};

/// Renderer-facing payload of a node: a display label plus the underlying
/// entity. Label derivation is owned by the node transformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    pub entity: Entity,
}

/// A materialized graph node.
///
/// Nodes carry:
/// - the entity's stable id
/// - the entity kind, for per-type styling and visibility toggles
/// - the display payload
/// - a placeholder position (layout happens downstream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: EntityId,
    pub kind: EntityKind,
    pub data: NodeData,
    pub position: Position,
}

impl GraphNode {
    /// Create a node for an entity, placed at the origin.
    pub fn new(entity: Entity, label: impl Into<String>) -> Self {
        GraphNode {
            id: entity.id().clone(),
            kind: entity.kind(),
            data: NodeData {
                label: label.into(),
                entity,
            },
            position: Position::ORIGIN,
        }
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }
}

impl PartialEq for GraphNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GraphNode {}

impl std::hash::Hash for GraphNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Character;

    fn node(id: &str, name: &str) -> GraphNode {
        let character = Character::new(id, name);
        let label = character.name.clone();
        GraphNode::new(Entity::Character(character), label)
    }

    #[test]
    fn test_create_node() {
        let n = node("char-1", "Ada");
        assert_eq!(n.id.as_str(), "char-1");
        assert_eq!(n.kind, EntityKind::Character);
        assert_eq!(n.label(), "Ada");
        assert_eq!(n.position, Position::ORIGIN);
    }

    #[test]
    fn test_node_equality_is_by_id() {
        let a = node("char-1", "Ada");
        let b = node("char-1", "Renamed");
        let c = node("char-2", "Ada");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
