//! Loregraph
//!
//! An entity-relationship graph engine for interactive narrative content.
//! Converts typed domain entities (characters, puzzles, elements, timeline
//! events) into a directed, weighted relationship graph and computes which
//! part of it is visible under the viewer's current filter state.
//!
//! # Architecture
//!
//! The engine is a pipeline of four layers:
//!
//! - **Relationship processing** ([`relationships`]): walks each entity
//!   type's relationship fields and emits typed, weighted records with
//!   per-session duplicate and mirror suppression, then materializes them
//!   into edges.
//! - **Node collection** ([`collect`]): converts entities into nodes
//!   through an injected transformer, optionally restricted to an
//!   inclusion set.
//! - **Graph utilities** ([`graph::util`]): identity- and pair-based
//!   deduplication, inclusion filtering and multi-source merging of the
//!   collected primitives.
//! - **Visibility filtering** ([`filtering`]): breadth-first, depth-limited
//!   traversal deciding the visible node set under one of three modes
//!   (pure, focused, connected).
//!
//! Everything is synchronous and in-memory; persistence, rendering, layout
//! and transport live upstream or downstream of this crate.
//!
//! # Example
//!
//! ```rust
//! use loregraph::{
//!     Character, EntityCatalog, EntityId, ProcessingSession, RelationshipProcessor,
//! };
//!
//! let mut catalog = EntityCatalog::new();
//! catalog.characters.push(
//!     Character::new("char-1", "Ada").with_connections([EntityId::new("char-2")]),
//! );
//! catalog.characters.push(Character::new("char-2", "Brady"));
//!
//! let processor = RelationshipProcessor::default();
//! let mut session = ProcessingSession::new();
//! let edges = processor.process_all_relationships(&mut session, &catalog);
//!
//! assert_eq!(edges.len(), 1);
//! assert_eq!(edges[0].id.as_str(), "relation-char-1-char-2");
//! ```

#![warn(clippy::all)]

pub mod collect;
pub mod entity;
pub mod filtering;
pub mod graph;
pub mod relationships;

// Re-export main types for convenience
pub use entity::{
    Character, Element, Entity, EntityCatalog, EntitySelection, Puzzle, TimelineEvent,
};

pub use graph::{
    dedupe_by_id, dedupe_edges_by_pair, edge_weight_for, extract_ids, filter_by_included_ids,
    merge_and_dedupe, EdgeId, EntityId, EntityKind, GraphEdge, GraphError, GraphNode, GraphResult,
    Keyed, NodeData, NodeIdSet, Position, PropertyMap, PropertyValue, RelationshipKind,
    DEFAULT_EDGE_WEIGHT,
};

pub use relationships::{
    find_connected_components, relationship_strength, ProcessingSession, ProcessorOptions,
    RelationshipProcessor, RelationshipRecord,
};

pub use collect::{LabelTransformer, NodeCollector, NodeTransformer};

pub use filtering::{
    nodes_within_depth, resolve_visible_nodes, visible_node_ids, FilterSnapshot, VisibilityMode,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
