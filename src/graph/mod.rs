//! Graph primitives for the relationship engine
//!
//! This module owns the materialized graph model:
//! - stable string ids for nodes and composed ids for edges
//! - the closed relationship-kind set and its fixed weight table
//! - node and edge types consumed by the rendering layer
//! - generic dedup/merge/filter utilities over those primitives

pub mod edge;
pub mod node;
pub mod property;
pub mod types;
pub mod util;

// Re-export main types
pub use edge::GraphEdge;
pub use node::{GraphNode, NodeData};
pub use property::{PropertyMap, PropertyValue};
pub use types::{
    edge_weight_for, EdgeId, EntityId, EntityKind, GraphError, GraphResult, NodeIdSet, Position,
    RelationshipKind, DEFAULT_EDGE_WEIGHT,
};
pub use util::{
    dedupe_by_id, dedupe_edges_by_pair, extract_ids, filter_by_included_ids, merge_and_dedupe,
    Keyed,
};
