//! Core type definitions for the relationship graph

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors surfaced at the crate's string boundaries.
///
/// The graph core itself never fails: malformed input degrades to empty
/// collections and dangling references are skipped. Only parsing externally
/// supplied names (relationship kinds, visibility modes) can error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown relationship kind: {0}")]
    UnknownRelationshipKind(String),

    #[error("unknown visibility mode: {0}")]
    UnknownVisibilityMode(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Unique identifier for a domain entity (and therefore a graph node).
///
/// Ids are stable strings minted by the upstream content repository; the
/// graph treats them as opaque keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId(id.to_string())
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a materialized edge.
///
/// Composed as `"{kind}-{source}-{target}"`, so two records with the same
/// (kind, source, target) triple collapse onto the same edge id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn compose(kind: RelationshipKind, source: &EntityId, target: &EntityId) -> Self {
        EdgeId(format!("{}-{}-{}", kind.as_str(), source, target))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeId {
    fn from(id: String) -> Self {
        EdgeId(id)
    }
}

impl Borrow<str> for EdgeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The four entity variants the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Character,
    Element,
    Puzzle,
    Timeline,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Character => "character",
            EntityKind::Element => "element",
            EntityKind::Puzzle => "puzzle",
            EntityKind::Timeline => "timeline",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weight assigned to a relationship kind absent from the fixed table.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Closed set of relationship kinds between entities.
///
/// Each kind carries a fixed weight used for edge materialization and
/// relationship-strength scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    Requirement,
    Reward,
    Ownership,
    Owner,
    Relation,
    Chain,
    Dependency,
    Timeline,
    Collaboration,
    Container,
    PuzzleGrouping,
    VirtualDependency,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Requirement => "requirement",
            RelationshipKind::Reward => "reward",
            RelationshipKind::Ownership => "ownership",
            RelationshipKind::Owner => "owner",
            RelationshipKind::Relation => "relation",
            RelationshipKind::Chain => "chain",
            RelationshipKind::Dependency => "dependency",
            RelationshipKind::Timeline => "timeline",
            RelationshipKind::Collaboration => "collaboration",
            RelationshipKind::Container => "container",
            RelationshipKind::PuzzleGrouping => "puzzle-grouping",
            RelationshipKind::VirtualDependency => "virtual-dependency",
        }
    }

    /// Fixed edge weight for this kind.
    pub fn weight(&self) -> f64 {
        match self {
            RelationshipKind::Requirement => 10.0,
            RelationshipKind::Reward => 8.0,
            RelationshipKind::Ownership => 6.0,
            RelationshipKind::Owner => 6.0,
            RelationshipKind::Relation => 4.0,
            RelationshipKind::Chain => 15.0,
            RelationshipKind::Dependency => 10.0,
            RelationshipKind::Timeline => 5.0,
            RelationshipKind::Collaboration => 4.0,
            RelationshipKind::Container => 3.0,
            RelationshipKind::PuzzleGrouping => 12.0,
            RelationshipKind::VirtualDependency => 7.0,
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RelationshipKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requirement" => Ok(RelationshipKind::Requirement),
            "reward" => Ok(RelationshipKind::Reward),
            "ownership" => Ok(RelationshipKind::Ownership),
            "owner" => Ok(RelationshipKind::Owner),
            "relation" => Ok(RelationshipKind::Relation),
            "chain" => Ok(RelationshipKind::Chain),
            "dependency" => Ok(RelationshipKind::Dependency),
            "timeline" => Ok(RelationshipKind::Timeline),
            "collaboration" => Ok(RelationshipKind::Collaboration),
            "container" => Ok(RelationshipKind::Container),
            "puzzle-grouping" => Ok(RelationshipKind::PuzzleGrouping),
            "virtual-dependency" => Ok(RelationshipKind::VirtualDependency),
            other => Err(GraphError::UnknownRelationshipKind(other.to_string())),
        }
    }
}

/// Weight lookup for a kind name arriving as a raw string.
///
/// Kind names come from upstream tooling and may drift ahead of this crate;
/// unrecognized names fall back to [`DEFAULT_EDGE_WEIGHT`].
pub fn edge_weight_for(kind: &str) -> f64 {
    kind.parse::<RelationshipKind>()
        .map(|k| k.weight())
        .unwrap_or(DEFAULT_EDGE_WEIGHT)
}

/// Node placement on the canvas.
///
/// Layout is owned by the rendering layer; nodes are materialized at the
/// origin and positioned later.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };
}

/// Set of node ids with deterministic iteration order.
///
/// Insertion order is preserved (traversal results iterate in discovery
/// order) while membership checks stay O(1) on the Fx hasher.
pub type NodeIdSet = IndexSet<EntityId, FxBuildHasher>;
