//! Depth-limited visibility filtering
//!
//! Given the materialized edge list and the viewer's current filter state,
//! computes which node ids are visible. Traversal is breadth-first over an
//! undirected adjacency map built once per call; depth counts hops across
//! that adjacency regardless of edge direction.

use crate::graph::edge::GraphEdge;
use crate::graph::types::{EntityId, GraphError, NodeIdSet};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// How depth and filters combine into the visible node set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityMode {
    /// The filtered set verbatim; depth is ignored.
    #[default]
    Pure,
    /// The depth-neighborhood of a single focus node.
    Focused,
    /// The filtered set plus the depth-neighborhood of each of its members,
    /// traversing only filter-internal edges.
    Connected,
}

impl VisibilityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityMode::Pure => "pure",
            VisibilityMode::Focused => "focused",
            VisibilityMode::Connected => "connected",
        }
    }
}

impl fmt::Display for VisibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VisibilityMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pure" => Ok(VisibilityMode::Pure),
            "focused" => Ok(VisibilityMode::Focused),
            "connected" => Ok(VisibilityMode::Connected),
            other => Err(GraphError::UnknownVisibilityMode(other.to_string())),
        }
    }
}

/// Undirected adjacency over the edges `allow` admits.
fn undirected_adjacency<'a>(
    edges: &'a [GraphEdge],
    allow: impl Fn(&GraphEdge) -> bool,
) -> FxHashMap<&'a EntityId, Vec<&'a EntityId>> {
    let mut adjacency: FxHashMap<&EntityId, Vec<&EntityId>> = FxHashMap::default();
    for edge in edges.iter().filter(|e| allow(*e)) {
        adjacency.entry(&edge.source).or_default().push(&edge.target);
        adjacency.entry(&edge.target).or_default().push(&edge.source);
    }
    adjacency
}

/// Breadth-first expansion from `focus`, enqueuing neighbors while the
/// current hop count is below `max_depth`.
fn bfs_from(
    focus: &EntityId,
    adjacency: &FxHashMap<&EntityId, Vec<&EntityId>>,
    max_depth: i32,
) -> NodeIdSet {
    let mut visible = NodeIdSet::default();
    visible.insert(focus.clone());

    let max_depth = max_depth.max(0);
    if max_depth == 0 {
        return visible;
    }

    let mut queue: VecDeque<(&EntityId, i32)> = VecDeque::new();
    queue.push_back((focus, 0));

    while let Some((node, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        if let Some(neighbors) = adjacency.get(node) {
            for &neighbor in neighbors {
                if visible.insert(neighbor.clone()) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }
    }

    visible
}

/// Every node within `max_depth` undirected hops of `focus`, including
/// `focus` itself.
///
/// `max_depth <= 0` clamps to the singleton `{focus}`. A focus id absent
/// from every edge (including the empty id) is still a singleton, never an
/// empty set.
pub fn nodes_within_depth(
    focus: &EntityId,
    edges: &[GraphEdge],
    max_depth: i32,
) -> NodeIdSet {
    bfs_from(focus, &undirected_adjacency(edges, |_| true), max_depth)
}

/// Resolve the visible node set for one mode.
///
/// `connection_depth` of `None` or anything non-positive disables depth
/// handling entirely: every mode degrades to the filtered set verbatim. The
/// same fallback applies when `Focused` is requested without a focus node.
pub fn visible_node_ids(
    mode: VisibilityMode,
    filtered_node_ids: &NodeIdSet,
    edges: &[GraphEdge],
    focus_node_id: Option<&EntityId>,
    connection_depth: Option<i32>,
    respect_filters: bool,
) -> NodeIdSet {
    let Some(depth) = connection_depth.filter(|d| *d > 0) else {
        return filtered_node_ids.clone();
    };

    match mode {
        VisibilityMode::Pure => filtered_node_ids.clone(),

        VisibilityMode::Focused => {
            let Some(focus) = focus_node_id else {
                return filtered_node_ids.clone();
            };
            if respect_filters {
                let adjacency = undirected_adjacency(edges, |e| {
                    filtered_node_ids.contains(e.source.as_str())
                        && filtered_node_ids.contains(e.target.as_str())
                });
                bfs_from(focus, &adjacency, depth)
            } else {
                let mut visible = nodes_within_depth(focus, edges, depth);
                visible.extend(filtered_node_ids.iter().cloned());
                visible
            }
        }

        VisibilityMode::Connected => {
            let adjacency = undirected_adjacency(edges, |e| {
                filtered_node_ids.contains(e.source.as_str())
                    && filtered_node_ids.contains(e.target.as_str())
            });
            let mut visible = filtered_node_ids.clone();
            for id in filtered_node_ids {
                visible.extend(bfs_from(id, &adjacency, depth));
            }
            visible
        }
    }
}

/// Snapshot of the viewer's filter state, as supplied by the UI store on
/// each recomputation.
#[derive(Debug, Clone, Default)]
pub struct FilterSnapshot {
    pub mode: VisibilityMode,
    /// Node ids surviving the active search/attribute filters.
    pub filtered_node_ids: NodeIdSet,
    pub focus_node_id: Option<EntityId>,
    /// Explicitly selected node, if any. Selection outranks filtering: its
    /// neighborhood is unioned into the result, never replaced by it.
    pub selected_node_id: Option<EntityId>,
    pub connection_depth: Option<i32>,
    pub respect_filters: bool,
}

/// Resolve a full snapshot: mode resolution first, then the selected node's
/// neighborhood (over the unrestricted edge set) unioned on top.
pub fn resolve_visible_nodes(snapshot: &FilterSnapshot, edges: &[GraphEdge]) -> NodeIdSet {
    let mut visible = visible_node_ids(
        snapshot.mode,
        &snapshot.filtered_node_ids,
        edges,
        snapshot.focus_node_id.as_ref(),
        snapshot.connection_depth,
        snapshot.respect_filters,
    );

    if let Some(selected) = &snapshot.selected_node_id {
        let depth = snapshot.connection_depth.unwrap_or(1);
        visible.extend(nodes_within_depth(selected, edges, depth));
    }

    visible
}
