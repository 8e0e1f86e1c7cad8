//! Node collection from raw entities
//!
//! Converts entities into graph nodes through an injected transformer,
//! optionally restricted to an inclusion set. The collector decides WHICH
//! entities become nodes; the transformer decides what those nodes look
//! like (labels, payload shape).

use crate::entity::{
    Character, Element, Entity, EntityCatalog, EntitySelection, Puzzle, TimelineEvent,
};
use crate::graph::node::GraphNode;
use crate::graph::types::{EntityId, EntityKind, NodeIdSet};
use rustc_hash::FxHashMap;

/// Capability injected into [`NodeCollector`]: one mapping function per
/// entity variant. Implementations own label derivation and any
/// type-specific payload; input order must be preserved.
pub trait NodeTransformer {
    fn character_nodes(&self, characters: &[Character]) -> Vec<GraphNode>;
    fn element_nodes(&self, elements: &[Element]) -> Vec<GraphNode>;
    fn puzzle_nodes(&self, puzzles: &[Puzzle]) -> Vec<GraphNode>;
    fn timeline_nodes(&self, events: &[TimelineEvent]) -> Vec<GraphNode>;
}

/// Plain transformer that labels every node with the entity's name.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelTransformer;

impl NodeTransformer for LabelTransformer {
    fn character_nodes(&self, characters: &[Character]) -> Vec<GraphNode> {
        characters
            .iter()
            .map(|c| GraphNode::new(Entity::Character(c.clone()), c.name.clone()))
            .collect()
    }

    fn element_nodes(&self, elements: &[Element]) -> Vec<GraphNode> {
        elements
            .iter()
            .map(|e| GraphNode::new(Entity::Element(e.clone()), e.name.clone()))
            .collect()
    }

    fn puzzle_nodes(&self, puzzles: &[Puzzle]) -> Vec<GraphNode> {
        puzzles
            .iter()
            .map(|p| GraphNode::new(Entity::Puzzle(p.clone()), p.name.clone()))
            .collect()
    }

    fn timeline_nodes(&self, events: &[TimelineEvent]) -> Vec<GraphNode> {
        events
            .iter()
            .map(|t| GraphNode::new(Entity::Timeline(t.clone()), t.name.clone()))
            .collect()
    }
}

/// Selection layer between the entity repository and the graph.
pub struct NodeCollector<T: NodeTransformer> {
    transformer: T,
    included_node_ids: Option<NodeIdSet>,
}

impl<T: NodeTransformer> NodeCollector<T> {
    pub fn new(transformer: T, included_node_ids: Option<NodeIdSet>) -> Self {
        NodeCollector {
            transformer,
            included_node_ids,
        }
    }

    /// Replace the inclusion filter. `None` clears it. Applies to
    /// subsequent collection calls only.
    pub fn set_included_node_ids(&mut self, ids: Option<NodeIdSet>) {
        self.included_node_ids = ids;
    }

    pub fn included_node_ids(&self) -> Option<&NodeIdSet> {
        self.included_node_ids.as_ref()
    }

    fn passes(&self, id: &EntityId) -> bool {
        self.included_node_ids
            .as_ref()
            .map_or(true, |ids| ids.contains(id.as_str()))
    }

    /// Keep only entities passing the inclusion filter, preserving order.
    fn retain_included<E: Clone>(&self, items: &[E], id_of: impl Fn(&E) -> &EntityId) -> Vec<E> {
        items
            .iter()
            .filter(|item| self.passes(id_of(item)))
            .cloned()
            .collect()
    }

    pub fn collect_character_nodes(&self, characters: &[Character]) -> Vec<GraphNode> {
        let kept = self.retain_included(characters, |c| &c.id);
        self.transformer.character_nodes(&kept)
    }

    pub fn collect_element_nodes(&self, elements: &[Element]) -> Vec<GraphNode> {
        let kept = self.retain_included(elements, |e| &e.id);
        self.transformer.element_nodes(&kept)
    }

    pub fn collect_puzzle_nodes(&self, puzzles: &[Puzzle]) -> Vec<GraphNode> {
        let kept = self.retain_included(puzzles, |p| &p.id);
        self.transformer.puzzle_nodes(&kept)
    }

    pub fn collect_timeline_nodes(&self, events: &[TimelineEvent]) -> Vec<GraphNode> {
        let kept = self.retain_included(events, |t| &t.id);
        self.transformer.timeline_nodes(&kept)
    }

    /// Resolve `ids` against the matching catalog collection, preserving
    /// the order of `ids`. Unresolvable ids and ids failing the inclusion
    /// filter are dropped.
    pub fn collect_from_ids(
        &self,
        catalog: &EntityCatalog,
        ids: &[EntityId],
        kind: EntityKind,
    ) -> Vec<GraphNode> {
        fn resolve_ordered<E: Clone>(
            items: &[E],
            ids: &[EntityId],
            id_of: impl Fn(&E) -> &EntityId,
            keep: impl Fn(&EntityId) -> bool,
        ) -> Vec<E> {
            let by_id: FxHashMap<&str, &E> =
                items.iter().map(|item| (id_of(item).as_str(), item)).collect();
            ids.iter()
                .filter(|id| keep(*id))
                .filter_map(|id| by_id.get(id.as_str()))
                .map(|item| (*item).clone())
                .collect()
        }

        let keep = |id: &EntityId| self.passes(id);
        match kind {
            EntityKind::Character => {
                let found = resolve_ordered(&catalog.characters, ids, |c| &c.id, keep);
                self.transformer.character_nodes(&found)
            }
            EntityKind::Element => {
                let found = resolve_ordered(&catalog.elements, ids, |e| &e.id, keep);
                self.transformer.element_nodes(&found)
            }
            EntityKind::Puzzle => {
                let found = resolve_ordered(&catalog.puzzles, ids, |p| &p.id, keep);
                self.transformer.puzzle_nodes(&found)
            }
            EntityKind::Timeline => {
                let found = resolve_ordered(&catalog.timeline, ids, |t| &t.id, keep);
                self.transformer.timeline_nodes(&found)
            }
        }
    }

    /// Collect every entity in the catalog that passes the inclusion
    /// filter, in the fixed order characters, elements, puzzles, timeline.
    ///
    /// Without an inclusion filter this returns NOTHING: "collect all,
    /// unfiltered" would materialize the entire graph, and callers who want
    /// that must say so by supplying the full id set.
    pub fn collect_all(&self, catalog: &EntityCatalog) -> Vec<GraphNode> {
        if self.included_node_ids.is_none() {
            return Vec::new();
        }

        let mut nodes = self.collect_character_nodes(&catalog.characters);
        nodes.extend(self.collect_element_nodes(&catalog.elements));
        nodes.extend(self.collect_puzzle_nodes(&catalog.puzzles));
        nodes.extend(self.collect_timeline_nodes(&catalog.timeline));
        nodes
    }

    /// Collect only the explicitly supplied collections, in the fixed order
    /// characters, elements, puzzles, timeline regardless of how the caller
    /// assembled the selection.
    pub fn collect_specific_entities(&self, selection: &EntitySelection<'_>) -> Vec<GraphNode> {
        let mut nodes = Vec::new();
        if let Some(characters) = selection.characters {
            nodes.extend(self.collect_character_nodes(characters));
        }
        if let Some(elements) = selection.elements {
            nodes.extend(self.collect_element_nodes(elements));
        }
        if let Some(puzzles) = selection.puzzles {
            nodes.extend(self.collect_puzzle_nodes(puzzles));
        }
        if let Some(timeline) = selection.timeline {
            nodes.extend(self.collect_timeline_nodes(timeline));
        }
        nodes
    }
}
