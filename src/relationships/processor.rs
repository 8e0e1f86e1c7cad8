//! Relationship extraction over domain entities
//!
//! Walks each entity type's relationship fields and emits typed, weighted
//! records, with per-session duplicate and mirror suppression. Extraction is
//! best-effort over possibly-incomplete reference data: an id that resolves
//! to nothing is skipped with a debug diagnostic, never an error.

use super::components;
use super::record::RelationshipRecord;
use super::session::ProcessingSession;
use crate::entity::{Character, Element, EntityCatalog, Puzzle, TimelineEvent};
use crate::graph::edge::GraphEdge;
use crate::graph::types::{EntityId, NodeIdSet, RelationshipKind};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Extraction settings for one processor.
#[derive(Debug, Clone)]
pub struct ProcessorOptions {
    /// Treat mirrored triples as duplicates: once `(kind, a, b)` is
    /// registered, `(kind, b, a)` is suppressed too.
    pub create_bidirectional: bool,

    /// When set, records targeting a node outside this set are skipped.
    pub included_node_ids: Option<NodeIdSet>,

    /// Records below this weight are dropped at edge materialization.
    pub min_weight: f64,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        ProcessorOptions {
            create_bidirectional: true,
            included_node_ids: None,
            min_weight: 0.0,
        }
    }
}

/// Domain-aware relationship extractor.
///
/// The processor itself is immutable configuration; all per-pass state lives
/// in the [`ProcessingSession`] handed to each extractor.
#[derive(Debug, Clone, Default)]
pub struct RelationshipProcessor {
    options: ProcessorOptions,
}

impl RelationshipProcessor {
    pub fn new(options: ProcessorOptions) -> Self {
        RelationshipProcessor { options }
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    fn is_included(&self, id: &EntityId) -> bool {
        self.options
            .included_node_ids
            .as_ref()
            .map_or(true, |ids| ids.contains(id.as_str()))
    }

    /// Register a triple unless it, or (with `create_bidirectional`) its
    /// mirror, is already present.
    fn try_register(
        &self,
        session: &mut ProcessingSession,
        kind: RelationshipKind,
        source: &EntityId,
        target: &EntityId,
    ) -> bool {
        if session.is_registered(kind, source, target) {
            return false;
        }
        if self.options.create_bidirectional && session.is_registered(kind, target, source) {
            return false;
        }
        session.register(kind, source, target)
    }

    /// Inclusion check plus registration, shared by every extractor.
    fn admit(
        &self,
        session: &mut ProcessingSession,
        kind: RelationshipKind,
        source: &EntityId,
        target: &EntityId,
    ) -> bool {
        self.is_included(target) && self.try_register(session, kind, source, target)
    }

    /// Social connections and element ownership for one character.
    ///
    /// Connections need the full character list to resolve names for the
    /// `"{A} ↔ {B}"` label; unresolvable connections are skipped.
    pub fn process_character_relationships(
        &self,
        session: &mut ProcessingSession,
        character: &Character,
        all_characters: &[Character],
    ) -> Vec<RelationshipRecord> {
        let by_id: FxHashMap<&str, &Character> = all_characters
            .iter()
            .map(|c| (c.id.as_str(), c))
            .collect();

        let mut records = Vec::new();

        for other_id in &character.connections {
            let Some(other) = by_id.get(other_id.as_str()) else {
                debug!(source = %character.id, target = %other_id, "skipping connection to unresolved character");
                continue;
            };
            if !self.admit(session, RelationshipKind::Relation, &character.id, &other.id) {
                continue;
            }
            records.push(
                RelationshipRecord::new(
                    RelationshipKind::Relation,
                    character.id.clone(),
                    other.id.clone(),
                )
                .labeled(format!("{} ↔ {}", character.name, other.name))
                .two_way(),
            );
        }

        for element_id in &character.owned_element_ids {
            if !self.admit(session, RelationshipKind::Ownership, &character.id, element_id) {
                continue;
            }
            records.push(
                RelationshipRecord::new(
                    RelationshipKind::Ownership,
                    character.id.clone(),
                    element_id.clone(),
                )
                .labeled("owns"),
            );
        }

        records
    }

    /// Sub-puzzle, required-element and reward links for one puzzle.
    pub fn process_puzzle_relationships(
        &self,
        session: &mut ProcessingSession,
        puzzle: &Puzzle,
    ) -> Vec<RelationshipRecord> {
        let mut records = Vec::new();

        for sub_id in &puzzle.sub_puzzle_ids {
            if self.admit(session, RelationshipKind::Dependency, &puzzle.id, sub_id) {
                records.push(
                    RelationshipRecord::new(
                        RelationshipKind::Dependency,
                        puzzle.id.clone(),
                        sub_id.clone(),
                    )
                    .labeled("depends on"),
                );
            }
        }

        for element_id in &puzzle.puzzle_element_ids {
            if self.admit(session, RelationshipKind::Requirement, &puzzle.id, element_id) {
                records.push(
                    RelationshipRecord::new(
                        RelationshipKind::Requirement,
                        puzzle.id.clone(),
                        element_id.clone(),
                    )
                    .labeled("requires"),
                );
            }
        }

        for reward_id in &puzzle.reward_ids {
            if self.admit(session, RelationshipKind::Reward, &puzzle.id, reward_id) {
                records.push(
                    RelationshipRecord::new(
                        RelationshipKind::Reward,
                        puzzle.id.clone(),
                        reward_id.clone(),
                    )
                    .labeled("rewards"),
                );
            }
        }

        records
    }

    /// Puzzle links stored on an element, re-oriented to the puzzle's
    /// perspective.
    ///
    /// Requirement and reward edges always point puzzle → element, so the
    /// element's own fields produce records whose SOURCE is the referenced
    /// puzzle. Consumers rely on that orientation; do not "fix" it to
    /// source-is-owner. Entries whose puzzle cannot be resolved are skipped.
    pub fn process_element_relationships(
        &self,
        session: &mut ProcessingSession,
        element: &Element,
        all_puzzles: &[Puzzle],
    ) -> Vec<RelationshipRecord> {
        let by_id: FxHashMap<&str, &Puzzle> =
            all_puzzles.iter().map(|p| (p.id.as_str(), p)).collect();

        let mut records = Vec::new();

        for puzzle_id in &element.required_for_puzzle_ids {
            let Some(puzzle) = by_id.get(puzzle_id.as_str()) else {
                debug!(element = %element.id, puzzle = %puzzle_id, "skipping requirement for unresolved puzzle");
                continue;
            };
            if self.admit(session, RelationshipKind::Requirement, &puzzle.id, &element.id) {
                records.push(
                    RelationshipRecord::new(
                        RelationshipKind::Requirement,
                        puzzle.id.clone(),
                        element.id.clone(),
                    )
                    .labeled("requires"),
                );
            }
        }

        for puzzle_id in &element.rewarded_by_puzzle_ids {
            let Some(puzzle) = by_id.get(puzzle_id.as_str()) else {
                debug!(element = %element.id, puzzle = %puzzle_id, "skipping reward from unresolved puzzle");
                continue;
            };
            if self.admit(session, RelationshipKind::Reward, &puzzle.id, &element.id) {
                records.push(
                    RelationshipRecord::new(
                        RelationshipKind::Reward,
                        puzzle.id.clone(),
                        element.id.clone(),
                    )
                    .labeled("rewards"),
                );
            }
        }

        records
    }

    /// Character involvement links for one timeline event.
    pub fn process_timeline_relationships(
        &self,
        session: &mut ProcessingSession,
        event: &TimelineEvent,
    ) -> Vec<RelationshipRecord> {
        let mut records = Vec::new();

        for character_id in &event.characters_involved_ids {
            if self.admit(session, RelationshipKind::Timeline, &event.id, character_id) {
                records.push(
                    RelationshipRecord::new(
                        RelationshipKind::Timeline,
                        event.id.clone(),
                        character_id.clone(),
                    )
                    .labeled("involves"),
                );
            }
        }

        records
    }

    /// Materialize records into edges, dropping those below the weight
    /// threshold.
    pub fn create_edges_from_relationships(
        &self,
        records: Vec<RelationshipRecord>,
    ) -> Vec<GraphEdge> {
        records
            .into_iter()
            .filter(|record| record.weight >= self.options.min_weight)
            .map(RelationshipRecord::into_edge)
            .collect()
    }

    /// Run every extractor over a catalog and materialize the result.
    ///
    /// Extraction order is fixed (characters, puzzles, elements, timeline)
    /// so dedup collisions between passes resolve the same way every run.
    pub fn process_all_relationships(
        &self,
        session: &mut ProcessingSession,
        catalog: &EntityCatalog,
    ) -> Vec<GraphEdge> {
        let mut records = Vec::new();

        for character in &catalog.characters {
            records.extend(self.process_character_relationships(
                session,
                character,
                &catalog.characters,
            ));
        }
        for puzzle in &catalog.puzzles {
            records.extend(self.process_puzzle_relationships(session, puzzle));
        }
        for element in &catalog.elements {
            records.extend(self.process_element_relationships(
                session,
                element,
                &catalog.puzzles,
            ));
        }
        for event in &catalog.timeline {
            records.extend(self.process_timeline_relationships(session, event));
        }

        debug!(
            records = records.len(),
            registered = session.len(),
            "relationship extraction pass complete"
        );
        self.create_edges_from_relationships(records)
    }

    /// Connected subgraphs among `node_ids`, per the supplied records.
    pub fn find_connected_components(
        &self,
        node_ids: &[EntityId],
        records: &[RelationshipRecord],
    ) -> Vec<NodeIdSet> {
        components::find_connected_components(node_ids, records)
    }

    /// Total weight of records joining `a` and `b` in either direction.
    pub fn relationship_strength(
        &self,
        a: &EntityId,
        b: &EntityId,
        records: &[RelationshipRecord],
    ) -> f64 {
        components::relationship_strength(a, b, records)
    }
}
