//! Domain entities consumed by the graph engine
//!
//! Entities are authored upstream and arrive already validated; this crate
//! reads their relationship fields and never mutates them. Reference data is
//! allowed to be incomplete during authoring, so an id that resolves to
//! nothing is not an error here.

use crate::graph::types::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};

/// A character in the story, connected to other characters and owning
/// physical elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    /// Ids of other characters this one is socially connected to.
    pub connections: Vec<EntityId>,
    /// Ids of elements this character owns.
    pub owned_element_ids: Vec<EntityId>,
}

impl Character {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Character {
            id: id.into(),
            name: name.into(),
            connections: Vec::new(),
            owned_element_ids: Vec::new(),
        }
    }

    pub fn with_connections(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.connections = ids.into_iter().collect();
        self
    }

    pub fn with_owned_elements(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.owned_element_ids = ids.into_iter().collect();
        self
    }
}

/// A puzzle, composed of sub-puzzles, requiring elements and paying out
/// rewards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: EntityId,
    pub name: String,
    pub sub_puzzle_ids: Vec<EntityId>,
    pub puzzle_element_ids: Vec<EntityId>,
    pub reward_ids: Vec<EntityId>,
}

impl Puzzle {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Puzzle {
            id: id.into(),
            name: name.into(),
            sub_puzzle_ids: Vec::new(),
            puzzle_element_ids: Vec::new(),
            reward_ids: Vec::new(),
        }
    }

    pub fn with_sub_puzzles(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.sub_puzzle_ids = ids.into_iter().collect();
        self
    }

    pub fn with_elements(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.puzzle_element_ids = ids.into_iter().collect();
        self
    }

    pub fn with_rewards(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.reward_ids = ids.into_iter().collect();
        self
    }
}

/// A physical or narrative element. Its puzzle references are stored from
/// the element's own point of view; edge materialization re-orients them to
/// the puzzle's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: EntityId,
    pub name: String,
    pub required_for_puzzle_ids: Vec<EntityId>,
    pub rewarded_by_puzzle_ids: Vec<EntityId>,
}

impl Element {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Element {
            id: id.into(),
            name: name.into(),
            required_for_puzzle_ids: Vec::new(),
            rewarded_by_puzzle_ids: Vec::new(),
        }
    }

    pub fn required_for(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.required_for_puzzle_ids = ids.into_iter().collect();
        self
    }

    pub fn rewarded_by(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.rewarded_by_puzzle_ids = ids.into_iter().collect();
        self
    }
}

/// An event on the story timeline involving some set of characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: EntityId,
    pub name: String,
    pub characters_involved_ids: Vec<EntityId>,
}

impl TimelineEvent {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        TimelineEvent {
            id: id.into(),
            name: name.into(),
            characters_involved_ids: Vec::new(),
        }
    }

    pub fn involving(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.characters_involved_ids = ids.into_iter().collect();
        self
    }
}

/// Any of the four entity variants, as carried in a graph node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entity {
    Character(Character),
    Element(Element),
    Puzzle(Puzzle),
    Timeline(TimelineEvent),
}

impl Entity {
    pub fn id(&self) -> &EntityId {
        match self {
            Entity::Character(c) => &c.id,
            Entity::Element(e) => &e.id,
            Entity::Puzzle(p) => &p.id,
            Entity::Timeline(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Character(c) => &c.name,
            Entity::Element(e) => &e.name,
            Entity::Puzzle(p) => &p.name,
            Entity::Timeline(t) => &t.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Character(_) => EntityKind::Character,
            Entity::Element(_) => EntityKind::Element,
            Entity::Puzzle(_) => EntityKind::Puzzle,
            Entity::Timeline(_) => EntityKind::Timeline,
        }
    }
}

/// The full entity inventory for one processing pass.
///
/// Collections may be empty; an absent collection and an empty one behave
/// identically everywhere in the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityCatalog {
    pub characters: Vec<Character>,
    pub elements: Vec<Element>,
    pub puzzles: Vec<Puzzle>,
    pub timeline: Vec<TimelineEvent>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
            && self.elements.is_empty()
            && self.puzzles.is_empty()
            && self.timeline.is_empty()
    }

    pub fn len(&self) -> usize {
        self.characters.len() + self.elements.len() + self.puzzles.len() + self.timeline.len()
    }
}

/// An explicit subset of catalog collections for targeted node collection.
///
/// Only the collections a caller actually supplies are visited; `None`
/// means "not requested", which is different from an empty slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntitySelection<'a> {
    pub characters: Option<&'a [Character]>,
    pub elements: Option<&'a [Element]>,
    pub puzzles: Option<&'a [Puzzle]>,
    pub timeline: Option<&'a [TimelineEvent]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_accessors() {
        let character = Character::new("char-1", "Ada")
            .with_connections([EntityId::new("char-2")])
            .with_owned_elements([EntityId::new("elem-1")]);
        let entity = Entity::Character(character);

        assert_eq!(entity.id().as_str(), "char-1");
        assert_eq!(entity.name(), "Ada");
        assert_eq!(entity.kind(), EntityKind::Character);
    }

    #[test]
    fn test_puzzle_builder() {
        let puzzle = Puzzle::new("puzzle-1", "Locked Safe")
            .with_sub_puzzles([EntityId::new("puzzle-2")])
            .with_elements([EntityId::new("elem-1"), EntityId::new("elem-2")])
            .with_rewards([EntityId::new("elem-3")]);

        assert_eq!(puzzle.sub_puzzle_ids.len(), 1);
        assert_eq!(puzzle.puzzle_element_ids.len(), 2);
        assert_eq!(puzzle.reward_ids.len(), 1);
    }

    #[test]
    fn test_catalog_len() {
        let mut catalog = EntityCatalog::new();
        assert!(catalog.is_empty());

        catalog.characters.push(Character::new("char-1", "Ada"));
        catalog.timeline.push(TimelineEvent::new("evt-1", "The heist"));
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }
}
