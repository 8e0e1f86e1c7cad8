//! Per-pass deduplication registry
//!
//! Extraction registers every emitted `(kind, source, target)` triple here
//! so reprocessing the same entity, or the mirrored direction of a
//! bidirectional link, yields nothing new. The session is an explicit value:
//! one session covers one processing pass, and pass isolation is achieved by
//! constructing a fresh session rather than by remembering to reset shared
//! state.

use crate::graph::types::{EntityId, RelationshipKind};
use rustc_hash::FxHashSet;

#[derive(Debug, Default, Clone)]
pub struct ProcessingSession {
    processed: FxHashSet<String>,
}

impl ProcessingSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry_key(kind: RelationshipKind, source: &EntityId, target: &EntityId) -> String {
        format!("{}:{}:{}", kind.as_str(), source, target)
    }

    /// Register a triple. Returns `false` if it was already registered.
    pub fn register(
        &mut self,
        kind: RelationshipKind,
        source: &EntityId,
        target: &EntityId,
    ) -> bool {
        self.processed.insert(Self::registry_key(kind, source, target))
    }

    pub fn is_registered(
        &self,
        kind: RelationshipKind,
        source: &EntityId,
        target: &EntityId,
    ) -> bool {
        self.processed.contains(&Self::registry_key(kind, source, target))
    }

    /// Forget everything registered so far. Equivalent to starting a fresh
    /// session for the next pass.
    pub fn clear(&mut self) {
        self.processed.clear();
    }

    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_once() {
        let mut session = ProcessingSession::new();
        let a = EntityId::new("char-1");
        let b = EntityId::new("char-2");

        assert!(session.register(RelationshipKind::Relation, &a, &b));
        assert!(!session.register(RelationshipKind::Relation, &a, &b));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_directions_and_kinds_are_distinct() {
        let mut session = ProcessingSession::new();
        let a = EntityId::new("char-1");
        let b = EntityId::new("char-2");

        session.register(RelationshipKind::Relation, &a, &b);
        assert!(!session.is_registered(RelationshipKind::Relation, &b, &a));
        assert!(!session.is_registered(RelationshipKind::Collaboration, &a, &b));
    }

    #[test]
    fn test_clear_resets_the_pass() {
        let mut session = ProcessingSession::new();
        let a = EntityId::new("char-1");
        let b = EntityId::new("char-2");

        session.register(RelationshipKind::Relation, &a, &b);
        session.clear();
        assert!(session.is_empty());
        assert!(session.register(RelationshipKind::Relation, &a, &b));
    }
}
