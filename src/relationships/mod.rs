//! Relationship extraction and analysis
//!
//! Turns the relationship fields of domain entities into typed, weighted
//! records and materialized edges:
//! - per-entity-type extractors with session-scoped dedup and mirror
//!   suppression
//! - record → edge materialization behind a minimum-weight threshold
//! - connected-component discovery and pairwise strength scoring

pub mod components;
pub mod processor;
pub mod record;
pub mod session;

// Re-export main types
pub use components::{find_connected_components, relationship_strength};
pub use processor::{ProcessorOptions, RelationshipProcessor};
pub use record::RelationshipRecord;
pub use session::ProcessingSession;
