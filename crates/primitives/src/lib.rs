//! Core types shared by the registry and document implementations: node
//! identity, node kinds, and the [`Document`] boundary trait.

/// External document boundary consumed by the registry.
pub mod document;
/// Identifier types for document nodes.
pub mod ids;

pub use document::{AccessError, Document, NodeKind, NodeRef, class_tokens};
pub use ids::NodeId;
