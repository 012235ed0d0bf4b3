//! Document-model registry.
//!
//! Associates typed model objects ("blots") with nodes of an external
//! [`Document`](folio_primitives::Document) and resolves which definition
//! governs a node by name, class, tag or [`Scope`].
//!
//! # Modules
//!
//! - [`scope`] - two-axis level × type masks
//! - [`def`] - blot and attributor descriptors
//! - [`blot`] - the blot boundary and statically declared blot types
//! - [`factory`] - default element factory
//! - [`query`] - query and creation keys
//! - [`registry`] - the [`Registry`] itself

mod association;
pub mod blot;
pub mod def;
pub mod error;
pub mod factory;
mod index;
pub mod query;
pub mod registry;
pub mod scope;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use blot::{Blot, BlotConstructor, BlotInit, BlotKind, NodeFactory};
#[cfg(feature = "serde")]
pub use def::AttributorConfig;
pub use def::{ABSTRACT_NAME, AttributorDef, BLOCK_NAME, BlotDef, Definition, INLINE_NAME, TEXT_NAME};
pub use error::{RegistryError, Result};
pub use folio_primitives::{AccessError, Document, NodeId, NodeKind, NodeRef};
pub use query::{CreateInput, Query};
pub use registry::Registry;
pub use scope::{ParseScopeError, Scope};
