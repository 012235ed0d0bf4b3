//! Registrable definitions.
//!
//! # Role
//!
//! A [`Definition`] is either a blot descriptor ([`BlotDef`]) or an attribute
//! handler descriptor ([`AttributorDef`]). Both are built once, shared through
//! `Arc`, and never mutated afterwards; any normalization (tag casing,
//! attributor scope bits) happens in their constructors.
//!
//! # Invariants
//!
//! - Definition identity is `Arc` identity ([`Definition::ptr_eq`]).
//! - A blot descriptor named [`ABSTRACT_NAME`] is never registered.

mod attributor;
mod blot;

use std::sync::Arc;

#[cfg(feature = "serde")]
pub use attributor::AttributorConfig;
pub use attributor::AttributorDef;
pub use blot::BlotDef;

use crate::error::{RegistryError, Result};
use crate::scope::Scope;

/// Reserved name of abstract base descriptors.
pub const ABSTRACT_NAME: &str = "abstract";
/// Name the registry resolves text nodes to.
pub const TEXT_NAME: &str = "text";
/// Name a block-level scope query resolves to.
pub const BLOCK_NAME: &str = "block";
/// Name an inline-level scope query resolves to.
pub const INLINE_NAME: &str = "inline";

/// A registrable descriptor.
#[derive(Debug, Clone)]
pub enum Definition {
	Blot(Arc<BlotDef>),
	Attributor(Arc<AttributorDef>),
}

impl Definition {
	/// Name used for the by-name index.
	pub fn name(&self) -> &str {
		match self {
			Self::Blot(def) => def.name(),
			Self::Attributor(def) => def.attr_name(),
		}
	}

	pub fn scope(&self) -> Scope {
		match self {
			Self::Blot(def) => def.scope(),
			Self::Attributor(def) => def.scope(),
		}
	}

	pub fn as_blot(&self) -> Option<&Arc<BlotDef>> {
		match self {
			Self::Blot(def) => Some(def),
			Self::Attributor(_) => None,
		}
	}

	pub fn as_attributor(&self) -> Option<&Arc<AttributorDef>> {
		match self {
			Self::Attributor(def) => Some(def),
			Self::Blot(_) => None,
		}
	}

	pub fn into_blot(self) -> Option<Arc<BlotDef>> {
		match self {
			Self::Blot(def) => Some(def),
			Self::Attributor(_) => None,
		}
	}

	/// Returns true if both values refer to the same descriptor.
	pub fn ptr_eq(&self, other: &Definition) -> bool {
		match (self, other) {
			(Self::Blot(a), Self::Blot(b)) => Arc::ptr_eq(a, b),
			(Self::Attributor(a), Self::Attributor(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}

	pub(crate) fn kind_label(&self) -> &'static str {
		match self {
			Self::Blot(_) => "blot",
			Self::Attributor(_) => "attributor",
		}
	}

	/// Checks that the descriptor can be registered.
	pub(crate) fn validate(&self) -> Result<()> {
		let invalid = |reason| RegistryError::InvalidDefinition {
			name: self.name().to_owned(),
			reason,
		};

		if matches!(self, Self::Blot(def) if def.name() == ABSTRACT_NAME) {
			return Err(RegistryError::AbstractRegistration);
		}
		if self.name().is_empty() {
			return Err(invalid("name is empty"));
		}
		let scope = self.scope();
		if scope.level().is_empty() || scope.kind().is_empty() {
			return Err(invalid("scope must select a level and a type"));
		}
		match self {
			Self::Blot(def) if def.tags().iter().any(|tag| tag.is_empty()) => Err(invalid("tag name is empty")),
			Self::Attributor(def) if def.key_name() == Some("") => Err(invalid("attribute key is empty")),
			_ => Ok(()),
		}
	}
}

impl From<Arc<BlotDef>> for Definition {
	fn from(def: Arc<BlotDef>) -> Self {
		Self::Blot(def)
	}
}

impl From<Arc<AttributorDef>> for Definition {
	fn from(def: Arc<AttributorDef>) -> Self {
		Self::Attributor(def)
	}
}

impl From<BlotDef> for Definition {
	fn from(def: BlotDef) -> Self {
		Self::Blot(Arc::new(def))
	}
}

impl From<AttributorDef> for Definition {
	fn from(def: AttributorDef) -> Self {
		Self::Attributor(Arc::new(def))
	}
}
