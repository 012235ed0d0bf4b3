//! The four lookup indices behind a registry.
//!
//! # Role
//!
//! Holds the by-name, by-attribute-key, by-class and by-tag maps and the rules
//! for binding a definition into each of them.
//!
//! # Invariants
//!
//! - by-name, by-attribute-key and by-class are last-write-wins.
//! - by-tag keeps its first binding unless the incoming blot declares no class,
//!   in which case the incoming blot replaces it.
//! - Tag keys are uppercase.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::def::{AttributorDef, BlotDef, Definition};

/// Outcome of binding one key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum InsertAction {
	/// Key was new; definition inserted.
	InsertedNew,
	/// Key existed; kept the existing definition.
	KeptExisting,
	/// Key existed; replaced with the new definition.
	ReplacedExisting,
}

#[derive(Debug, Default)]
pub(crate) struct Indices {
	by_name: FxHashMap<Box<str>, Definition>,
	by_key: FxHashMap<Box<str>, Arc<AttributorDef>>,
	by_class: FxHashMap<Box<str>, Arc<BlotDef>>,
	by_tag: FxHashMap<Box<str>, Arc<BlotDef>>,
}

impl Indices {
	pub(crate) fn insert(&mut self, def: &Definition) {
		self.insert_name(def);
		match def {
			Definition::Blot(blot) => self.insert_blot(blot),
			Definition::Attributor(attr) => self.insert_attributor(attr),
		}
	}

	fn insert_name(&mut self, def: &Definition) {
		match self.by_name.insert(def.name().into(), def.clone()) {
			Some(prev) if !prev.ptr_eq(def) => {
				tracing::warn!(
					name = def.name(),
					previous = prev.kind_label(),
					incoming = def.kind_label(),
					"re-registration replaced existing definition"
				);
			}
			_ => {}
		}
	}

	fn insert_attributor(&mut self, def: &Arc<AttributorDef>) {
		if let Some(key) = def.key_name() {
			self.by_key.insert(key.into(), def.clone());
		}
	}

	fn insert_blot(&mut self, def: &Arc<BlotDef>) {
		if let Some(class) = def.class_name() {
			self.by_class.insert(class.into(), def.clone());
		}
		for tag in def.tags() {
			let action = bind_tag(&mut self.by_tag, tag, def);
			if action != InsertAction::InsertedNew {
				tracing::debug!(tag = &**tag, name = def.name(), ?action, "tag already bound");
			}
		}
	}

	pub(crate) fn name(&self, name: &str) -> Option<Definition> {
		self.by_name.get(name).cloned()
	}

	pub(crate) fn attribute_key(&self, key: &str) -> Option<Definition> {
		self.by_key.get(key).cloned().map(Definition::Attributor)
	}

	pub(crate) fn class(&self, class: &str) -> Option<Arc<BlotDef>> {
		self.by_class.get(class).cloned()
	}

	/// Looks up a tag, uppercasing it first if needed.
	pub(crate) fn tag(&self, tag: &str) -> Option<Arc<BlotDef>> {
		let tag = if tag.bytes().any(|b| b.is_ascii_lowercase()) {
			Cow::Owned(tag.to_ascii_uppercase())
		} else {
			Cow::Borrowed(tag)
		};
		self.by_tag.get(tag.as_ref()).cloned()
	}

	pub(crate) fn definitions(&self) -> impl Iterator<Item = &Definition> + '_ {
		self.by_name.values()
	}

	pub(crate) fn len(&self) -> usize {
		self.by_name.len()
	}
}

fn bind_tag(by_tag: &mut FxHashMap<Box<str>, Arc<BlotDef>>, tag: &str, def: &Arc<BlotDef>) -> InsertAction {
	match by_tag.entry(tag.into()) {
		Entry::Vacant(slot) => {
			slot.insert(def.clone());
			InsertAction::InsertedNew
		}
		Entry::Occupied(mut slot) if def.class_name().is_none() => {
			slot.insert(def.clone());
			InsertAction::ReplacedExisting
		}
		Entry::Occupied(_) => InsertAction::KeptExisting,
	}
}
