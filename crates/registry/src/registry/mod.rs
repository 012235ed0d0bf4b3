//! Registry entrypoint: registration, query, creation and node lookup.
//!
//! # Role
//!
//! A [`Registry`] is built per document root and accumulates definitions. It
//! answers which definition governs a name, scope or node, builds blots around
//! nodes, and records every built blot in the process-wide association table
//! so [`Registry::find`] can resolve nodes without a registry instance.
//!
//! # Invariants
//!
//! - `query` never fails; "not governed by anything" is `None`.
//! - A match is returned only if the requested scope admits it on both axes.
//! - `create` always rebinds the node, replacing any earlier association.
//! - Registration is fail-fast: a batch stops at its first invalid
//!   definition and keeps what was registered before it.


use std::sync::Arc;

use folio_primitives::{Document, NodeId, NodeKind, NodeRef};
use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::association;
use crate::blot::{Blot, BlotInit, BlotKind};
use crate::def::{BLOCK_NAME, BlotDef, Definition, INLINE_NAME, TEXT_NAME};
use crate::error::{RegistryError, Result};
use crate::index::Indices;
use crate::query::{CreateInput, Query};
use crate::scope::Scope;

/// Multi-key definition registry.
#[derive(Debug, Default)]
pub struct Registry {
	index: Indices,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry pre-seeded with `definitions`.
	pub fn with_definitions<I>(definitions: I) -> Result<Self>
	where
		I: IntoIterator,
		I::Item: Into<Definition>,
	{
		let mut registry = Self::new();
		registry.register(definitions)?;
		Ok(registry)
	}

	/// Registers definitions in order and returns them unchanged.
	///
	/// Re-registering a name replaces the by-name entry. The first invalid
	/// definition aborts the call; earlier ones stay registered.
	pub fn register<I>(&mut self, definitions: I) -> Result<Vec<Definition>>
	where
		I: IntoIterator,
		I::Item: Into<Definition>,
	{
		definitions
			.into_iter()
			.map(|def| -> Result<Definition> {
				let def = def.into();
				self.register_one(&def)?;
				Ok(def)
			})
			.collect()
	}

	/// Registers the descriptor of a statically declared blot type.
	pub fn register_blot<B: BlotKind>(&mut self) -> Result<Arc<BlotDef>> {
		let def = Arc::new(BlotDef::of::<B>());
		self.register_one(&Definition::Blot(def.clone()))?;
		Ok(def)
	}

	fn register_one(&mut self, def: &Definition) -> Result<()> {
		def.validate()?;
		self.index.insert(def);
		tracing::debug!(
			name = def.name(),
			kind = def.kind_label(),
			scope = %def.scope(),
			"registered definition"
		);
		Ok(())
	}

	/// Resolves `key` to a definition admitted by `scope`.
	pub fn query<'a>(&self, key: impl Into<Query<'a>>, scope: Scope) -> Option<Definition> {
		let key = key.into();
		let found = match key {
			Query::Name(name) => self.resolve_name(name),
			Query::Scope(level) => self.resolve_level(level),
			Query::Node(node) => self.resolve_node(node),
		};
		match found {
			Some(def) if scope.admits(def.scope()) => Some(def),
			Some(def) => {
				tracing::trace!(%key, name = def.name(), requested = %scope, declared = %def.scope(), "match rejected by scope");
				None
			}
			None => {
				tracing::trace!(%key, "no definition");
				None
			}
		}
	}

	fn resolve_name(&self, name: &str) -> Option<Definition> {
		self.index.name(name).or_else(|| self.index.attribute_key(name))
	}

	fn resolve_level(&self, scope: Scope) -> Option<Definition> {
		if scope.is_block_level() {
			self.index.name(BLOCK_NAME)
		} else if scope.is_inline_level() {
			self.index.name(INLINE_NAME)
		} else {
			None
		}
	}

	fn resolve_node(&self, node: NodeRef<'_>) -> Option<Definition> {
		match node.kind()? {
			NodeKind::Text => self.index.name(TEXT_NAME),
			NodeKind::Element => node
				.class_tokens()
				.find_map(|class| self.index.class(class))
				.or_else(|| self.index.tag(node.tag_name()?))
				.map(Definition::Blot),
		}
	}

	/// Builds a blot for `input` and binds it to its node.
	///
	/// A node input is wrapped directly. A name or scope input is resolved
	/// first and the definition's factory synthesizes a node from `value`.
	pub fn create<'a>(
		&self,
		doc: &mut dyn Document,
		root: Option<&Arc<dyn Blot>>,
		input: impl Into<CreateInput<'a>>,
		value: Option<&Value>,
	) -> Result<Arc<dyn Blot>> {
		let input = input.into();
		let found = match input {
			CreateInput::Node(node) => self.query(NodeRef::new(&*doc, node), Scope::ANY),
			CreateInput::Name(name) => self.query(name, Scope::ANY),
			CreateInput::Scope(scope) => self.query(scope, Scope::ANY),
		};
		let def = found
			.and_then(Definition::into_blot)
			.ok_or_else(|| RegistryError::UnresolvedBlot { input: input.to_string() })?;

		let node = match input {
			CreateInput::Node(node) => node,
			CreateInput::Name(_) | CreateInput::Scope(_) => def.create_node(doc, value)?,
		};
		let blot = def.construct(root, node, value);
		let rebound = association::bind(node, &blot);
		tracing::debug!(%node, name = def.name(), rebound, "created blot");
		Ok(blot)
	}

	/// Builds a blot of the statically declared type `B`.
	///
	/// Fails with [`RegistryError::TypeMismatch`] when the definition
	/// registered as `B::NAME` was not built from `B`.
	pub fn create_as<B: BlotKind>(&self, doc: &mut dyn Document, root: Option<&Arc<dyn Blot>>, value: Option<&Value>) -> Result<Arc<B>> {
		let def = self
			.query(B::NAME, Scope::ANY)
			.and_then(Definition::into_blot)
			.ok_or_else(|| RegistryError::UnresolvedBlot { input: B::NAME.to_owned() })?;
		if !def.is_kind::<B>() {
			return Err(RegistryError::TypeMismatch {
				name: B::NAME.to_owned(),
				expected: std::any::type_name::<B>(),
			});
		}

		let node = def.create_node(doc, value)?;
		let blot = Arc::new(B::construct(BlotInit {
			def: &def,
			root,
			node,
			value,
		}));
		let erased: Arc<dyn Blot> = blot.clone();
		let rebound = association::bind(node, &erased);
		tracing::debug!(%node, name = def.name(), rebound, "created blot");
		Ok(blot)
	}

	/// Returns the blot bound to `node`.
	///
	/// With `bubble`, walks up through ancestors until a bound blot is found.
	/// The walk ends quietly at a root, when the document refuses access to
	/// a parent, or when the parent chain revisits a node.
	pub fn find(doc: &dyn Document, node: impl Into<Option<NodeId>>, bubble: bool) -> Option<Arc<dyn Blot>> {
		let mut current = node.into()?;
		let mut visited = FxHashSet::default();
		loop {
			if let Some(blot) = association::get(current) {
				return Some(blot);
			}
			if !bubble {
				return None;
			}
			current = match doc.parent(current) {
				Ok(Some(parent)) => parent,
				Ok(None) => return None,
				Err(err) => {
					tracing::trace!(node = %current, %err, "ancestor walk stopped");
					return None;
				}
			};
			if !visited.insert(current) {
				tracing::warn!(node = %current, "ancestor chain is cyclic");
				return None;
			}
		}
	}

	/// Drops the association for a node the document has discarded.
	pub fn forget(node: NodeId) -> bool {
		association::forget(node)
	}

	/// Drops associations for every node in `nodes`; returns how many existed.
	pub fn forget_all(nodes: impl IntoIterator<Item = NodeId>) -> usize {
		nodes.into_iter().filter(|&node| association::forget(node)).count()
	}

	/// Prunes associations whose blot has been dropped.
	pub fn sweep() -> usize {
		let pruned = association::sweep();
		if pruned > 0 {
			tracing::debug!(pruned, "swept dead associations");
		}
		pruned
	}

	/// Registered definitions, one per name, in no particular order.
	pub fn definitions(&self) -> impl Iterator<Item = &Definition> + '_ {
		self.index.definitions()
	}

	pub fn len(&self) -> usize {
		self.index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
