use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use folio_primitives::{Document, NodeId};
use serde_json::Value;
use smallvec::SmallVec;

use crate::blot::{Blot, BlotConstructor, BlotInit, BlotKind, NodeFactory, construct_erased};
use crate::error::Result;
use crate::factory;
use crate::scope::Scope;

#[derive(Clone, Copy)]
struct StaticType {
	id: TypeId,
	name: &'static str,
}

/// Descriptor of a blot type.
///
/// Tags are stored uppercased; the descriptor is immutable once built.
#[derive(Clone)]
pub struct BlotDef {
	name: Box<str>,
	tags: SmallVec<[Box<str>; 1]>,
	class: Option<Box<str>>,
	scope: Scope,
	factory: NodeFactory,
	constructor: BlotConstructor,
	static_type: Option<StaticType>,
}

impl BlotDef {
	/// Creates a dynamic descriptor using the default element factory.
	pub fn new(name: impl Into<Box<str>>, scope: Scope, constructor: BlotConstructor) -> Self {
		Self {
			name: name.into(),
			tags: SmallVec::new(),
			class: None,
			scope,
			factory: factory::create_element,
			constructor,
			static_type: None,
		}
	}

	/// Creates the descriptor of a statically declared blot type.
	pub fn of<B: BlotKind>() -> Self {
		let mut def = Self::new(B::NAME, B::SCOPE, construct_erased::<B>)
			.with_tags(B::TAGS.iter().copied())
			.with_factory(B::create_node);
		def.class = B::CLASS.map(Into::into);
		def.static_type = Some(StaticType {
			id: TypeId::of::<B>(),
			name: type_name::<B>(),
		});
		def
	}

	pub fn with_tag(mut self, tag: &str) -> Self {
		self.tags.push(tag.to_ascii_uppercase().into_boxed_str());
		self
	}

	pub fn with_tags<'a>(self, tags: impl IntoIterator<Item = &'a str>) -> Self {
		tags.into_iter().fold(self, Self::with_tag)
	}

	pub fn with_class(mut self, class: impl Into<Box<str>>) -> Self {
		self.class = Some(class.into());
		self
	}

	pub fn with_factory(mut self, factory: NodeFactory) -> Self {
		self.factory = factory;
		self
	}

	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Uppercased tags, in declaration order.
	#[inline]
	pub fn tags(&self) -> &[Box<str>] {
		&self.tags
	}

	#[inline]
	pub fn class_name(&self) -> Option<&str> {
		self.class.as_deref()
	}

	#[inline]
	pub fn scope(&self) -> Scope {
		self.scope
	}

	/// Returns true if this descriptor was built from `B`.
	pub fn is_kind<B: BlotKind>(&self) -> bool {
		self.static_type.is_some_and(|ty| ty.id == TypeId::of::<B>())
	}

	/// Synthesizes a new node for this definition.
	pub fn create_node(&self, doc: &mut dyn Document, value: Option<&Value>) -> Result<NodeId> {
		(self.factory)(self, doc, value)
	}

	pub(crate) fn construct(self: &Arc<Self>, root: Option<&Arc<dyn Blot>>, node: NodeId, value: Option<&Value>) -> Arc<dyn Blot> {
		(self.constructor)(BlotInit {
			def: self,
			root,
			node,
			value,
		})
	}
}

impl fmt::Debug for BlotDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BlotDef")
			.field("name", &self.name)
			.field("tags", &self.tags)
			.field("class", &self.class)
			.field("scope", &self.scope)
			.field("type", &self.static_type.map(|ty| ty.name))
			.finish()
	}
}
