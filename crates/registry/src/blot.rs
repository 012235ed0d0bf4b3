//! Model objects bound to document nodes.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use folio_primitives::{Document, NodeId};
use serde_json::Value;

use crate::def::BlotDef;
use crate::error::Result;
use crate::factory;
use crate::scope::Scope;

/// A model object bound to exactly one document node.
pub trait Blot: Any + Send + Sync + fmt::Debug {
	/// The node this blot governs.
	fn node(&self) -> NodeId;

	/// Name of the definition this blot was built from.
	fn name(&self) -> &str;
}

impl dyn Blot {
	pub fn is<B: Blot>(&self) -> bool {
		let any: &dyn Any = self;
		any.is::<B>()
	}

	pub fn downcast_ref<B: Blot>(&self) -> Option<&B> {
		let any: &dyn Any = self;
		any.downcast_ref::<B>()
	}
}

/// Everything a blot constructor receives.
pub struct BlotInit<'a> {
	/// Definition the blot is being built from.
	pub def: &'a Arc<BlotDef>,
	/// Root blot of the containing tree, if one exists yet.
	pub root: Option<&'a Arc<dyn Blot>>,
	pub node: NodeId,
	pub value: Option<&'a Value>,
}

/// Erased blot constructor stored on a [`BlotDef`].
pub type BlotConstructor = fn(BlotInit<'_>) -> Arc<dyn Blot>;

/// Synthesizes a fresh document node for a definition from an optional value.
pub type NodeFactory = fn(&BlotDef, &mut dyn Document, Option<&Value>) -> Result<NodeId>;

/// A statically declared blot type.
///
/// Implementors describe their identity with associated constants and can be
/// registered with [`BlotDef::of`] or [`crate::Registry::register_blot`], then
/// created with [`crate::Registry::create_as`] to get the concrete type back.
pub trait BlotKind: Blot + Sized {
	const NAME: &'static str;
	const SCOPE: Scope;
	/// Tags this blot governs, in preference order.
	const TAGS: &'static [&'static str] = &[];
	const CLASS: Option<&'static str> = None;

	fn construct(init: BlotInit<'_>) -> Self;

	/// Creates the node a new blot of this kind is bound to.
	fn create_node(def: &BlotDef, doc: &mut dyn Document, value: Option<&Value>) -> Result<NodeId> {
		factory::create_element(def, doc, value)
	}
}

pub(crate) fn construct_erased<B: BlotKind>(init: BlotInit<'_>) -> Arc<dyn Blot> {
	Arc::new(B::construct(init))
}
