//! Minimal blot types for registry tests.

use std::sync::{Arc, Weak};

use folio_primitives::{Document, NodeId};
use serde_json::Value;

use crate::blot::{Blot, BlotInit, BlotKind};
use crate::def::BlotDef;
use crate::error::Result;
use crate::registry::Registry;
use crate::scope::Scope;

macro_rules! fixture_blot {
	(
		$ty:ident, $name:literal, $scope:expr
		$(, tags: [$($tag:literal),* $(,)?])?
		$(, class: $class:literal)?
	) => {
		#[derive(Debug)]
		pub(crate) struct $ty {
			pub node: NodeId,
			pub value: Option<Value>,
			pub root: Option<Weak<dyn Blot>>,
		}

		impl Blot for $ty {
			fn node(&self) -> NodeId {
				self.node
			}

			fn name(&self) -> &str {
				$name
			}
		}

		impl BlotKind for $ty {
			const NAME: &'static str = $name;
			const SCOPE: Scope = $scope;
			$(const TAGS: &'static [&'static str] = &[$($tag),*];)?
			$(const CLASS: Option<&'static str> = Some($class);)?

			fn construct(init: BlotInit<'_>) -> Self {
				Self {
					node: init.node,
					value: init.value.cloned(),
					root: init.root.map(Arc::downgrade),
				}
			}
		}
	};
}

fixture_blot!(Scroll, "scroll", Scope::BLOCK_BLOT, tags: ["div"], class: "ql-editor");
fixture_blot!(Block, "block", Scope::BLOCK_BLOT, tags: ["p"]);
fixture_blot!(Inline, "inline", Scope::INLINE_BLOT, tags: ["span"]);
fixture_blot!(Header, "header", Scope::BLOCK_BLOT, tags: ["h1", "h2", "h3"]);
fixture_blot!(Bold, "bold", Scope::INLINE_BLOT, tags: ["strong", "b"]);
fixture_blot!(Mention, "mention", Scope::INLINE_BLOT, tags: ["span"], class: "mention");
fixture_blot!(Abstract, "abstract", Scope::BLOT, tags: ["section"], class: "abstract-base");
fixture_blot!(Image, "image", Scope::INLINE_BLOT);

/// Character-data blot; builds text nodes instead of elements.
#[derive(Debug)]
pub(crate) struct Text {
	pub node: NodeId,
}

impl Blot for Text {
	fn node(&self) -> NodeId {
		self.node
	}

	fn name(&self) -> &str {
		Self::NAME
	}
}

impl BlotKind for Text {
	const NAME: &'static str = "text";
	const SCOPE: Scope = Scope::INLINE_BLOT;

	fn construct(init: BlotInit<'_>) -> Self {
		Self { node: init.node }
	}

	fn create_node(_def: &BlotDef, doc: &mut dyn Document, value: Option<&Value>) -> Result<NodeId> {
		Ok(doc.create_text(value.and_then(Value::as_str).unwrap_or_default()))
	}
}

/// Blot built from a dynamic [`BlotDef`]; records the definition name.
#[derive(Debug)]
pub(crate) struct Dynamic {
	pub node: NodeId,
	pub name: String,
}

impl Blot for Dynamic {
	fn node(&self) -> NodeId {
		self.node
	}

	fn name(&self) -> &str {
		&self.name
	}
}

pub(crate) fn dynamic(init: BlotInit<'_>) -> Arc<dyn Blot> {
	Arc::new(Dynamic {
		node: init.node,
		name: init.def.name().to_owned(),
	})
}

/// Registry with scroll, block, inline, text, header and bold registered.
pub(crate) fn standard_registry() -> Registry {
	let mut registry = Registry::new();
	registry.register_blot::<Scroll>().unwrap();
	registry.register_blot::<Block>().unwrap();
	registry.register_blot::<Inline>().unwrap();
	registry.register_blot::<Text>().unwrap();
	registry.register_blot::<Header>().unwrap();
	registry.register_blot::<Bold>().unwrap();
	registry
}
