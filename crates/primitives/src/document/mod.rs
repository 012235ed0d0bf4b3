//! The boundary between the registry and the external mutable tree.
//!
//! # Role
//!
//! The registry never owns or traverses a tree on its own. Everything it needs
//! from one (node kind, tag, class tokens, parent link, node synthesis) goes
//! through [`Document`], which is object safe so registries and blots can hold
//! `&dyn Document` without being generic over the tree implementation.
//!
//! # Invariants
//!
//! - [`Document::tag_name`] returns the canonical uppercase tag.
//! - [`Document::parent`] is fallible; callers walking ancestors must treat an
//!   [`AccessError`] as the end of the walk.
//! - Ancestor chains are acyclic. Walkers still stop when a node repeats.


use std::fmt;
use std::str::SplitWhitespace;

use crate::NodeId;

/// Broad node category as far as the registry is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// A tagged node with attributes and children.
	Element,
	/// A character-data leaf.
	Text,
}

/// Failure to read a node through a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
	/// The node is not (or no longer) part of the document.
	#[error("node {0} is not part of this document")]
	UnknownNode(NodeId),
	/// The document refuses access across this node's boundary.
	#[error("access across node {0} is denied")]
	Denied(NodeId),
	/// The operation needs an element but the node is of another kind.
	#[error("node {0} is not an element")]
	NotAnElement(NodeId),
}

/// An external mutable tree, as seen by the registry.
pub trait Document {
	/// Returns the kind of `node`, or `None` when the document does not know it.
	fn kind(&self, node: NodeId) -> Option<NodeKind>;

	/// Returns the uppercase tag of an element node.
	fn tag_name(&self, node: NodeId) -> Option<&str>;

	/// Returns the raw `class` attribute of an element node.
	fn class_attr(&self, node: NodeId) -> Option<&str>;

	/// Returns the parent of `node`; `Ok(None)` at a root.
	///
	/// Following parents from any node must reach a root without revisiting a
	/// node.
	fn parent(&self, node: NodeId) -> Result<Option<NodeId>, AccessError>;

	/// Creates a detached element node.
	fn create_element(&mut self, tag: &str) -> NodeId;

	/// Creates a detached text node.
	fn create_text(&mut self, data: &str) -> NodeId;

	/// Sets an attribute on an element node; other kinds fail with
	/// [`AccessError::NotAnElement`].
	fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), AccessError>;

	/// Returns true if `node` is a text node.
	fn is_text(&self, node: NodeId) -> bool {
		self.kind(node) == Some(NodeKind::Text)
	}
}

/// Splits a `class` attribute into its whitespace-delimited tokens, in order.
pub fn class_tokens(attr: &str) -> SplitWhitespace<'_> {
	attr.split_whitespace()
}

/// A node paired with the document that owns it.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
	doc: &'a dyn Document,
	id: NodeId,
}

impl<'a> NodeRef<'a> {
	pub fn new(doc: &'a dyn Document, id: NodeId) -> Self {
		Self { doc, id }
	}

	#[inline]
	pub fn id(&self) -> NodeId {
		self.id
	}

	#[inline]
	pub fn document(&self) -> &'a dyn Document {
		self.doc
	}

	pub fn kind(&self) -> Option<NodeKind> {
		self.doc.kind(self.id)
	}

	pub fn is_text(&self) -> bool {
		self.doc.is_text(self.id)
	}

	pub fn tag_name(&self) -> Option<&'a str> {
		self.doc.tag_name(self.id)
	}

	/// Class tokens of the node; empty when it has no `class` attribute.
	pub fn class_tokens(&self) -> SplitWhitespace<'a> {
		class_tokens(self.doc.class_attr(self.id).unwrap_or(""))
	}

	/// Returns the parent node in the same document.
	pub fn parent(&self) -> Result<Option<NodeRef<'a>>, AccessError> {
		Ok(self.doc.parent(self.id)?.map(|id| NodeRef { doc: self.doc, id }))
	}
}

impl fmt::Debug for NodeRef<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NodeRef")
			.field("id", &self.id)
			.field("kind", &self.kind())
			.finish()
	}
}
