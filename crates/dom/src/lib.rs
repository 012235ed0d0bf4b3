//! Arena-backed reference implementation of [`Document`].
//!
//! [`Dom`] keeps every node in a single map keyed by [`NodeId`]. It supports
//! exactly what registry embedders and tests need: building trees, reading
//! tags, attributes and parent links, discarding subtrees, and sealing a node
//! so that parent access across it fails the way a sandboxed boundary would.


use folio_primitives::{AccessError, Document, NodeId, NodeKind};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Structural errors raised by [`Dom`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	#[error("node {0} is not part of this document")]
	UnknownNode(NodeId),
	#[error("cannot insert {child} under {parent}")]
	HierarchyRequest { parent: NodeId, child: NodeId },
}

#[derive(Debug)]
struct NodeData {
	kind: NodeKind,
	tag: Option<Box<str>>,
	attrs: IndexMap<Box<str>, String>,
	data: String,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
	sealed: bool,
}

impl NodeData {
	fn new(kind: NodeKind) -> Self {
		Self {
			kind,
			tag: None,
			attrs: IndexMap::new(),
			data: String::new(),
			parent: None,
			children: Vec::new(),
			sealed: false,
		}
	}
}

/// In-memory element/text tree.
#[derive(Debug, Default)]
pub struct Dom {
	nodes: FxHashMap<NodeId, NodeData>,
}

impl Dom {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a detached element. The tag is stored uppercased.
	pub fn element(&mut self, tag: &str) -> NodeId {
		let mut data = NodeData::new(NodeKind::Element);
		data.tag = Some(tag.to_ascii_uppercase().into_boxed_str());
		self.insert(data)
	}

	/// Creates a detached text node.
	pub fn text(&mut self, data: &str) -> NodeId {
		let mut node = NodeData::new(NodeKind::Text);
		node.data = data.to_owned();
		self.insert(node)
	}

	fn insert(&mut self, data: NodeData) -> NodeId {
		let id = NodeId::next();
		self.nodes.insert(id, data);
		id
	}

	pub fn contains(&self, node: NodeId) -> bool {
		self.nodes.contains_key(&node)
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Appends `child` as the last child of `parent`, detaching it from any
	/// previous parent first.
	pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
		let parent_kind = self.get(parent)?.kind;
		self.get(child)?;
		if parent_kind == NodeKind::Text || self.is_inclusive_ancestor(child, parent) {
			return Err(DomError::HierarchyRequest { parent, child });
		}
		self.detach(child)?;
		self.get_mut(child)?.parent = Some(parent);
		self.get_mut(parent)?.children.push(child);
		Ok(())
	}

	/// Removes `node` from its parent; the node stays in the document.
	pub fn detach(&mut self, node: NodeId) -> Result<(), DomError> {
		let Some(parent) = self.get_mut(node)?.parent.take() else {
			return Ok(());
		};
		self.get_mut(parent)?.children.retain(|&c| c != node);
		Ok(())
	}

	/// Drops `node` and its whole subtree from the document.
	///
	/// Returns the discarded ids, root first, so callers can release anything
	/// they keyed on them.
	pub fn discard(&mut self, node: NodeId) -> Result<Vec<NodeId>, DomError> {
		self.detach(node)?;
		let mut removed = Vec::new();
		let mut stack = vec![node];
		while let Some(id) = stack.pop() {
			if let Some(data) = self.nodes.remove(&id) {
				removed.push(id);
				stack.extend(data.children.into_iter().rev());
			}
		}
		Ok(removed)
	}

	/// Marks `node` as an access boundary: reading its parent fails with
	/// [`AccessError::Denied`].
	pub fn seal(&mut self, node: NodeId) -> Result<(), DomError> {
		self.get_mut(node)?.sealed = true;
		Ok(())
	}

	pub fn children(&self, node: NodeId) -> &[NodeId] {
		self.nodes.get(&node).map(|n| n.children.as_slice()).unwrap_or_default()
	}

	pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
		self.nodes.get(&node)?.attrs.get(name).map(String::as_str)
	}

	pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<Option<String>, DomError> {
		Ok(self.get_mut(node)?.attrs.shift_remove(name))
	}

	/// Character data of a text node.
	pub fn data(&self, node: NodeId) -> Option<&str> {
		let n = self.nodes.get(&node)?;
		(n.kind == NodeKind::Text).then_some(n.data.as_str())
	}

	fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
		loop {
			if node == ancestor {
				return true;
			}
			match self.nodes.get(&node).and_then(|n| n.parent) {
				Some(parent) => node = parent,
				None => return false,
			}
		}
	}

	fn get(&self, node: NodeId) -> Result<&NodeData, DomError> {
		self.nodes.get(&node).ok_or(DomError::UnknownNode(node))
	}

	fn get_mut(&mut self, node: NodeId) -> Result<&mut NodeData, DomError> {
		self.nodes.get_mut(&node).ok_or(DomError::UnknownNode(node))
	}
}

impl Document for Dom {
	fn kind(&self, node: NodeId) -> Option<NodeKind> {
		self.nodes.get(&node).map(|n| n.kind)
	}

	fn tag_name(&self, node: NodeId) -> Option<&str> {
		self.nodes.get(&node)?.tag.as_deref()
	}

	fn class_attr(&self, node: NodeId) -> Option<&str> {
		self.attribute(node, "class")
	}

	fn parent(&self, node: NodeId) -> Result<Option<NodeId>, AccessError> {
		let data = self.nodes.get(&node).ok_or(AccessError::UnknownNode(node))?;
		if data.sealed {
			return Err(AccessError::Denied(node));
		}
		Ok(data.parent)
	}

	fn create_element(&mut self, tag: &str) -> NodeId {
		self.element(tag)
	}

	fn create_text(&mut self, data: &str) -> NodeId {
		self.text(data)
	}

	fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), AccessError> {
		let data = self.nodes.get_mut(&node).ok_or(AccessError::UnknownNode(node))?;
		if data.kind != NodeKind::Element {
			return Err(AccessError::NotAnElement(node));
		}
		data.attrs.insert(name.into(), value.to_owned());
		Ok(())
	}
}
