//! Query and creation keys.

use std::fmt;

use folio_primitives::{NodeId, NodeRef};

use crate::scope::Scope;

/// Key accepted by [`crate::Registry::query`].
///
/// Each variant is resolved against its own index: names against by-name then
/// by-attribute-key, scopes against the registered `block` / `inline`
/// definitions, and nodes against by-class then by-tag (text nodes always map
/// to `text`).
#[derive(Debug, Clone, Copy)]
pub enum Query<'a> {
	Name(&'a str),
	Scope(Scope),
	Node(NodeRef<'a>),
}

impl<'a> From<&'a str> for Query<'a> {
	fn from(name: &'a str) -> Self {
		Self::Name(name)
	}
}

impl<'a> From<&'a String> for Query<'a> {
	fn from(name: &'a String) -> Self {
		Self::Name(name)
	}
}

impl From<Scope> for Query<'_> {
	fn from(scope: Scope) -> Self {
		Self::Scope(scope)
	}
}

impl<'a> From<NodeRef<'a>> for Query<'a> {
	fn from(node: NodeRef<'a>) -> Self {
		Self::Node(node)
	}
}

impl fmt::Display for Query<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Name(name) => f.write_str(name),
			Self::Scope(scope) => write!(f, "scope {scope}"),
			Self::Node(node) => write!(f, "node {}", node.id()),
		}
	}
}

/// Input accepted by [`crate::Registry::create`].
///
/// A node is wrapped as-is; a name or scope is resolved first and a new node
/// is synthesized by the matching definition's factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateInput<'a> {
	Node(NodeId),
	Name(&'a str),
	Scope(Scope),
}

impl From<NodeId> for CreateInput<'_> {
	fn from(node: NodeId) -> Self {
		Self::Node(node)
	}
}

impl<'a> From<&'a str> for CreateInput<'a> {
	fn from(name: &'a str) -> Self {
		Self::Name(name)
	}
}

impl From<Scope> for CreateInput<'_> {
	fn from(scope: Scope) -> Self {
		Self::Scope(scope)
	}
}

impl fmt::Display for CreateInput<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Node(node) => write!(f, "node {node}"),
			Self::Name(name) => f.write_str(name),
			Self::Scope(scope) => write!(f, "scope {scope}"),
		}
	}
}
