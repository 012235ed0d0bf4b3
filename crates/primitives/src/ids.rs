use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating process-unique node IDs.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a document node.
///
/// IDs are unique across every document in the process, so tables keyed by
/// them can be shared between documents without collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub u64);

impl NodeId {
	/// Generates a new unique node ID.
	pub fn next() -> Self {
		Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
	}

	#[inline]
	pub const fn as_u64(self) -> u64 {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}
