//! Process-wide node → blot association table.
//!
//! # Role
//!
//! Maps a [`NodeId`] to the blot currently bound to it so that any holder of a
//! node can reach its blot without a registry handle. The table is shared by
//! every registry in the process.
//!
//! # Invariants
//!
//! - The table owns neither side: values are [`Weak`], keys are plain ids.
//! - An entry whose blot has been dropped behaves as absent. It is pruned the
//!   next time it is read, by [`sweep`], or by the pass [`bind`] runs once the
//!   table grows past its high-water mark.
//! - An entry for a discarded node whose blot is still alive stays until
//!   [`forget`] removes it.

use std::sync::{Arc, LazyLock, Weak};

use folio_primitives::NodeId;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::blot::Blot;

/// Smallest table size at which [`bind`] prunes dead entries.
pub(crate) const PRUNE_FLOOR: usize = 1024;

static BLOTS: LazyLock<Mutex<Table>> = LazyLock::new(Default::default);

struct Table {
	blots: FxHashMap<NodeId, Weak<dyn Blot>>,
	/// Size at which the next bind prunes; twice the live count after a prune.
	prune_at: usize,
}

impl Default for Table {
	fn default() -> Self {
		Self {
			blots: FxHashMap::default(),
			prune_at: PRUNE_FLOOR,
		}
	}
}

impl Table {
	fn prune(&mut self) -> usize {
		let before = self.blots.len();
		self.blots.retain(|_, blot| blot.strong_count() > 0);
		self.prune_at = (self.blots.len() * 2).max(PRUNE_FLOOR);
		before - self.blots.len()
	}
}

/// Binds `node` to `blot`, replacing any previous binding. Returns true if a
/// live binding was replaced.
pub(crate) fn bind(node: NodeId, blot: &Arc<dyn Blot>) -> bool {
	let mut table = BLOTS.lock();
	let replaced = table
		.blots
		.insert(node, Arc::downgrade(blot))
		.is_some_and(|prev| prev.strong_count() > 0);
	if table.blots.len() >= table.prune_at {
		let pruned = table.prune();
		tracing::trace!(pruned, live = table.blots.len(), "pruned association table");
	}
	replaced
}

/// Returns the live blot bound to `node`.
pub(crate) fn get(node: NodeId) -> Option<Arc<dyn Blot>> {
	let mut table = BLOTS.lock();
	let blot = table.blots.get(&node)?.upgrade();
	if blot.is_none() {
		table.blots.remove(&node);
	}
	blot
}

/// Removes the binding for `node`. Returns true if one existed.
pub(crate) fn forget(node: NodeId) -> bool {
	BLOTS.lock().blots.remove(&node).is_some()
}

/// Drops every binding whose blot no longer exists; returns how many.
pub(crate) fn sweep() -> usize {
	BLOTS.lock().prune()
}
