//! Bounded undo history.

use std::collections::VecDeque;

use tracing::trace;

/// A LIFO stack of snapshots holding at most `depth` entries.
///
/// Pushing onto a full history evicts the oldest snapshot. A depth of zero
/// keeps nothing.
#[derive(Debug, Clone)]
pub struct History<T> {
	entries: VecDeque<T>,
	depth: usize,
}

impl<T> History<T> {
	/// Default number of snapshots retained by the paint board.
	pub const DEFAULT_DEPTH: usize = 20;

	/// Creates an empty history retaining at most `depth` snapshots.
	pub fn new(depth: usize) -> Self {
		Self {
			entries: VecDeque::with_capacity(depth.min(Self::DEFAULT_DEPTH)),
			depth,
		}
	}

	/// Maximum number of snapshots retained.
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Number of snapshots currently held.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if there is nothing to undo.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Records a snapshot. Returns the evicted oldest snapshot, if any.
	pub fn push(&mut self, snapshot: T) -> Option<T> {
		if self.depth == 0 {
			return Some(snapshot);
		}
		let evicted = if self.entries.len() == self.depth {
			self.entries.pop_front()
		} else {
			None
		};
		self.entries.push_back(snapshot);
		trace!(len = self.entries.len(), depth = self.depth, evicted = evicted.is_some(), "history push");
		evicted
	}

	/// Removes and returns the newest snapshot.
	pub fn pop(&mut self) -> Option<T> {
		let snapshot = self.entries.pop_back();
		trace!(len = self.entries.len(), hit = snapshot.is_some(), "history pop");
		snapshot
	}

	/// Returns the newest snapshot without removing it.
	pub fn peek(&self) -> Option<&T> {
		self.entries.back()
	}

	/// Drops every snapshot.
	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

impl<T> Default for History<T> {
	fn default() -> Self {
		Self::new(Self::DEFAULT_DEPTH)
	}
}

#[cfg(test)]
mod tests;
