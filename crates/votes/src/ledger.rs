use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::VoteError;
use crate::reconcile::{Reconciliation, StorageOp, reconcile};
use crate::types::{SubjectId, UserId, VoteType};

/// Up and down vote counts for one subject.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tally {
	pub up: u64,
	pub down: u64,
}

impl Tally {
	/// `up - down`.
	pub fn score(&self) -> i64 {
		self.up as i64 - self.down as i64
	}
}

/// Result of [`VoteLedger::cast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteReceipt {
	/// Vote held before the request.
	pub previous: Option<VoteType>,
	/// What the request changed.
	pub reconciliation: Reconciliation,
	/// Subject tally after the write.
	pub tally: Tally,
}

/// In-memory vote storage: at most one vote per `(user, subject)`.
///
/// Rows are grouped by subject so a tally only walks that subject's votes.
/// Tallies are always aggregated from the stored rows rather than cached, so
/// they cannot drift from the rows they describe.
#[derive(Debug, Default, Clone)]
pub struct VoteLedger {
	subjects: FxHashMap<SubjectId, FxHashMap<UserId, VoteType>>,
}

impl VoteLedger {
	pub fn new() -> Self {
		Self::default()
	}

	/// The vote `user` currently holds on `subject`.
	pub fn vote_of(&self, user: UserId, subject: SubjectId) -> Option<VoteType> {
		self.subjects.get(&subject)?.get(&user).copied()
	}

	/// Counts the stored votes on `subject`.
	pub fn tally(&self, subject: SubjectId) -> Tally {
		let Some(votes) = self.subjects.get(&subject) else {
			return Tally::default();
		};
		votes.values().fold(Tally::default(), |mut tally, vote| {
			match vote {
				VoteType::Up => tally.up += 1,
				VoteType::Down => tally.down += 1,
			}
			tally
		})
	}

	/// Subjects with at least one vote, in ascending id order.
	pub fn subjects(&self) -> Vec<SubjectId> {
		let mut ids: Vec<_> = self.subjects.keys().copied().collect();
		ids.sort_unstable();
		ids
	}

	/// Total number of stored vote rows.
	pub fn len(&self) -> usize {
		self.subjects.values().map(FxHashMap::len).sum()
	}

	/// Returns true when no votes are stored.
	pub fn is_empty(&self) -> bool {
		self.subjects.is_empty()
	}

	/// Applies a vote request: read the previous vote, reconcile, write.
	pub fn cast(&mut self, user: UserId, subject: SubjectId, requested: VoteType) -> VoteReceipt {
		let previous = self.vote_of(user, subject);
		let reconciliation = reconcile(previous, requested);
		self.apply(user, subject, reconciliation.storage_op());

		let tally = self.tally(subject);
		debug!(%user, %subject, ?previous, next = ?reconciliation.next, up = tally.up, down = tally.down, "vote cast");
		VoteReceipt {
			previous,
			reconciliation,
			tally,
		}
	}

	/// Like [`Self::cast`], parsing the requested vote type first. An invalid
	/// type is rejected without touching the ledger.
	pub fn cast_raw(&mut self, user: UserId, subject: SubjectId, requested: &str) -> Result<VoteReceipt, VoteError> {
		let requested: VoteType = requested.parse()?;
		Ok(self.cast(user, subject, requested))
	}

	fn apply(&mut self, user: UserId, subject: SubjectId, op: StorageOp) {
		trace!(%user, %subject, ?op, "vote row write");
		match op {
			StorageOp::Upsert(vote) => {
				self.subjects.entry(subject).or_default().insert(user, vote);
			}
			StorageOp::Delete => {
				if let Some(votes) = self.subjects.get_mut(&subject) {
					votes.remove(&user);
					if votes.is_empty() {
						self.subjects.remove(&subject);
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod tests;
