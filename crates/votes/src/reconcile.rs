use serde::Serialize;
use tracing::trace;

use crate::error::VoteError;
use crate::types::VoteType;

/// Outcome of reconciling a vote request against the previously stored vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Reconciliation {
	/// Vote to store after the request, `None` to delete the row.
	pub next: Option<VoteType>,
	/// Change to the subject's up-vote counter.
	pub up_delta: i8,
	/// Change to the subject's down-vote counter.
	pub down_delta: i8,
}

/// Write the storage layer must perform for a [`Reconciliation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageOp {
	/// Remove the `(user, subject)` row.
	Delete,
	/// Insert or replace the `(user, subject)` row.
	Upsert(VoteType),
}

impl Reconciliation {
	const fn new(next: Option<VoteType>, up_delta: i8, down_delta: i8) -> Self {
		Self {
			next,
			up_delta,
			down_delta,
		}
	}

	/// The row operation that persists [`Self::next`].
	pub const fn storage_op(&self) -> StorageOp {
		match self.next {
			Some(vote) => StorageOp::Upsert(vote),
			None => StorageOp::Delete,
		}
	}

	/// `up_delta + down_delta`, always in `-1..=1`.
	pub const fn net(&self) -> i8 {
		self.up_delta + self.down_delta
	}

	/// Returns true if the request withdrew the existing vote.
	pub const fn is_retraction(&self) -> bool {
		self.next.is_none()
	}
}

/// Reconciles a vote request with the user's current vote on a subject.
///
/// | previous | requested | next | up | down |
/// |----------|-----------|------|----|------|
/// | none     | up        | up   | +1 | 0    |
/// | none     | down      | down | 0  | +1   |
/// | up       | up        | none | -1 | 0    |
/// | up       | down      | down | +1 | -1   |
/// | down     | up        | up   | -1 | +1   |
/// | down     | down      | none | 0  | -1   |
///
/// Requesting the vote already held retracts it. The function is pure and
/// total; persisting `next` is left to the caller.
pub fn reconcile(previous: Option<VoteType>, requested: VoteType) -> Reconciliation {
	use VoteType::{Down, Up};

	let outcome = match (previous, requested) {
		(None, Up) => Reconciliation::new(Some(Up), 1, 0),
		(None, Down) => Reconciliation::new(Some(Down), 0, 1),
		(Some(Up), Up) => Reconciliation::new(None, -1, 0),
		(Some(Up), Down) => Reconciliation::new(Some(Down), 1, -1),
		(Some(Down), Up) => Reconciliation::new(Some(Up), -1, 1),
		(Some(Down), Down) => Reconciliation::new(None, 0, -1),
	};

	trace!(
		?previous,
		%requested,
		next = ?outcome.next,
		up_delta = outcome.up_delta,
		down_delta = outcome.down_delta,
		"vote reconciled"
	);
	outcome
}

/// Parses a requested vote type from its wire form and reconciles it.
///
/// Anything other than `up` or `down` fails with
/// [`VoteError::InvalidArgument`] before reconciliation is attempted.
pub fn reconcile_request(previous: Option<VoteType>, requested: &str) -> Result<Reconciliation, VoteError> {
	let requested: VoteType = requested.parse()?;
	Ok(reconcile(previous, requested))
}
