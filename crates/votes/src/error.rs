use thiserror::Error;

/// Errors raised before a vote is reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
	/// The requested vote type is neither `up` nor `down`.
	#[error("invalid vote type {0:?} (expected 'up' or 'down')")]
	InvalidArgument(String),
}
