use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VoteError;

/// Polarity of a vote. Absence of a vote is `Option::<VoteType>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
	Up,
	Down,
}

impl VoteType {
	/// Wire name of this vote type.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Up => "up",
			Self::Down => "down",
		}
	}

	/// The other polarity.
	#[must_use]
	pub const fn opposite(self) -> Self {
		match self {
			Self::Up => Self::Down,
			Self::Down => Self::Up,
		}
	}
}

impl fmt::Display for VoteType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for VoteType {
	type Err = VoteError;

	/// Accepts exactly `up` or `down`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"up" => Ok(Self::Up),
			"down" => Ok(Self::Down),
			other => Err(VoteError::InvalidArgument(other.to_string())),
		}
	}
}

/// Identifier of a voting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Identifier of the thing being voted on (a drawing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "user:{}", self.0)
	}
}

impl fmt::Display for SubjectId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "subject:{}", self.0)
	}
}
