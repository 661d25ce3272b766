//! `doodle vote`: replays vote requests against a [`VoteLedger`].

use anyhow::Context;
use doodle_votes::{SubjectId, Tally, UserId, VoteLedger};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One scripted vote request, as the vote endpoint receives it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoteRequest {
	pub user: UserId,
	pub subject: SubjectId,
	/// Raw vote type; anything but `up`/`down` is rejected.
	pub vote: String,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteSummary {
	pub tallies: Vec<SubjectTally>,
	/// Requests rejected with an invalid vote type.
	pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectTally {
	pub subject: SubjectId,
	pub up: u64,
	pub down: u64,
	pub score: i64,
}

impl SubjectTally {
	fn new(subject: SubjectId, tally: Tally) -> Self {
		Self {
			subject,
			up: tally.up,
			down: tally.down,
			score: tally.score(),
		}
	}
}

/// Parses a JSON array of vote requests.
pub fn parse_script(input: &str) -> anyhow::Result<Vec<VoteRequest>> {
	serde_json::from_str(input).context("invalid vote script")
}

/// Casts every request in order. Invalid requests are logged and skipped, the
/// way the endpoint answers them with an error and keeps serving.
pub fn replay(ledger: &mut VoteLedger, requests: &[VoteRequest]) -> VoteSummary {
	let mut rejected = 0;
	for (step, request) in requests.iter().enumerate() {
		if let Err(error) = ledger.cast_raw(request.user, request.subject, &request.vote) {
			warn!(step, user = %request.user, subject = %request.subject, %error, "vote rejected");
			rejected += 1;
		}
	}

	let tallies = ledger
		.subjects()
		.into_iter()
		.map(|subject| SubjectTally::new(subject, ledger.tally(subject)))
		.collect();
	VoteSummary { tallies, rejected }
}
