use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{Tally, VoteLedger};
use crate::error::VoteError;
use crate::types::VoteType::{self, Down, Up};
use crate::types::{SubjectId, UserId};

const ALICE: UserId = UserId(1);
const BOB: UserId = UserId(2);
const DRAWING: SubjectId = SubjectId(10);
const OTHER: SubjectId = SubjectId(11);

#[test]
fn first_vote_is_recorded() {
	let mut ledger = VoteLedger::new();
	let receipt = ledger.cast(ALICE, DRAWING, Up);
	assert_eq!(receipt.previous, None);
	assert_eq!(receipt.tally, Tally { up: 1, down: 0 });
	assert_eq!(ledger.vote_of(ALICE, DRAWING), Some(Up));
	assert_eq!(ledger.len(), 1);
}

#[test]
fn repeating_a_vote_retracts_it() {
	let mut ledger = VoteLedger::new();
	ledger.cast(ALICE, DRAWING, Down);
	let receipt = ledger.cast(ALICE, DRAWING, Down);
	assert_eq!(receipt.previous, Some(Down));
	assert!(receipt.reconciliation.is_retraction());
	assert_eq!(receipt.tally, Tally::default());
	assert_eq!(ledger.vote_of(ALICE, DRAWING), None);
	assert!(ledger.is_empty());
}

#[test]
fn switching_keeps_one_row_per_user() {
	let mut ledger = VoteLedger::new();
	ledger.cast(ALICE, DRAWING, Up);
	let receipt = ledger.cast(ALICE, DRAWING, Down);
	assert_eq!(receipt.reconciliation.next, Some(Down));
	assert_eq!(receipt.tally, Tally { up: 0, down: 1 });
	assert_eq!(ledger.len(), 1);
}

#[test]
fn tallies_are_per_subject() {
	let mut ledger = VoteLedger::new();
	ledger.cast(ALICE, DRAWING, Up);
	ledger.cast(BOB, DRAWING, Up);
	ledger.cast(BOB, OTHER, Down);

	let tally = ledger.tally(DRAWING);
	assert_eq!(tally, Tally { up: 2, down: 0 });
	assert_eq!(tally.score(), 2);
	assert_eq!(ledger.tally(OTHER).score(), -1);
	assert_eq!(ledger.tally(SubjectId(99)), Tally::default());
	assert_eq!(ledger.subjects(), vec![DRAWING, OTHER]);
}

#[test]
fn invalid_vote_text_leaves_ledger_untouched() {
	let mut ledger = VoteLedger::new();
	ledger.cast(ALICE, DRAWING, Up);
	let err = ledger.cast_raw(ALICE, DRAWING, "upvote").unwrap_err();
	assert_eq!(err, VoteError::InvalidArgument("upvote".into()));
	assert_eq!(ledger.vote_of(ALICE, DRAWING), Some(Up));
	assert_eq!(ledger.tally(DRAWING), Tally { up: 1, down: 0 });

	let receipt = ledger.cast_raw(ALICE, DRAWING, "up").unwrap();
	assert!(receipt.reconciliation.is_retraction());
}

fn arb_casts() -> impl Strategy<Value = Vec<(u64, u64, VoteType)>> {
	let vote = prop_oneof![Just(Up), Just(Down)];
	proptest::collection::vec((0u64..4, 0u64..3, vote), 0..64)
}

proptest! {
	#[test]
	fn tally_matches_last_vote_per_user(casts in arb_casts()) {
		let mut ledger = VoteLedger::new();
		let mut model = std::collections::BTreeMap::new();
		for (user, subject, vote) in casts {
			let key = (user, subject);
			let previous = model.get(&key).copied();
			let receipt = ledger.cast(UserId(user), SubjectId(subject), vote);
			prop_assert_eq!(receipt.previous, previous);
			if previous == Some(vote) {
				model.remove(&key);
			} else {
				model.insert(key, vote);
			}
		}

		for subject in 0..3 {
			let expected = model.iter().filter(|((_, s), _)| *s == subject).fold(
				Tally::default(),
				|mut t, (_, v)| {
					match v {
						Up => t.up += 1,
						Down => t.down += 1,
					}
					t
				},
			);
			prop_assert_eq!(ledger.tally(SubjectId(subject)), expected);
		}
		prop_assert_eq!(ledger.len(), model.len());
	}

	#[test]
	fn double_cast_restores_tally(casts in arb_casts(), user in 0u64..4, vote in prop_oneof![Just(Up), Just(Down)]) {
		let mut ledger = VoteLedger::new();
		for (u, s, v) in casts {
			ledger.cast(UserId(u), SubjectId(s), v);
		}
		let subject = SubjectId(0);
		let before = ledger.tally(subject);
		let held = ledger.vote_of(UserId(user), subject);
		ledger.cast(UserId(user), subject, vote);
		ledger.cast(UserId(user), subject, vote);
		if held.is_none() || held == Some(vote) {
			prop_assert_eq!(ledger.tally(subject), before);
		}
	}
}
