use doodle_canvas::{Board, BoardSettings, BrushSize, Tool};
use doodle_primitives::{Position, Rgba, Size};
use doodle_votes::{SubjectId, VoteLedger};
use pretty_assertions::assert_eq;

use crate::paint::{self, PaintAction};
use crate::vote::{self, SubjectTally};

fn board(width: u32, height: u32) -> Board {
	Board::new(BoardSettings {
		size: Size::new(width, height),
		brush: BrushSize::new(1),
		..BoardSettings::default()
	})
}

#[test]
fn paint_script_parses_tagged_actions() {
	let actions = paint::parse_script(
		r##"[
			{ "action": "color", "color": "#FF0000" },
			{ "action": "tool", "tool": "paint_bucket" },
			{ "action": "down", "x": 1, "y": 2 },
			{ "action": "wheel", "grow": true },
			{ "action": "undo" }
		]"##,
	)
	.unwrap();

	assert_eq!(
		actions,
		vec![
			PaintAction::Color { color: Rgba::rgb(255, 0, 0) },
			PaintAction::Tool { tool: Tool::PaintBucket },
			PaintAction::Down { x: 1, y: 2 },
			PaintAction::Wheel { grow: true },
			PaintAction::Undo,
		]
	);
}

#[test]
fn paint_script_rejects_unknown_actions() {
	assert!(paint::parse_script(r#"[{ "action": "spray" }]"#).is_err());
}

#[test]
fn replay_draws_and_fills() {
	let mut board = board(8, 8);
	let actions = vec![
		PaintAction::Down { x: 0, y: 4 },
		PaintAction::Move { x: 7, y: 4 },
		PaintAction::Up,
		PaintAction::Color { color: Rgba::rgb(0, 0, 255) },
		PaintAction::Tool { tool: Tool::PaintBucket },
		PaintAction::Down { x: 0, y: 0 },
	];
	paint::replay(&mut board, &actions).unwrap();

	assert_eq!(board.buffer().count(Rgba::BLACK), 8);
	assert_eq!(board.buffer().count(Rgba::rgb(0, 0, 255)), 32);
	assert_eq!(board.buffer()[Position::new(0, 7)], Rgba::WHITE);
}

#[test]
fn replay_reports_failing_step() {
	let mut board = board(4, 4);
	let actions = vec![PaintAction::Clear, PaintAction::Down { x: 9, y: 0 }];
	let err = paint::replay(&mut board, &actions).unwrap_err();
	assert!(err.to_string().contains("paint step 1"), "{err}");
}

#[test]
fn ppm_has_header_and_rgb_payload() {
	let board = board(2, 1);
	let mut out = Vec::new();
	paint::write_ppm(board.buffer(), &mut out).unwrap();
	assert_eq!(out, b"P6\n2 1\n255\n\xFF\xFF\xFF\xFF\xFF\xFF".to_vec());
}

#[test]
fn vote_replay_counts_and_skips_invalid_requests() {
	let requests = vote::parse_script(
		r#"[
			{ "user": 1, "subject": 10, "vote": "up" },
			{ "user": 2, "subject": 10, "vote": "up" },
			{ "user": 2, "subject": 10, "vote": "up" },
			{ "user": 3, "subject": 10, "vote": "down" },
			{ "user": 1, "subject": 11, "vote": "downvote" },
			{ "user": 1, "subject": 11, "vote": "down" }
		]"#,
	)
	.unwrap();

	let mut ledger = VoteLedger::new();
	let summary = vote::replay(&mut ledger, &requests);
	assert_eq!(summary.rejected, 1);
	assert_eq!(
		summary.tallies,
		vec![
			SubjectTally {
				subject: SubjectId(10),
				up: 1,
				down: 1,
				score: 0,
			},
			SubjectTally {
				subject: SubjectId(11),
				up: 0,
				down: 1,
				score: -1,
			},
		]
	);
}
