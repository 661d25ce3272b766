//! `doodle paint`: drives a [`Board`] from a script of pointer and tool actions.

use std::io::{self, Write};

use anyhow::Context;
use doodle_canvas::{Board, CanvasError, PixelBuffer, Tool};
use doodle_primitives::{Position, Rgba};
use serde::Deserialize;
use tracing::info;

/// One scripted board interaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PaintAction {
	Down { x: u32, y: u32 },
	Move { x: u32, y: u32 },
	Up,
	Leave,
	Color { color: Rgba },
	Tool { tool: Tool },
	Size { size: u32 },
	Wheel { grow: bool },
	Clear,
	Undo,
}

/// Parses a JSON array of actions.
pub fn parse_script(input: &str) -> anyhow::Result<Vec<PaintAction>> {
	serde_json::from_str(input).context("invalid paint script")
}

/// Applies every action in order, stopping at the first rejected one.
pub fn replay(board: &mut Board, actions: &[PaintAction]) -> anyhow::Result<()> {
	for (step, action) in actions.iter().enumerate() {
		apply(board, action).with_context(|| format!("paint step {step} ({action:?}) failed"))?;
	}
	info!(steps = actions.len(), undo = board.undo_len(), "paint script replayed");
	Ok(())
}

fn apply(board: &mut Board, action: &PaintAction) -> Result<(), CanvasError> {
	match *action {
		PaintAction::Down { x, y } => {
			board.pointer_down(Position::new(x, y))?;
		}
		PaintAction::Move { x, y } => {
			board.pointer_move(Position::new(x, y));
		}
		PaintAction::Up => board.pointer_up(),
		PaintAction::Leave => board.pointer_leave(),
		PaintAction::Color { color } => board.select_color(color),
		PaintAction::Tool { tool } => board.select_tool(tool),
		PaintAction::Size { size } => {
			board.set_brush_size(size);
		}
		PaintAction::Wheel { grow } => {
			board.wheel(grow);
		}
		PaintAction::Clear => board.clear(),
		PaintAction::Undo => {
			board.undo();
		}
	}
	Ok(())
}

/// Writes `buffer` as a binary PPM (P6). Alpha is dropped.
pub fn write_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> io::Result<()> {
	write!(out, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
	let rgb: Vec<u8> = buffer.pixels().iter().flat_map(|px| [px.r, px.g, px.b]).collect();
	out.write_all(&rgb)?;
	out.flush()
}
