//! Paint board state machine.
//!
//! The [`Board`] owns the canvas raster and everything the paint widget needs
//! to interpret pointer input: the active [`Tool`], brush color and size, and
//! the undo [`History`]. Every mutating operation snapshots the raster first,
//! so [`Board::undo`] always restores the state from before the last action.
//!
//! ```text
//! pointer_down ──► snapshot ──┬─ PaintBucket ─► flood_fill
//!                             └─ Brush/Eraser ─► dot, stroke begins
//! pointer_move ──────────────────────────────► segment from last point
//! pointer_up / pointer_leave ────────────────► stroke ends
//! ```

use doodle_primitives::{Position, Rgba, Size};
use tracing::debug;

use crate::brush::{BrushSize, Tool, stroke_segment};
use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::fill::flood_fill;
use crate::history::History;

/// Alpha of the translucent cursor preview (0.3 of full opacity).
const CURSOR_ALPHA: u8 = 0x4C;

/// Initial board configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
	/// Canvas dimensions.
	pub size: Size,
	/// Color the canvas starts with, also painted by the eraser and by clear.
	pub background: Rgba,
	/// Initial brush color.
	pub brush_color: Rgba,
	/// Initial brush size and its bounds.
	pub brush: BrushSize,
	/// Number of undo snapshots retained.
	pub history_depth: usize,
}

impl Default for BoardSettings {
	fn default() -> Self {
		Self {
			size: Size::new(400, 250),
			background: Rgba::WHITE,
			brush_color: Rgba::BLACK,
			brush: BrushSize::default(),
			history_depth: History::<PixelBuffer>::DEFAULT_DEPTH,
		}
	}
}

/// The paint board: raster, tool state and undo history.
#[derive(Debug, Clone)]
pub struct Board {
	buffer: PixelBuffer,
	background: Rgba,
	tool: Tool,
	color: Rgba,
	brush: BrushSize,
	history: History<PixelBuffer>,
	/// Last pointer position of the stroke in progress.
	stroke: Option<Position>,
}

impl Board {
	/// Creates a board whose canvas is filled with the background color.
	pub fn new(settings: BoardSettings) -> Self {
		Self {
			buffer: PixelBuffer::filled(settings.size, settings.background),
			background: settings.background,
			tool: Tool::Brush,
			color: settings.brush_color,
			brush: settings.brush,
			history: History::new(settings.history_depth),
			stroke: None,
		}
	}

	/// The current raster.
	pub fn buffer(&self) -> &PixelBuffer {
		&self.buffer
	}

	/// Consumes the board, returning its raster.
	pub fn into_buffer(self) -> PixelBuffer {
		self.buffer
	}

	pub fn tool(&self) -> Tool {
		self.tool
	}

	pub fn color(&self) -> Rgba {
		self.color
	}

	pub fn background(&self) -> Rgba {
		self.background
	}

	pub fn brush_size(&self) -> u32 {
		self.brush.get()
	}

	/// Returns true while a brush or eraser stroke is in progress.
	pub fn is_painting(&self) -> bool {
		self.stroke.is_some()
	}

	/// Number of snapshots available to [`Self::undo`].
	pub fn undo_len(&self) -> usize {
		self.history.len()
	}

	/// Selects a tool. Any stroke in progress ends.
	pub fn select_tool(&mut self, tool: Tool) {
		self.stroke = None;
		self.tool = tool;
		debug!(?tool, "tool selected");
	}

	/// Picks a brush color and switches back to the brush.
	pub fn select_color(&mut self, color: Rgba) {
		self.color = color;
		self.select_tool(Tool::Brush);
	}

	/// Switches between eraser and brush.
	pub fn toggle_eraser(&mut self) {
		self.toggle(Tool::Eraser);
	}

	/// Switches between paint bucket and brush.
	pub fn toggle_bucket(&mut self) {
		self.toggle(Tool::PaintBucket);
	}

	fn toggle(&mut self, tool: Tool) {
		let next = if self.tool == tool { Tool::Brush } else { tool };
		self.select_tool(next);
	}

	/// Sets the brush size, clamped to its bounds. Returns the stored size.
	pub fn set_brush_size(&mut self, size: u32) -> u32 {
		self.brush.set(size)
	}

	/// Applies one scroll-wheel notch to the brush size.
	pub fn wheel(&mut self, grow: bool) -> u32 {
		self.brush.step(grow)
	}

	/// Color of the translucent cursor preview drawn under the pointer.
	pub fn cursor_color(&self) -> Rgba {
		match self.tool {
			Tool::Eraser => self.background.inverted().with_alpha(CURSOR_ALPHA),
			Tool::Brush | Tool::PaintBucket => self.color.with_alpha(CURSOR_ALPHA),
		}
	}

	/// Handles a pointer press at `pos`.
	///
	/// The position must lie on the canvas; otherwise nothing is recorded and
	/// [`crate::CanvasError::OutOfRange`] is returned. Returns the number of
	/// pixels changed.
	pub fn pointer_down(&mut self, pos: Position) -> Result<usize> {
		self.buffer.check(pos)?;
		self.snapshot();

		let changed = match self.tool {
			Tool::PaintBucket => {
				self.stroke = None;
				flood_fill(&mut self.buffer, pos, self.color)?.filled
			}
			Tool::Brush | Tool::Eraser => {
				self.stroke = Some(pos);
				let color = self.stroke_color();
				stroke_segment(&mut self.buffer, pos, pos, self.brush.get(), color)
			}
		};
		debug!(tool = ?self.tool, %pos, changed, "pointer down");
		Ok(changed)
	}

	/// Handles pointer motion. Extends the stroke in progress, if any, and
	/// returns the number of pixels changed.
	pub fn pointer_move(&mut self, pos: Position) -> usize {
		let Some(last) = self.stroke else {
			return 0;
		};
		self.stroke = Some(pos);
		let color = self.stroke_color();
		stroke_segment(&mut self.buffer, last, pos, self.brush.get(), color)
	}

	/// Handles a pointer release, ending the stroke.
	pub fn pointer_up(&mut self) {
		self.stroke = None;
	}

	/// Handles the pointer leaving the canvas, ending the stroke.
	pub fn pointer_leave(&mut self) {
		self.stroke = None;
	}

	/// Repaints the whole canvas with the background color.
	pub fn clear(&mut self) {
		self.snapshot();
		self.stroke = None;
		self.buffer.fill_all(self.background);
		debug!("canvas cleared");
	}

	/// Restores the raster from before the most recent action. Returns false
	/// when there is nothing to undo.
	pub fn undo(&mut self) -> bool {
		match self.history.pop() {
			Some(previous) => {
				self.buffer = previous;
				self.stroke = None;
				debug!(remaining = self.history.len(), "undo");
				true
			}
			None => {
				debug!("nothing to undo");
				false
			}
		}
	}

	fn stroke_color(&self) -> Rgba {
		match self.tool {
			Tool::Eraser => self.background,
			Tool::Brush | Tool::PaintBucket => self.color,
		}
	}

	fn snapshot(&mut self) {
		self.history.push(self.buffer.clone());
	}
}

impl Default for Board {
	fn default() -> Self {
		Self::new(BoardSettings::default())
	}
}
