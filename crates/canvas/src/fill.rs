//! Paint-bucket flood fill.

use doodle_primitives::{Position, Rgba, Size};
use smallvec::SmallVec;
use tracing::trace;

use crate::buffer::PixelBuffer;
use crate::error::{CanvasError, Result};

/// Result of a [`flood_fill`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillOutcome {
	/// Color of the seed pixel before the fill.
	pub target: Rgba,
	/// Number of pixels recolored. Zero when the seed already had the fill color.
	pub filled: usize,
}

impl FillOutcome {
	/// Returns true if the fill did not touch the buffer.
	pub fn is_noop(&self) -> bool {
		self.filled == 0
	}
}

/// Recolors the 4-connected region of pixels that share the seed's color.
///
/// The region grows through up/down/left/right neighbours only, so a
/// diagonal line of another color is enough to stop it. Colors compare
/// exactly on all four channels.
///
/// If the seed already has `fill` color the call is a no-op. A seed outside
/// the buffer fails with [`CanvasError::OutOfRange`] and leaves the buffer
/// untouched.
pub fn flood_fill(buffer: &mut PixelBuffer, seed: Position, fill: Rgba) -> Result<FillOutcome> {
	let size = buffer.size();
	let target = buffer.pixel(seed).ok_or(CanvasError::OutOfRange { position: seed, size })?;

	if target == fill {
		trace!(%seed, color = %fill, "flood fill skipped: seed already has fill color");
		return Ok(FillOutcome { target, filled: 0 });
	}

	let mut filled = 0;
	let mut pending = vec![seed];
	while let Some(pos) = pending.pop() {
		// A pixel can be queued twice before it is reached; the second pop
		// finds it already recolored.
		match buffer.pixel_mut(pos) {
			Some(px) if *px == target => *px = fill,
			_ => continue,
		}
		filled += 1;

		pending.extend(
			neighbors(pos, size)
				.into_iter()
				.filter(|&next| buffer.pixel(next) == Some(target)),
		);
	}

	trace!(%seed, %target, color = %fill, filled, "flood fill");
	Ok(FillOutcome { target, filled })
}

/// In-bounds von Neumann neighbours of `pos`.
fn neighbors(pos: Position, size: Size) -> SmallVec<[Position; 4]> {
	let mut out = SmallVec::new();
	if pos.x > 0 {
		out.push(Position::new(pos.x - 1, pos.y));
	}
	if pos.x + 1 < size.width {
		out.push(Position::new(pos.x + 1, pos.y));
	}
	if pos.y > 0 {
		out.push(Position::new(pos.x, pos.y - 1));
	}
	if pos.y + 1 < size.height {
		out.push(Position::new(pos.x, pos.y + 1));
	}
	out
}
