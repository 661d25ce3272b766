//! Brush sizing, tool selection and round-capped stroke rasterization.

use doodle_primitives::{Position, Rgba};
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// Paint board tools.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
	/// Freehand strokes in the brush color.
	#[default]
	Brush,
	/// Freehand strokes in the background color.
	Eraser,
	/// Flood fill with the brush color.
	PaintBucket,
}

/// Stroke width in pixels, kept within inclusive `[min, max]` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushSize {
	value: u32,
	min: u32,
	max: u32,
}

impl BrushSize {
	/// Width of a new brush.
	pub const DEFAULT: u32 = 5;
	/// Smallest width offered by the size slider.
	pub const MIN: u32 = 1;
	/// Largest width offered by the size slider.
	pub const MAX: u32 = 50;

	/// Creates a brush size within the default `[1, 50]` bounds.
	pub fn new(value: u32) -> Self {
		Self::with_limits(value, Self::MIN, Self::MAX)
	}

	/// Creates a brush size with custom bounds.
	///
	/// `min` is raised to 1 and `max` to `min`, so the bounds are never empty.
	pub fn with_limits(value: u32, min: u32, max: u32) -> Self {
		let min = min.max(1);
		let max = max.max(min);
		Self {
			value: value.clamp(min, max),
			min,
			max,
		}
	}

	/// Current width.
	pub const fn get(self) -> u32 {
		self.value
	}

	/// Inclusive bounds as `(min, max)`.
	pub const fn limits(self) -> (u32, u32) {
		(self.min, self.max)
	}

	/// Sets the width, clamping into bounds. Returns the stored width.
	pub fn set(&mut self, value: u32) -> u32 {
		self.value = value.clamp(self.min, self.max);
		self.value
	}

	/// Grows or shrinks by one pixel, as a scroll-wheel notch does.
	pub fn step(&mut self, grow: bool) -> u32 {
		let next = if grow {
			self.value.saturating_add(1)
		} else {
			self.value.saturating_sub(1)
		};
		self.set(next)
	}
}

impl Default for BrushSize {
	fn default() -> Self {
		Self::new(Self::DEFAULT)
	}
}

/// Paints a line segment of the given width with round caps.
///
/// Every pixel whose centre lies within `width / 2` of the segment joining the
/// centres of `from` and `to` is set to `color`. `from == to` stamps a dot.
/// Parts of the stroke outside the buffer are clipped. Returns the number of
/// pixels whose color changed.
pub fn stroke_segment(buffer: &mut PixelBuffer, from: Position, to: Position, width: u32, color: Rgba) -> usize {
	let size = buffer.size();
	if size.is_empty() || width == 0 {
		return 0;
	}

	let radius = f64::from(width) / 2.0;
	let radius_sq = radius * radius;
	let a = center(from);
	let b = center(to);

	let x0 = (a.0.min(b.0) - radius).floor().max(0.0) as u64;
	let y0 = (a.1.min(b.1) - radius).floor().max(0.0) as u64;
	let x1 = ((a.0.max(b.0) + radius).ceil() as u64).min(u64::from(size.width));
	let y1 = ((a.1.max(b.1) + radius).ceil() as u64).min(u64::from(size.height));

	let mut changed = 0;
	for y in y0..y1 {
		for x in x0..x1 {
			let pos = Position::new(x as u32, y as u32);
			if distance_sq_to_segment(center(pos), a, b) > radius_sq {
				continue;
			}
			if let Some(px) = buffer.pixel_mut(pos)
				&& *px != color
			{
				*px = color;
				changed += 1;
			}
		}
	}
	changed
}

fn center(pos: Position) -> (f64, f64) {
	(f64::from(pos.x) + 0.5, f64::from(pos.y) + 0.5)
}

fn distance_sq_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
	let (dx, dy) = (b.0 - a.0, b.1 - a.1);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq == 0.0 {
		0.0
	} else {
		(((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
	};
	let (ex, ey) = (a.0 + t * dx - p.0, a.1 + t * dy - p.1);
	ex * ex + ey * ey
}
