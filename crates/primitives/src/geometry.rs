use std::fmt;

use serde::{Deserialize, Serialize};

/// A pixel coordinate, origin at the top-left corner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
	/// Column, growing to the right.
	pub x: u32,
	/// Row, growing downwards.
	pub y: u32,
}

impl Position {
	/// The top-left pixel.
	pub const ORIGIN: Self = Self::new(0, 0);

	/// Creates a position.
	pub const fn new(x: u32, y: u32) -> Self {
		Self { x, y }
	}
}

impl From<(u32, u32)> for Position {
	fn from((x, y): (u32, u32)) -> Self {
		Self::new(x, y)
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// Dimensions of a raster in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
	/// Number of columns.
	pub width: u32,
	/// Number of rows.
	pub height: u32,
}

impl Size {
	/// Creates a size.
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// Number of pixels covered.
	pub const fn area(self) -> usize {
		self.width as usize * self.height as usize
	}

	/// Returns true when either dimension is zero.
	pub const fn is_empty(self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns true if `pos` lies inside `[0, width) x [0, height)`.
	#[inline]
	pub const fn contains(self, pos: Position) -> bool {
		pos.x < self.width && pos.y < self.height
	}

	/// Row-major index of `pos`, or `None` when it lies outside.
	#[inline]
	pub const fn index_of(self, pos: Position) -> Option<usize> {
		if self.contains(pos) {
			Some(pos.y as usize * self.width as usize + pos.x as usize)
		} else {
			None
		}
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}
