//! The [`PixelBuffer`] raster.

use core::fmt;
use core::ops::{Index, IndexMut};

use doodle_primitives::{Position, Rgba, Size};

use crate::error::{CanvasError, Result};

/// A rectangular grid of RGBA pixels.
///
/// Pixels are stored row-major. Index via `buf[pos]` (panics outside the
/// raster) or use [`Self::pixel`]/[`Self::pixel_mut`] for checked access.
/// The length of `pixels` is always `size.area()`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
	size: Size,
	pixels: Vec<Rgba>,
}

impl PixelBuffer {
	/// Returns a transparent buffer, matching a freshly created canvas.
	#[must_use]
	pub fn new(size: Size) -> Self {
		Self::filled(size, Rgba::TRANSPARENT)
	}

	/// Returns a buffer with every pixel set to `color`.
	#[must_use]
	pub fn filled(size: Size, color: Rgba) -> Self {
		Self {
			size,
			pixels: vec![color; size.area()],
		}
	}

	/// Builds a buffer from tightly packed `r, g, b, a` bytes.
	pub fn from_rgba_bytes(size: Size, bytes: &[u8]) -> Result<Self> {
		let expected = size.area().checked_mul(4);
		if expected != Some(bytes.len()) {
			return Err(CanvasError::BufferSize {
				expected,
				actual: bytes.len(),
			});
		}

		let pixels = bytes
			.chunks_exact(4)
			.map(|px| Rgba::from_array([px[0], px[1], px[2], px[3]]))
			.collect();
		Ok(Self { size, pixels })
	}

	/// Returns the raster as tightly packed `r, g, b, a` bytes.
	pub fn to_rgba_bytes(&self) -> Vec<u8> {
		self.pixels.iter().flat_map(|px| px.to_array()).collect()
	}

	/// Dimensions of the raster.
	pub const fn size(&self) -> Size {
		self.size
	}

	/// Number of columns.
	pub const fn width(&self) -> u32 {
		self.size.width
	}

	/// Number of rows.
	pub const fn height(&self) -> u32 {
		self.size.height
	}

	/// The pixels in row-major order.
	pub fn pixels(&self) -> &[Rgba] {
		&self.pixels
	}

	/// Returns true if `pos` addresses a pixel of this buffer.
	#[inline]
	pub fn contains(&self, pos: Position) -> bool {
		self.size.contains(pos)
	}

	/// Returns `Ok(())` if `pos` is inside the raster, [`CanvasError::OutOfRange`]
	/// otherwise.
	pub fn check(&self, pos: Position) -> Result<()> {
		if self.contains(pos) {
			Ok(())
		} else {
			Err(CanvasError::OutOfRange {
				position: pos,
				size: self.size,
			})
		}
	}

	/// Returns the color at `pos`, or `None` outside the raster.
	#[inline]
	#[must_use]
	pub fn pixel(&self, pos: Position) -> Option<Rgba> {
		let index = self.size.index_of(pos)?;
		self.pixels.get(index).copied()
	}

	/// Returns a mutable reference to the pixel at `pos`, or `None` outside the
	/// raster.
	#[inline]
	#[must_use]
	pub fn pixel_mut(&mut self, pos: Position) -> Option<&mut Rgba> {
		let index = self.size.index_of(pos)?;
		self.pixels.get_mut(index)
	}

	/// Sets every pixel to `color`.
	pub fn fill_all(&mut self, color: Rgba) {
		self.pixels.fill(color);
	}

	/// Counts pixels exactly equal to `color`.
	pub fn count(&self, color: Rgba) -> usize {
		self.pixels.iter().filter(|&&px| px == color).count()
	}

	#[track_caller]
	fn index_or_panic(&self, pos: Position) -> usize {
		match self.size.index_of(pos) {
			Some(index) => index,
			None => panic!("position {pos} is outside the {} buffer", self.size),
		}
	}
}

impl Index<Position> for PixelBuffer {
	type Output = Rgba;

	/// # Panics
	///
	/// Panics if `pos` is outside the raster.
	#[track_caller]
	fn index(&self, pos: Position) -> &Rgba {
		let i = self.index_or_panic(pos);
		&self.pixels[i]
	}
}

impl IndexMut<Position> for PixelBuffer {
	#[track_caller]
	fn index_mut(&mut self, pos: Position) -> &mut Rgba {
		let i = self.index_or_panic(pos);
		&mut self.pixels[i]
	}
}

impl fmt::Debug for PixelBuffer {
	/// Small buffers print one row per line with `#RRGGBBAA` cells; larger
	/// ones only print their size.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.size.area() > 64 {
			return f
				.debug_struct("PixelBuffer")
				.field("size", &self.size)
				.finish_non_exhaustive();
		}

		writeln!(f, "PixelBuffer {} [", self.size)?;
		if self.size.width > 0 {
			for row in self.pixels.chunks(self.size.width as usize) {
				f.write_str("    ")?;
				for px in row {
					write!(f, " #{:02X}{:02X}{:02X}{:02X}", px.r, px.g, px.b, px.a)?;
				}
				f.write_str("\n")?;
			}
		}
		f.write_str("]")
	}
}

#[cfg(test)]
mod tests;
