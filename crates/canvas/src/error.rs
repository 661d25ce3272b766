//! Error types for canvas operations.

use doodle_primitives::{Position, Size};
use thiserror::Error;

/// Errors raised by canvas operations. All are caller contract violations and
/// are reported before any pixel is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
	/// A coordinate lies outside `[0, width) x [0, height)`.
	#[error("position {position} is outside the {size} canvas")]
	OutOfRange {
		/// The rejected coordinate.
		position: Position,
		/// Dimensions of the canvas it was checked against.
		size: Size,
	},

	/// Raw RGBA data does not match the declared dimensions.
	#[error("expected {} bytes of RGBA data, got {actual}", byte_len(.expected))]
	BufferSize {
		/// `width * height * 4`, `None` when that overflows `usize`.
		expected: Option<usize>,
		/// Length of the supplied data.
		actual: usize,
	},
}

fn byte_len(expected: &Option<usize>) -> String {
	match expected {
		Some(n) => n.to_string(),
		None => "more than usize::MAX".to_string(),
	}
}

/// Result type for canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;
