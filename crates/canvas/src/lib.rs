//! Raster painting for the drawing board.
//!
//! A [`PixelBuffer`] is the canvas raster. [`flood_fill`] implements the paint
//! bucket, [`stroke_segment`] the brush and eraser, and [`Board`] ties them
//! together with tool state and a bounded [`History`] of snapshots for undo.

pub mod board;
pub mod brush;
pub mod buffer;
pub mod error;
pub mod fill;
pub mod history;

pub use board::{Board, BoardSettings};
pub use brush::{BrushSize, Tool, stroke_segment};
pub use buffer::PixelBuffer;
pub use doodle_primitives::{Position, Rgba, Size};
pub use error::{CanvasError, Result};
pub use fill::{FillOutcome, flood_fill};
pub use history::History;
