//! Core value types for painting: colors, pixel positions and canvas sizes.

/// RGBA colors, hex parsing and the predefined palette.
pub mod color;
/// Integer pixel coordinates and canvas dimensions.
pub mod geometry;

pub use color::{ColorError, PALETTE, Rgba};
pub use geometry::{Position, Size};
