use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a color from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
	/// The value is not a recognised hex or named color.
	#[error("invalid color format: {0}")]
	Invalid(String),
}

/// A straight (non-premultiplied) RGBA color with 8 bits per channel.
///
/// Equality is exact on all four channels. Paint operations never blend, so
/// two colors either match or they do not.
///
/// Text form is `#RRGGBB` for opaque colors and `#RRGGBBAA` otherwise; see
/// [`Rgba::from_str`] for everything that is accepted on input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha channel, 255 is fully opaque.
	pub a: u8,
}

impl Rgba {
	/// Fully transparent black, the content of a freshly allocated raster.
	pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
	/// Opaque black.
	pub const BLACK: Self = Self::rgb(0, 0, 0);
	/// Opaque white.
	pub const WHITE: Self = Self::rgb(255, 255, 255);

	/// Creates a color from all four channels.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Creates an opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Returns this color with its alpha channel replaced.
	#[must_use]
	pub const fn with_alpha(self, a: u8) -> Self {
		Self { a, ..self }
	}

	/// Returns the RGB complement, keeping alpha.
	///
	/// Used to draw the eraser cursor so it stays visible over the background.
	#[must_use]
	pub const fn inverted(self) -> Self {
		Self::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
	}

	/// Returns the channels in `[r, g, b, a]` order.
	pub const fn to_array(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}

	/// Builds a color from `[r, g, b, a]`.
	pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
		Self::new(r, g, b, a)
	}

	/// Returns true when the alpha channel is 255.
	pub const fn is_opaque(self) -> bool {
		self.a == 255
	}
}

/// The swatches offered by the paint board, in display order.
pub const PALETTE: [Rgba; 11] = [
	Rgba::rgb(0x00, 0x00, 0x00),
	Rgba::rgb(0xFF, 0x00, 0x00),
	Rgba::rgb(0x00, 0xFF, 0x00),
	Rgba::rgb(0x00, 0x00, 0xFF),
	Rgba::rgb(0xFF, 0xFF, 0x00),
	Rgba::rgb(0xFF, 0x00, 0xFF),
	Rgba::rgb(0x00, 0xFF, 0xFF),
	Rgba::rgb(0xFF, 0xFF, 0xFF),
	Rgba::rgb(0x80, 0x80, 0x80),
	Rgba::rgb(0x80, 0x00, 0x00),
	Rgba::rgb(0x80, 0x80, 0x00),
];

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
		if !self.is_opaque() {
			write!(f, "{:02X}", self.a)?;
		}
		Ok(())
	}
}

impl FromStr for Rgba {
	type Err = ColorError;

	/// Parses `#RGB`, `#RRGGBB`, `#RRGGBBAA` (leading `#` optional) or one of
	/// `black`, `white`, `transparent`.
	///
	/// Hex forms without an alpha component are opaque.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();

		if value.eq_ignore_ascii_case("black") {
			return Ok(Self::BLACK);
		}
		if value.eq_ignore_ascii_case("white") {
			return Ok(Self::WHITE);
		}
		if value.eq_ignore_ascii_case("transparent") {
			return Ok(Self::TRANSPARENT);
		}

		parse_hex(value.strip_prefix('#').unwrap_or(value))
			.ok_or_else(|| ColorError::Invalid(value.to_string()))
	}
}

fn parse_hex(hex: &str) -> Option<Rgba> {
	if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
		return None;
	}
	let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

	match hex.len() {
		3 => {
			let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
			Some(Rgba::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
		}
		6 => Some(Rgba::rgb(channel(0)?, channel(2)?, channel(4)?)),
		8 => Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
		_ => None,
	}
}

impl TryFrom<String> for Rgba {
	type Error = ColorError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Rgba> for String {
	fn from(color: Rgba) -> Self {
		color.to_string()
	}
}
