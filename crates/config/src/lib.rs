//! Configuration for the paint board.
//!
//! Configuration is written in TOML. Every field is optional and falls back to
//! the defaults of the web paint board:
//!
//! ```toml
//! palette = ["#000000", "#FF0000", "#00FF00"]
//!
//! [canvas]
//! width = 400
//! height = 250
//! background = "#FFFFFF"
//!
//! [brush]
//! default = 5
//! min = 1
//! max = 50
//! color = "#000000"
//!
//! [history]
//! depth = 20
//! ```
//!
//! Doodle looks for `$XDG_CONFIG_HOME/doodle/config.toml` (or the platform
//! equivalent) unless a path is given explicitly.

pub mod error;

use std::path::{Path, PathBuf};

use doodle_canvas::{BoardSettings, BrushSize, History, PixelBuffer};
use doodle_primitives::{PALETTE, Rgba, Size};
pub use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest canvas, in pixels, a configuration may request.
pub const MAX_CANVAS_AREA: u64 = 8192 * 8192;

/// Parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoodleConfig {
	pub canvas: CanvasConfig,
	pub brush: BrushConfig,
	pub history: HistoryConfig,
	/// Swatches offered next to the canvas.
	pub palette: Vec<Rgba>,
}

/// `[canvas]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
	pub width: u32,
	pub height: u32,
	pub background: Rgba,
}

/// `[brush]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrushConfig {
	/// Initial width.
	pub default: u32,
	pub min: u32,
	pub max: u32,
	/// Initial brush color.
	pub color: Rgba,
}

/// `[history]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
	/// Undo snapshots retained. Zero disables undo.
	pub depth: usize,
}

impl Default for DoodleConfig {
	fn default() -> Self {
		Self {
			canvas: CanvasConfig::default(),
			brush: BrushConfig::default(),
			history: HistoryConfig::default(),
			palette: PALETTE.to_vec(),
		}
	}
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			width: 400,
			height: 250,
			background: Rgba::WHITE,
		}
	}
}

impl Default for BrushConfig {
	fn default() -> Self {
		Self {
			default: BrushSize::DEFAULT,
			min: BrushSize::MIN,
			max: BrushSize::MAX,
			color: Rgba::BLACK,
		}
	}
}

impl Default for HistoryConfig {
	fn default() -> Self {
		Self {
			depth: History::<PixelBuffer>::DEFAULT_DEPTH,
		}
	}
}

impl DoodleConfig {
	/// Parses and validates a TOML document.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::parse(&content)?;
		debug!(path = %path.display(), "config loaded");
		Ok(config)
	}

	/// Loads the file at `path` if given, otherwise the file at
	/// [`default_path`] if it exists, otherwise the defaults.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		if let Some(path) = path {
			return Self::load(path);
		}
		match default_path() {
			Some(path) if path.is_file() => Self::load(path),
			_ => {
				debug!("no config file, using defaults");
				Ok(Self::default())
			}
		}
	}

	/// Rejects configurations that cannot describe a usable board.
	pub fn validate(&self) -> Result<()> {
		let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

		if self.canvas.width == 0 || self.canvas.height == 0 {
			return invalid("canvas width and height must be greater than zero");
		}
		let area = u64::from(self.canvas.width) * u64::from(self.canvas.height);
		if area > MAX_CANVAS_AREA {
			return Err(ConfigError::Invalid(format!(
				"canvas of {}x{} exceeds the limit of {MAX_CANVAS_AREA} pixels",
				self.canvas.width, self.canvas.height
			)));
		}
		let BrushConfig { default, min, max, .. } = self.brush;
		if min == 0 {
			return invalid("brush.min must be at least 1");
		}
		if !(min <= default && default <= max) {
			return Err(ConfigError::Invalid(format!(
				"brush sizes must satisfy min <= default <= max (got {min}, {default}, {max})"
			)));
		}
		if self.palette.is_empty() {
			return invalid("palette must contain at least one color");
		}
		Ok(())
	}

	/// Canvas dimensions.
	pub fn canvas_size(&self) -> Size {
		Size::new(self.canvas.width, self.canvas.height)
	}

	/// Settings for a fresh [`doodle_canvas::Board`].
	pub fn board_settings(&self) -> BoardSettings {
		BoardSettings {
			size: self.canvas_size(),
			background: self.canvas.background,
			brush_color: self.brush.color,
			brush: BrushSize::with_limits(self.brush.default, self.brush.min, self.brush.max),
			history_depth: self.history.depth,
		}
	}
}

/// `$XDG_CONFIG_HOME/doodle/config.toml`, or the platform equivalent.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("doodle").join("config.toml"))
}
