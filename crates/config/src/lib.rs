//! Configuration system for RoundMark.
//!
//! Configuration is written in TOML. Every key is optional and falls back to
//! the built-in default:
//!
//! ```toml
//! # Exclusive bound for both document axes. Must exceed the tallest
//! # document anchors will be placed on.
//! max_axis = 1000000000
//!
//! # Symbols cycled through for marker labels.
//! alphabet = "123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"
//!
//! [marker]
//! diameter = 30   # marker width and height
//! font_size = 18  # label size
//!
//! [bindings]
//! modifier = "alt"  # alt | ctrl | shift
//! ```
//!
//! # Configuration Files
//!
//! [`Config::load_default`] reads `$XDG_CONFIG_HOME/roundmark/config.toml`
//! (or the platform equivalent) when it exists and otherwise returns
//! [`Config::default`]. Unknown keys are rejected so typos do not silently
//! fall back to defaults.

mod error;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use roundmark_anchors::{DEFAULT_ALPHABET, DEFAULT_MAX_AXIS, MAX_AXIS_LIMIT};
use roundmark_primitives::Modifiers;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Exclusive bound for both document axes.
	pub max_axis: u64,
	/// Label symbols, one per character.
	pub alphabet: String,
	pub marker: MarkerConfig,
	pub bindings: BindingConfig,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			max_axis: DEFAULT_MAX_AXIS,
			alphabet: DEFAULT_ALPHABET.to_owned(),
			marker: MarkerConfig::default(),
			bindings: BindingConfig::default(),
		}
	}
}

/// Marker appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
	/// Marker diameter in document units.
	pub diameter: u32,
	/// Label font size in document units.
	pub font_size: u32,
}

impl Default for MarkerConfig {
	fn default() -> Self {
		Self {
			diameter: 30,
			font_size: 18,
		}
	}
}

/// Input binding settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingConfig {
	/// Modifier that must be held for every anchor gesture.
	pub modifier: BindingModifier,
}

/// Modifier key names accepted in `[bindings]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingModifier {
	#[default]
	Alt,
	Ctrl,
	Shift,
}

impl BindingModifier {
	/// The modifier set a gesture must include.
	pub fn modifiers(self) -> Modifiers {
		match self {
			BindingModifier::Alt => Modifiers::ALT,
			BindingModifier::Ctrl => Modifiers::CTRL,
			BindingModifier::Shift => Modifiers::SHIFT,
		}
	}
}

impl Config {
	/// Parses and validates a TOML document.
	pub fn from_toml(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates the file at `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml(&input)?;
		debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Loads the user config file, or the defaults if there is none.
	pub fn load_default() -> Result<Self> {
		match default_path() {
			Some(path) if path.is_file() => Self::load(&path),
			_ => {
				debug!("no config file found, using defaults");
				Ok(Self::default())
			}
		}
	}

	/// Checks the invariants the rest of the system relies on.
	pub fn validate(&self) -> Result<()> {
		if self.max_axis == 0 || self.max_axis > MAX_AXIS_LIMIT {
			return Err(ConfigError::Invalid(format!(
				"max_axis must be in 1..={MAX_AXIS_LIMIT}, got {}",
				self.max_axis
			)));
		}
		if self.alphabet.is_empty() {
			return Err(ConfigError::Invalid("alphabet must not be empty".into()));
		}
		if self.marker.diameter == 0 {
			return Err(ConfigError::Invalid("marker.diameter must be positive".into()));
		}
		if self.marker.font_size == 0 {
			return Err(ConfigError::Invalid("marker.font_size must be positive".into()));
		}
		Ok(())
	}
}

/// Location of the user config file.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("roundmark").join("config.toml"))
}
