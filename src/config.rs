use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::buffer::SnapshotEncoding;
use crate::error::ConfigError;
use crate::palette;
use crate::pixel::Rgb;
use crate::stroke::MAX_BRUSH_WIDTH;
use crate::tool::ERASER_WIDTH;

/// Canvas settings, read from a JSON file.
///
/// Missing fields take their default, so a file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Sizes offered as brush buttons
    pub brush_sizes: Vec<u32>,
    pub default_brush_size: u32,
    pub eraser_width: u32,
    /// Swatch name selected at startup
    pub default_color: String,
    /// Keep at most this many history entries. `None` keeps everything.
    pub history_limit: Option<usize>,
    pub snapshot_encoding: SnapshotEncoding,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            brush_sizes: vec![2, 3, 5, 10],
            default_brush_size: 3,
            eraser_width: ERASER_WIDTH,
            default_color: "black".to_owned(),
            history_limit: None,
            snapshot_encoding: SnapshotEncoding::Raw,
        }
    }
}

impl CanvasConfig {
    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas size {}x{} must be positive",
                self.width, self.height
            )));
        }
        let sizes = 1..=MAX_BRUSH_WIDTH;
        if !sizes.contains(&self.default_brush_size)
            || !self.brush_sizes.iter().all(|size| sizes.contains(size))
        {
            return Err(ConfigError::Invalid(format!(
                "brush sizes must be between 1 and {MAX_BRUSH_WIDTH}"
            )));
        }
        if !sizes.contains(&self.eraser_width) {
            return Err(ConfigError::Invalid(format!(
                "eraser width must be between 1 and {MAX_BRUSH_WIDTH}"
            )));
        }
        if palette::resolve(&self.default_color).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown colour {:?}",
                self.default_color
            )));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid("history limit must be at least 1".to_owned()));
        }
        Ok(())
    }

    /// Starting brush colour, black when the name is not a known swatch
    pub fn initial_color(&self) -> Rgb {
        palette::resolve(&self.default_color).unwrap_or(Rgb::BLACK)
    }
}
