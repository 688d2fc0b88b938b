//! Generation parameters and configuration file loading
//!
//! The core never validates a configuration on its own; `min <= max` is the
//! caller's responsibility. Loaders and hosts call [`LayoutConfig::validate`]
//! at the boundary.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;
#[cfg(feature = "std")]
use std::path::Path;

use crate::consts::{
    DEFAULT_CELL_SIZE, DEFAULT_ROOM_ITERATIONS, DEFAULT_ROOM_MAX, DEFAULT_ROOM_MIN,
    DEFAULT_VIEWPORT,
};
use crate::layout::ConnectMode;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {field} range: min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: i32,
        max: i32,
    },

    #[error("{field} minimum must be at least 1")]
    ZeroMinimum { field: &'static str },

    #[error("grid must be non-empty, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },

    #[error("cell size must be greater than zero")]
    ZeroCellSize,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: i32,
    pub max: i32,
}

impl SizeRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in `min..=max`
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min >= 1 && self.min <= self.max
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if self.min < 1 {
            return Err(ConfigError::ZeroMinimum { field });
        }
        Ok(())
    }
}

/// Nominal grid size in tiles. Rooms are anchored inside it but may extend past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grid derived from a viewport in pixels and a cell size in pixels
    pub fn from_viewport(
        viewport_width: u32,
        viewport_height: u32,
        cell_size: u32,
    ) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let width = i32::try_from(viewport_width / cell_size).unwrap_or(i32::MAX);
        let height = i32::try_from(viewport_height / cell_size).unwrap_or(i32::MAX);
        Ok(Self { width, height })
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        let side = (DEFAULT_VIEWPORT / DEFAULT_CELL_SIZE) as i32;
        Self::new(side, side)
    }
}

/// Parameters for a generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Room width range in tiles (inclusive)
    pub room_width: SizeRange,
    /// Room height range in tiles (inclusive)
    pub room_height: SizeRange,
    /// Rooms placed per generation pass
    pub room_iterations: u32,
    /// Grid the room anchors are drawn from
    pub grid: GridBounds,
    /// Discard previously generated rooms before a new pass
    pub auto_clear: bool,
    /// How the connector shrinks its candidate list
    pub connect_mode: ConnectMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            room_width: SizeRange::new(DEFAULT_ROOM_MIN, DEFAULT_ROOM_MAX),
            room_height: SizeRange::new(DEFAULT_ROOM_MIN, DEFAULT_ROOM_MAX),
            room_iterations: DEFAULT_ROOM_ITERATIONS,
            grid: GridBounds::default(),
            auto_clear: true,
            connect_mode: ConnectMode::default(),
        }
    }
}

impl LayoutConfig {
    /// Check ranges and grid size
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.room_width.validate("room_width")?;
        self.room_height.validate("room_height")?;
        if self.grid.is_empty() {
            return Err(ConfigError::EmptyGrid {
                width: self.grid.width,
                height: self.grid.height,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    #[cfg(feature = "std")]
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "std")]
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_json_str(&contents)
    }

    #[cfg(feature = "std")]
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
