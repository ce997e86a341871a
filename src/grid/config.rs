//! Grid configuration parameters.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::axis::Axis;

/// Default cell size in degrees.
pub const DEFAULT_GRID_SIZE: f64 = 1.0;

/// Largest grid that will be generated (one byte per cell in memory).
pub const MAX_CELLS: u64 = 1 << 32;

/// Errors raised by grid configuration and generation.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid size {0}: must be a finite number of degrees greater than zero")]
    InvalidGridSize(f64),
    #[error("Grid size {grid_size} would produce {cells} cells (limit {})", MAX_CELLS)]
    TooManyCells { grid_size: f64, cells: f64 },
    #[error("Grid has not been generated yet")]
    NotGenerated,
    #[error("Failed to read grid config '{}': {reason}", .path.display())]
    ConfigFile { path: PathBuf, reason: String },
}

/// Configuration for world grid generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cell edge length in degrees, used for both latitude and longitude steps.
    pub grid_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl GridConfig {
    /// Creates a configuration with the given cell size.
    pub fn with_grid_size(grid_size: f64) -> Self {
        Self { grid_size }
    }

    /// Reads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path).map_err(|e| GridError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| GridError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Checks that the grid size is usable.
    pub fn validate(&self) -> Result<(), GridError> {
        let size = self.grid_size;
        if !(size.is_finite() && size > 0.0) {
            return Err(GridError::InvalidGridSize(size));
        }

        let cells = Axis::latitude(size).len() as f64 * Axis::longitude(size).len() as f64;
        if cells > MAX_CELLS as f64 {
            return Err(GridError::TooManyCells {
                grid_size: size,
                cells,
            });
        }
        Ok(())
    }
}
