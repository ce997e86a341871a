//! World grid generation.
//!
//! Partitions the globe into a regular latitude/longitude grid and classifies
//! each cell as land or ocean from the center point of the cell.

mod axis;
mod classifier;
mod config;
mod world;

pub use axis::{Axis, LAT_END, LAT_START, LON_END, LON_START};
pub use classifier::{classify_world, GridClassifier};
pub use config::{GridConfig, GridError, DEFAULT_GRID_SIZE, MAX_CELLS};
pub use world::{GridCell, WorldGrid};
