//! Land/ocean classification of a regular latitude/longitude world grid.
//!
//! Land polygons are loaded from GeoJSON into a [`LandStore`]; a
//! [`GridClassifier`] then marks every grid cell whose center lies inside a
//! land polygon. [`GridGenerator`] wraps both for the common load-generate-read flow.

pub mod error;
pub mod export;
pub mod generator;
pub mod grid;
pub mod land;

pub use error::Error;
pub use export::{export_grid_mask_png, export_grid_mask_raw, MaskExportError, MaskExportOptions};
pub use generator::GridGenerator;
pub use grid::{GridCell, GridClassifier, GridConfig, GridError, WorldGrid};
pub use land::{DataSourceError, LandStore};
