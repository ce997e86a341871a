//! Land boundary store.
//!
//! Loads land polygons from GeoJSON and answers point containment queries
//! for grid classification.

mod loader;
mod store;

pub use loader::{parse_land_geojson, read_land_geojson, DataSourceError, ParsedLand};
pub use store::LandStore;
