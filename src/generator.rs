//! Land/ocean grid generator.
//!
//! Ties a [`LandStore`] and a [`GridClassifier`] together behind the three calls
//! most callers need: load land data, generate the grid, read the grid.

use std::path::Path;

use crate::grid::{GridClassifier, GridConfig, WorldGrid};
use crate::land::LandStore;
use crate::Error;

/// Generates a land/ocean world grid from land polygons.
///
/// # Example
/// ```no_run
/// use landgrid::GridGenerator;
///
/// let mut generator = GridGenerator::new(1.0);
/// generator.load_land_data("land.geojson")?;
/// generator.generate_world_grid()?;
/// let grid = generator.get_grid()?;
/// println!("{} of {} cells are land", grid.land_count(), grid.len());
/// # Ok::<(), landgrid::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridGenerator {
    land: LandStore,
    classifier: GridClassifier,
}

impl GridGenerator {
    /// Creates a generator with the given cell size in degrees.
    ///
    /// The size is validated when the grid is generated.
    pub fn new(grid_size: f64) -> Self {
        Self::with_config(GridConfig::with_grid_size(grid_size))
    }

    pub fn with_config(config: GridConfig) -> Self {
        Self {
            land: LandStore::new(),
            classifier: GridClassifier::new(config),
        }
    }

    /// Loads land polygons from a GeoJSON file, replacing previously loaded land.
    ///
    /// Returns the number of polygons loaded.
    pub fn load_land_data(&mut self, path: impl AsRef<Path>) -> Result<usize, Error> {
        Ok(self.land.load(path)?)
    }

    /// Classifies every grid cell against the loaded land.
    ///
    /// Without land data every cell is ocean. Returns the number of cells.
    pub fn generate_world_grid(&mut self) -> Result<usize, Error> {
        Ok(self.classifier.generate(&self.land)?)
    }

    /// Returns the grid from the last successful generation.
    pub fn get_grid(&self) -> Result<&WorldGrid, Error> {
        Ok(self.classifier.grid()?)
    }

    pub fn land_store(&self) -> &LandStore {
        &self.land
    }

    pub fn classifier(&self) -> &GridClassifier {
        &self.classifier
    }
}
