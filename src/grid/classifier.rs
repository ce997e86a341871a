//! Land/ocean classification of the world grid.

use geo::Point;
use rayon::prelude::*;

use super::axis::Axis;
use super::config::{GridConfig, GridError};
use super::world::WorldGrid;
use crate::land::LandStore;

/// Builds and owns the classified world grid.
#[derive(Debug, Clone, Default)]
pub struct GridClassifier {
    config: GridConfig,
    grid: Option<WorldGrid>,
}

impl GridClassifier {
    /// Creates a classifier. The configuration is validated on [`generate`](Self::generate).
    pub fn new(config: GridConfig) -> Self {
        Self { config, grid: None }
    }

    pub fn with_grid_size(grid_size: f64) -> Self {
        Self::new(GridConfig::with_grid_size(grid_size))
    }

    pub fn grid_size(&self) -> f64 {
        self.config.grid_size
    }

    /// Changes the cell size used by the next generation. The current grid is kept.
    pub fn set_grid_size(&mut self, grid_size: f64) {
        self.config.grid_size = grid_size;
    }

    /// Classifies every cell against `land` and replaces the owned grid.
    ///
    /// Each cell is land when its center `(lon + size/2, lat + size/2)` is inside a
    /// land polygon. An empty store yields an all-ocean grid. On error the previous
    /// grid is left untouched.
    ///
    /// Returns the number of generated cells.
    pub fn generate(&mut self, land: &LandStore) -> Result<usize, GridError> {
        self.config.validate()?;
        let grid = classify_world(land, self.config.grid_size);
        let cells = grid.len();

        log::info!(
            "Generated grid with {} cells ({} land, {}x{} at {}°)",
            cells,
            grid.land_count(),
            grid.rows(),
            grid.cols(),
            grid.grid_size()
        );

        self.grid = Some(grid);
        Ok(cells)
    }

    /// Returns the most recently generated grid.
    pub fn grid(&self) -> Result<&WorldGrid, GridError> {
        self.grid.as_ref().ok_or(GridError::NotGenerated)
    }

    /// Returns true once a grid has been generated.
    pub fn is_generated(&self) -> bool {
        self.grid.is_some()
    }
}

/// Classifies all cells of a world grid with the given cell size.
///
/// Latitude bands are processed in parallel; the output is identical to a
/// sequential latitude-then-longitude sweep. `grid_size` must already be validated.
pub fn classify_world(land: &LandStore, grid_size: f64) -> WorldGrid {
    let lat_axis = Axis::latitude(grid_size);
    let lon_axis = Axis::longitude(grid_size);
    let cols = lon_axis.len();
    let half = grid_size / 2.0;

    let mut mask = vec![false; lat_axis.len() * cols];
    if land.polygon_count() > 0 {
        mask.par_chunks_mut(cols).enumerate().for_each(|(row, band)| {
            let center_lat = lat_axis.value(row) + half;
            for (col, is_land) in band.iter_mut().enumerate() {
                let center_lon = lon_axis.value(col) + half;
                *is_land = land.contains_point(Point::new(center_lon, center_lat));
            }
        });
    }

    WorldGrid::from_mask(grid_size, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridCell;
    use geo::{polygon, Polygon};

    fn square(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
        polygon![
            (x: min_x, y: min_y),
            (x: max_x, y: min_y),
            (x: max_x, y: max_y),
            (x: min_x, y: max_y),
            (x: min_x, y: min_y),
        ]
    }

    #[test]
    fn test_not_generated() {
        let classifier = GridClassifier::default();
        assert!(!classifier.is_generated());
        assert!(matches!(classifier.grid(), Err(GridError::NotGenerated)));
    }

    #[test]
    fn test_empty_store_is_all_ocean() {
        let mut classifier = GridClassifier::default();
        let cells = classifier.generate(&LandStore::new()).unwrap();
        assert_eq!(cells, 64_800);

        let grid = classifier.grid().unwrap();
        assert_eq!(grid.len(), 180 * 360);
        assert!(grid.iter().all(|c| !c.is_land));
    }

    #[test]
    fn test_cell_counts_match_half_open_ranges() {
        for (size, rows, cols) in [
            (1.0, 180, 360),
            (2.0, 90, 180),
            (0.5, 360, 720),
            (7.0, 26, 52),
            (0.7, 258, 515),
            (45.0, 4, 8),
            (200.0, 1, 2),
        ] {
            let mut classifier = GridClassifier::with_grid_size(size);
            let cells = classifier.generate(&LandStore::new()).unwrap();
            assert_eq!(cells, rows * cols, "grid size {}", size);
        }
    }

    #[test]
    fn test_whole_globe_is_all_land() {
        let store = LandStore::from_polygons(vec![square(-180.0, -90.0, 180.0, 90.0)]);
        let mut classifier = GridClassifier::with_grid_size(2.0);
        classifier.generate(&store).unwrap();

        let grid = classifier.grid().unwrap();
        assert_eq!(grid.land_count(), grid.len());
    }

    #[test]
    fn test_single_cell_square() {
        let store = LandStore::from_polygons(vec![square(10.2, 20.2, 10.8, 20.8)]);
        let mut classifier = GridClassifier::default();
        classifier.generate(&store).unwrap();

        let grid = classifier.grid().unwrap();
        let land: Vec<GridCell> = grid.iter().filter(|c| c.is_land).collect();
        assert_eq!(land.len(), 1);
        assert_eq!((land[0].lat, land[0].lon), (20.0, 10.0));
        assert!(grid.get(20.0, 10.0).unwrap().is_land);
    }

    #[test]
    fn test_center_on_boundary_is_ocean() {
        // The square's western edge passes through the center of cell (20, 10).
        let store = LandStore::from_polygons(vec![square(10.5, 20.0, 12.0, 21.0)]);
        let mut classifier = GridClassifier::default();
        classifier.generate(&store).unwrap();

        let grid = classifier.grid().unwrap();
        assert!(!grid.get(20.0, 10.0).unwrap().is_land);
        assert!(grid.get(20.0, 11.0).unwrap().is_land);
        assert_eq!(grid.land_count(), 1);
    }

    #[test]
    fn test_hole_cells_are_ocean() {
        let outer = square(0.0, 0.0, 10.0, 10.0);
        let hole = square(4.0, 4.0, 6.0, 6.0);
        let store = LandStore::from_polygons(vec![Polygon::new(
            outer.exterior().clone(),
            vec![hole.exterior().clone()],
        )]);
        let mut classifier = GridClassifier::default();
        classifier.generate(&store).unwrap();

        let grid = classifier.grid().unwrap();
        for (lat, lon) in [(4.0, 4.0), (4.0, 5.0), (5.0, 4.0), (5.0, 5.0)] {
            assert!(!grid.get(lat, lon).unwrap().is_land, "({}, {})", lat, lon);
        }
        assert!(grid.get(1.0, 1.0).unwrap().is_land);
        assert_eq!(grid.land_count(), 100 - 4);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let store = LandStore::from_polygons(vec![
            square(-20.0, -35.0, 50.0, 35.0),
            square(100.0, 10.0, 140.0, 60.0),
        ]);
        let mut classifier = GridClassifier::with_grid_size(1.5);

        classifier.generate(&store).unwrap();
        let first = classifier.grid().unwrap().clone();
        classifier.generate(&store).unwrap();
        let second = classifier.grid().unwrap();

        assert_eq!(&first, second);
        let a: Vec<GridCell> = first.iter().collect();
        let b: Vec<GridCell> = second.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_keys_are_in_range_multiples() {
        for size in [1.0, 0.7, 7.0, 2.5] {
            let mut classifier = GridClassifier::with_grid_size(size);
            classifier.generate(&LandStore::new()).unwrap();
            let grid = classifier.grid().unwrap();

            for cell in grid.iter() {
                assert!((-90.0..90.0).contains(&cell.lat));
                assert!((-180.0..180.0).contains(&cell.lon));

                let lat_steps = (cell.lat + 90.0) / size;
                let lon_steps = (cell.lon + 180.0) / size;
                assert!((lat_steps - lat_steps.round()).abs() < 1e-9);
                assert!((lon_steps - lon_steps.round()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_inexact_dividing_sizes_stay_below_bounds() {
        let mut classifier = GridClassifier::default();
        for n in 1..400 {
            let size = 180.0 / n as f64;
            classifier.set_grid_size(size);
            classifier.generate(&LandStore::new()).unwrap();
            let grid = classifier.grid().unwrap();

            assert!(grid.rows() == n || grid.rows() == n + 1, "size {}", size);
            let last = grid.cell(grid.rows() - 1, grid.cols() - 1).unwrap();
            assert!(last.lat < 90.0, "lat key {} at size {}", last.lat, size);
            assert!(last.lon < 180.0, "lon key {} at size {}", last.lon, size);
        }
    }

    #[test]
    fn test_invalid_grid_size_keeps_previous_grid() {
        let store = LandStore::from_polygons(vec![square(0.0, 0.0, 30.0, 30.0)]);
        let mut classifier = GridClassifier::with_grid_size(10.0);
        classifier.generate(&store).unwrap();
        let before = classifier.grid().unwrap().clone();

        for bad in [0.0, -1.0, f64::NAN] {
            classifier.set_grid_size(bad);
            assert!(matches!(
                classifier.generate(&store),
                Err(GridError::InvalidGridSize(_))
            ));
            assert_eq!(classifier.grid().unwrap(), &before);
        }
    }

    #[test]
    fn test_invalid_grid_size_before_generation() {
        let mut classifier = GridClassifier::with_grid_size(-2.0);
        assert!(classifier.generate(&LandStore::new()).is_err());
        assert!(matches!(classifier.grid(), Err(GridError::NotGenerated)));
    }

    #[test]
    fn test_regenerate_replaces_grid() {
        let store = LandStore::new();
        let mut classifier = GridClassifier::with_grid_size(10.0);
        classifier.generate(&store).unwrap();
        classifier.set_grid_size(30.0);
        classifier.generate(&store).unwrap();

        let grid = classifier.grid().unwrap();
        assert_eq!(grid.grid_size(), 30.0);
        assert_eq!(grid.len(), 6 * 12);
    }
}
