//! Dense latitude/longitude land mask.

use serde::{Deserialize, Serialize};

use super::axis::Axis;

/// A single grid cell, identified by its south-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Latitude of the southern edge in degrees, in [-90, 90).
    pub lat: f64,
    /// Longitude of the western edge in degrees, in [-180, 180).
    pub lon: f64,
    /// Whether the cell center lies on land.
    pub is_land: bool,
}

impl GridCell {
    /// Returns the cell center as `(lon, lat)`.
    pub fn center(&self, grid_size: f64) -> (f64, f64) {
        (self.lon + grid_size / 2.0, self.lat + grid_size / 2.0)
    }
}

/// A classified world grid stored as a dense row-major mask.
///
/// Row `r` is the latitude band starting at `-90 + r * grid_size` and column `c`
/// is the longitude band starting at `-180 + c * grid_size`. Every `(row, col)`
/// pair is a cell, so the grid tiles the globe with no gaps or duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldGrid {
    grid_size: f64,
    lat_axis: Axis,
    lon_axis: Axis,
    /// Land flags in row-major order (latitude ascending, then longitude ascending).
    land: Vec<bool>,
}

impl WorldGrid {
    /// Builds a grid from row-major land flags.
    ///
    /// # Panics
    /// Panics if `land.len()` does not equal `rows * cols` for `grid_size`.
    pub(crate) fn from_mask(grid_size: f64, land: Vec<bool>) -> Self {
        let lat_axis = Axis::latitude(grid_size);
        let lon_axis = Axis::longitude(grid_size);
        assert_eq!(land.len(), lat_axis.len() * lon_axis.len());
        Self {
            grid_size,
            lat_axis,
            lon_axis,
            land,
        }
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Number of latitude bands.
    pub fn rows(&self) -> usize {
        self.lat_axis.len()
    }

    /// Number of longitude bands.
    pub fn cols(&self) -> usize {
        self.lon_axis.len()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.land.len()
    }

    pub fn is_empty(&self) -> bool {
        self.land.is_empty()
    }

    /// Returns the cell at a row/column index.
    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        Some(GridCell {
            lat: self.lat_axis.value(row),
            lon: self.lon_axis.value(col),
            is_land: self.land[row * self.cols() + col],
        })
    }

    /// Land flag at a row/column index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    pub(crate) fn is_land_at(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows() && col < self.cols(),
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.rows(),
            self.cols()
        );
        self.land[row * self.cols() + col]
    }

    /// Looks up a cell by its exact south-west corner.
    pub fn get(&self, lat: f64, lon: f64) -> Option<GridCell> {
        let row = self.lat_axis.index_of(lat)?;
        let col = self.lon_axis.index_of(lon)?;
        self.cell(row, col)
    }

    /// Returns the cell whose extent contains `(lat, lon)`.
    pub fn cell_containing(&self, lat: f64, lon: f64) -> Option<GridCell> {
        let row = self.lat_axis.bucket_of(lat)?;
        let col = self.lon_axis.bucket_of(lon)?;
        self.cell(row, col)
    }

    /// Iterates over all cells, latitude ascending then longitude ascending.
    pub fn iter(&self) -> impl Iterator<Item = GridCell> + '_ {
        let cols = self.cols();
        self.land.iter().enumerate().map(move |(i, &is_land)| GridCell {
            lat: self.lat_axis.value(i / cols),
            lon: self.lon_axis.value(i % cols),
            is_land,
        })
    }

    /// Number of land cells.
    pub fn land_count(&self) -> usize {
        self.land.iter().filter(|&&l| l).count()
    }

    /// Fraction of cells that are land, in [0, 1].
    pub fn land_fraction(&self) -> f64 {
        if self.land.is_empty() {
            0.0
        } else {
            self.land_count() as f64 / self.land.len() as f64
        }
    }
}
