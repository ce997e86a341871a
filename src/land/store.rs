//! In-memory land polygon store with point containment queries.

use std::path::{Path, PathBuf};

use geo::{BoundingRect, Contains, Point, Polygon, Rect};

use super::loader::{read_land_geojson, DataSourceError};

/// A land polygon together with its bounding rectangle.
#[derive(Debug, Clone)]
struct LandPolygon {
    polygon: Polygon<f64>,
    bounds: Option<Rect<f64>>,
}

impl LandPolygon {
    fn new(polygon: Polygon<f64>) -> Self {
        let bounds = polygon.bounding_rect();
        Self { polygon, bounds }
    }

    #[inline]
    fn bounds_cover(&self, point: Point<f64>) -> bool {
        match self.bounds {
            Some(rect) => {
                let (min, max) = (rect.min(), rect.max());
                point.x() >= min.x && point.x() <= max.x && point.y() >= min.y && point.y() <= max.y
            }
            None => false,
        }
    }
}

/// An immutable set of land polygons.
///
/// Built once per load and replaced wholesale on reload.
#[derive(Debug, Clone, Default)]
struct LandPolygonSet {
    polygons: Vec<LandPolygon>,
    source: Option<PathBuf>,
}

impl LandPolygonSet {
    fn new(polygons: Vec<Polygon<f64>>, source: Option<PathBuf>) -> Self {
        Self {
            polygons: polygons.into_iter().map(LandPolygon::new).collect(),
            source,
        }
    }

    fn len(&self) -> usize {
        self.polygons.len()
    }

    fn contains_point(&self, point: Point<f64>) -> bool {
        self.polygons
            .iter()
            .any(|p| p.bounds_cover(point) && p.polygon.contains(&point))
    }
}

/// Holds land polygons and answers "is this point on land?".
///
/// The store starts empty. A successful [`LandStore::load`] replaces its contents;
/// a failed one leaves them untouched.
///
/// Containment follows `geo::Contains`: a point must lie in a polygon's interior.
/// Points on an outer ring, inside a hole, or on a hole's ring are not land.
#[derive(Debug, Clone, Default)]
pub struct LandStore {
    land: Option<LandPolygonSet>,
}

impl LandStore {
    /// Creates an empty store. Every point query returns false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loaded store from polygons already in memory.
    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Self {
        Self {
            land: Some(LandPolygonSet::new(polygons, None)),
        }
    }

    /// Loads land polygons from a GeoJSON file, replacing any previous contents.
    ///
    /// Returns the number of polygons loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, DataSourceError> {
        let path = path.as_ref();
        let parsed = read_land_geojson(path)?;

        if parsed.skipped > 0 {
            log::warn!(
                "Ignored {} non-polygon geometries in {}",
                parsed.skipped,
                path.display()
            );
        }

        let set = LandPolygonSet::new(parsed.polygons, Some(path.to_path_buf()));
        let count = set.len();
        log::info!("Loaded {} land polygons from {}", count, path.display());

        self.land = Some(set);
        Ok(count)
    }

    /// Returns true if `point` (x = longitude, y = latitude) is inside any land polygon.
    pub fn contains_point(&self, point: Point<f64>) -> bool {
        self.land
            .as_ref()
            .is_some_and(|land| land.contains_point(point))
    }

    /// Returns true once polygons have been loaded or supplied.
    pub fn is_loaded(&self) -> bool {
        self.land.is_some()
    }

    /// Returns the number of stored polygons (0 when empty).
    pub fn polygon_count(&self) -> usize {
        self.land.as_ref().map(|l| l.len()).unwrap_or(0)
    }

    /// Returns the file the current polygons were loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.land.as_ref().and_then(|l| l.source.as_deref())
    }
}
