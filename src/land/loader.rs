//! GeoJSON land polygon loading.

use std::path::{Path, PathBuf};

use geo::{Coord, LineString, Polygon};
use geojson::{GeoJson, Geometry, Value};
use thiserror::Error;

/// Errors that can occur while reading land data.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Failed to read land data '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Land data '{}' is not valid GeoJSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: geojson::Error,
    },
    #[error("Invalid polygon in '{}': {reason}", .path.display())]
    InvalidGeometry { path: PathBuf, reason: String },
}

/// Polygons extracted from a geometry source.
#[derive(Debug, Clone, Default)]
pub struct ParsedLand {
    /// Land polygons in file order. Multi-polygons are split into their parts.
    pub polygons: Vec<Polygon<f64>>,
    /// Geometries that were not polygonal (points, lines, null geometries).
    pub skipped: usize,
}

/// Reads and parses a GeoJSON file into land polygons.
pub fn read_land_geojson(path: &Path) -> Result<ParsedLand, DataSourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_land_geojson(&text, path)
}

/// Parses GeoJSON text into land polygons.
///
/// Accepts a FeatureCollection, a single Feature or a bare Geometry.
/// Non-polygon geometries are counted in [`ParsedLand::skipped`] and otherwise ignored.
/// `origin` is only used to label errors.
pub fn parse_land_geojson(text: &str, origin: &Path) -> Result<ParsedLand, DataSourceError> {
    let geojson: GeoJson = text.parse().map_err(|source| DataSourceError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let mut parsed = ParsedLand::default();
    let result = match geojson {
        GeoJson::FeatureCollection(collection) => collection
            .features
            .into_iter()
            .try_for_each(|feature| collect_optional(feature.geometry, &mut parsed)),
        GeoJson::Feature(feature) => collect_optional(feature.geometry, &mut parsed),
        GeoJson::Geometry(geometry) => collect_geometry(geometry, &mut parsed),
    };

    result.map_err(|reason| DataSourceError::InvalidGeometry {
        path: origin.to_path_buf(),
        reason,
    })?;
    Ok(parsed)
}

fn collect_optional(geometry: Option<Geometry>, out: &mut ParsedLand) -> Result<(), String> {
    match geometry {
        Some(geometry) => collect_geometry(geometry, out),
        None => {
            out.skipped += 1;
            Ok(())
        }
    }
}

fn collect_geometry(geometry: Geometry, out: &mut ParsedLand) -> Result<(), String> {
    match geometry.value {
        Value::Polygon(rings) => {
            out.polygons.push(polygon_from_rings(&rings)?);
        }
        Value::MultiPolygon(parts) => {
            for rings in &parts {
                out.polygons.push(polygon_from_rings(rings)?);
            }
        }
        Value::GeometryCollection(members) => {
            for member in members {
                collect_geometry(member, out)?;
            }
        }
        // Points and lines carry no area.
        _ => {
            out.skipped += 1;
        }
    }
    Ok(())
}

/// Builds a polygon from GeoJSON rings: the first ring is the exterior, the rest are holes.
fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, String> {
    let (exterior, holes) = rings
        .split_first()
        .ok_or_else(|| "polygon has no exterior ring".to_string())?;

    let exterior = ring_to_line_string(exterior)?;
    let holes = holes
        .iter()
        .map(|ring| ring_to_line_string(ring))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(exterior, holes))
}

fn ring_to_line_string(ring: &[Vec<f64>]) -> Result<LineString<f64>, String> {
    // A closed linear ring needs at least three distinct vertices plus the closing one.
    if ring.len() < 4 {
        return Err(format!("ring has {} positions, expected at least 4", ring.len()));
    }

    ring.iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(format!(
                "position has {} coordinates, expected at least 2",
                position.len()
            )),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}
