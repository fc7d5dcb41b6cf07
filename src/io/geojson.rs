//! GeoJSON boundary reading
//!
//! Only the outer ring of the first polygon is used. `FeatureCollection`,
//! `Feature`, `Polygon` and `MultiPolygon` documents are accepted.

use std::fs;
use std::path::Path;
use log::{debug, info, warn};
use serde_json::Value;

use crate::coordinate::Point;
use crate::errors::{CropError, CropResult};

/// Read the boundary ring from a GeoJSON file
pub fn read_boundary<P: AsRef<Path>>(path: P) -> CropResult<Vec<Point>> {
    let path = path.as_ref();
    info!("Reading boundary from {}", path.display());

    let content = fs::read_to_string(path)?;
    let boundary = parse_boundary(&content)?;

    info!("Boundary has {} coordinates", boundary.len());
    Ok(boundary)
}

/// Parse the boundary ring from a GeoJSON string
pub fn parse_boundary(content: &str) -> CropResult<Vec<Point>> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| CropError::GeoJsonError(format!("Failed to parse JSON: {}", e)))?;

    let geometry = find_geometry(&document)?;
    let ring = outer_ring(geometry)?;
    parse_ring(ring)
}

fn find_geometry(document: &Value) -> CropResult<&Value> {
    match geo_type(document)? {
        "FeatureCollection" => {
            let features = document.get("features")
                .and_then(|v| v.as_array())
                .ok_or_else(|| CropError::GeoJsonError("FeatureCollection without 'features'".to_string()))?;
            if features.len() > 1 {
                warn!("GeoJSON has {} features; using the first", features.len());
            }
            let feature = features.first()
                .ok_or_else(|| CropError::GeoJsonError("FeatureCollection is empty".to_string()))?;
            find_geometry(feature)
        },
        "Feature" => document.get("geometry")
            .filter(|g| !g.is_null())
            .ok_or_else(|| CropError::GeoJsonError("Feature without geometry".to_string())),
        _ => Ok(document),
    }
}

fn outer_ring(geometry: &Value) -> CropResult<&Value> {
    let geometry_type = geo_type(geometry)?;
    let coordinates = geometry.get("coordinates")
        .ok_or_else(|| CropError::GeoJsonError(format!("{} without 'coordinates'", geometry_type)))?;

    let polygon = match geometry_type {
        "Polygon" => coordinates,
        "MultiPolygon" => {
            let polygons = coordinates.as_array()
                .ok_or_else(|| CropError::GeoJsonError("MultiPolygon coordinates must be an array".to_string()))?;
            if polygons.len() > 1 {
                warn!("MultiPolygon has {} polygons; using the first", polygons.len());
            }
            polygons.first()
                .ok_or_else(|| CropError::GeoJsonError("MultiPolygon has no polygons".to_string()))?
        },
        other => return Err(CropError::GeoJsonError(format!("unsupported geometry type '{}'", other))),
    };

    let rings = polygon.as_array()
        .ok_or_else(|| CropError::GeoJsonError("polygon coordinates must be an array".to_string()))?;
    if rings.len() > 1 {
        debug!("Ignoring {} interior rings", rings.len() - 1);
    }
    rings.first()
        .ok_or_else(|| CropError::GeoJsonError("polygon has no rings".to_string()))
}

fn parse_ring(ring: &Value) -> CropResult<Vec<Point>> {
    let positions = ring.as_array()
        .ok_or_else(|| CropError::GeoJsonError("ring must be an array of positions".to_string()))?;

    positions.iter().enumerate().map(|(i, position)| {
        let x = position.get(0).and_then(|v| v.as_f64());
        let y = position.get(1).and_then(|v| v.as_f64());
        match (x, y) {
            (Some(x), Some(y)) => {
                let point = Point::new(x, y);
                if !point.is_finite() {
                    return Err(CropError::GeoJsonError(format!("position {} is not finite: {}", i, point)));
                }
                Ok(point)
            },
            _ => Err(CropError::GeoJsonError(format!("position {} is not a coordinate pair", i))),
        }
    }).collect()
}

fn geo_type(value: &Value) -> CropResult<&str> {
    value.get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| CropError::GeoJsonError("object without 'type'".to_string()))
}
