//! Tests for catalog and GeoJSON loading

extern crate std;

use std::fs;
use std::path::PathBuf;
use image::{Rgba, RgbaImage};
use crate::coordinate::{BoundingBox, Point};
use crate::errors::CropError;
use crate::io::{load_catalog, parse_boundary, parse_catalog};
use super::test_utils::scratch_dir;

const CATALOG: &str = r#"
[[tile]]
image = "X21Y09.png"
bbox = [30.0, -25.0, 40.0, -15.0]

[[tile]]
image = "tiles/X21Y10.png"
bbox = "30,-35,40,-25"

[[tile]]
image = "X22Y09.png"
bbox = [40, -25, 50, -15]
"#;

#[test]
fn test_parse_catalog() {
    let entries = parse_catalog(CATALOG).unwrap();
    std::assert_eq!(entries.len(), 3);

    std::assert_eq!(entries[0].image, PathBuf::from("X21Y09.png"));
    std::assert_eq!(entries[0].bbox, BoundingBox::from_coords(30.0, -25.0, 40.0, -15.0));
    std::assert_eq!(entries[1].image, PathBuf::from("tiles/X21Y10.png"));
    std::assert_eq!(entries[1].bbox, BoundingBox::from_coords(30.0, -35.0, 40.0, -25.0));
    std::assert_eq!(entries[2].bbox, BoundingBox::from_coords(40.0, -25.0, 50.0, -15.0));
}

#[test]
fn test_parse_catalog_errors() {
    let no_tiles = "title = 'empty'";
    std::assert!(matches!(parse_catalog(no_tiles), Err(CropError::CatalogError(_))));

    let missing_image = "[[tile]]\nbbox = [0, 0, 1, 1]\n";
    match parse_catalog(missing_image) {
        Err(CropError::CatalogError(msg)) => std::assert!(msg.contains("image")),
        other => panic!("expected CatalogError, got {:?}", other),
    }

    let short_bbox = "[[tile]]\nimage = 'a.png'\nbbox = [0, 0, 1]\n";
    std::assert!(matches!(parse_catalog(short_bbox), Err(CropError::CatalogError(_))));

    let text_in_bbox = "[[tile]]\nimage = 'a.png'\nbbox = [0, 0, 'one', 1]\n";
    std::assert!(matches!(parse_catalog(text_in_bbox), Err(CropError::CatalogError(_))));

    std::assert!(matches!(parse_catalog("[[tile"), Err(CropError::CatalogError(_))));

    let infinite_bbox = "[[tile]]\nimage = 'a.png'\nbbox = [0, 0, inf, 1]\n";
    match parse_catalog(infinite_bbox) {
        Err(CropError::CatalogError(msg)) => std::assert!(msg.contains("non-finite")),
        other => panic!("expected CatalogError, got {:?}", other),
    }

    let nan_bbox = "[[tile]]\nimage = 'a.png'\nbbox = [nan, 0, 1, 1]\n";
    std::assert!(matches!(parse_catalog(nan_bbox), Err(CropError::CatalogError(_))));
}

#[test]
fn test_load_catalog_resolves_relative_paths() {
    let dir = scratch_dir("catalog");
    fs::create_dir_all(dir.join("tiles")).unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255])).save(dir.join("a.png")).unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255])).save(dir.join("tiles/b.png")).unwrap();

    let catalog = "[[tile]]\nimage = 'a.png'\nbbox = [0, 0, 1, 1]\n\n\
                   [[tile]]\nimage = 'tiles/b.png'\nbbox = [1, 0, 2, 1]\n";
    let catalog_path = dir.join("catalog.toml");
    fs::write(&catalog_path, catalog).unwrap();

    let tiles = load_catalog(&catalog_path).unwrap();
    std::assert_eq!(tiles.len(), 2);
    std::assert_eq!(tiles[0].dimensions(), (4, 4));
    std::assert_eq!(*tiles[1].image.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    std::assert_eq!(tiles[1].bbox, BoundingBox::from_coords(1.0, 0.0, 2.0, 1.0));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_catalog_missing_image() {
    let dir = scratch_dir("catalog_missing");
    let catalog_path = dir.join("catalog.toml");
    fs::write(&catalog_path, "[[tile]]\nimage = 'nope.png'\nbbox = [0, 0, 1, 1]\n").unwrap();

    std::assert!(load_catalog(&catalog_path).is_err());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_parse_feature_collection() {
    let geojson = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"name": "park"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [
                    [[31.0, -24.0], [35.5, -24.0], [35.5, -30.0], [31.0, -24.0]],
                    [[32.0, -25.0], [33.0, -25.0], [33.0, -26.0], [32.0, -25.0]]
                ]
            }
        }]
    }"#;

    let boundary = parse_boundary(geojson).unwrap();
    std::assert_eq!(boundary, vec![
        Point::new(31.0, -24.0),
        Point::new(35.5, -24.0),
        Point::new(35.5, -30.0),
        Point::new(31.0, -24.0),
    ]);
}

#[test]
fn test_parse_multipolygon_takes_first_outer_ring() {
    let geojson = r#"{
        "type": "MultiPolygon",
        "coordinates": [
            [[[0, 0], [1, 0], [1, 1]]],
            [[[5, 5], [6, 5], [6, 6]]]
        ]
    }"#;

    let boundary = parse_boundary(geojson).unwrap();
    std::assert_eq!(boundary, vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]);
}

#[test]
fn test_parse_boundary_errors() {
    let point = r#"{"type": "Point", "coordinates": [1, 2]}"#;
    std::assert!(matches!(parse_boundary(point), Err(CropError::GeoJsonError(_))));

    let empty = r#"{"type": "FeatureCollection", "features": []}"#;
    std::assert!(matches!(parse_boundary(empty), Err(CropError::GeoJsonError(_))));

    let bad_position = r#"{"type": "Polygon", "coordinates": [[[1, 2], ["x", 3]]]}"#;
    std::assert!(matches!(parse_boundary(bad_position), Err(CropError::GeoJsonError(_))));

    std::assert!(matches!(parse_boundary("{not json"), Err(CropError::GeoJsonError(_))));
}
