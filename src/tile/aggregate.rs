//! Bounding box aggregation over tiles and boundary coordinates
//!
//! The composite canvas size is derived from the first tile alone: every
//! tile is assumed to share its pixel size and geographic extent. Nothing in
//! [`aggregate_tile_bbox_and_dims`] checks that assumption; a mixed tile set
//! yields a distorted composite rather than an error. Callers that want the
//! check run [`verify_uniform_resolution`] first.

use log::{debug, info};

use super::types::Tile;
use crate::coordinate::{BoundingBox, Point};
use crate::errors::{CropError, CropResult};

/// Calculate the union bounding box of all tiles and the composite image size
///
/// # Arguments
/// * `tiles` - Non-empty, ordered tile set
///
/// # Returns
/// The aggregate bounding box and the composite dimensions in pixels
pub fn aggregate_tile_bbox_and_dims(tiles: &[Tile]) -> CropResult<(BoundingBox, (u32, u32))> {
    let first = tiles.first()
        .ok_or_else(|| CropError::InvalidInput("tile set is empty".to_string()))?;

    for (i, tile) in tiles.iter().enumerate() {
        check_tile_extent(i, tile)?;
    }

    let mut bbox = first.bbox;
    for tile in &tiles[1..] {
        bbox.expand(tile.bbox.min);
        bbox.expand(tile.bbox.max);
    }

    let (tile_width, tile_height) = first.dimensions();
    let columns = (bbox.width() / first.bbox.width()).round();
    let rows = (bbox.height() / first.bbox.height()).round();
    let width = canvas_extent("width", columns, tile_width)?;
    let height = canvas_extent("height", rows, tile_height)?;

    info!("Composite bounding box: {}", bbox);
    debug!("Composite grid: {} columns x {} rows of {}x{} pixel tiles",
           columns, rows, tile_width, tile_height);
    info!("Composite dimensions: {}x{}", width, height);

    Ok((bbox, (width, height)))
}

/// Pixel size of the canvas along one axis, `count` tiles of `tile_pixels` each
fn canvas_extent(axis: &str, count: f64, tile_pixels: u32) -> CropResult<u32> {
    if !count.is_finite() || count < 0.0 || count > u32::MAX as f64 {
        return Err(CropError::InvalidInput(format!(
            "composite {} of {} tiles is not representable", axis, count)));
    }
    (count as u32).checked_mul(tile_pixels).ok_or_else(|| CropError::InvalidInput(format!(
        "composite {} of {} x {} pixels overflows u32", axis, count, tile_pixels)))
}

/// Calculate the bounding box of a sequence of boundary coordinates
pub fn bbox_of_coordinates(coordinates: &[Point]) -> CropResult<BoundingBox> {
    let (first, rest) = coordinates.split_first()
        .ok_or_else(|| CropError::InvalidInput("boundary has no coordinates".to_string()))?;

    let mut bbox = BoundingBox::from_point(*first);
    for point in rest {
        bbox.expand(*point);
    }

    debug!("Boundary bounding box over {} coordinates: {}", coordinates.len(), bbox);
    Ok(bbox)
}

/// Check that every tile matches the first tile's pixel and geographic size
///
/// Geographic sizes are compared with a relative tolerance, since tile
/// footprints usually come from decimal text.
pub fn verify_uniform_resolution(tiles: &[Tile]) -> CropResult<()> {
    let Some(first) = tiles.first() else {
        return Err(CropError::InvalidInput("tile set is empty".to_string()));
    };

    let expected_dims = first.dimensions();
    for (i, tile) in tiles.iter().enumerate().skip(1) {
        if tile.dimensions() != expected_dims {
            return Err(CropError::InvalidInput(format!(
                "tile {} is {}x{} pixels, expected {}x{} like tile 0",
                i, tile.image.width(), tile.image.height(), expected_dims.0, expected_dims.1)));
        }
        if !nearly_equal(tile.bbox.width(), first.bbox.width())
            || !nearly_equal(tile.bbox.height(), first.bbox.height()) {
            return Err(CropError::InvalidInput(format!(
                "tile {} covers {}x{} geographic units, expected {}x{} like tile 0",
                i, tile.bbox.width(), tile.bbox.height(),
                first.bbox.width(), first.bbox.height())));
        }
    }

    Ok(())
}

fn check_tile_extent(index: usize, tile: &Tile) -> CropResult<()> {
    if tile.bbox.width() == 0.0 {
        return Err(CropError::InvalidInput(format!(
            "tile {} bounding box [{}] has zero width", index, tile.bbox)));
    }
    if tile.bbox.height() == 0.0 {
        return Err(CropError::InvalidInput(format!(
            "tile {} bounding box [{}] has zero height", index, tile.bbox)));
    }
    Ok(())
}

fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
}
