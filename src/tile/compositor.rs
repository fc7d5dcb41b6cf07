//! Composite image assembly
//!
//! Tiles are pasted into a transparent canvas at the pixel offset implied by
//! their geographic position. Later tiles overwrite earlier ones where they
//! overlap; nothing is blended.

use image::{imageops, Rgba, RgbaImage};
use log::{debug, info, warn};

use super::types::Tile;
use crate::coordinate::{BoundingBox, GeoPixelTransform, Point};
use crate::errors::CropResult;

/// Create the composite image for a tile set
///
/// # Arguments
/// * `tiles` - Tiles to place, in paint order
/// * `bbox` - Geographic bounding box of the composite
/// * `dims` - Composite size in pixels as (width, height)
///
/// # Returns
/// A new RGBA image, transparent black wherever no tile was placed
pub fn composite(tiles: &[Tile], bbox: &BoundingBox, dims: (u32, u32)) -> CropResult<RgbaImage> {
    let transform = GeoPixelTransform::new(*bbox, dims)?;
    let (width, height) = dims;

    info!("Creating {}x{} composite from {} tiles", width, height, tiles.len());
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for (i, tile) in tiles.iter().enumerate() {
        let (offset_x, offset_y) = tile_offset(&transform, tile);
        debug!("Placing tile {} ({}) at pixel offset ({}, {})", i, tile.bbox, offset_x, offset_y);

        let (tile_width, tile_height) = tile.dimensions();
        if offset_x >= width as i64 || offset_y >= height as i64
            || offset_x.saturating_add(tile_width as i64) <= 0
            || offset_y.saturating_add(tile_height as i64) <= 0 {
            warn!("Tile {} lies entirely outside the composite canvas", i);
        }

        // Clips to the canvas on every side
        imageops::replace(&mut canvas, &tile.image, offset_x, offset_y);
    }

    Ok(canvas)
}

/// Pixel offset of a tile's top-left corner within the composite
pub fn tile_offset(transform: &GeoPixelTransform, tile: &Tile) -> (i64, i64) {
    transform.to_pixel_rounded(&Point::new(tile.bbox.min.x, tile.bbox.max.y))
}
