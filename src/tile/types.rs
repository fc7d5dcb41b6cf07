//! Tile data structure

use image::RgbaImage;
use crate::coordinate::BoundingBox;

/// A geo-referenced raster: an RGBA image together with its footprint
#[derive(Debug, Clone)]
pub struct Tile {
    /// Geographic footprint of the tile
    pub bbox: BoundingBox,
    /// Decoded pixel content
    pub image: RgbaImage,
}

impl Tile {
    /// Create a new tile
    pub fn new(bbox: BoundingBox, image: RgbaImage) -> Self {
        Tile { bbox, image }
    }

    /// Pixel dimensions of the tile image as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
