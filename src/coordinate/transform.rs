//! Linear mapping between geographic coordinates and pixel positions
//!
//! A raster of `width x height` pixels covering a bounding box maps the box's
//! top-left corner `(min.x, max.y)` to pixel `(0, 0)` and its bottom-right
//! corner `(max.x, min.y)` to `(width, height)`. Geographic y grows upwards
//! while pixel rows grow downwards, so the y axis is inverted.
//!
//! Compositor, cropper and masker all go through this type so that a
//! coordinate lands on the same pixel in every stage.

use super::bbox::BoundingBox;
use super::point::Point;
use crate::errors::{CropError, CropResult};

/// Transform between a bounding box and the pixel grid of a raster covering it
#[derive(Debug, Clone, Copy)]
pub struct GeoPixelTransform {
    bbox: BoundingBox,
    width: f64,
    height: f64,
}

impl GeoPixelTransform {
    /// Create a transform for a raster of `dims` pixels covering `bbox`
    ///
    /// Fails with `InvalidInput` when the box has zero (or non-finite) width
    /// or height, since every mapping divides by those extents.
    pub fn new(bbox: BoundingBox, dims: (u32, u32)) -> CropResult<Self> {
        let geo_width = bbox.width();
        let geo_height = bbox.height();

        if geo_width == 0.0 || !geo_width.is_finite() {
            return Err(CropError::InvalidInput(format!(
                "bounding box [{}] has zero or non-finite width", bbox)));
        }
        if geo_height == 0.0 || !geo_height.is_finite() {
            return Err(CropError::InvalidInput(format!(
                "bounding box [{}] has zero or non-finite height", bbox)));
        }

        Ok(GeoPixelTransform {
            bbox,
            width: dims.0 as f64,
            height: dims.1 as f64,
        })
    }

    /// Map a geographic point to a fractional pixel position
    pub fn to_pixel(&self, point: &Point) -> (f64, f64) {
        let px = (point.x - self.bbox.min.x) / self.bbox.width() * self.width;
        let py = (self.bbox.max.y - point.y) / self.bbox.height() * self.height;
        (px, py)
    }

    /// Map a geographic point to the nearest pixel (half away from zero)
    pub fn to_pixel_rounded(&self, point: &Point) -> (i64, i64) {
        let (px, py) = self.to_pixel(point);
        (px.round() as i64, py.round() as i64)
    }

    /// Map a pixel position back to geographic coordinates
    pub fn to_geo(&self, px: f64, py: f64) -> Point {
        Point::new(
            self.bbox.min.x + px / self.width * self.bbox.width(),
            self.bbox.max.y - py / self.height * self.bbox.height(),
        )
    }
}
