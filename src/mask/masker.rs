//! Boundary masking
//!
//! Maps boundary coordinates into the pixel frame of a cropped image,
//! rasterizes them into a mask and cuts the image out along it. The cutout
//! is hard: every pixel is either fully opaque or fully transparent.

use image::{Rgba, RgbaImage};
use log::{debug, info};

use super::options::{MaskChannels, MaskOptions};
use super::rasterizer::rasterize_polygon;
use crate::coordinate::{BoundingBox, GeoPixelTransform, Point};
use crate::errors::{CropError, CropResult};

/// Map boundary coordinates to pixel positions in an image covering `bbox`
///
/// Vertex order is preserved and each coordinate is rounded to the nearest
/// pixel independently.
pub fn coordinates_to_pixels(
    coordinates: &[Point],
    bbox: &BoundingBox,
    dims: (u32, u32),
) -> CropResult<Vec<(i64, i64)>> {
    let transform = GeoPixelTransform::new(*bbox, dims)?;
    Ok(coordinates.iter().map(|c| transform.to_pixel_rounded(c)).collect())
}

/// Mask an image so that only pixels inside the boundary remain
///
/// Uses the default [`MaskOptions`]: even-odd fill, outline pixels treated
/// as outside, colour channels zeroed along with alpha.
pub fn mask_outside_boundary(
    image: &RgbaImage,
    boundary: &[Point],
    image_bbox: &BoundingBox,
) -> CropResult<RgbaImage> {
    mask_outside_boundary_with(image, boundary, image_bbox, &MaskOptions::default())
}

/// Mask an image to a boundary with explicit options
///
/// # Arguments
/// * `image` - Image to mask, typically the output of the cropper
/// * `boundary` - Boundary ring coordinates
/// * `image_bbox` - Geographic bounding box of `image`
/// * `options` - Fill rule, outline handling and affected channels
///
/// # Returns
/// A new image whose alpha is 255 inside the boundary and 0 outside
pub fn mask_outside_boundary_with(
    image: &RgbaImage,
    boundary: &[Point],
    image_bbox: &BoundingBox,
    options: &MaskOptions,
) -> CropResult<RgbaImage> {
    if boundary.is_empty() {
        return Err(CropError::InvalidInput("boundary has no coordinates".to_string()));
    }

    let dims = image.dimensions();
    let polygon = coordinates_to_pixels(boundary, image_bbox, dims)?;
    debug!("Boundary polygon has {} vertices in a {}x{} frame", polygon.len(), dims.0, dims.1);

    let mask = rasterize_polygon(&polygon, dims, options);

    let mut inside = 0usize;
    let masked = RgbaImage::from_fn(dims.0, dims.1, |x, y| {
        let m = mask.get_pixel(x, y)[0];
        inside += m as usize;
        let Rgba([r, g, b, _]) = *image.get_pixel(x, y);
        match options.channels {
            MaskChannels::All => Rgba([r * m, g * m, b * m, m * 255]),
            MaskChannels::AlphaOnly => Rgba([r, g, b, m * 255]),
        }
    });

    info!("Masked to boundary: {} of {} pixels inside", inside, dims.0 as usize * dims.1 as usize);
    Ok(masked)
}
