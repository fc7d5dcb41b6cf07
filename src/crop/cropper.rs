//! Cropping a raster to the bounding box of a boundary
//!
//! The pixel rectangle always rounds outwards: the min edges are floored and
//! the max edges are ceiled, so the crop is the smallest pixel-aligned
//! rectangle that still covers the whole target box. The geographic box of
//! the crop is recomputed from that rectangle and is therefore never smaller
//! than the target.

use image::{imageops, Rgba, RgbaImage};
use log::{debug, info, warn};

use super::region::PixelRect;
use crate::coordinate::{BoundingBox, GeoPixelTransform, Point};
use crate::errors::{CropError, CropResult};
use crate::tile::bbox_of_coordinates;

/// Calculate the pixel rectangle and geographic box for cropping to a target
///
/// # Arguments
/// * `image_dims` - Size of the uncropped image as (width, height)
/// * `uncropped_bbox` - Geographic bounding box of the uncropped image
/// * `target_bbox` - Geographic box the crop must cover
///
/// # Returns
/// The pixel rectangle to cut out and the geographic box it covers
pub fn compute_crop(
    image_dims: (u32, u32),
    uncropped_bbox: &BoundingBox,
    target_bbox: &BoundingBox,
) -> CropResult<(PixelRect, BoundingBox)> {
    if image_dims.0 == 0 || image_dims.1 == 0 {
        return Err(CropError::InvalidInput(format!(
            "cannot crop a {}x{} image", image_dims.0, image_dims.1)));
    }
    let transform = GeoPixelTransform::new(*uncropped_bbox, image_dims)?;

    let (min_x, min_y) = transform.to_pixel(&Point::new(target_bbox.min.x, target_bbox.max.y));
    let (max_x, max_y) = transform.to_pixel(&Point::new(target_bbox.max.x, target_bbox.min.y));

    let rect = PixelRect::new(
        min_x.floor() as i64,
        min_y.floor() as i64,
        max_x.ceil() as i64,
        max_y.ceil() as i64,
    );

    let cropped_bbox = BoundingBox::new(
        transform.to_geo(rect.x0 as f64, rect.y1 as f64),
        transform.to_geo(rect.x1 as f64, rect.y0 as f64),
    );

    debug!("Crop of [{}] within [{}]: pixels {}, bbox [{}]",
           target_bbox, uncropped_bbox, rect, cropped_bbox);
    Ok((rect, cropped_bbox))
}

/// Crop an image to the bounding box of a boundary
///
/// # Arguments
/// * `boundary` - Boundary ring coordinates
/// * `image` - Uncropped image
/// * `image_bbox` - Geographic bounding box of `image`
///
/// # Returns
/// A newly allocated cropped image and its geographic bounding box
pub fn crop_to_boundary(
    boundary: &[Point],
    image: &RgbaImage,
    image_bbox: &BoundingBox,
) -> CropResult<(RgbaImage, BoundingBox)> {
    let boundary_bbox = bbox_of_coordinates(boundary)?;
    let (rect, cropped_bbox) = compute_crop(image.dimensions(), image_bbox, &boundary_bbox)?;

    if rect.is_empty() {
        return Err(CropError::InvalidInput(format!(
            "boundary [{}] maps to an empty pixel rectangle {}", boundary_bbox, rect)));
    }
    if !rect.intersects_image(image.dimensions()) {
        warn!("Boundary [{}] lies outside the image [{}]; cropped image will be transparent",
              boundary_bbox, image_bbox);
    }

    let cropped = crop_image(image, &rect)?;
    info!("Cropped to boundary: {}x{} pixels, bbox [{}]",
          cropped.width(), cropped.height(), cropped_bbox);

    Ok((cropped, cropped_bbox))
}

/// Copy a pixel rectangle out of an image
///
/// Parts of the rectangle outside the source come out transparent black.
/// A rectangle whose size or offset does not fit the image API is rejected
/// with [`CropError::InvalidInput`].
pub fn crop_image(image: &RgbaImage, rect: &PixelRect) -> CropResult<RgbaImage> {
    let unrepresentable = || CropError::InvalidInput(format!(
        "crop rectangle {} is too large for an image", rect));

    let width = u32::try_from(rect.x1.checked_sub(rect.x0).ok_or_else(unrepresentable)?)
        .map_err(|_| unrepresentable())?;
    let height = u32::try_from(rect.y1.checked_sub(rect.y0).ok_or_else(unrepresentable)?)
        .map_err(|_| unrepresentable())?;
    let offset_x = rect.x0.checked_neg().ok_or_else(unrepresentable)?;
    let offset_y = rect.y0.checked_neg().ok_or_else(unrepresentable)?;

    let mut cropped = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    imageops::replace(&mut cropped, image, offset_x, offset_y);
    Ok(cropped)
}
