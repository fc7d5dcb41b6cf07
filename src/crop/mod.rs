//! Cropping composites to a boundary
//!
//! This module converts a boundary's bounding box into a pixel rectangle on
//! the uncropped image and cuts that rectangle out.

mod region;
mod cropper;

// Public exports
pub use region::PixelRect;
pub use cropper::{compute_crop, crop_image, crop_to_boundary};
