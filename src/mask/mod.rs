//! Boundary rasterization and masking
//!
//! This module turns a boundary ring into a binary pixel mask and applies it
//! to the alpha channel (and optionally the colour channels) of an image.

mod options;
mod rasterizer;
mod masker;

pub use options::{FillRule, MaskChannels, MaskOptions, OutlineMode};
pub use rasterizer::rasterize_polygon;
pub use masker::{coordinates_to_pixels, mask_outside_boundary, mask_outside_boundary_with};
