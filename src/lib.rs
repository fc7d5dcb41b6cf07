pub mod errors;
pub mod coordinate;
pub mod tile;
pub mod crop;
pub mod mask;
pub mod io;
pub mod utils;
pub mod commands;
pub mod api;
#[cfg(test)]
mod tests;

pub use crate::api::{PipelineOutput, PipelineSummary, TileCrop};

pub use errors::{CropError, CropResult};
pub use coordinate::{BoundingBox, GeoPixelTransform, Point};
pub use tile::{aggregate_tile_bbox_and_dims, bbox_of_coordinates, composite, Tile};
pub use crop::{compute_crop, crop_to_boundary, PixelRect};
pub use mask::{coordinates_to_pixels, mask_outside_boundary, MaskOptions};
