use std::fs;
use std::path::Path;
use image::RgbaImage;
use log::{info, warn};

use crate::coordinate::{BoundingBox, Point};
use crate::crop::{compute_crop, crop_to_boundary, PixelRect};
use crate::errors::CropResult;
use crate::io::{load_catalog, read_boundary};
use crate::mask::{mask_outside_boundary_with, MaskOptions};
use crate::tile::{aggregate_tile_bbox_and_dims, bbox_of_coordinates, composite, verify_uniform_resolution, Tile};
use crate::utils::image_utils::save_png;

/// File name of the composite image written by [`TileCrop::run`]
pub const COMPOSITE_FILE: &str = "composite.png";
/// File name of the cropped image written by [`TileCrop::run`]
pub const CROPPED_FILE: &str = "cropped_to_boundary.png";
/// File name of the masked image written by [`TileCrop::run`]
pub const MASKED_FILE: &str = "masked_to_boundary.png";

/// Everything produced by one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Union bounding box of the tiles
    pub composite_bbox: BoundingBox,
    /// Composite size in pixels
    pub composite_dims: (u32, u32),
    /// All tiles placed on one canvas
    pub composite: RgbaImage,
    /// Composite cut down to the boundary's bounding box
    pub cropped: RgbaImage,
    /// Geographic bounding box of `cropped`
    pub cropped_bbox: BoundingBox,
    /// `cropped` with everything outside the boundary made transparent
    pub masked: RgbaImage,
}

/// Geometry of a pipeline run, computed without touching pixels
#[derive(Debug, Clone, Copy)]
pub struct PipelineSummary {
    pub composite_bbox: BoundingBox,
    pub composite_dims: (u32, u32),
    pub boundary_bbox: BoundingBox,
    pub crop_rect: PixelRect,
    pub cropped_bbox: BoundingBox,
}

/// Main interface to the tile cropping pipeline
///
/// Runs aggregate, composite, crop and mask in sequence. Every stage is a
/// pure function of its inputs, so one instance can be reused freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileCrop {
    options: MaskOptions,
    strict: bool,
}

impl TileCrop {
    /// Create a new pipeline
    ///
    /// # Arguments
    /// * `options` - How the boundary mask is rasterized and applied
    /// * `strict` - Reject tile sets with mixed pixel or geographic sizes
    pub fn new(options: MaskOptions, strict: bool) -> Self {
        TileCrop { options, strict }
    }

    /// Run the full pipeline on in-memory tiles and a boundary ring
    pub fn process(&self, tiles: &[Tile], boundary: &[Point]) -> CropResult<PipelineOutput> {
        self.check_tiles(tiles)?;

        // 1. Composite bounding box and dimensions
        let (composite_bbox, composite_dims) = aggregate_tile_bbox_and_dims(tiles)?;

        // 2. Composite image
        let composite = composite(tiles, &composite_bbox, composite_dims)?;

        // 3. Crop to the boundary's bounding box
        let (cropped, cropped_bbox) = crop_to_boundary(boundary, &composite, &composite_bbox)?;

        // 4. Remove pixels outside the boundary
        let masked = mask_outside_boundary_with(&cropped, boundary, &cropped_bbox, &self.options)?;

        Ok(PipelineOutput {
            composite_bbox,
            composite_dims,
            composite,
            cropped,
            cropped_bbox,
            masked,
        })
    }

    /// Compute bounding boxes and the crop rectangle without building images
    pub fn summarize(&self, tiles: &[Tile], boundary: &[Point]) -> CropResult<PipelineSummary> {
        self.check_tiles(tiles)?;

        let (composite_bbox, composite_dims) = aggregate_tile_bbox_and_dims(tiles)?;
        let boundary_bbox = bbox_of_coordinates(boundary)?;
        let (crop_rect, cropped_bbox) = compute_crop(composite_dims, &composite_bbox, &boundary_bbox)?;

        Ok(PipelineSummary {
            composite_bbox,
            composite_dims,
            boundary_bbox,
            crop_rect,
            cropped_bbox,
        })
    }

    /// Load a catalog and boundary, run the pipeline and write all images
    ///
    /// # Arguments
    /// * `catalog_path` - TOML tile catalog
    /// * `boundary_path` - GeoJSON boundary
    /// * `output_dir` - Directory receiving the composite, cropped and masked PNGs
    pub fn run(&self, catalog_path: &Path, boundary_path: &Path, output_dir: &Path) -> CropResult<PipelineOutput> {
        let tiles = load_catalog(catalog_path)?;
        let boundary = read_boundary(boundary_path)?;

        let output = self.process(&tiles, &boundary)?;

        fs::create_dir_all(output_dir)?;
        save_png(&output.composite, &output_dir.join(COMPOSITE_FILE))?;
        save_png(&output.cropped, &output_dir.join(CROPPED_FILE))?;
        save_png(&output.masked, &output_dir.join(MASKED_FILE))?;

        info!("Pipeline finished, outputs in {}", output_dir.display());
        Ok(output)
    }

    fn check_tiles(&self, tiles: &[Tile]) -> CropResult<()> {
        if tiles.is_empty() {
            // Reported by the aggregator
            return Ok(());
        }
        match verify_uniform_resolution(tiles) {
            Ok(()) => Ok(()),
            Err(e) if self.strict => Err(e),
            Err(e) => {
                warn!("Tile set is not uniform, composite may be distorted: {}", e);
                Ok(())
            }
        }
    }
}
