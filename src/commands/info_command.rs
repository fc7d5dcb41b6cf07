//! Pipeline geometry report
//!
//! Prints the composite and crop geometry for a catalog and boundary
//! without building the composite or writing any image.

use std::path::PathBuf;
use clap::ArgMatches;

use crate::api::TileCrop;
use crate::commands::command_traits::Command;
use crate::commands::path_arg;
use crate::errors::CropResult;
use crate::io::{load_catalog, read_boundary};

/// Command printing bounding boxes, dimensions and the crop rectangle
pub struct InfoCommand {
    catalog: PathBuf,
    boundary: PathBuf,
    strict: bool,
}

impl InfoCommand {
    pub fn new(args: &ArgMatches) -> CropResult<Self> {
        Ok(InfoCommand {
            catalog: path_arg(args, "catalog")?,
            boundary: path_arg(args, "boundary")?,
            strict: args.get_flag("strict"),
        })
    }
}

impl Command for InfoCommand {
    fn execute(&self) -> CropResult<()> {
        let tiles = load_catalog(&self.catalog)?;
        let boundary = read_boundary(&self.boundary)?;

        let pipeline = TileCrop::new(Default::default(), self.strict);
        let summary = pipeline.summarize(&tiles, &boundary)?;

        println!("Tiles: {}", tiles.len());
        println!("Composite bounding box: {}", summary.composite_bbox);
        println!("Composite dimensions: {}x{}", summary.composite_dims.0, summary.composite_dims.1);
        println!("Boundary coordinates: {}", boundary.len());
        println!("Boundary bounding box: {}", summary.boundary_bbox);
        println!("Crop rectangle: {} ({}x{} pixels)",
                 summary.crop_rect, summary.crop_rect.width(), summary.crop_rect.height());
        println!("Cropped bounding box: {}", summary.cropped_bbox);

        Ok(())
    }
}
