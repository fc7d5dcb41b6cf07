//! Full pipeline command
//!
//! Loads the tile catalog and boundary, runs the pipeline and writes the
//! composite, cropped and masked images to the output directory.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::TileCrop;
use crate::commands::command_traits::Command;
use crate::commands::{mask_options_from_args, path_arg};
use crate::errors::CropResult;

/// Command running the whole tile-to-mask pipeline
pub struct RunCommand {
    /// Path to the TOML tile catalog
    catalog: PathBuf,
    /// Path to the GeoJSON boundary
    boundary: PathBuf,
    /// Directory for output images
    output_dir: PathBuf,
    /// Configured pipeline
    pipeline: TileCrop,
}

impl RunCommand {
    /// Create a new run command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new RunCommand instance or an error
    pub fn new(args: &ArgMatches) -> CropResult<Self> {
        let catalog = path_arg(args, "catalog")?;
        let boundary = path_arg(args, "boundary")?;
        let output_dir = path_arg(args, "output")?;
        let options = mask_options_from_args(args)?;
        let strict = args.get_flag("strict");

        info!("Catalog: {}, boundary: {}, output: {}",
              catalog.display(), boundary.display(), output_dir.display());
        info!("Mask options: {:?}, strict: {}", options, strict);

        Ok(RunCommand {
            catalog,
            boundary,
            output_dir,
            pipeline: TileCrop::new(options, strict),
        })
    }
}

impl Command for RunCommand {
    fn execute(&self) -> CropResult<()> {
        let output = self.pipeline.run(&self.catalog, &self.boundary, &self.output_dir)?;

        println!("composite image bounding box: {}", output.composite_bbox);
        println!("composite image dimensions: {}x{}", output.composite_dims.0, output.composite_dims.1);
        println!("cropped to boundary size: {}x{}", output.cropped.width(), output.cropped.height());
        println!("cropped to boundary bbox: \n\t{}\n\t{}", output.cropped_bbox.min, output.cropped_bbox.max);

        Ok(())
    }
}
