//! Image output helpers

use std::path::{Path, PathBuf};
use image::RgbaImage;
use log::info;

use crate::errors::{CropError, CropResult};

/// Ensure a file path has PNG extension for transparency support
///
/// # Arguments
/// * `file_path` - The original file path
///
/// # Returns
/// A path with .png extension
pub fn ensure_png_extension(file_path: &Path) -> PathBuf {
    if let Some(ext) = file_path.extension() {
        if ext.to_string_lossy().to_lowercase() == "png" {
            return file_path.to_path_buf();
        }
    }
    file_path.with_extension("png")
}

/// Save an RGBA image as PNG
///
/// The extension is forced to `.png` so that transparency survives.
///
/// # Returns
/// The path the image was written to
pub fn save_png(image: &RgbaImage, output_path: &Path) -> CropResult<PathBuf> {
    let final_path = ensure_png_extension(output_path);
    if final_path != output_path {
        info!("Changed output extension to PNG for transparency support: {}", final_path.display());
    }

    image.save(&final_path)
        .map_err(|e| CropError::GenericError(format!(
            "Failed to save image {}: {}", final_path.display(), e)))?;

    info!("Wrote {}x{} image to {}", image.width(), image.height(), final_path.display());
    Ok(final_path)
}
