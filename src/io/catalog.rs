//! Tile catalog loading
//!
//! A catalog is a TOML file with one `[[tile]]` table per tile:
//!
//! ```toml
//! [[tile]]
//! image = "X21Y09.png"
//! bbox = [30.0, -25.0, 40.0, -15.0]
//!
//! [[tile]]
//! image = "X21Y10.png"
//! bbox = "30,-35,40,-25"
//! ```
//!
//! `bbox` is `min_x, min_y, max_x, max_y`, either as an array of numbers or
//! as a comma-separated string. Relative image paths are resolved against
//! the directory holding the catalog.

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::coordinate::BoundingBox;
use crate::errors::{CropError, CropResult};
use crate::tile::Tile;
use crate::utils::progress::ProgressTracker;

/// One catalog entry before its image is decoded
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Image path as written in the catalog
    pub image: PathBuf,
    /// Geographic footprint of the tile
    pub bbox: BoundingBox,
}

/// Parse catalog entries from a TOML string
pub fn parse_catalog(content: &str) -> CropResult<Vec<CatalogEntry>> {
    let toml_value: toml::Value = content.parse()
        .map_err(|e| CropError::CatalogError(format!("Failed to parse TOML: {}", e)))?;

    let tiles = toml_value.get("tile")
        .and_then(|v| v.as_array())
        .ok_or_else(|| CropError::CatalogError("catalog has no [[tile]] entries".to_string()))?;

    let mut entries = Vec::with_capacity(tiles.len());
    for (i, tile) in tiles.iter().enumerate() {
        let image = tile.get("image")
            .and_then(|v| v.as_str())
            .ok_or_else(|| CropError::CatalogError(format!("tile {} is missing 'image'", i)))?;
        let bbox = tile.get("bbox")
            .ok_or_else(|| CropError::CatalogError(format!("tile {} is missing 'bbox'", i)))
            .and_then(|v| parse_bbox_value(v)
                .map_err(|e| CropError::CatalogError(format!("tile {}: {}", i, e))))?;

        debug!("Catalog entry {}: {} [{}]", i, image, bbox);
        entries.push(CatalogEntry { image: PathBuf::from(image), bbox });
    }

    if entries.is_empty() {
        return Err(CropError::CatalogError("catalog has no [[tile]] entries".to_string()));
    }

    Ok(entries)
}

/// Load a catalog file and decode every tile image to RGBA
///
/// # Arguments
/// * `path` - Path to the TOML catalog
///
/// # Returns
/// The tiles in catalog order
pub fn load_catalog<P: AsRef<Path>>(path: P) -> CropResult<Vec<Tile>> {
    let path = path.as_ref();
    info!("Loading tile catalog {}", path.display());

    let content = fs::read_to_string(path)?;
    let entries = parse_catalog(&content)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let progress = ProgressTracker::new(entries.len() as u64, "Loading tiles");
    let mut tiles = Vec::with_capacity(entries.len());
    for entry in entries {
        let image_path = base_dir.join(&entry.image);
        progress.set_message(&image_path.to_string_lossy());

        let image = image::open(&image_path)?.to_rgba8();
        debug!("Loaded {} ({}x{})", image_path.display(), image.width(), image.height());

        tiles.push(Tile::new(entry.bbox, image));
        progress.increment(1);
    }
    progress.finish();

    info!("Loaded {} tiles", tiles.len());
    Ok(tiles)
}

fn parse_bbox_value(value: &toml::Value) -> Result<BoundingBox, String> {
    let bbox = parse_bbox_numbers(value)?;
    if !bbox.min.is_finite() || !bbox.max.is_finite() {
        return Err(format!("'bbox' {} has non-finite corners", bbox));
    }
    Ok(bbox)
}

fn parse_bbox_numbers(value: &toml::Value) -> Result<BoundingBox, String> {
    if let Some(text) = value.as_str() {
        return BoundingBox::from_string(text);
    }

    let items = value.as_array()
        .ok_or_else(|| "'bbox' must be an array or a string".to_string())?;
    if items.len() != 4 {
        return Err("'bbox' must have 4 values".to_string());
    }

    let mut numbers = [0.0; 4];
    for (slot, item) in numbers.iter_mut().zip(items) {
        *slot = match item {
            toml::Value::Float(f) => *f,
            toml::Value::Integer(n) => *n as f64,
            other => return Err(format!("'bbox' value {} is not a number", other)),
        };
    }

    Ok(BoundingBox::from_coords(numbers[0], numbers[1], numbers[2], numbers[3]))
}
