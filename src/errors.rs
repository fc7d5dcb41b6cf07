//! Custom error types for tile compositing and cropping

use std::fmt;
use std::io;

/// Errors raised while compositing, cropping or masking tiles
#[derive(Debug)]
pub enum CropError {
    /// Malformed input data (empty sequences, zero-extent boxes, ...)
    InvalidInput(String),
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding failure
    ImageError(image::ImageError),
    /// Malformed tile catalog
    CatalogError(String),
    /// Malformed or unsupported GeoJSON boundary
    GeoJsonError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CropError::IoError(e) => write!(f, "I/O error: {}", e),
            CropError::ImageError(e) => write!(f, "Image error: {}", e),
            CropError::CatalogError(msg) => write!(f, "Tile catalog error: {}", msg),
            CropError::GeoJsonError(msg) => write!(f, "GeoJSON error: {}", msg),
            CropError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CropError::IoError(e) => Some(e),
            CropError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CropError {
    fn from(error: io::Error) -> Self {
        CropError::IoError(error)
    }
}

impl From<image::ImageError> for CropError {
    fn from(error: image::ImageError) -> Self {
        CropError::ImageError(error)
    }
}

impl From<String> for CropError {
    fn from(msg: String) -> Self {
        CropError::GenericError(msg)
    }
}

/// Result type for tile cropping operations
pub type CropResult<T> = Result<T, CropError>;
