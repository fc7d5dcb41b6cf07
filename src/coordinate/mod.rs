//! Coordinate handling for geo-referenced rasters
//!
//! This module provides the point and bounding box value types and the
//! linear transform between geographic coordinates and pixel positions.

mod bbox;
mod point;
mod transform;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::transform::GeoPixelTransform;
