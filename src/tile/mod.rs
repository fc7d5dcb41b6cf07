//! Tiles and composite assembly
//!
//! This module holds the tile type, the bounding box aggregation that sizes
//! the composite canvas, and the compositor that places tiles into it.

mod types;
pub mod aggregate;
pub mod compositor;

pub use types::Tile;
pub use aggregate::{aggregate_tile_bbox_and_dims, bbox_of_coordinates, verify_uniform_resolution};
pub use compositor::composite;
