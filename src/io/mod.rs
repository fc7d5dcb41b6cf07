//! Input collaborators
//!
//! Loading of tile catalogs and GeoJSON boundaries. Nothing in the core
//! pipeline depends on this module.

pub mod catalog;
pub mod geojson;

pub use catalog::{load_catalog, parse_catalog, CatalogEntry};
pub use geojson::{parse_boundary, read_boundary};
