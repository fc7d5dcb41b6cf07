//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and image output helpers
//! used by the command-line driver.

pub mod logger;
pub(crate) mod progress;
pub mod image_utils;
