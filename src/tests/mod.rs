//! Unit tests for the pipeline stages

mod crop_tests;
mod io_tests;
