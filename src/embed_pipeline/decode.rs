//! Input image decoding module
//!
//! This module provides format-agnostic decoding of raster input images.

mod reader;
mod standard_reader;

pub use reader::InputImageReader;
pub use standard_reader::StandardImageReader;
