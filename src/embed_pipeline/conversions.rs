//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning input images into
//! embeddable source files.

mod image_to_source;


pub use image_to_source::{ImageToSourcePipeline, symbol_from_path};
