//! Image embedding pipeline module
//!
//! This module provides a structured approach to turning raster images into
//! embeddable source code, with separate modules for image decoding, pixel
//! encoding, source emission, and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod decode;
pub mod encode;
pub mod source;
pub mod transform;

pub use common::{ConversionError, Result};

pub use decode::{InputImageReader, StandardImageReader};

pub use transform::{ResizeFilter, ResizeMode, ResizeSpec};

pub use encode::{EncodedImage, PixelFormat};

pub use source::{
    ConversionConfig, ConversionConfigBuilder, Endianness, SourceLanguage, SourceWriter,
    StandardSourceWriter, ValueStyle,
};

pub use conversions::ImageToSourcePipeline;
