//! Source emission module
//!
//! This module renders encoded pixel data as compilable C or Rust source:
//! a constant byte array plus the dimension constants describing it.

mod standard_writer;
pub mod types;
mod writer;

pub use standard_writer::StandardSourceWriter;
pub use types::{
    ConversionConfig, ConversionConfigBuilder, Endianness, SourceLanguage, ValueStyle,
};
pub use writer::SourceWriter;
