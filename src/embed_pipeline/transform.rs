//! Raster preprocessing module
//!
//! Transforms applied to the decoded image before pixel encoding: color
//! inversion, gaussian blur and resizing.

mod ops;
pub mod types;

pub use ops::apply;
pub use types::{ResizeFilter, ResizeMode, ResizeSpec};
