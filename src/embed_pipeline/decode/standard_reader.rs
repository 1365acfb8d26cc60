use image::DynamicImage;
use tracing::debug;

use crate::embed_pipeline::common::error::{ConversionError, Result};
use crate::embed_pipeline::decode::reader::InputImageReader;

/// Decodes PNG, JPEG, BMP and WebP inputs with format auto-detection.
pub struct StandardImageReader;

impl InputImageReader for StandardImageReader {
    fn read_image(&self, data: &[u8]) -> Result<DynamicImage> {
        let image =
            image::load_from_memory(data).map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        debug!("Decoded input image: {}x{}", image.width(), image.height());
        Ok(image)
    }
}
