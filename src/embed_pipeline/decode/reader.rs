use image::DynamicImage;

use crate::embed_pipeline::common::error::Result;

pub trait InputImageReader {
    fn read_image(&self, data: &[u8]) -> Result<DynamicImage>;
}
