use std::io::Write;

use crate::embed_pipeline::common::error::Result;
use crate::embed_pipeline::encode::types::EncodedImage;
use crate::embed_pipeline::source::types::ConversionConfig;

pub trait SourceWriter {
    fn write_source(
        &self,
        image: &EncodedImage,
        symbol: &str,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
