use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::embed_pipeline::{
    common::error::{ConversionError, Result},
    decode::{InputImageReader, StandardImageReader},
    encode,
    source::{ConversionConfig, SourceWriter, StandardSourceWriter},
    transform,
};

const DEFAULT_SYMBOL: &str = "IMAGE";

pub struct ImageToSourcePipeline<R: InputImageReader, W: SourceWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl ImageToSourcePipeline<StandardImageReader, StandardSourceWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: StandardImageReader,
            writer: StandardSourceWriter,
            config,
        }
    }
}

impl<R: InputImageReader, W: SourceWriter> ImageToSourcePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max as usize || height > max as usize {
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let symbol = self
            .config
            .symbol_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
        self.convert_named(input_data, &symbol, output)
    }

    fn convert_named(&self, input_data: &[u8], symbol: &str, output: &mut dyn Write) -> Result<()> {
        info!("Starting image to source conversion");

        let image = {
            let _span = tracing::info_span!("decode_input").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = image.width(),
                height = image.height()
            )
            .entered();
            self.validate_dimensions(image.width() as usize, image.height() as usize)?;
        }

        let image = {
            let _span = tracing::info_span!("transform").entered();
            transform::apply(image, &self.config)
        };

        let encoded = {
            let _span = tracing::info_span!("encode_pixels").entered();
            encode::encode(&image, &self.config)?
        };

        {
            let _span = tracing::info_span!("write_source").entered();
            self.writer
                .write_source(&encoded, symbol, output, &self.config)?;
        }

        info!(
            symbol,
            width = encoded.width,
            height = encoded.height,
            bytes = encoded.data.len(),
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        let symbol = match &self.config.symbol_name {
            Some(symbol) => symbol.clone(),
            None => symbol_from_path(input_path),
        };

        self.convert_named(&input_data, &symbol, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// Derives an identifier from the input file stem: uppercased, with
/// non-alphanumeric characters folded to `_`.
pub fn symbol_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_SYMBOL);

    let mut symbol: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if symbol.is_empty() {
        symbol = DEFAULT_SYMBOL.to_string();
    } else if symbol.starts_with(|c: char| c.is_ascii_digit()) {
        symbol.insert(0, '_');
    }

    symbol
}
