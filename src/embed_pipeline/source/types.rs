//! Conversion configuration types

use std::str::FromStr;

use crate::embed_pipeline::encode::types::PixelFormat;
use crate::embed_pipeline::transform::types::ResizeSpec;

/// Language of the emitted source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceLanguage {
    /// C header with `#define` constants and a `uint8_t` array.
    #[default]
    C,
    /// Rust module with `pub const` items.
    Rust,
}

impl FromStr for SourceLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "rust" => Ok(Self::Rust),
            other => Err(format!("unknown output language: {other}")),
        }
    }
}

/// Rendering of individual byte values in the array literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueStyle {
    /// `0x95`
    #[default]
    Hex,
    /// `149`
    Dec,
    /// `-107` (value reinterpreted as `i8`)
    SDec,
    /// `0b10010101`
    Bin,
}

impl FromStr for ValueStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "dec" => Ok(Self::Dec),
            "sdec" => Ok(Self::SDec),
            "bin" => Ok(Self::Bin),
            other => Err(format!("unknown value style: {other}")),
        }
    }
}

/// Byte order of multi-byte samples (`Rgb16`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
    #[default]
    Le,
    Be,
}

impl FromStr for Endianness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "le" => Ok(Self::Le),
            "be" => Ok(Self::Be),
            other => Err(format!("unknown endianness: {other}")),
        }
    }
}

/// Configuration for image to source conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Byte layout of the embedded buffer.
    pub format: PixelFormat,
    /// Language of the emitted file.
    pub language: SourceLanguage,
    /// Rendering of array values.
    pub value_style: ValueStyle,
    /// Symbol name; derived from the input file name when absent.
    pub symbol_name: Option<String>,
    /// C include guard; defaults to the symbol name.
    pub include_guard: Option<String>,
    /// `#include` lines for C output.
    pub c_includes: Vec<String>,
    /// Invert colors before encoding.
    pub invert: bool,
    /// Gaussian blur sigma, applied before any resize.
    pub blur: Option<f32>,
    /// Resize request.
    pub resize: Option<ResizeSpec>,
    /// Threshold separating dark from light pixels for `Mono1` and `Rle`.
    pub black_level: u8,
    /// Byte order of `Rgb16` samples.
    pub endianness: Endianness,
    /// Whether to validate image dimensions before conversion.
    pub validate_dimensions: bool,
    /// Reject inputs with either side above this, when set.
    pub max_dimension: Option<u32>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            format: PixelFormat::Gray8,
            language: SourceLanguage::C,
            value_style: ValueStyle::Hex,
            symbol_name: None,
            include_guard: None,
            c_includes: vec!["<stdint.h>".to_string()],
            invert: false,
            blur: None,
            resize: None,
            black_level: 128,
            endianness: Endianness::Le,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    format: Option<PixelFormat>,
    language: Option<SourceLanguage>,
    value_style: Option<ValueStyle>,
    symbol_name: Option<Option<String>>,
    include_guard: Option<Option<String>>,
    c_includes: Option<Vec<String>>,
    invert: Option<bool>,
    blur: Option<Option<f32>>,
    resize: Option<Option<ResizeSpec>>,
    black_level: Option<u8>,
    endianness: Option<Endianness>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl ConversionConfigBuilder {
    pub fn format(mut self, format: PixelFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn language(mut self, language: SourceLanguage) -> Self {
        self.language = Some(language);
        self
    }

    pub fn value_style(mut self, value_style: ValueStyle) -> Self {
        self.value_style = Some(value_style);
        self
    }

    pub fn symbol_name(mut self, symbol_name: Option<String>) -> Self {
        self.symbol_name = Some(symbol_name);
        self
    }

    pub fn include_guard(mut self, include_guard: Option<String>) -> Self {
        self.include_guard = Some(include_guard);
        self
    }

    pub fn c_includes(mut self, c_includes: Vec<String>) -> Self {
        self.c_includes = Some(c_includes);
        self
    }

    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = Some(invert);
        self
    }

    pub fn blur(mut self, blur: Option<f32>) -> Self {
        self.blur = Some(blur);
        self
    }

    pub fn resize(mut self, resize: Option<ResizeSpec>) -> Self {
        self.resize = Some(resize);
        self
    }

    pub fn black_level(mut self, black_level: u8) -> Self {
        self.black_level = Some(black_level);
        self
    }

    pub fn endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = Some(endianness);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max_dimension: Option<u32>) -> Self {
        self.max_dimension = Some(max_dimension);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            format: self.format.unwrap_or(default.format),
            language: self.language.unwrap_or(default.language),
            value_style: self.value_style.unwrap_or(default.value_style),
            symbol_name: self.symbol_name.unwrap_or(default.symbol_name),
            include_guard: self.include_guard.unwrap_or(default.include_guard),
            c_includes: self.c_includes.unwrap_or(default.c_includes),
            invert: self.invert.unwrap_or(default.invert),
            blur: self.blur.unwrap_or(default.blur),
            resize: self.resize.unwrap_or(default.resize),
            black_level: self.black_level.unwrap_or(default.black_level),
            endianness: self.endianness.unwrap_or(default.endianness),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
