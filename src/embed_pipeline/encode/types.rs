//! Encoded pixel data types

use std::str::FromStr;

/// Byte layout of the embedded pixel buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 1 byte per pixel luma.
    #[default]
    Gray8,
    /// 3 bytes per pixel.
    Rgb8,
    /// 2 bytes per channel, 6 bytes per pixel.
    Rgb16,
    /// 1 bit per pixel, thresholded, rows padded to whole bytes.
    Mono1,
    /// Run-length encoded thresholded pixels.
    Rle,
}

impl PixelFormat {
    /// Bytes per stored sample group before any bit packing.
    pub fn pixel_size(&self) -> usize {
        match self {
            PixelFormat::Gray8 | PixelFormat::Mono1 | PixelFormat::Rle => 1,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgb16 => 6,
        }
    }

    /// Pixels folded into one stored byte (8 for packed mono, 1 otherwise).
    pub fn width_divisor(&self) -> usize {
        match self {
            PixelFormat::Mono1 => 8,
            _ => 1,
        }
    }

    /// Whether the output length follows from the image geometry alone.
    pub fn is_fixed_geometry(&self) -> bool {
        !matches!(self, PixelFormat::Rle)
    }
}

impl FromStr for PixelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gray8" => Ok(Self::Gray8),
            "rgb8" => Ok(Self::Rgb8),
            "rgb16" => Ok(Self::Rgb16),
            "mono1" => Ok(Self::Mono1),
            "rle" => Ok(Self::Rle),
            other => Err(format!("unknown pixel format: {other}")),
        }
    }
}

/// Pixel data flattened into its embeddable byte layout.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Width of the source image in pixels.
    pub width: u32,
    /// Height of the source image in pixels.
    pub height: u32,
    /// Layout the data was encoded with.
    pub format: PixelFormat,
    /// Encoded bytes, row-major for fixed-geometry layouts.
    pub data: Vec<u8>,
}

impl EncodedImage {
    /// Stored bytes per image row for fixed-geometry layouts.
    pub fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(self.format.width_divisor()) * self.format.pixel_size()
    }

    /// Expected data length for fixed-geometry layouts.
    pub fn geometric_len(&self) -> usize {
        self.row_bytes() * self.height as usize
    }
}
