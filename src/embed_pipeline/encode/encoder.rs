use image::DynamicImage;
use tracing::debug;

use crate::embed_pipeline::common::error::Result;
use crate::embed_pipeline::encode::types::{EncodedImage, PixelFormat};
use crate::embed_pipeline::source::types::{ConversionConfig, Endianness};

/// Flattens `image` into the byte layout selected by `config.format`.
pub fn encode(image: &DynamicImage, config: &ConversionConfig) -> Result<EncodedImage> {
    let width = image.width();
    let height = image.height();

    let data = match config.format {
        PixelFormat::Gray8 => image.to_luma8().into_raw(),
        PixelFormat::Rgb8 => image.to_rgb8().into_raw(),
        PixelFormat::Rgb16 => encode_rgb16(image, config.endianness),
        PixelFormat::Mono1 => encode_mono1(image, config.black_level),
        PixelFormat::Rle => encode_rle(image, config.black_level),
    };

    debug!(
        "Encoded {}x{} image as {:?}: {} bytes",
        width,
        height,
        config.format,
        data.len()
    );

    Ok(EncodedImage {
        width,
        height,
        format: config.format,
        data,
    })
}

fn encode_rgb16(image: &DynamicImage, endianness: Endianness) -> Vec<u8> {
    image
        .to_rgb16()
        .into_raw()
        .into_iter()
        .flat_map(|sample| match endianness {
            Endianness::Le => sample.to_le_bytes(),
            Endianness::Be => sample.to_be_bytes(),
        })
        .collect()
}

/// Packs thresholded pixels 8 per byte, MSB first, each row padded to a
/// whole byte. A set bit is a pixel above `black_level`.
fn encode_mono1(image: &DynamicImage, black_level: u8) -> Vec<u8> {
    let luma = image.to_luma8();
    let width = luma.width() as usize;
    let height = luma.height() as usize;
    let row_bytes = width.div_ceil(8);

    let mut data = vec![0u8; row_bytes * height];
    for (x, y, pixel) in luma.enumerate_pixels() {
        if pixel[0] > black_level {
            let byte_index = y as usize * row_bytes + x as usize / 8;
            let bit_index = 7 - (x as usize % 8);
            data[byte_index] |= 1 << bit_index;
        }
    }
    data
}

/// Run-length encodes thresholded pixels in row-major order. Each run byte
/// carries the color in the high bit and the run length (1..=127) in the low
/// seven bits; the payload is prefixed with its byte count as a `u16` LE.
fn encode_rle(image: &DynamicImage, black_level: u8) -> Vec<u8> {
    let luma = image.to_luma8();
    let mut runs: Vec<u8> = Vec::new();

    let mut pixels = luma.pixels().map(|p| p[0] > black_level);
    if let Some(first) = pixels.next() {
        let mut color = first;
        let mut length = 1u8;
        for white in pixels {
            if white == color && length < 127 {
                length += 1;
            } else {
                runs.push(run_byte(color, length));
                color = white;
                length = 1;
            }
        }
        runs.push(run_byte(color, length));
    }

    let mut data = Vec::with_capacity(runs.len() + 2);
    data.extend_from_slice(&(runs.len() as u16).to_le_bytes());
    data.extend_from_slice(&runs);
    data
}

fn run_byte(white: bool, length: u8) -> u8 {
    if white { 0x80 | length } else { length }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage};

    fn gray(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| image::Luma([f(x, y)])))
    }

    fn config(format: PixelFormat) -> ConversionConfig {
        ConversionConfig::builder().format(format).build()
    }

    #[test]
    fn gray8_preserves_samples() {
        let image = gray(4, 2, |x, y| (x + y * 4) as u8);
        let encoded = encode(&image, &config(PixelFormat::Gray8)).unwrap();
        assert_eq!(encoded.data, (0..8).collect::<Vec<u8>>());
        assert_eq!(encoded.data.len(), encoded.geometric_len());
    }

    #[test]
    fn rgb8_interleaves_channels() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_fn(2, 1, |x, _| {
            image::Rgb([x as u8, 10 + x as u8, 20 + x as u8])
        }));
        let encoded = encode(&image, &config(PixelFormat::Rgb8)).unwrap();
        assert_eq!(encoded.data, vec![0, 10, 20, 1, 11, 21]);
    }

    #[test]
    fn rgb16_honors_endianness() {
        let buffer = image::ImageBuffer::<image::Rgb<u16>, Vec<u16>>::from_pixel(
            1,
            1,
            image::Rgb([0x1234, 0x5678, 0x9abc]),
        );
        let image = DynamicImage::ImageRgb16(buffer);

        let le = encode(&image, &config(PixelFormat::Rgb16)).unwrap();
        let be = encode(
            &image,
            &ConversionConfig::builder()
                .format(PixelFormat::Rgb16)
                .endianness(Endianness::Be)
                .build(),
        )
        .unwrap();

        assert_eq!(le.data, vec![0x34, 0x12, 0x78, 0x56, 0xbc, 0x9a]);
        assert_eq!(be.data, vec![0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc]);
    }

    #[test]
    fn mono1_packs_msb_first_with_row_padding() {
        // 10 px wide: bits 0..9 of each row, final 6 bits of padding.
        let image = gray(10, 2, |x, y| if x == 0 || (y == 1 && x == 9) { 255 } else { 0 });
        let encoded = encode(&image, &config(PixelFormat::Mono1)).unwrap();

        assert_eq!(encoded.row_bytes(), 2);
        assert_eq!(encoded.data.len(), 4);
        // Row 0: only pixel 0 set -> MSB of the first byte.
        assert_eq!(encoded.data[0], 0b1000_0000);
        assert_eq!(encoded.data[1], 0b0000_0000);
        // Row 1: pixels 0 and 9 set; 9 lands in bit 6 of the second byte.
        assert_eq!(encoded.data[2], 0b1000_0000);
        assert_eq!(encoded.data[3], 0b0100_0000);
    }

    #[test]
    fn rle_splits_long_runs() {
        let image = gray(300, 1, |_, _| 255);
        let encoded = encode(&image, &config(PixelFormat::Rle)).unwrap();

        let payload_len = u16::from_le_bytes([encoded.data[0], encoded.data[1]]) as usize;
        assert_eq!(payload_len, 3);
        assert_eq!(&encoded.data[2..], &[0x80 | 127, 0x80 | 127, 0x80 | 46]);
    }

    #[test]
    fn rle_alternating_colors() {
        let image = gray(4, 1, |x, _| if x % 2 == 0 { 255 } else { 0 });
        let encoded = encode(&image, &config(PixelFormat::Rle)).unwrap();
        assert_eq!(&encoded.data[2..], &[0x81, 0x01, 0x81, 0x01]);
    }
}
