use std::io::Write;

use tracing::debug;

use crate::embed_pipeline::common::error::Result;
use crate::embed_pipeline::encode::types::EncodedImage;
use crate::embed_pipeline::source::types::{ConversionConfig, SourceLanguage, ValueStyle};
use crate::embed_pipeline::source::writer::SourceWriter;

const RLE_VALUES_PER_LINE: usize = 16;

pub struct StandardSourceWriter;

impl SourceWriter for StandardSourceWriter {
    fn write_source(
        &self,
        image: &EncodedImage,
        symbol: &str,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!(
            "Emitting {:?} source for {}: {}x{}, {} bytes",
            config.language,
            symbol,
            image.width,
            image.height,
            image.data.len()
        );

        match config.language {
            SourceLanguage::C => write_c(image, symbol, output, config)?,
            SourceLanguage::Rust => write_rust(image, symbol, output, config)?,
        }

        debug!("Source emission complete");
        Ok(())
    }
}

fn write_c(
    image: &EncodedImage,
    symbol: &str,
    output: &mut dyn Write,
    config: &ConversionConfig,
) -> Result<()> {
    let guard = config.include_guard.as_deref().unwrap_or(symbol);
    let packed = image.format.width_divisor() > 1;

    writeln!(output, "#ifndef {guard}")?;
    writeln!(output, "#define {guard}")?;
    writeln!(output)?;
    for include in &config.c_includes {
        writeln!(output, "#include {include}")?;
    }
    writeln!(output, "#define {symbol}_HEIGHT {}", image.height)?;
    writeln!(output, "#define {symbol}_WIDTH {}", image.width)?;
    if packed {
        let divisor = image.format.width_divisor();
        writeln!(
            output,
            "#define {symbol}_WIDTH_BYTES (({symbol}_WIDTH + {}) / {})",
            divisor - 1,
            divisor
        )?;
    }
    writeln!(output, "#define {symbol}_PIXEL_SIZE {}", image.format.pixel_size())?;
    if !image.format.is_fixed_geometry() {
        writeln!(output, "#define {symbol}_LENGTH {}", image.data.len())?;
    } else if packed {
        writeln!(
            output,
            "#define {symbol}_LENGTH ({symbol}_HEIGHT * {symbol}_PIXEL_SIZE * {symbol}_WIDTH_BYTES)"
        )?;
    } else {
        writeln!(
            output,
            "#define {symbol}_LENGTH ({symbol}_WIDTH * {symbol}_HEIGHT * {symbol}_PIXEL_SIZE)"
        )?;
    }
    writeln!(output, "uint8_t {symbol}[{symbol}_LENGTH] = {{")?;
    write_rows(image, config.value_style, "", output)?;
    writeln!(output, "}};")?;
    writeln!(output, "#endif // {guard}")?;
    Ok(())
}

fn write_rust(
    image: &EncodedImage,
    symbol: &str,
    output: &mut dyn Write,
    config: &ConversionConfig,
) -> Result<()> {
    let packed = image.format.width_divisor() > 1;

    writeln!(output, "pub const {symbol}_HEIGHT: usize = {};", image.height)?;
    writeln!(output, "pub const {symbol}_WIDTH: usize = {};", image.width)?;
    if packed {
        writeln!(
            output,
            "pub const {symbol}_WIDTH_BYTES: usize = {symbol}_WIDTH.div_ceil({});",
            image.format.width_divisor()
        )?;
    }
    writeln!(
        output,
        "pub const {symbol}_PIXEL_SIZE: usize = {};",
        image.format.pixel_size()
    )?;
    if !image.format.is_fixed_geometry() {
        writeln!(output, "pub const {symbol}_LENGTH: usize = {};", image.data.len())?;
    } else if packed {
        writeln!(
            output,
            "pub const {symbol}_LENGTH: usize = {symbol}_HEIGHT * {symbol}_PIXEL_SIZE * {symbol}_WIDTH_BYTES;"
        )?;
    } else {
        writeln!(
            output,
            "pub const {symbol}_LENGTH: usize = {symbol}_WIDTH * {symbol}_HEIGHT * {symbol}_PIXEL_SIZE;"
        )?;
    }
    writeln!(output)?;
    writeln!(output, "pub const {symbol}: [u8; {symbol}_LENGTH] = [")?;
    write_rows(image, config.value_style, "    ", output)?;
    writeln!(output, "];")?;
    Ok(())
}

fn write_rows(
    image: &EncodedImage,
    style: ValueStyle,
    indent: &str,
    output: &mut dyn Write,
) -> Result<()> {
    let chunk = if image.format.is_fixed_geometry() {
        image.row_bytes().max(1)
    } else {
        RLE_VALUES_PER_LINE
    };
    for row in image.data.chunks(chunk) {
        let line = row
            .iter()
            .map(|&value| format_value(value, style))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(output, "{indent}{line},")?;
    }
    Ok(())
}

fn format_value(value: u8, style: ValueStyle) -> String {
    match style {
        ValueStyle::Hex => format!("0x{value:02x}"),
        ValueStyle::Dec => format!("{value:3}"),
        ValueStyle::SDec => format!("{:4}", value as i8),
        ValueStyle::Bin => format!("0b{value:08b}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed_pipeline::encode::types::PixelFormat;

    fn render(image: &EncodedImage, symbol: &str, config: &ConversionConfig) -> String {
        let mut output = Vec::new();
        StandardSourceWriter
            .write_source(image, symbol, &mut output, config)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn gray_2x2() -> EncodedImage {
        EncodedImage {
            width: 2,
            height: 2,
            format: PixelFormat::Gray8,
            data: vec![0x00, 0x01, 0x02, 0x03],
        }
    }

    #[test]
    fn c_header_for_gray8() {
        let text = render(&gray_2x2(), "DOT", &ConversionConfig::default());
        let expected = "\
#ifndef DOT
#define DOT

#include <stdint.h>
#define DOT_HEIGHT 2
#define DOT_WIDTH 2
#define DOT_PIXEL_SIZE 1
#define DOT_LENGTH (DOT_WIDTH * DOT_HEIGHT * DOT_PIXEL_SIZE)
uint8_t DOT[DOT_LENGTH] = {
0x00, 0x01,
0x02, 0x03,
};
#endif // DOT
";
        assert_eq!(text, expected);
    }

    #[test]
    fn rust_module_for_gray8() {
        let config = ConversionConfig::builder()
            .language(SourceLanguage::Rust)
            .build();
        let text = render(&gray_2x2(), "DOT", &config);
        let expected = "\
pub const DOT_HEIGHT: usize = 2;
pub const DOT_WIDTH: usize = 2;
pub const DOT_PIXEL_SIZE: usize = 1;
pub const DOT_LENGTH: usize = DOT_WIDTH * DOT_HEIGHT * DOT_PIXEL_SIZE;

pub const DOT: [u8; DOT_LENGTH] = [
    0x00, 0x01,
    0x02, 0x03,
];
";
        assert_eq!(text, expected);
    }

    #[test]
    fn custom_guard_and_includes() {
        let config = ConversionConfig::builder()
            .include_guard(Some("SPRITES_H".to_string()))
            .c_includes(vec!["<cstdint>".to_string()])
            .build();
        let text = render(&gray_2x2(), "DOT", &config);
        assert!(text.starts_with("#ifndef SPRITES_H\n#define SPRITES_H\n"));
        assert!(text.contains("#include <cstdint>\n"));
        assert!(text.ends_with("#endif // SPRITES_H\n"));
    }

    #[test]
    fn packed_mono_derives_width_bytes() {
        let image = EncodedImage {
            width: 10,
            height: 2,
            format: PixelFormat::Mono1,
            data: vec![0x80, 0x00, 0x80, 0x40],
        };
        let c = render(&image, "ICON", &ConversionConfig::default());
        assert!(c.contains("#define ICON_WIDTH_BYTES ((ICON_WIDTH + 7) / 8)"));
        assert!(c.contains("#define ICON_LENGTH (ICON_HEIGHT * ICON_PIXEL_SIZE * ICON_WIDTH_BYTES)"));
        assert!(c.contains("0x80, 0x00,\n0x80, 0x40,\n"));

        let config = ConversionConfig::builder()
            .language(SourceLanguage::Rust)
            .build();
        let rust = render(&image, "ICON", &config);
        assert!(rust.contains("pub const ICON_WIDTH_BYTES: usize = ICON_WIDTH.div_ceil(8);"));
        assert!(
            rust.contains("pub const ICON_LENGTH: usize = ICON_HEIGHT * ICON_PIXEL_SIZE * ICON_WIDTH_BYTES;")
        );
    }

    #[test]
    fn rle_length_is_literal() {
        let image = EncodedImage {
            width: 100,
            height: 1,
            format: PixelFormat::Rle,
            data: vec![0x02, 0x00, 0xe4, 0x64],
        };
        let text = render(&image, "STRIP", &ConversionConfig::default());
        assert!(text.contains("#define STRIP_LENGTH 4"));
        assert!(!text.contains("STRIP_WIDTH *"));
    }

    #[test]
    fn value_styles() {
        let image = EncodedImage {
            width: 2,
            height: 1,
            format: PixelFormat::Gray8,
            data: vec![0xff, 0x05],
        };
        let base = ConversionConfig::builder();

        let dec = render(&image, "V", &base.value_style(ValueStyle::Dec).build());
        assert!(dec.contains("255,   5,\n"));

        let sdec = render(
            &image,
            "V",
            &ConversionConfig::builder().value_style(ValueStyle::SDec).build(),
        );
        assert!(sdec.contains("  -1,    5,\n"));

        let bin = render(
            &image,
            "V",
            &ConversionConfig::builder().value_style(ValueStyle::Bin).build(),
        );
        assert!(bin.contains("0b11111111, 0b00000101,\n"));
    }
}
