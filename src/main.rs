use argh::FromArgs;
use tracing::info;

use img2src::embed_pipeline::{
    ConversionConfig, Endianness, ImageToSourcePipeline, PixelFormat, ResizeFilter, ResizeMode,
    ResizeSpec, SourceLanguage, ValueStyle,
};
use img2src::logger;

#[derive(FromArgs)]
/// Convert a raster image into an embeddable C header or Rust module.
struct Args {
    /// input image path
    #[argh(positional)]
    input: String,

    /// output source file path
    #[argh(positional)]
    output: String,

    /// pixel format: gray8, rgb8, rgb16, mono1, rle
    #[argh(option, short = 'f', default = "PixelFormat::Gray8", from_str_fn(parse_format))]
    format: PixelFormat,

    /// output language: c or rust
    #[argh(option, short = 'l', default = "SourceLanguage::C", from_str_fn(parse_language))]
    language: SourceLanguage,

    /// value rendering: hex, dec, sdec, bin
    #[argh(option, default = "ValueStyle::Hex", from_str_fn(parse_style))]
    style: ValueStyle,

    /// name of the emitted symbol (defaults to the input file stem)
    #[argh(option, short = 'n')]
    name: Option<String>,

    /// include guard for C output (defaults to the symbol name)
    #[argh(option)]
    guard: Option<String>,

    /// include line for C output, repeatable (default <stdint.h>)
    #[argh(option)]
    include: Vec<String>,

    /// invert colors before encoding
    #[argh(switch, short = 'i')]
    invert: bool,

    /// gaussian blur sigma
    #[argh(option)]
    blur: Option<f32>,

    /// resize target width
    #[argh(option)]
    width: Option<u32>,

    /// resize target height
    #[argh(option)]
    height: Option<u32>,

    /// resize mode: fit, exact, fill
    #[argh(option, default = "ResizeMode::Fit", from_str_fn(parse_mode))]
    resize_mode: ResizeMode,

    /// resize filter: nearest, triangle, catmull-rom, gaussian, lanczos3
    #[argh(option, default = "ResizeFilter::CatmullRom", from_str_fn(parse_filter))]
    filter: ResizeFilter,

    /// threshold separating dark from light pixels for mono1 and rle
    #[argh(option, default = "128")]
    black_level: u8,

    /// byte order of rgb16 samples: le or be
    #[argh(option, default = "Endianness::Le", from_str_fn(parse_endian))]
    endian: Endianness,

    /// largest accepted input dimension
    #[argh(option)]
    max_dimension: Option<u32>,
}

fn parse_format(value: &str) -> Result<PixelFormat, String> {
    value.parse()
}

fn parse_language(value: &str) -> Result<SourceLanguage, String> {
    value.parse()
}

fn parse_style(value: &str) -> Result<ValueStyle, String> {
    value.parse()
}

fn parse_mode(value: &str) -> Result<ResizeMode, String> {
    value.parse()
}

fn parse_filter(value: &str) -> Result<ResizeFilter, String> {
    value.parse()
}

fn parse_endian(value: &str) -> Result<Endianness, String> {
    value.parse()
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Args = argh::from_env();

    let resize = match (args.width, args.height) {
        (Some(width), Some(height)) => Some(ResizeSpec {
            width,
            height,
            mode: args.resize_mode,
            filter: args.filter,
        }),
        (None, None) => None,
        _ => anyhow::bail!("--width and --height must be given together"),
    };

    let mut builder = ConversionConfig::builder()
        .format(args.format)
        .language(args.language)
        .value_style(args.style)
        .symbol_name(args.name)
        .include_guard(args.guard)
        .invert(args.invert)
        .blur(args.blur)
        .resize(resize)
        .black_level(args.black_level)
        .endianness(args.endian)
        .max_dimension(args.max_dimension);
    if !args.include.is_empty() {
        builder = builder.c_includes(args.include);
    }
    let config = builder.build();

    let pipeline = ImageToSourcePipeline::new(config);

    info!("Image to source pipeline initialized");
    info!("Format: {:?}", pipeline.config().format);
    info!("Language: {:?}", pipeline.config().language);

    pipeline.convert_file(&args.input, &args.output)?;

    info!("Conversion successful!");
    Ok(())
}
