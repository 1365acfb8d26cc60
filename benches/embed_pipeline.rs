use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat};
use img2src::embed_pipeline::{
    ConversionConfig, ImageToSourcePipeline, PixelFormat, SourceLanguage,
};

fn generate_png(width: u32, height: u32) -> Vec<u8> {
    let buffer = GrayImage::from_fn(width, height, |x, y| image::Luma([((x + y) % 256) as u8]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(buffer)
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("png encoding");
    bytes.into_inner()
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (16, 24, "16x24"),
        (128, 128, "128x128"),
        (512, 512, "512x512"),
    ];

    for (width, height, label) in sizes {
        let png = generate_png(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &png, |b, data| {
            let pipeline = ImageToSourcePipeline::new(ConversionConfig::default());

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_pixel_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_formats");

    let png = generate_png(256, 256);
    let formats = vec![
        (PixelFormat::Gray8, "gray8"),
        (PixelFormat::Rgb8, "rgb8"),
        (PixelFormat::Mono1, "mono1"),
        (PixelFormat::Rle, "rle"),
    ];

    for (format, label) in formats {
        group.bench_with_input(BenchmarkId::from_parameter(label), &png, |b, data| {
            let config = ConversionConfig::builder()
                .format(format)
                .language(SourceLanguage::Rust)
                .build();
            let pipeline = ImageToSourcePipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_pixel_formats
);
criterion_main!(benches);
