use image::DynamicImage;
use tracing::{debug, info};

use crate::embed_pipeline::source::types::ConversionConfig;
use crate::embed_pipeline::transform::types::ResizeMode;

/// Applies the configured preprocessing steps in order: invert, blur, resize.
pub fn apply(mut image: DynamicImage, config: &ConversionConfig) -> DynamicImage {
    if config.invert {
        debug!("Inverting colors");
        image.invert();
    }

    if let Some(sigma) = config.blur {
        info!("Blur by {:.2}", sigma);
        image = image.blur(sigma);
    }

    if let Some(resize) = config.resize {
        let filter = resize.filter.into();
        image = match resize.mode {
            ResizeMode::Fit => image.resize(resize.width, resize.height, filter),
            ResizeMode::Exact => image.resize_exact(resize.width, resize.height, filter),
            ResizeMode::Fill => image.resize_to_fill(resize.width, resize.height, filter),
        };
        debug!(
            "Resized to {}x{} ({:?}, {:?})",
            image.width(),
            image.height(),
            resize.mode,
            resize.filter
        );
    }

    image
}
