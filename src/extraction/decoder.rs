//! Image byte-buffer decoding
//!
//! Turns an uploaded byte buffer (PNG, JPEG, ...) into an owned pixel
//! grid. Decoding failure is detected here and surfaced as a typed
//! error rather than silently producing a degenerate image.

use image::DynamicImage;
use log::debug;

use crate::extraction::errors::{ChartError, ChartResult};

/// Owned pixel grid decoded from an uploaded screenshot
///
/// Wraps the decoded image so downstream stages can request a grayscale
/// view without caring about the source channel layout.
pub struct RasterImage {
    image: DynamicImage,
}

impl RasterImage {
    /// Image width in pixels, always > 0
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels, always > 0
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Grayscale (8-bit luma) rendering of the decoded image
    pub fn to_grayscale(&self) -> image::GrayImage {
        self.image.to_luma8()
    }
}

/// Decode a raw byte buffer into a RasterImage
///
/// # Arguments
/// * `bytes` - Raw image bytes as received from the caller
///
/// # Returns
/// The decoded image, or `DecodeError` when the buffer is empty,
/// truncated or not a recognized image container
pub fn decode_image(bytes: &[u8]) -> ChartResult<RasterImage> {
    if bytes.is_empty() {
        return Err(ChartError::DecodeError("empty byte buffer".to_string()));
    }

    let image = image::load_from_memory(bytes)
        .map_err(|e| ChartError::DecodeError(e.to_string()))?;

    if image.width() == 0 || image.height() == 0 {
        return Err(ChartError::DecodeError("image has zero dimensions".to_string()));
    }

    debug!("Decoded image: {}x{} pixels", image.width(), image.height());
    Ok(RasterImage { image })
}
