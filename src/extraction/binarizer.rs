//! Curve/background separation
//!
//! Converts the decoded image to grayscale, inverts it so a dark line
//! on a light background becomes the bright signal, then splits
//! foreground from background with an automatic global threshold
//! computed from the image's own intensity histogram. No caller-supplied
//! cutoff: chart backgrounds and line colors vary too much for a fixed
//! constant.

use log::debug;

use crate::extraction::decoder::RasterImage;

/// Boolean foreground mask, same dimensions as the source image
///
/// `true` marks pixels belonging to the plotted curve (or grid ink).
/// Built once per extraction and consumed immediately by the column
/// sampler.
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    /// Create a mask from raw flags, row-major
    pub fn new(width: u32, height: u32, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), (width * height) as usize);
        Mask { width, height, data }
    }

    /// Mask width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is foreground
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.data[(y * self.width + x) as usize]
    }
}

/// Binarize a decoded chart image into a foreground mask
///
/// Degenerate (uniform) images produce an all-background mask; the
/// downstream sampler and interpolator reject those, so there is no
/// recoverable failure mode here.
///
/// # Arguments
/// * `image` - The decoded chart screenshot
///
/// # Returns
/// A mask with the same dimensions as the input
pub fn binarize(image: &RasterImage) -> Mask {
    let gray = image.to_grayscale();
    let (width, height) = (gray.width(), gray.height());

    // Invert so the plotted line becomes the high-intensity signal
    let inverted: Vec<u8> = gray.as_raw().iter().map(|&v| 255 - v).collect();

    let threshold = otsu_threshold(&inverted);
    debug!("Otsu threshold on inverted grayscale: {}", threshold);

    let data = inverted.iter().map(|&v| v > threshold).collect();
    Mask::new(width, height, data)
}

/// Select the global threshold minimizing intra-class intensity variance
///
/// Standard Otsu criterion: sweep all 256 candidate cut points and keep
/// the one maximizing between-class variance, which is equivalent to
/// minimizing the summed within-class variance.
///
/// # Arguments
/// * `pixels` - Intensity samples to build the histogram from
///
/// # Returns
/// The selected threshold; foreground is every intensity strictly above it
pub fn otsu_threshold(pixels: &[u8]) -> u8 {
    let mut histogram = [0u32; 256];
    for &value in pixels {
        histogram[value as usize] += 1;
    }

    let total = pixels.len() as f64;
    let mut sum_total = 0f64;
    for (value, &count) in histogram.iter().enumerate() {
        sum_total += value as f64 * count as f64;
    }

    let mut sum_background = 0f64;
    let mut weight_background = 0f64;
    let mut best_variance = f64::MIN;
    let mut threshold = 0u8;

    for (value, &count) in histogram.iter().enumerate() {
        weight_background += count as f64;
        if weight_background == 0.0 {
            continue;
        }

        let weight_foreground = total - weight_background;
        if weight_foreground == 0.0 {
            break;
        }

        sum_background += value as f64 * count as f64;
        let mean_background = sum_background / weight_background;
        let mean_foreground = (sum_total - sum_background) / weight_foreground;

        let between = weight_background * weight_foreground
            * (mean_background - mean_foreground).powi(2);

        if between > best_variance {
            best_variance = between;
            threshold = value as u8;
        }
    }

    threshold
}
