//! Shared helpers for extraction tests

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};

use crate::extraction::binarizer::Mask;
use crate::extraction::errors::ChartResult;
use crate::inference::traits::{Classifier, Scaler, N_CLASSES};

/// Build a mask directly from a per-pixel predicate
pub fn mask_from_fn<F>(width: u32, height: u32, f: F) -> Mask
where
    F: Fn(u32, u32) -> bool,
{
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(f(x, y));
        }
    }
    Mask::new(width, height, data)
}

/// Render a dark curve on a white background and encode it as PNG bytes
///
/// `rows[x]` gives the line's pixel row in column `x`; the drawn line is
/// a single pixel thick.
pub fn chart_png(width: u32, height: u32, rows: &[u32]) -> Vec<u8> {
    assert_eq!(rows.len(), width as usize);

    let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));
    for (x, &row) in rows.iter().enumerate() {
        img.put_pixel(x as u32, row, Luma([0u8]));
    }

    let mut bytes = Cursor::new(Vec::new());
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

/// Encode a uniform all-white image as PNG bytes
pub fn blank_png(width: u32, height: u32) -> Vec<u8> {
    let img = GrayImage::from_pixel(width, height, Luma([255u8]));
    let mut bytes = Cursor::new(Vec::new());
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

/// Scaler stub that returns the window unchanged
pub struct IdentityScaler;

impl Scaler for IdentityScaler {
    fn transform(&self, window: &[f64]) -> ChartResult<Vec<f64>> {
        Ok(window.to_vec())
    }
}

/// Classifier stub that always emits the same probability vector
pub struct ConstantClassifier(pub [f64; N_CLASSES]);

impl Classifier for ConstantClassifier {
    fn classify(&self, _window: &[f64]) -> ChartResult<[f64; N_CLASSES]> {
        Ok(self.0)
    }
}
