//! Tests for grayscale inversion and automatic thresholding

use crate::extraction::binarizer::{binarize, otsu_threshold};
use crate::extraction::decoder::decode_image;
use crate::extraction::tests::test_utils::{blank_png, chart_png};

#[test]
fn test_dark_line_becomes_foreground() {
    let rows: Vec<u32> = (0..60).map(|_| 25u32).collect();
    let bytes = chart_png(60, 50, &rows);
    let image = decode_image(&bytes).unwrap();

    let mask = binarize(&image);
    assert_eq!(mask.width(), 60);
    assert_eq!(mask.height(), 50);

    for x in 0..60 {
        assert!(mask.is_foreground(x, 25), "column {} lost the line", x);
        assert!(!mask.is_foreground(x, 10));
        assert!(!mask.is_foreground(x, 40));
    }
}

#[test]
fn test_uniform_image_yields_trivial_mask() {
    let bytes = blank_png(40, 30);
    let image = decode_image(&bytes).unwrap();

    let mask = binarize(&image);
    for y in 0..30 {
        for x in 0..40 {
            assert!(!mask.is_foreground(x, y));
        }
    }
}

#[test]
fn test_otsu_splits_bimodal_histogram() {
    // Two well-separated intensity clusters
    let mut pixels = vec![10u8; 500];
    pixels.extend(vec![200u8; 500]);

    let threshold = otsu_threshold(&pixels);
    assert!(threshold >= 10 && threshold < 200);
}

#[test]
fn test_otsu_threshold_is_histogram_driven() {
    // Shifting both clusters shifts the threshold with them; a fixed
    // constant cutoff would not track this
    let mut dim = vec![5u8; 500];
    dim.extend(vec![80u8; 500]);
    let mut bright = vec![120u8; 500];
    bright.extend(vec![250u8; 500]);

    let t_dim = otsu_threshold(&dim);
    let t_bright = otsu_threshold(&bright);
    assert!(t_dim < 80);
    assert!(t_bright >= 120);
    assert!(t_bright > t_dim);
}
