//! Tests for per-column line position estimation

use crate::extraction::sampler::sample_columns;
use crate::extraction::tests::test_utils::mask_from_fn;

#[test]
fn test_single_row_per_column_is_returned_exactly() {
    // Diagonal line: row = x
    let mask = mask_from_fn(100, 120, |x, y| y == x);
    let estimates = sample_columns(&mask, 100);

    assert_eq!(estimates.len(), 100);
    for (i, estimate) in estimates.iter().enumerate() {
        assert_eq!(*estimate, Some(i as f64));
    }
}

#[test]
fn test_thick_line_uses_median_row() {
    // Three-pixel-thick horizontal line centered on row 30
    let mask = mask_from_fn(50, 60, |_, y| (29..=31).contains(&y));
    let estimates = sample_columns(&mask, 50);

    for estimate in estimates {
        assert_eq!(estimate, Some(30.0));
    }
}

#[test]
fn test_even_pixel_count_averages_middle_rows() {
    // Curve ink on rows 10 and 20 only
    let mask = mask_from_fn(10, 40, |_, y| y == 10 || y == 20);
    let estimates = sample_columns(&mask, 10);

    for estimate in estimates {
        assert_eq!(estimate, Some(15.0));
    }
}

#[test]
fn test_empty_columns_are_missing() {
    // Ink only in the left half
    let mask = mask_from_fn(100, 50, |x, y| x < 50 && y == 20);
    let estimates = sample_columns(&mask, 100);

    assert_eq!(estimates[0], Some(20.0));
    assert_eq!(estimates[49], Some(20.0));
    assert_eq!(estimates[50], None);
    assert_eq!(estimates[99], None);
}

#[test]
fn test_grid_line_contamination_stays_near_curve() {
    // Curve at row 25 (three pixels thick) with a one-pixel grid line
    // at row 5 crossing every column; the median must stay on the curve
    let mask = mask_from_fn(40, 60, |_, y| y == 5 || (24..=26).contains(&y));
    let estimates = sample_columns(&mask, 40);

    for estimate in estimates {
        // rows 5, 24, 25, 26 -> median 24.5
        assert_eq!(estimate, Some(24.5));
    }
}

#[test]
fn test_oversampling_narrow_image() {
    // More sample points than pixel columns: positions repeat but the
    // sequence still has the requested length
    let mask = mask_from_fn(10, 20, |x, y| y == x);
    let estimates = sample_columns(&mask, 30);

    assert_eq!(estimates.len(), 30);
    assert_eq!(estimates[0], Some(0.0));
    assert_eq!(estimates[29], Some(9.0));
    assert!(estimates.iter().all(|e| e.is_some()));
}
