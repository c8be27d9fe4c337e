//! Per-column line position estimation
//!
//! Partitions the image width into evenly spaced sample columns and
//! estimates, for each one, the pixel row where the plotted curve
//! crosses it. Columns where binarization found no ink are reported as
//! missing and left for the gap interpolator.

use crate::extraction::binarizer::Mask;

/// Default horizontal sampling density
pub const DEFAULT_N_POINTS: usize = 300;

/// One estimate per sampled column: the median foreground row, or
/// `None` when the column contains no foreground at all
pub type ColumnEstimate = Option<f64>;

/// Estimate the curve's row position in each sampled column
///
/// Columns are `n_points` evenly spaced integer indices spanning
/// `[0, width - 1]` inclusive, endpoints included. Within a column the
/// estimate is the median of all foreground row indices; the median
/// resists thick or anti-aliased line rendering and grid-line
/// contamination better than the mean would.
///
/// # Arguments
/// * `mask` - Foreground mask from the binarizer
/// * `n_points` - Number of columns to sample (default 300)
///
/// # Returns
/// An ordered sequence of estimates, length `n_points`
pub fn sample_columns(mask: &Mask, n_points: usize) -> Vec<ColumnEstimate> {
    let mut estimates = Vec::with_capacity(n_points);

    for x in sample_positions(mask.width(), n_points) {
        let rows: Vec<u32> = (0..mask.height())
            .filter(|&y| mask.is_foreground(x, y))
            .collect();

        if rows.is_empty() {
            estimates.push(None);
        } else {
            estimates.push(Some(median_of_sorted(&rows)));
        }
    }

    estimates
}

/// Evenly spaced integer column indices over `[0, width - 1]` inclusive
///
/// A zero sampling density yields no positions at all; the resulting
/// empty series is rejected later by the window length check.
fn sample_positions(width: u32, n_points: usize) -> Vec<u32> {
    if n_points == 0 {
        return Vec::new();
    }
    if n_points == 1 {
        return vec![0];
    }

    let span = (width - 1) as f64;
    let steps = (n_points - 1) as f64;
    (0..n_points)
        .map(|i| (i as f64 * span / steps) as u32)
        .collect()
}

/// Median of an ascending-sorted list of row indices
///
/// Vertical scans produce rows in ascending order already, so no sort
/// is needed here. Even-length input averages the two middle entries.
fn median_of_sorted(rows: &[u32]) -> f64 {
    let n = rows.len();
    if n % 2 == 1 {
        rows[n / 2] as f64
    } else {
        (rows[n / 2 - 1] as f64 + rows[n / 2] as f64) / 2.0
    }
}
