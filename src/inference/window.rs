//! Trailing window selection
//!
//! Validates that the extracted series is long enough for the
//! classifier and slices off the most recent `WINDOW_SIZE` samples.

use crate::extraction::errors::{ChartError, ChartResult};
use crate::inference::traits::WINDOW_SIZE;

/// Select the trailing classifier window from an extracted series
///
/// The slice always covers the last `WINDOW_SIZE` samples (the most
/// recent price action); re-running on the same series yields the same
/// slice.
///
/// # Arguments
/// * `series` - The full extracted series
///
/// # Returns
/// The trailing window, or `InsufficientSeriesLength` reporting both
/// the required and the actual length
pub fn assemble_window(series: &[f64]) -> ChartResult<&[f64]> {
    if series.len() < WINDOW_SIZE {
        return Err(ChartError::InsufficientSeriesLength {
            required: WINDOW_SIZE,
            actual: series.len(),
        });
    }
    Ok(&series[series.len() - WINDOW_SIZE..])
}
