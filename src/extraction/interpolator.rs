//! Gap filling over missing column estimates
//!
//! Columns where the sampler found no foreground are filled by linear
//! interpolation against the nearest known neighbors by column index.
//! Missing runs touching either end of the sequence take the value of
//! their single nearest known neighbor (flat extension); there is no
//! extrapolation beyond the convex hull of known samples.

use log::debug;

use crate::extraction::errors::{ChartError, ChartResult};
use crate::extraction::sampler::ColumnEstimate;

/// Fill every missing estimate, producing a dense row-position sequence
///
/// # Arguments
/// * `estimates` - Per-column estimates from the sampler
///
/// # Returns
/// A gap-free sequence of the same length, or `NoCurveDetected` when
/// at least one column was sampled and every one of them was missing.
/// An empty input passes through empty; the window length check
/// downstream reports the actual count.
pub fn fill_gaps(estimates: &[ColumnEstimate]) -> ChartResult<Vec<f64>> {
    if estimates.is_empty() {
        return Ok(Vec::new());
    }

    let known: Vec<(usize, f64)> = estimates
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.map(|v| (i, v)))
        .collect();

    if known.is_empty() {
        return Err(ChartError::NoCurveDetected);
    }

    debug!(
        "Interpolating {} missing columns out of {}",
        estimates.len() - known.len(),
        estimates.len()
    );

    let mut dense = Vec::with_capacity(estimates.len());
    // Index into `known` of the nearest known column at or left of i
    let mut left = 0usize;

    for (i, estimate) in estimates.iter().enumerate() {
        if let Some(value) = estimate {
            while left + 1 < known.len() && known[left + 1].0 <= i {
                left += 1;
            }
            dense.push(*value);
            continue;
        }

        while left + 1 < known.len() && known[left + 1].0 < i {
            left += 1;
        }

        let (x0, y0) = known[left];
        if i < x0 {
            // Leading run before the first known column
            dense.push(y0);
        } else if left + 1 == known.len() {
            // Trailing run after the last known column
            dense.push(y0);
        } else {
            let (x1, y1) = known[left + 1];
            let t = (i - x0) as f64 / (x1 - x0) as f64;
            dense.push(y0 + t * (y1 - y0));
        }
    }

    Ok(dense)
}
