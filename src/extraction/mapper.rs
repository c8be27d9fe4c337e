//! Pixel-row to axis-value mapping
//!
//! Maps the dense row-position sequence onto the caller-declared Y-axis
//! range. Calibration uses the observed vertical extent of the
//! recovered curve rather than the raw image height, so charts that do
//! not span the full image are still stretched to the full declared
//! range. Row coordinates grow downward in raster space, so the
//! smallest row maps to `y_max`.

use log::debug;

use crate::extraction::errors::{ChartError, ChartResult};

/// Caller-declared real-world value range for the chart's Y axis
#[derive(Debug, Clone, Copy)]
pub struct AxisCalibration {
    y_min: f64,
    y_max: f64,
}

impl AxisCalibration {
    /// Create a calibration, validating `y_max > y_min`
    ///
    /// # Arguments
    /// * `y_min` - Value at the bottom of the chart's Y axis
    /// * `y_max` - Value at the top of the chart's Y axis
    ///
    /// # Returns
    /// The calibration, or `InvalidCalibration` when the range is empty
    /// or inverted
    pub fn new(y_min: f64, y_max: f64) -> ChartResult<Self> {
        if y_max <= y_min {
            return Err(ChartError::InvalidCalibration { y_min, y_max });
        }
        Ok(AxisCalibration { y_min, y_max })
    }

    /// Bottom-of-axis value
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Top-of-axis value
    pub fn y_max(&self) -> f64 {
        self.y_max
    }
}

/// Map pixel rows to axis values with a pointwise affine transform
///
/// `value(r) = y_max - (r - top) / (bottom - top) * (y_max - y_min)`
/// where `top`/`bottom` are the observed minimum and maximum row across
/// the whole sequence. The transform is monotonic in `r`.
///
/// # Arguments
/// * `rows` - Dense row-position sequence from the interpolator
/// * `calibration` - Declared Y-axis range
///
/// # Returns
/// The extracted series, or `DegenerateRange` when the curve has zero
/// vertical extent (axis mapping would divide by zero)
pub fn map_to_values(rows: &[f64], calibration: &AxisCalibration) -> ChartResult<Vec<f64>> {
    let top = rows.iter().cloned().fold(f64::INFINITY, f64::min);
    let bottom = rows.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if bottom == top {
        return Err(ChartError::DegenerateRange);
    }

    debug!(
        "Mapping rows [{}, {}] onto values [{}, {}]",
        top, bottom, calibration.y_min, calibration.y_max
    );

    let span = calibration.y_max - calibration.y_min;
    let values = rows
        .iter()
        .map(|&r| calibration.y_max - (r - top) / (bottom - top) * span)
        .collect();

    Ok(values)
}
