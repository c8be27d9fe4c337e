//! Extraction pipeline orchestration
//!
//! Chains the per-stage transforms into one fail-fast operation:
//! bytes -> decode -> binarize -> sample -> interpolate -> map ->
//! window -> scale -> classify. Each stage returns a typed result and
//! the chain short-circuits on the first failure, so every request ends
//! in either a prediction or one specific error kind.
//!
//! A pipeline value holds only the sampling density; every invocation
//! is a pure function of its input bytes and calibration, with no state
//! shared across calls.

use log::{debug, info};

use crate::extraction::binarizer::binarize;
use crate::extraction::decoder::decode_image;
use crate::extraction::errors::ChartResult;
use crate::extraction::interpolator::fill_gaps;
use crate::extraction::mapper::{map_to_values, AxisCalibration};
use crate::extraction::sampler::{sample_columns, DEFAULT_N_POINTS};
use crate::inference::traits::{Classifier, Scaler};
use crate::inference::window::assemble_window;
use crate::inference::prediction::TrendPrediction;

/// Orchestrates chart series extraction and classifier input assembly
pub struct ExtractionPipeline {
    n_points: usize,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        ExtractionPipeline::new(DEFAULT_N_POINTS)
    }
}

impl ExtractionPipeline {
    /// Create a pipeline with the given horizontal sampling density
    ///
    /// # Arguments
    /// * `n_points` - Number of columns to sample across the image width
    pub fn new(n_points: usize) -> Self {
        ExtractionPipeline { n_points }
    }

    /// Configured sampling density
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Extract an approximate numeric series from chart image bytes
    ///
    /// Runs decode, binarize, per-column sampling, gap interpolation
    /// and axis mapping, stopping at the first failing stage.
    ///
    /// # Arguments
    /// * `bytes` - Raw image bytes
    /// * `calibration` - Declared Y-axis value range
    ///
    /// # Returns
    /// The extracted series (length `n_points`), or the failing stage's
    /// error
    pub fn extract_series(
        &self,
        bytes: &[u8],
        calibration: &AxisCalibration,
    ) -> ChartResult<Vec<f64>> {
        let image = decode_image(bytes)?;
        let mask = binarize(&image);
        let estimates = sample_columns(&mask, self.n_points);
        let rows = fill_gaps(&estimates)?;
        let series = map_to_values(&rows, calibration)?;

        debug!("Extracted series of {} samples", series.len());
        Ok(series)
    }

    /// Extract a series and run it through the scaler and classifier
    ///
    /// The trailing window is validated and selected here; the scaler
    /// and classifier are read-only collaborators passed in by the
    /// caller (loaded once at startup, never mutated by this core).
    /// Classifier probabilities are passed through unchanged.
    ///
    /// # Arguments
    /// * `bytes` - Raw image bytes
    /// * `calibration` - Declared Y-axis value range
    /// * `scaler` - Feature scaling collaborator
    /// * `classifier` - Trend classification collaborator
    ///
    /// # Returns
    /// The prediction payload, or the failing stage's error
    pub fn predict(
        &self,
        bytes: &[u8],
        calibration: &AxisCalibration,
        scaler: &dyn Scaler,
        classifier: &dyn Classifier,
    ) -> ChartResult<TrendPrediction> {
        let series = self.extract_series(bytes, calibration)?;

        let window = assemble_window(&series)?;
        let scaled = scaler.transform(window)?;
        let probs = classifier.classify(&scaled)?;

        let prediction = TrendPrediction::new(probs, series.len());
        info!(
            "Predicted trend: {} (down={:.3}, sideways={:.3}, up={:.3})",
            prediction.trend,
            prediction.probabilities.down,
            prediction.probabilities.sideways,
            prediction.probabilities.up
        );
        Ok(prediction)
    }
}
