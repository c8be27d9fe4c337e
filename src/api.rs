//! Main library facade
//!
//! Bundles the startup-loaded model artifacts with the extraction
//! pipeline. The scaler and classifier are loaded once here and then
//! only ever read, so one `TrendKit` can serve concurrent callers.

use std::fs;
use std::path::Path;

use log::info;

use crate::extraction::errors::ChartResult;
use crate::extraction::mapper::AxisCalibration;
use crate::extraction::pipeline::ExtractionPipeline;
use crate::extraction::sampler::DEFAULT_N_POINTS;
use crate::inference::model::{DenseClassifier, MinMaxScaler};
use crate::inference::prediction::TrendPrediction;

/// Main interface to the TrendKit library
pub struct TrendKit {
    scaler: MinMaxScaler,
    classifier: DenseClassifier,
}

impl TrendKit {
    /// Create a TrendKit instance by loading model artifacts
    ///
    /// # Arguments
    /// * `model_path` - Path to the classifier weight file (JSON)
    /// * `scaler_path` - Path to the scaler parameter file (JSON)
    ///
    /// # Returns
    /// A ready-to-serve instance, or `ModelError` describing which
    /// artifact failed to load
    pub fn new<P: AsRef<Path>>(model_path: P, scaler_path: P) -> ChartResult<Self> {
        let scaler = MinMaxScaler::load_json(scaler_path)?;
        let classifier = DenseClassifier::load_json(model_path)?;
        info!("TrendKit ready: model and scaler loaded");
        Ok(TrendKit { scaler, classifier })
    }

    /// Predict the trend from raw image bytes
    ///
    /// # Arguments
    /// * `bytes` - Raw chart screenshot bytes (PNG/JPEG)
    /// * `y_min` - Value at the bottom of the chart's Y axis
    /// * `y_max` - Value at the top of the chart's Y axis
    /// * `n_points` - Optional sampling density, defaults to 300
    ///
    /// # Returns
    /// The prediction payload, or the failing stage's error
    pub fn predict_bytes(
        &self,
        bytes: &[u8],
        y_min: f64,
        y_max: f64,
        n_points: Option<usize>,
    ) -> ChartResult<TrendPrediction> {
        let calibration = AxisCalibration::new(y_min, y_max)?;
        let pipeline = ExtractionPipeline::new(n_points.unwrap_or(DEFAULT_N_POINTS));
        pipeline.predict(bytes, &calibration, &self.scaler, &self.classifier)
    }

    /// Predict the trend from an image file on disk
    ///
    /// # Arguments
    /// * `path` - Path to the chart screenshot
    /// * `y_min` - Value at the bottom of the chart's Y axis
    /// * `y_max` - Value at the top of the chart's Y axis
    /// * `n_points` - Optional sampling density, defaults to 300
    ///
    /// # Returns
    /// The prediction payload, or the failing stage's error
    pub fn predict_file(
        &self,
        path: &str,
        y_min: f64,
        y_max: f64,
        n_points: Option<usize>,
    ) -> ChartResult<TrendPrediction> {
        let bytes = fs::read(path)?;
        self.predict_bytes(&bytes, y_min, y_max, n_points)
    }
}
