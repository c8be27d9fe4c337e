pub mod extraction;
pub mod inference;
pub mod advisor;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::TrendKit;

pub use extraction::{AxisCalibration, ChartError, ChartResult, ExtractionPipeline};
pub use inference::{Classifier, Scaler, TrendLabel, TrendPrediction, WINDOW_SIZE};
