//! Custom error types for chart series extraction

use std::fmt;
use std::io;

/// Extraction-specific error types
///
/// Every pipeline stage fails with exactly one of these kinds so the
/// caller can render an actionable message; there is no generic
/// "extraction failed" catch-all for stage errors.
#[derive(Debug)]
pub enum ChartError {
    /// I/O error
    IoError(io::Error),
    /// Image bytes were empty, truncated or not a recognized container
    DecodeError(String),
    /// Binarization produced zero foreground pixels in every sampled column
    NoCurveDetected,
    /// Recovered curve has zero vertical pixel extent
    DegenerateRange,
    /// Extracted series is shorter than the classifier window
    InsufficientSeriesLength { required: usize, actual: usize },
    /// Axis calibration with `y_max <= y_min`
    InvalidCalibration { y_min: f64, y_max: f64 },
    /// Scaler or classifier collaborator failed
    CollaboratorFailure(String),
    /// Model or scaler file could not be loaded or parsed
    ModelError(String),
    /// Generic error with message (CLI argument handling only)
    GenericError(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::IoError(e) => write!(f, "I/O error: {}", e),
            ChartError::DecodeError(msg) => write!(f, "Could not decode image: {}", msg),
            ChartError::NoCurveDetected => write!(f, "No line detected anywhere in the image"),
            ChartError::DegenerateRange => write!(f, "Invalid vertical range: curve is flat at pixel resolution"),
            ChartError::InsufficientSeriesLength { required, actual } => write!(
                f,
                "Not enough points extracted from image: need at least {}, got {}",
                required, actual
            ),
            ChartError::InvalidCalibration { y_min, y_max } => write!(
                f,
                "Invalid axis calibration: y_max ({}) must be greater than y_min ({})",
                y_max, y_min
            ),
            ChartError::CollaboratorFailure(msg) => write!(f, "Scaler/classifier failure: {}", msg),
            ChartError::ModelError(msg) => write!(f, "Model loading error: {}", msg),
            ChartError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<io::Error> for ChartError {
    fn from(error: io::Error) -> Self {
        ChartError::IoError(error)
    }
}

/// Result type for extraction and inference operations
pub type ChartResult<T> = Result<T, ChartError>;
