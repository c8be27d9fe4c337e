//! Classifier input assembly and inference collaborators
//!
//! This module owns everything downstream of series extraction: the
//! trailing-window selection, the Scaler/Classifier interfaces, the
//! reference JSON-loadable implementations, and the prediction payload
//! handed back to the caller.

pub mod traits;
pub mod window;
pub mod model;
pub mod prediction;

pub use traits::{Classifier, Scaler, N_CLASSES, WINDOW_SIZE};
pub use window::assemble_window;
pub use model::{DenseClassifier, MinMaxScaler};
pub use prediction::{TrendLabel, TrendPrediction, TrendProbabilities};
