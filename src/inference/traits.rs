//! Scaler and classifier collaborator interfaces
//!
//! The extraction core never fits, trains or mutates a model; it only
//! calls through these traits. Implementations must be safe for
//! concurrent read-only use, since one process-wide instance is shared
//! across requests after startup.

use crate::extraction::errors::ChartResult;

/// Number of trailing samples handed to the classifier
pub const WINDOW_SIZE: usize = 100;

/// Number of trend classes (Down, Sideways, Up)
pub const N_CLASSES: usize = 3;

/// Feature scaling collaborator, parameters fixed at training time
pub trait Scaler {
    /// Transform a window into the feature space the classifier was
    /// trained on
    ///
    /// # Arguments
    /// * `window` - Exactly `WINDOW_SIZE` extracted values
    ///
    /// # Returns
    /// A transformed sequence of equal length, or `CollaboratorFailure`
    fn transform(&self, window: &[f64]) -> ChartResult<Vec<f64>>;
}

/// Trend classification collaborator
pub trait Classifier {
    /// Produce class probabilities for a scaled window
    ///
    /// The pipeline passes the probabilities through unchanged; no
    /// renormalization happens downstream.
    ///
    /// # Arguments
    /// * `window` - Scaled window of `WINDOW_SIZE` values, conceptually
    ///   a single-sequence batch of shape (1, WINDOW_SIZE, 1)
    ///
    /// # Returns
    /// Probabilities for Down, Sideways and Up, or `CollaboratorFailure`
    fn classify(&self, window: &[f64]) -> ChartResult<[f64; N_CLASSES]>;
}
