//! Prediction output types
//!
//! The payload handed to the response-assembly layer: predicted label,
//! class index, the three named probabilities, and enough metadata
//! (series length, window size) for the caller to render a diagnostic
//! without reaching into extraction internals.

use std::fmt;

use serde::Serialize;

use crate::inference::traits::{N_CLASSES, WINDOW_SIZE};

/// The three trend classes, in ordinal precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendLabel {
    Down,
    Sideways,
    Up,
}

impl TrendLabel {
    /// Label for a class index (0=Down, 1=Sideways, 2=Up)
    pub fn from_class_index(index: usize) -> Option<TrendLabel> {
        match index {
            0 => Some(TrendLabel::Down),
            1 => Some(TrendLabel::Sideways),
            2 => Some(TrendLabel::Up),
            _ => None,
        }
    }

    /// Human-readable label name
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::Down => "Down",
            TrendLabel::Sideways => "Sideways",
            TrendLabel::Up => "Up",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named class probabilities exactly as the classifier produced them
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendProbabilities {
    pub down: f64,
    pub sideways: f64,
    pub up: f64,
}

impl TrendProbabilities {
    /// Build from a raw classifier output vector
    pub fn from_raw(probs: [f64; N_CLASSES]) -> Self {
        TrendProbabilities {
            down: probs[0],
            sideways: probs[1],
            up: probs[2],
        }
    }

    /// Probability of the most likely class
    pub fn max(&self) -> f64 {
        self.down.max(self.sideways).max(self.up)
    }
}

/// Complete prediction payload for one chart screenshot
#[derive(Debug, Clone, Serialize)]
pub struct TrendPrediction {
    /// Predicted trend label
    pub trend: TrendLabel,
    /// Predicted class index (0=Down, 1=Sideways, 2=Up)
    pub class_index: usize,
    /// Raw classifier probabilities, not renormalized
    pub probabilities: TrendProbabilities,
    /// Length of the series extracted from the image
    pub series_length: usize,
    /// Number of trailing samples fed to the classifier
    pub window_size: usize,
}

/// Pick the predicted class from a probability vector
///
/// Ties break toward the lowest index, matching the natural ordinal
/// precedence Down < Sideways < Up.
pub fn argmax(probs: &[f64; N_CLASSES]) -> usize {
    let mut best = 0;
    for i in 1..N_CLASSES {
        if probs[i] > probs[best] {
            best = i;
        }
    }
    best
}

impl TrendPrediction {
    /// Assemble the payload from classifier output and series metadata
    pub fn new(probs: [f64; N_CLASSES], series_length: usize) -> Self {
        let class_index = argmax(&probs);
        // argmax over N_CLASSES entries is always a valid index
        let trend = TrendLabel::from_class_index(class_index).unwrap_or(TrendLabel::Sideways);

        TrendPrediction {
            trend,
            class_index,
            probabilities: TrendProbabilities::from_raw(probs),
            series_length,
            window_size: WINDOW_SIZE,
        }
    }
}
