//! Logger utility for per-run audit logging
//!
//! Console logging goes through the standard `log` macros (initialized
//! with env_logger in `main`). In addition, commands record a one-line
//! summary of each prediction run into an audit file, so a batch of
//! invocations leaves a reviewable trail.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::inference::prediction::TrendPrediction;

/// Append-only audit log for prediction runs
pub struct Logger {
    file: Mutex<std::fs::File>,
}

impl Logger {
    /// Open (or create) the audit log file
    ///
    /// # Arguments
    /// * `log_file` - Path to the audit log file
    ///
    /// # Returns
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(log_file)?;
        Ok(Logger { file: Mutex::new(file) })
    }

    /// Append a message line to the audit log
    ///
    /// # Arguments
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut file = self.file.lock().unwrap();
        writeln!(file, "{}", message)?;
        file.flush()
    }

    /// Record a finished prediction run
    ///
    /// # Arguments
    /// * `input` - The input image path
    /// * `prediction` - The finished prediction payload
    pub fn log_prediction(&self, input: &str, prediction: &TrendPrediction) -> io::Result<()> {
        self.log(&format!(
            "{} -> {} (down={:.3}, sideways={:.3}, up={:.3}, series={}, window={})",
            input,
            prediction.trend,
            prediction.probabilities.down,
            prediction.probabilities.sideways,
            prediction.probabilities.up,
            prediction.series_length,
            prediction.window_size
        ))
    }
}
