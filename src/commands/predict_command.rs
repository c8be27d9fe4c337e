//! Trend prediction command
//!
//! Loads the model artifacts, runs the full extraction and inference
//! pipeline on one chart screenshot, and prints the prediction payload
//! (with advisor commentary) as JSON.

use std::fs;

use clap::ArgMatches;
use log::{debug, info};
use serde_json::json;

use crate::advisor::{self, Horizon, RiskProfile};
use crate::api::TrendKit;
use crate::commands::command_traits::Command;
use crate::commands::parse_axis_args;
use crate::extraction::errors::{ChartError, ChartResult};
use crate::utils::logger::Logger;

/// Command for predicting the trend from a chart screenshot
pub struct PredictCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Path to the classifier weight file
    model_file: String,
    /// Path to the scaler parameter file
    scaler_file: String,
    /// Declared Y-axis range
    y_min: f64,
    y_max: f64,
    /// Sampling density, if overridden
    n_points: Option<usize>,
    /// Advisor inputs
    risk: RiskProfile,
    horizon: Horizon,
    /// Optional path for the JSON payload
    output_file: Option<String>,
    /// Audit logger for recording runs
    logger: &'a Logger,
}

impl<'a> PredictCommand<'a> {
    /// Create a new predict command from CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Audit logger for recording runs
    ///
    /// # Returns
    /// A new PredictCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ChartResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| ChartError::GenericError("Missing input file".to_string()))?
            .clone();

        let (y_min, y_max, n_points) = parse_axis_args(args)?;

        let model_file = args
            .get_one::<String>("model")
            .cloned()
            .unwrap_or_else(|| "model.json".to_string());
        let scaler_file = args
            .get_one::<String>("scaler")
            .cloned()
            .unwrap_or_else(|| "scaler.json".to_string());

        let risk = RiskProfile::parse(args.get_one::<String>("risk").map(|s| s.as_str()).unwrap_or(""));
        let horizon = Horizon::parse(args.get_one::<String>("horizon").map(|s| s.as_str()).unwrap_or(""));

        Ok(PredictCommand {
            input_file,
            model_file,
            scaler_file,
            y_min,
            y_max,
            n_points,
            risk,
            horizon,
            output_file: args.get_one::<String>("output").cloned(),
            logger,
        })
    }
}

impl<'a> Command for PredictCommand<'a> {
    fn execute(&self) -> ChartResult<()> {
        debug!(
            "Predicting from {} with axis [{}, {}]",
            self.input_file, self.y_min, self.y_max
        );

        let kit = TrendKit::new(&self.model_file, &self.scaler_file)?;
        let prediction = kit.predict_file(&self.input_file, self.y_min, self.y_max, self.n_points)?;
        let message = advisor::explain(&prediction, self.risk, self.horizon);

        self.logger.log_prediction(&self.input_file, &prediction)?;

        let payload = json!({
            "trend": prediction.trend,
            "class_index": prediction.class_index,
            "probabilities": prediction.probabilities,
            "meta": {
                "series_length": prediction.series_length,
                "used_window_size": prediction.window_size,
                "risk_profile": self.risk.as_str(),
                "horizon": self.horizon.as_str(),
                "file_name": self.input_file,
            },
            "message": message,
        });
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|e| ChartError::GenericError(e.to_string()))?;

        match &self.output_file {
            Some(path) => {
                fs::write(path, rendered)?;
                info!("Prediction written to {}", path);
            }
            None => println!("{}", rendered),
        }

        Ok(())
    }
}
