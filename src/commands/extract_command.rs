//! Series extraction command
//!
//! Runs the image-to-series stages only, skipping the model entirely,
//! and dumps the extracted series as CSV. Useful for inspecting what
//! the classifier would actually see for a given screenshot.

use std::fs;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::parse_axis_args;
use crate::extraction::errors::{ChartError, ChartResult};
use crate::extraction::mapper::AxisCalibration;
use crate::extraction::pipeline::ExtractionPipeline;
use crate::extraction::sampler::DEFAULT_N_POINTS;
use crate::utils::logger::Logger;

/// Command for extracting a numeric series from a chart screenshot
pub struct ExtractCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Declared Y-axis range
    y_min: f64,
    y_max: f64,
    /// Sampling density, if overridden
    n_points: Option<usize>,
    /// Optional path for the CSV output
    output_file: Option<String>,
    /// Audit logger for recording runs
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command from CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Audit logger for recording runs
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ChartResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| ChartError::GenericError("Missing input file".to_string()))?
            .clone();

        let (y_min, y_max, n_points) = parse_axis_args(args)?;

        Ok(ExtractCommand {
            input_file,
            y_min,
            y_max,
            n_points,
            output_file: args.get_one::<String>("output").cloned(),
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> ChartResult<()> {
        debug!(
            "Extracting series from {} with axis [{}, {}]",
            self.input_file, self.y_min, self.y_max
        );

        let calibration = AxisCalibration::new(self.y_min, self.y_max)?;
        let pipeline = ExtractionPipeline::new(self.n_points.unwrap_or(DEFAULT_N_POINTS));

        let bytes = fs::read(&self.input_file)?;
        let series = pipeline.extract_series(&bytes, &calibration)?;

        let mut csv = String::from("index,value\n");
        for (i, value) in series.iter().enumerate() {
            csv.push_str(&format!("{},{}\n", i, value));
        }

        self.logger.log(&format!(
            "{} -> extracted {} samples",
            self.input_file,
            series.len()
        ))?;

        match &self.output_file {
            Some(path) => {
                fs::write(path, csv)?;
                info!("Series written to {}", path);
            }
            None => print!("{}", csv),
        }

        Ok(())
    }
}
