//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod predict_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use predict_command::PredictCommand;
pub use extract_command::ExtractCommand;

use clap::ArgMatches;

use crate::extraction::errors::{ChartError, ChartResult};
use crate::utils::logger::Logger;

/// Parse the axis calibration arguments shared by all commands
///
/// # Arguments
/// * `args` - CLI argument matches from clap
///
/// # Returns
/// `(y_min, y_max, n_points)` or an error for unparseable numbers
pub fn parse_axis_args(args: &ArgMatches) -> ChartResult<(f64, f64, Option<usize>)> {
    let y_min = parse_number::<f64>(args, "y-min")?;
    let y_max = parse_number::<f64>(args, "y-max")?;

    let n_points = match args.get_one::<String>("n-points") {
        Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
            ChartError::GenericError(format!("Invalid value for --n-points: {}", raw))
        })?),
        None => None,
    };

    Ok((y_min, y_max, n_points))
}

fn parse_number<T: std::str::FromStr>(args: &ArgMatches, name: &str) -> ChartResult<T> {
    let raw = args
        .get_one::<String>(name)
        .ok_or_else(|| ChartError::GenericError(format!("Missing required argument --{}", name)))?;
    raw.parse::<T>()
        .map_err(|_| ChartError::GenericError(format!("Invalid value for --{}: {}", name, raw)))
}

/// Factory for creating command instances based on CLI arguments
pub struct TrendkitCommandFactory;

impl TrendkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TrendkitCommandFactory
    }
}

impl Default for TrendkitCommandFactory {
    fn default() -> Self {
        TrendkitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for TrendkitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> ChartResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract-series") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else {
            Ok(Box::new(PredictCommand::new(args, logger)?))
        }
    }
}
