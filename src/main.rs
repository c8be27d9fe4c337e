use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

use trendkit::commands::{CommandFactory, TrendkitCommandFactory};
use trendkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("TrendKit")
        .version("0.1")
        .about("Predict the price trend (Down / Sideways / Up) from a chart screenshot")
        .arg(
            Arg::new("input")
                .help("Input chart screenshot (png/jpg)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("y-min")
                .long("y-min")
                .help("Value at the bottom of the chart's Y axis")
                .value_name("VALUE")
                .required(true),
        )
        .arg(
            Arg::new("y-max")
                .long("y-max")
                .help("Value at the top of the chart's Y axis")
                .value_name("VALUE")
                .required(true),
        )
        .arg(
            Arg::new("n-points")
                .long("n-points")
                .help("Number of points to sample across the chart (default 300)")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .help("Classifier weight file (JSON, default model.json)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("scaler")
                .long("scaler")
                .help("Scaler parameter file (JSON, default scaler.json)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("risk")
                .long("risk")
                .help("Risk profile for the advisor text: low / medium / high")
                .value_name("PROFILE")
                .default_value("medium")
                .required(false),
        )
        .arg(
            Arg::new("horizon")
                .long("horizon")
                .help("Investment horizon for the advisor text: short / medium / long")
                .value_name("HORIZON")
                .default_value("short")
                .required(false),
        )
        .arg(
            Arg::new("extract-series")
                .long("extract-series")
                .help("Only extract the numeric series and dump it as CSV, skipping the model")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the result to this file instead of stdout")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    env_logger::init();

    let logger = match Logger::new("trendkit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = TrendkitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
