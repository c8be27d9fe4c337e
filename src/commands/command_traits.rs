//! Command pattern interfaces
//!
//! Each CLI verb (predict, extract-series) is packaged as an
//! executable Command holding its parsed arguments and a handle to the
//! audit logger. A factory inspects the clap matches and decides which
//! command to build, keeping `main` free of per-verb logic.

use crate::extraction::errors::ChartResult;
use crate::utils::logger::Logger;

/// One executable CLI verb with its arguments already resolved
pub trait Command {
    /// Run the verb to completion
    ///
    /// # Returns
    /// `Ok(())` after output has been written, or the failing stage's
    /// error for `main` to report
    fn execute(&self) -> ChartResult<()>;
}

/// Chooses and builds the Command for a parsed invocation
pub trait CommandFactory<'a> {
    /// Build the command matching the given CLI arguments
    ///
    /// # Arguments
    /// * `args` - Parsed clap matches
    /// * `logger` - Audit logger the command will record its run into
    ///
    /// # Returns
    /// The boxed command, or an error for missing/unparseable arguments
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        logger: &'a Logger,
    ) -> ChartResult<Box<dyn Command + 'a>>;
}
