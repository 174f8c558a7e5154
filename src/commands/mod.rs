//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod encode_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use encode_command::EncodeCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::roi::errors::RoiResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct RoikitCommandFactory;

impl RoikitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RoikitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for RoikitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RoiResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("encode") {
            Ok(Box::new(EncodeCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}
