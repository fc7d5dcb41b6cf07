//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod run_command;
pub mod info_command;

pub use command_traits::{Command, CommandFactory};
pub use run_command::RunCommand;
pub use info_command::InfoCommand;

use std::path::PathBuf;
use clap::ArgMatches;
use crate::errors::{CropError, CropResult};
use crate::mask::{FillRule, MaskChannels, MaskOptions, OutlineMode};

/// Factory for creating command instances based on CLI arguments
pub struct TilecropCommandFactory;

impl TilecropCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TilecropCommandFactory
    }
}

impl Default for TilecropCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for TilecropCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> CropResult<Box<dyn Command>> {
        if args.get_flag("info") {
            Ok(Box::new(InfoCommand::new(args)?))
        } else {
            Ok(Box::new(RunCommand::new(args)?))
        }
    }
}

/// Read a required path argument
pub(crate) fn path_arg(args: &ArgMatches, name: &str) -> CropResult<PathBuf> {
    args.get_one::<String>(name)
        .map(PathBuf::from)
        .ok_or_else(|| CropError::GenericError(format!("Missing {} argument", name)))
}

/// Build mask options from the masking flags
pub(crate) fn mask_options_from_args(args: &ArgMatches) -> CropResult<MaskOptions> {
    let fill_rule = match args.get_one::<String>("fill-rule") {
        Some(name) => FillRule::from_name(name)
            .ok_or_else(|| CropError::GenericError(format!("Unknown fill rule: {}", name)))?,
        None => FillRule::default(),
    };

    let outline = match args.get_one::<String>("outline").map(|s| s.to_lowercase()) {
        Some(name) if name == "foreground" => OutlineMode::Foreground,
        Some(name) if name == "background" => OutlineMode::Background,
        Some(name) => return Err(CropError::GenericError(format!("Unknown outline mode: {}", name))),
        None => OutlineMode::default(),
    };

    let channels = if args.get_flag("alpha-only") {
        MaskChannels::AlphaOnly
    } else {
        MaskChannels::All
    };

    Ok(MaskOptions { fill_rule, outline, channels })
}
