//! Configuration setup command.
//!
//! Runs the interactive wizard, which asks which sections to configure and
//! then prompts for their settings, and saves the result to `config.json`
//! in the application data directory.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset the configuration to its defaults instead of running the wizard
    ///
    /// The defaults are written straight to disk without any prompts, which
    /// also repairs a configuration file that no longer parses.
    #[arg(short, long)]
    reset: bool,
}

/// Executes the init command.
///
/// Runs the wizard, prefilled from the current configuration, or writes the
/// defaults when `--reset` is given.
///
/// # Arguments
///
/// * `init_args` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` once the configuration is saved, or an error if a prompt
/// fails or the file cannot be written.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.reset { Config::default() } else { Config::init()? };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
