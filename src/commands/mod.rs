//! Command implementations for vetted.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command returns the process exit code on success;
//! errors carry their own exit code.

mod check;
mod config_cmd;
mod rules;

use crate::cli::Command;
use std::path::Path;
use tracing::debug;
use vetted::{Result, ValidationConfig};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Rules => rules::cmd_rules(),
        Command::Config(args) => config_cmd::cmd_config(args),
    }
}

/// Load the config file (or the defaults) and apply the production profile
/// when requested.
fn load_config(path: Option<&Path>, production: bool) -> Result<ValidationConfig> {
    debug!(path = ?path, production, "loading configuration");

    let config = match path {
        Some(path) => ValidationConfig::load(path)?,
        None => ValidationConfig::default(),
    };

    Ok(if production {
        config.into_production()
    } else {
        config
    })
}
