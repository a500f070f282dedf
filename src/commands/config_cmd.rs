//! Implementation of the `vetted config` command.

use super::load_config;
use crate::cli::ConfigArgs;
use vetted::Result;
use vetted::exit_codes::SUCCESS;

/// Print the effective configuration as YAML.
pub fn cmd_config(args: ConfigArgs) -> Result<i32> {
    let config = load_config(args.config.as_deref(), args.production)?;
    print!("{}", config.to_yaml()?);
    Ok(SUCCESS)
}
