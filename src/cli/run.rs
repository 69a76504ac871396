//! Run command.
//!
//! Loads configuration into the process environment, then runs a command
//! that inherits it.

use crate::cli::output;
use crate::core::loader;
use crate::core::options::Options;
use crate::error::{Error, Result};

/// Run a command with the loaded configuration in its environment.
///
/// `tomlenv_config_*=value` entries among the command's arguments are
/// already part of `options`; they are still passed through to the command.
pub fn execute(options: &Options, command: &[String]) -> Result<()> {
    let exit_code = run_with_config(options, command)?;
    std::process::exit(exit_code);
}

fn run_with_config(options: &Options, command: &[String]) -> Result<i32> {
    if command.is_empty() {
        return Err(Error::Other("no command specified".to_string()));
    }

    let result = loader::config(options)?;
    if let Some(e) = &result.error {
        output::warn(&format!("partial load: {}", e));
    }

    let status = std::process::Command::new(&command[0])
        .args(&command[1..])
        .status()?;

    Ok(status.code().unwrap_or(1))
}
