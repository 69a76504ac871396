//! Command-line interface.

pub mod completions;
pub mod encrypt;
pub mod output;
pub mod print;
pub mod run;

use clap::{Args, Parser, Subcommand};

use crate::core::options::{Encoding, Options, PathSpec};

/// tomlenv - Load TOML configuration and encrypted vaults into the environment.
#[derive(Parser)]
#[command(
    name = "tomlenv",
    about = "Load TOML configuration and encrypted vaults into the environment",
    version
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that loads configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Source file, repeatable; earlier files win on duplicate keys
    #[arg(short, long = "path", value_name = "PATH")]
    pub paths: Vec<String>,

    /// Source file encoding (utf8 or latin1)
    #[arg(long)]
    pub encoding: Option<Encoding>,

    /// Log what happens to every key
    #[arg(long)]
    pub debug: bool,

    /// Replace variables that are already set
    #[arg(long = "override")]
    pub override_existing: bool,

    /// Decryption key URI(s), comma-separated; falls back to TOMLENV_KEY
    #[arg(long)]
    pub key: Option<String>,
}

impl LoadArgs {
    /// Options set explicitly on the command line.
    ///
    /// Switches that were not given stay unset so lower layers can fill them.
    pub fn to_options(&self) -> Options {
        Options {
            path: match self.paths.len() {
                0 => None,
                1 => Some(PathSpec::Single(self.paths[0].clone())),
                _ => Some(PathSpec::List(self.paths.clone())),
            },
            encoding: self.encoding,
            debug: self.debug.then_some(true),
            override_existing: self.override_existing.then_some(true),
            key: self.key.clone(),
            ..Options::default()
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a command with the loaded configuration in its environment
    Run {
        #[command(flatten)]
        load: LoadArgs,

        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Print the configuration that would be loaded
    Print {
        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output typed values as JSON
        #[arg(long, conflicts_with = "json")]
        typed: bool,
    },

    /// Encrypt a plaintext file into a vault field
    Encrypt {
        /// Environment name, stored as VAULT_<ENV>
        #[arg(short, long = "env")]
        environment: String,

        /// Plaintext TOML file to encrypt
        #[arg(short, long, default_value = ".env")]
        input: String,

        /// Vault file to create or update
        #[arg(long, default_value = ".env.vault")]
        vault: String,

        /// Hex key or key URI; a new key is generated when omitted
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Command {
    /// Merged load options, for the commands that load configuration.
    pub fn load_options(&self) -> Option<Options> {
        match self {
            Self::Run { load, command } => Some(load_options(load, command)),
            Self::Print { load, typed, .. } => {
                let mut options = load_options(load, &[]);
                if *typed {
                    options.typed_output = Some(true);
                }
                Some(options)
            }
            _ => None,
        }
    }

    /// Whether any option source asked for per-key diagnostics.
    pub fn debug_requested(&self) -> bool {
        self.load_options()
            .map_or(false, |options| options.debug_enabled())
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Layer command-line flags over `tomlenv_config_*` arguments over
/// `TOMLENV_CONFIG_*` variables.
pub fn load_options(load: &LoadArgs, args: &[String]) -> Options {
    let env_vars = std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)));

    load.to_options()
        .layer(Options::from_args(args))
        .layer(Options::from_env_vars(env_vars))
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    let options = command.load_options().unwrap_or_default();
    match command {
        Run { command, .. } => run::execute(&options, &command),
        Print { json, typed, .. } => print::execute(&options, json, typed),
        Encrypt {
            environment,
            input,
            vault,
            key,
        } => encrypt::execute(&environment, &input, &vault, key),
        Completions { shell } => completions::execute(shell),
    }
}
