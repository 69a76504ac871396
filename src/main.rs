//! tomlenv - Load TOML configuration and encrypted vaults into the environment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tomlenv::cli::output;
use tomlenv::cli::{execute, Cli};
use tomlenv::core::constants::LOG_VAR;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose || cli.command.debug_requested() {
            EnvFilter::new("tomlenv=debug")
        } else {
            EnvFilter::new("tomlenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match e.code() {
            "MISSING_DATA" => Some("run: tomlenv encrypt --env <environment>"),
            "NOT_FOUND_ENVIRONMENT" => {
                Some("the key's environment has no VAULT_<ENV> field; encrypt it first")
            }
            "INVALID_KEY_FORMAT" | "INVALID_KEY_MISSING_SECRET" | "INVALID_KEY_MISSING_ENVIRONMENT" => {
                Some("keys look like tomlenv://:key_<hex>@tomlenv.local/vault?environment=<name>")
            }
            "DECRYPTION_FAILED" => Some("check that TOMLENV_KEY matches the vault"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
