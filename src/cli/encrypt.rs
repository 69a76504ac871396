//! Encrypt command.
//!
//! Encrypts a plaintext TOML file into the `VAULT_<ENV>` field of a vault
//! file, creating the vault if needed. Other fields are left untouched.

use std::fs;
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::{cipher, key, locate, source};
use crate::error::{Error, Result};

/// Encrypt `input` into the vault under `environment`.
pub fn execute(environment: &str, input: &str, vault: &str, given_key: Option<String>) -> Result<()> {
    let environment = environment.trim();
    if environment.is_empty() {
        return Err(Error::Other("environment name cannot be empty".to_string()));
    }

    let input_path = Path::new(input);
    let plaintext = Zeroizing::new(fs::read_to_string(input_path).map_err(|source| {
        Error::Read {
            path: input_path.to_path_buf(),
            source,
        }
    })?);
    // Refuse to seal something that would fail to parse after decryption.
    source::parse(&plaintext, input_path)?;

    let (secret, generated) = match given_key {
        Some(given) => (secret_from(given, environment)?, false),
        None => (cipher::generate_key(), true),
    };
    let ciphertext = cipher::encrypt(&plaintext, &secret)?;

    let vault_path = locate::ensure_vault_suffix(Path::new(vault));
    let mut record = if vault_path.exists() {
        source::read_source(&vault_path, Default::default())?
    } else {
        toml::Table::new()
    };

    let field = key::field_name(environment);
    debug!(field = %field, vault = %vault_path.display(), "writing vault field");
    record.insert(field.clone(), toml::Value::String(ciphertext));
    fs::write(&vault_path, toml::to_string(&record)?)?;

    output::success(&format!(
        "encrypted {} into {} as {}",
        input,
        vault_path.display(),
        field
    ));
    if generated {
        output::kv("key", key::compose(&secret, environment));
        output::hint("keep this key out of the repository; set TOMLENV_KEY to load the vault");
    }

    Ok(())
}

/// Accept either a full key URI or the bare hex secret.
///
/// A key URI must name the same environment as `--env`, otherwise the
/// written field could never be opened with it.
fn secret_from(given: String, environment: &str) -> Result<Zeroizing<String>> {
    let given = Zeroizing::new(given);
    let Ok(descriptor) = key::resolve(&given) else {
        return Ok(given);
    };

    if descriptor.field_name() != key::field_name(environment) {
        return Err(Error::Other(format!(
            "key is for environment '{}' but --env is '{}'",
            descriptor.environment(),
            environment
        )));
    }

    Ok(Zeroizing::new(descriptor.secret().to_string()))
}
