//! Vault decryption.
//!
//! A vault is a TOML file holding one base64 ciphertext per environment:
//!
//! ```toml
//! VAULT_DEVELOPMENT = "s7NYXa809k/bVSPw..."
//! VAULT_PRODUCTION = "..."
//! ```
//!
//! The key URI picks the field and carries the key. Several comma-joined
//! keys are tried in order; the first that decrypts wins, and if none does
//! the error of the last attempt is returned.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::cipher::{AesGcm, Cipher};
use crate::core::constants::KEY_VAR;
use crate::core::key;
use crate::core::locate;
use crate::core::options::Options;
use crate::core::populate::{populate, EnvTarget};
use crate::core::source::{self, LoadResult};
use crate::core::types::{ParsedMapping, VaultRecord};
use crate::core::value;
use crate::error::{Error, KeyError, Result, VaultError};

/// The key string to use: the explicit option, else the ambient variable, else empty.
pub fn resolve_key(explicit: Option<&str>, ambient: Option<&str>) -> Zeroizing<String> {
    let key = explicit
        .filter(|k| !k.is_empty())
        .or_else(|| ambient.filter(|k| !k.is_empty()))
        .unwrap_or_default();
    Zeroizing::new(key.to_string())
}

/// Key string for `options`, falling back to `TOMLENV_KEY`.
pub fn key_for(options: &Options) -> Zeroizing<String> {
    let ambient = Zeroizing::new(std::env::var(KEY_VAR).unwrap_or_default());
    resolve_key(options.key.as_deref(), Some(ambient.as_str()))
}

/// Read the raw vault record from `path`.
///
/// # Errors
///
/// Returns `VaultError::MissingData` if the file cannot be loaded or holds no fields.
pub fn read_record(path: &Path, options: &Options) -> Result<VaultRecord> {
    let sources = source::read_sources(&[path.to_path_buf()], options);

    if let Some(e) = sources.last_error {
        return Err(VaultError::MissingData {
            reason: format!("cannot parse {}: {}", path.display(), e),
        }
        .into());
    }
    if sources.parsed.is_empty() {
        return Err(VaultError::MissingData {
            reason: format!("{} holds no vault fields", path.display()),
        }
        .into());
    }

    Ok(sources.parsed)
}

/// Decrypt the payload for one key URI.
fn decrypt_with(record: &VaultRecord, vault_path: &Path, key_uri: &str) -> Result<Zeroizing<String>> {
    let descriptor = key::resolve(key_uri)?;
    let field = descriptor.field_name();

    let ciphertext = record
        .get(&field)
        .ok_or_else(|| VaultError::EnvironmentNotFound {
            field: field.clone(),
            path: vault_path.to_path_buf(),
        })?;

    let cipher = AesGcm;
    debug!(field = %field, cipher = cipher.name(), "decrypting vault field");
    cipher.decrypt(ciphertext, descriptor.secret())
}

/// Try each candidate key in order until one decrypts.
///
/// # Errors
///
/// Returns the error of the last attempted key when none succeeds.
pub fn decrypt_record(record: &VaultRecord, vault_path: &Path, keys: &str) -> Result<Zeroizing<String>> {
    let mut last_error = None;

    for (attempt, candidate) in key::split_candidates(keys).into_iter().enumerate() {
        match decrypt_with(record, vault_path, candidate) {
            Ok(plaintext) => {
                debug!(attempt, "vault decrypted");
                return Ok(plaintext);
            }
            Err(e) => {
                debug!(attempt, code = e.code(), "key did not unlock vault");
                last_error = Some(e);
            }
        }
    }

    // split_candidates always yields at least one entry
    Err(last_error.unwrap_or_else(|| Error::from(KeyError::InvalidFormat)))
}

fn locate_vault(options: &Options) -> Result<PathBuf> {
    locate::locate(options).ok_or_else(|| {
        VaultError::MissingData {
            reason: "no vault file found".to_string(),
        }
        .into()
    })
}

/// Locate, decrypt and parse the vault.
///
/// # Errors
///
/// Vault, key and cipher errors from the last attempted key, or
/// `Error::Parse` if the decrypted text is not valid TOML.
pub fn parse_vault(options: &Options) -> Result<ParsedMapping> {
    let vault_path = locate_vault(options)?;
    parse_vault_at(&vault_path, options)
}

fn parse_vault_at(vault_path: &Path, options: &Options) -> Result<ParsedMapping> {
    let record = read_record(vault_path, options)?;
    let keys = key_for(options);
    let plaintext = decrypt_record(&record, vault_path, &keys)?;

    source::parse(&plaintext, vault_path)
}

/// Decrypt the vault and populate `target` with its contents.
pub fn config_vault(options: &Options, target: &mut dyn EnvTarget) -> Result<LoadResult> {
    let vault_path = locate_vault(options)?;
    config_vault_at(&vault_path, options, target)
}

/// [`config_vault`] for a vault that has already been located.
pub fn config_vault_at(
    vault_path: &Path,
    options: &Options,
    target: &mut dyn EnvTarget,
) -> Result<LoadResult> {
    info!(path = %vault_path.display(), "loading env from encrypted vault");

    let typed = parse_vault_at(vault_path, options)?;
    let parsed = value::stringify(&typed);

    populate(target, &parsed, options.populate_options());

    Ok(LoadResult {
        parsed,
        typed: options.typed_enabled().then_some(typed),
        error: None,
    })
}
