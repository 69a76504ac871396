//! Top-level loading.
//!
//! Without a key the plaintext sources are loaded. With a key the vault is
//! decrypted instead, unless there is no vault yet, in which case a warning
//! is logged and the plaintext sources are loaded after all.

use tracing::warn;

use crate::core::constants::{KEY_VAR, VAULT_FILE};
use crate::core::locate;
use crate::core::options::Options;
use crate::core::populate::{EnvTarget, ProcessEnv};
use crate::core::source::{load_sources, LoadResult};
use crate::core::vault;
use crate::error::Result;

/// Load configuration into the process environment.
///
/// # Errors
///
/// Key, vault and cipher errors. Failures reading plaintext sources are
/// reported in `LoadResult::error` instead.
pub fn config(options: &Options) -> Result<LoadResult> {
    config_with(options, &mut ProcessEnv)
}

/// Load configuration into `target`.
///
/// # Errors
///
/// See [`config`].
pub fn config_with(options: &Options, target: &mut dyn EnvTarget) -> Result<LoadResult> {
    if vault::key_for(options).is_empty() {
        return Ok(load_plaintext(options, target));
    }

    let Some(vault_path) = locate::locate(options) else {
        warn!(
            "you set {} but the {} file is missing; did you forget to build it?",
            KEY_VAR, VAULT_FILE
        );
        return Ok(load_plaintext(options, target));
    };

    vault::config_vault_at(&vault_path, options, target)
}

fn load_plaintext(options: &Options, target: &mut dyn EnvTarget) -> LoadResult {
    load_sources(&locate::source_paths(options), options, target)
}
