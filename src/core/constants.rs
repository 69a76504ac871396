//! Constants used throughout tomlenv.
//!
//! Centralizes magic strings and configuration values.

/// Default plaintext source file name (.env).
pub const ENV_FILE: &str = ".env";

/// Suffix that turns a source path into its vault path.
pub const VAULT_SUFFIX: &str = ".vault";

/// Default vault file name (.env.vault).
pub const VAULT_FILE: &str = ".env.vault";

/// Prefix of the per-environment ciphertext fields in a vault.
pub const VAULT_FIELD_PREFIX: &str = "VAULT_";

/// Query parameter of a key URI naming the environment.
pub const ENVIRONMENT_PARAM: &str = "environment";

/// Ambient environment variable carrying the decryption key(s).
pub const KEY_VAR: &str = "TOMLENV_KEY";

/// Prefix of the environment variables that configure loading.
pub const CONFIG_VAR_PREFIX: &str = "TOMLENV_CONFIG_";

/// Prefix of the `name=value` arguments that configure loading.
pub const CONFIG_ARG_PREFIX: &str = "tomlenv_config_";

/// Environment variable holding the log filter.
pub const LOG_VAR: &str = "TOMLENV_LOG";

/// Number of trailing key characters that carry the hex key.
pub const KEY_HEX_LEN: usize = 64;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Scheme used when composing key URIs.
pub const KEY_URI_SCHEME: &str = "tomlenv";

/// Host and path used when composing key URIs.
pub const KEY_URI_LOCATION: &str = "tomlenv.local/vault";
