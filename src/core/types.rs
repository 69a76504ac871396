//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// An environment variable name (e.g., DATABASE_URL).
pub type EnvKey = String;

/// A TOML document as produced by the parser: key to typed value.
pub type ParsedMapping = toml::Table;

/// Key to string projection of the parsed value.
///
/// This is what ends up in an environment, which only holds strings.
pub type StringifiedMapping = BTreeMap<EnvKey, String>;

/// Base64 blob of `nonce || ciphertext || tag`.
pub type Ciphertext = String;

/// Vault file contents: `VAULT_<ENVIRONMENT>` to ciphertext.
pub type VaultRecord = StringifiedMapping;
