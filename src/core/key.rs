//! Key URI parsing.
//!
//! A key is carried as a URI whose password is the raw key material and
//! whose `environment` query parameter names the vault field to decrypt:
//!
//! ```text
//! tomlenv://:key_ddcaa265...fe00@tomlenv.local/vault?environment=production
//! ```
//!
//! Scheme, host, path and username are ignored. Several keys can be joined
//! with commas to support rotation.

use url::Url;
use zeroize::Zeroizing;

use crate::core::constants::{
    ENVIRONMENT_PARAM, KEY_URI_LOCATION, KEY_URI_SCHEME, VAULT_FIELD_PREFIX,
};
use crate::error::{KeyError, Result};

/// Decryption instructions extracted from a key URI.
#[derive(Clone)]
pub struct KeyDescriptor {
    secret: Zeroizing<String>,
    environment: String,
}

impl std::fmt::Debug for KeyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDescriptor")
            .field("secret", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}

impl KeyDescriptor {
    /// Raw key material, as written in the URI.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Environment label as written in the URI.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Vault field holding this environment's ciphertext, e.g. `VAULT_PRODUCTION`.
    pub fn field_name(&self) -> String {
        field_name(&self.environment)
    }
}

/// Vault field name for an environment label.
pub fn field_name(environment: &str) -> String {
    format!("{}{}", VAULT_FIELD_PREFIX, environment.to_uppercase())
}

/// Parse a key URI.
///
/// # Errors
///
/// - `KeyError::InvalidFormat` if the string is not an absolute URI
/// - `KeyError::MissingSecret` if the URI has no password
/// - `KeyError::MissingEnvironment` if the `environment` parameter is absent or empty
pub fn resolve(key_uri: &str) -> Result<KeyDescriptor> {
    let uri = Url::parse(key_uri).map_err(|_| KeyError::InvalidFormat)?;

    let secret = uri
        .password()
        .filter(|p| !p.is_empty())
        .ok_or(KeyError::MissingSecret)?;
    let secret = Zeroizing::new(secret.to_string());

    let environment = uri
        .query_pairs()
        .find(|(name, _)| name.eq_ignore_ascii_case(ENVIRONMENT_PARAM))
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or(KeyError::MissingEnvironment)?;

    Ok(KeyDescriptor {
        secret,
        environment,
    })
}

/// Split a comma-joined key string into trimmed candidates, in order.
///
/// Empty entries are kept so that a stray comma surfaces as a format error.
pub fn split_candidates(keys: &str) -> Vec<&str> {
    keys.split(',').map(str::trim).collect()
}

/// Build a key URI for `secret` and `environment`.
pub fn compose(secret: &str, environment: &str) -> String {
    format!(
        "{}://:key_{}@{}?{}={}",
        KEY_URI_SCHEME, secret, KEY_URI_LOCATION, ENVIRONMENT_PARAM, environment
    )
}
