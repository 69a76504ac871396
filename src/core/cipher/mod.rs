//! Cryptographic operations.
//!
//! Vault payloads are sealed with AES-256-GCM. A payload is a single base64
//! token laid out as `nonce (12 bytes) || ciphertext || tag (16 bytes)`.
//!
//! Keys are hex strings. Only the trailing 64 characters are significant, so
//! a key may carry a readable prefix such as `key_`.

use zeroize::Zeroizing;

use crate::core::types::Ciphertext;
use crate::error::Result;

mod aes;

pub use aes::{generate_key, AesGcm};

/// Symmetric cryptographic backend trait.
pub trait Cipher {
    /// Encrypt plaintext under a hex key.
    ///
    /// # Returns
    ///
    /// Base64 payload (format depends on backend implementation).
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key is malformed or encryption fails.
    fn encrypt(&self, plaintext: &str, key: &str) -> Result<Ciphertext>;

    /// Decrypt a base64 payload under a hex key.
    ///
    /// The authentication tag is verified before any plaintext is returned.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` for a malformed key,
    /// `CipherError::AuthenticationFailed` when the tag does not verify, and
    /// `CipherError::Unclassified` for anything else.
    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<Zeroizing<String>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext with the default AES-256-GCM backend.
///
/// This is a convenience wrapper around `AesGcm::encrypt`.
pub fn encrypt(plaintext: &str, key: &str) -> Result<Ciphertext> {
    AesGcm.encrypt(plaintext, key)
}

/// Decrypt a vault payload with the default AES-256-GCM backend.
///
/// This is a convenience wrapper around `AesGcm::decrypt`.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<Zeroizing<String>> {
    AesGcm.decrypt(ciphertext, key)
}
