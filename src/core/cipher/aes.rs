//! AES-256-GCM backend implementation.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::constants::{KEY_HEX_LEN, NONCE_LEN, TAG_LEN};
use crate::core::types::Ciphertext;
use crate::error::{CipherError, Result};

/// AES-256-GCM backend with 96-bit nonces.
pub struct AesGcm;

impl Cipher for AesGcm {
    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }

    fn encrypt(&self, plaintext: &str, key: &str) -> Result<Ciphertext> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let cipher = build_cipher(key)?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let sealed = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&sealed);

        trace!(ciphertext_len = blob.len(), "encrypted");

        Ok(STANDARD.encode(blob))
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<Zeroizing<String>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let cipher = build_cipher(key)?;
        let blob = STANDARD
            .decode(ciphertext.trim())
            .map_err(|e| CipherError::Unclassified(format!("invalid base64: {}", e)))?;

        if blob.len() < NONCE_LEN + TAG_LEN {
            return Err(CipherError::Unclassified(format!(
                "ciphertext is {} bytes, shorter than nonce and tag",
                blob.len()
            ))
            .into());
        }

        // aes-gcm expects the tag appended to the body, which is the blob's layout.
        let (nonce, sealed) = blob.split_at(NONCE_LEN);
        let decrypted = cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| CipherError::AuthenticationFailed)?;
        let decrypted = Zeroizing::new(decrypted);

        trace!(plaintext_len = decrypted.len(), "decrypted");

        let text = std::str::from_utf8(&decrypted)
            .map_err(|e| CipherError::Unclassified(format!("UTF-8 error: {}", e)))?;
        Ok(Zeroizing::new(text.to_string()))
    }
}

/// Generate a random 256-bit key as 64 lowercase hex characters.
pub fn generate_key() -> Zeroizing<String> {
    let key = Aes256Gcm::generate_key(OsRng);
    Zeroizing::new(hex::encode(key))
}

/// Build the cipher from the trailing 64 characters of `key`.
fn build_cipher(key: &str) -> Result<Aes256Gcm> {
    let start = key
        .char_indices()
        .rev()
        .nth(KEY_HEX_LEN - 1)
        .map_or(0, |(i, _)| i);
    let bytes = Zeroizing::new(hex::decode(&key[start..]).map_err(|_| CipherError::InvalidKey)?);

    Aes256Gcm::new_from_slice(&bytes).map_err(|_| CipherError::InvalidKey.into())
}
