//! Error types.
//!
//! Errors are grouped by the component that raises them and wrapped by the
//! top-level [`Error`]. Per-source failures (`Read`, `Decode`, `Parse`) are
//! usually returned inside a `LoadResult` instead of as an `Err`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// `populate` was handed something other than a key/value mapping.
    #[error("object required: populate expects a key/value mapping, got {0}")]
    NotAMapping(&'static str),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {} as {encoding}", path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

/// Vault pipeline errors.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("missing data: {reason}")]
    MissingData { reason: String },

    #[error("environment not found: cannot locate {field} in {}", path.display())]
    EnvironmentNotFound { field: String, path: PathBuf },
}

/// Key-URI errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid key: wrong format, must be a uri like tomlenv://:key_1234@tomlenv.local/vault?environment=development")]
    InvalidFormat,

    #[error("invalid key: missing key part")]
    MissingSecret,

    #[error("invalid key: missing environment part")]
    MissingEnvironment,
}

/// Cipher errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid key: it must be 64 hex characters long (or more)")]
    InvalidKey,

    #[error("decryption failed: please check your key")]
    AuthenticationFailed,

    #[error("decryption error: {0}")]
    Unclassified(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

impl Error {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vault(VaultError::MissingData { .. }) => "MISSING_DATA",
            Self::Vault(VaultError::EnvironmentNotFound { .. }) => "NOT_FOUND_ENVIRONMENT",
            Self::Key(KeyError::InvalidFormat) => "INVALID_KEY_FORMAT",
            Self::Key(KeyError::MissingSecret) => "INVALID_KEY_MISSING_SECRET",
            Self::Key(KeyError::MissingEnvironment) => "INVALID_KEY_MISSING_ENVIRONMENT",
            Self::Cipher(CipherError::InvalidKey) => "INVALID_KEY",
            Self::Cipher(CipherError::AuthenticationFailed) => "DECRYPTION_FAILED",
            Self::Cipher(CipherError::Unclassified(_)) => "DECRYPTION_ERROR",
            Self::Cipher(CipherError::EncryptionFailed(_)) => "ENCRYPTION_FAILED",
            Self::NotAMapping(_) => "OBJECT_REQUIRED",
            Self::Read { .. } => "READ_FAILED",
            Self::Decode { .. } => "DECODE_FAILED",
            Self::Parse { .. } => "PARSE_FAILED",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
            Self::TomlSerialize(_) => "TOML_SERIALIZE",
            Self::Other(_) => "OTHER",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
