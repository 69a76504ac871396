//! tomlenv - Load TOML configuration and encrypted vaults into the environment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Run a command with the loaded environment
//! │   ├── print         # Print what would be loaded
//! │   ├── encrypt       # Build or update a vault
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── loader        # config(): plaintext vs vault
//!     ├── source        # Best-effort multi-file loading
//!     ├── vault         # Vault decryption with key rotation
//!     ├── key           # Key URI parsing
//!     ├── cipher/       # AES-256-GCM
//!     ├── locate        # Path resolution
//!     ├── populate      # Writing into a target environment
//!     ├── value         # String projection of typed values
//!     └── options       # Options and their env/argument sources
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use tomlenv::{config_with, Options};
//!
//! let mut env = BTreeMap::new();
//! let result = config_with(&Options::new().with_path(".env"), &mut env)?;
//! if let Some(e) = result.error {
//!     eprintln!("partial load: {}", e);
//! }
//! # Ok::<(), tomlenv::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::cipher::{decrypt, encrypt};
pub use crate::core::loader::{config, config_with};
pub use crate::core::options::{Encoding, Options, PathSpec};
pub use crate::core::populate::{populate, populate_value, EnvTarget, PopulateOptions, ProcessEnv};
pub use crate::core::source::{load_sources, LoadResult};
pub use crate::core::vault::{config_vault, config_vault_at, parse_vault};
pub use crate::error::{Error, Result};
