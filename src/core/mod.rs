//! Core library components.
//!
//! This module contains the loading, decryption and merge logic. It has no
//! knowledge of the command line.

pub mod cipher;
pub mod constants;
pub mod key;
pub mod loader;
pub mod locate;
pub mod options;
pub mod populate;
pub mod source;
pub mod types;
pub mod value;
pub mod vault;
