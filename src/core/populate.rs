//! Populating a target environment.
//!
//! [`populate`] only ever touches the two mappings it is given. The default
//! target is the process environment ([`ProcessEnv`]); any map implementing
//! [`EnvTarget`] can stand in for it.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::core::types::StringifiedMapping;
use crate::core::value;
use crate::error::{Error, Result};

/// A mutable string-to-string environment.
pub trait EnvTarget {
    /// Whether `key` is already defined (an empty value counts as defined).
    fn contains(&self, key: &str) -> bool;

    /// Define or replace `key`.
    fn set(&mut self, key: &str, value: &str);
}

/// The process-wide environment.
///
/// Writes go through `std::env::set_var`, which is not synchronized with
/// other threads reading the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvTarget for ProcessEnv {
    fn contains(&self, key: &str) -> bool {
        !key.is_empty() && std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) {
        if key.is_empty() || key.contains('=') || key.contains('\0') || value.contains('\0') {
            warn!(key, "cannot be stored in the process environment, skipped");
            return;
        }
        std::env::set_var(key, value);
    }
}

impl EnvTarget for BTreeMap<String, String> {
    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

impl EnvTarget for HashMap<String, String> {
    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Write policy for [`populate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateOptions {
    /// Log one line per key.
    pub debug: bool,
    /// Replace keys already present in the target.
    pub override_existing: bool,
}

/// Write `source` into `target`.
///
/// Absent keys are always written. Present keys are replaced only when
/// `override_existing` is set.
pub fn populate(target: &mut dyn EnvTarget, source: &StringifiedMapping, opts: PopulateOptions) {
    for (key, value) in source {
        if !target.contains(key) {
            target.set(key, value);
            if opts.debug {
                debug!(key = %key, "written");
            }
        } else if opts.override_existing {
            target.set(key, value);
            if opts.debug {
                debug!(key = %key, "already defined and WAS overwritten");
            }
        } else if opts.debug {
            debug!(key = %key, "already defined and was NOT overwritten");
        }
    }
}

/// Populate from a parsed value, which must be a table.
///
/// # Errors
///
/// Returns `Error::NotAMapping` for any non-table value.
pub fn populate_value(
    target: &mut dyn EnvTarget,
    source: &toml::Value,
    opts: PopulateOptions,
) -> Result<()> {
    let table = source
        .as_table()
        .ok_or_else(|| Error::NotAMapping(source.type_str()))?;

    populate(target, &value::stringify(table), opts);
    Ok(())
}
