//! Load options.
//!
//! Options are assembled in layers: values passed by the caller (or CLI
//! flags) win over `tomlenv_config_*=value` arguments, which win over
//! `TOMLENV_CONFIG_*` environment variables. Every field is optional so that
//! layers can be merged with [`Options::layer`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::core::constants::{CONFIG_ARG_PREFIX, CONFIG_VAR_PREFIX};
use crate::core::populate::PopulateOptions;
use crate::error::Error;

/// One source path or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    Single(String),
    List(Vec<String>),
}

impl PathSpec {
    /// Paths in load order.
    pub fn paths(&self) -> Vec<String> {
        match self {
            Self::Single(path) => vec![path.clone()],
            Self::List(paths) => paths.clone(),
        }
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        Self::Single(path.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(path: String) -> Self {
        Self::Single(path)
    }
}

impl From<Vec<String>> for PathSpec {
    fn from(paths: Vec<String>) -> Self {
        Self::List(paths)
    }
}

impl From<&[&str]> for PathSpec {
    fn from(paths: &[&str]) -> Self {
        Self::List(paths.iter().map(|p| p.to_string()).collect())
    }
}

/// Text encoding of source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

impl Encoding {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Latin1 => "latin1",
        }
    }

    /// Decode raw file bytes, or `None` if they are invalid in this encoding.
    pub fn decode(&self, bytes: Vec<u8>) -> Option<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes).ok(),
            Self::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" | "binary" => Ok(Self::Latin1),
            other => Err(Error::Other(format!(
                "unsupported encoding: {} (expected utf8 or latin1)",
                other
            ))),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options recognized by `config` and the loaders.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Source path(s). Defaults to `.env` (or `.env.vault`) in `cwd`.
    pub path: Option<PathSpec>,
    /// Source encoding. Defaults to UTF-8.
    pub encoding: Option<Encoding>,
    /// Emit per-key and per-file diagnostics.
    pub debug: Option<bool>,
    /// Replace values already present in the target.
    pub override_existing: Option<bool>,
    /// Key URI(s), comma-joined. Wins over `TOMLENV_KEY`.
    pub key: Option<String>,
    /// Also return the typed mapping in `LoadResult::typed`.
    pub typed_output: Option<bool>,
    /// Directory that relative and default paths resolve against.
    pub cwd: Option<PathBuf>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("path", &self.path)
            .field("encoding", &self.encoding)
            .field("debug", &self.debug)
            .field("override_existing", &self.override_existing)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("typed_output", &self.typed_output)
            .field("cwd", &self.cwd)
            .finish()
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathSpec>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = Some(override_existing);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_typed_output(mut self, typed_output: bool) -> Self {
        self.typed_output = Some(typed_output);
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Fill every unset field from `lower`.
    pub fn layer(self, lower: Options) -> Options {
        Options {
            path: self.path.or(lower.path),
            encoding: self.encoding.or(lower.encoding),
            debug: self.debug.or(lower.debug),
            override_existing: self.override_existing.or(lower.override_existing),
            key: self.key.or(lower.key),
            typed_output: self.typed_output.or(lower.typed_output),
            cwd: self.cwd.or(lower.cwd),
        }
    }

    /// Options from `TOMLENV_CONFIG_*` variables.
    ///
    /// Takes the variables as pairs so callers can pass `std::env::vars()`
    /// or a fixed list.
    pub fn from_env_vars<I, K, V>(vars: I) -> Options
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Options::default();
        for (name, value) in vars {
            if let Some(field) = name.as_ref().strip_prefix(CONFIG_VAR_PREFIX) {
                options.apply(&field.to_ascii_lowercase(), value.as_ref());
            }
        }
        options
    }

    /// Options from `tomlenv_config_<field>=<value>` arguments.
    ///
    /// Arguments with an empty value or an unknown field are ignored.
    pub fn from_args<I, S>(args: I) -> Options
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Options::default();
        for arg in args {
            let Some(assignment) = arg.as_ref().strip_prefix(CONFIG_ARG_PREFIX) else {
                continue;
            };
            if let Some((field, value)) = assignment.split_once('=') {
                if !value.is_empty() {
                    options.apply(field, value);
                }
            }
        }
        options
    }

    fn apply(&mut self, field: &str, value: &str) {
        match field {
            "encoding" => match value.parse() {
                Ok(encoding) => self.encoding = Some(encoding),
                Err(e) => warn!("ignoring encoding option: {}", e),
            },
            "path" => self.path = Some(PathSpec::Single(value.to_string())),
            "debug" => self.debug = Some(parse_flag(value)),
            "override" => self.override_existing = Some(parse_flag(value)),
            "key" => self.key = Some(value.to_string()),
            "typed" => self.typed_output = Some(parse_flag(value)),
            _ => {}
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    pub fn override_enabled(&self) -> bool {
        self.override_existing.unwrap_or(false)
    }

    pub fn typed_enabled(&self) -> bool {
        self.typed_output.unwrap_or(false)
    }

    pub fn encoding_or_default(&self) -> Encoding {
        self.encoding.unwrap_or_default()
    }

    /// Base directory for default file names.
    pub fn working_dir(&self) -> PathBuf {
        self.cwd
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn populate_options(&self) -> PopulateOptions {
        PopulateOptions {
            debug: self.debug_enabled(),
            override_existing: self.override_enabled(),
        }
    }
}

/// Interpret a flag value: `""`, `0`, `false`, `no`, `off` are false.
pub fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
