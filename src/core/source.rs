//! Plaintext source loading.
//!
//! Sources are loaded best-effort: a file that cannot be read or parsed is
//! recorded as the last error and the remaining files are still loaded.
//! Values fold first-writer-wins, so a file listed earlier shadows the same
//! key in any later file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::options::{Encoding, Options};
use crate::core::populate::{populate, EnvTarget};
use crate::core::types::{ParsedMapping, StringifiedMapping};
use crate::core::value;
use crate::error::{Error, Result};

/// Outcome of a load.
///
/// `error` holds the last per-source failure, if any. It never discards the
/// values parsed from the sources that did load.
#[derive(Debug, Default)]
pub struct LoadResult {
    /// Every loaded key with its string projection.
    pub parsed: StringifiedMapping,
    /// The same keys with their typed values, when typed output was requested.
    pub typed: Option<ParsedMapping>,
    pub error: Option<Error>,
}

impl LoadResult {
    /// Whether every source loaded.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Folded contents of a list of sources, not yet written anywhere.
#[derive(Debug, Default)]
pub struct Sources {
    pub parsed: StringifiedMapping,
    pub typed: ParsedMapping,
    /// Number of sources that loaded.
    pub loaded: usize,
    pub last_error: Option<Error>,
}

impl Sources {
    /// Fold one parsed source in; keys already present are kept.
    fn absorb(&mut self, table: ParsedMapping) {
        for (key, typed) in table {
            if self.typed.contains_key(&key) {
                continue;
            }
            self.parsed.insert(key.clone(), value::project(&typed));
            self.typed.insert(key, typed);
        }
        self.loaded += 1;
    }
}

/// Parse TOML text, attributing failures to `origin`.
pub fn parse(text: &str, origin: &Path) -> Result<ParsedMapping> {
    toml::from_str(text).map_err(|source| Error::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read one source file in `encoding` and parse it.
pub fn read_source(path: &Path, encoding: Encoding) -> Result<ParsedMapping> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = encoding.decode(bytes).ok_or_else(|| Error::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })?;

    parse(&text, path)
}

/// Read and fold `paths` without touching any target.
pub fn read_sources(paths: &[PathBuf], options: &Options) -> Sources {
    let debug_enabled = options.debug_enabled();
    if debug_enabled && options.encoding.is_none() {
        debug!("no encoding is specified, UTF-8 is used by default");
    }
    let encoding = options.encoding_or_default();

    let mut sources = Sources::default();
    for path in paths {
        match read_source(path, encoding) {
            Ok(table) => {
                if debug_enabled {
                    debug!(path = %path.display(), keys = table.len(), "loaded source");
                }
                sources.absorb(table);
            }
            Err(e) => {
                if debug_enabled {
                    debug!(path = %path.display(), error = %e, "failed to load source");
                }
                sources.last_error = Some(e);
            }
        }
    }

    sources
}

/// Load `paths` and populate `target` with the result.
pub fn load_sources(paths: &[PathBuf], options: &Options, target: &mut dyn EnvTarget) -> LoadResult {
    let sources = read_sources(paths, options);

    populate(target, &sources.parsed, options.populate_options());

    LoadResult {
        parsed: sources.parsed,
        typed: options.typed_enabled().then_some(sources.typed),
        error: sources.last_error,
    }
}
