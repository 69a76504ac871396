//! Source and vault path resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::{ENV_FILE, VAULT_FILE, VAULT_SUFFIX};
use crate::core::options::Options;

/// Expand a leading `~` to the home directory.
///
/// Paths without the marker, or when no home directory is known, are returned as-is.
pub fn expand_home(path: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix('~') else {
        return PathBuf::from(path);
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}

/// Append the vault suffix unless the path already carries it.
///
/// `foo` becomes `foo.vault`; `foo.vault` is unchanged.
pub fn ensure_vault_suffix(path: &Path) -> PathBuf {
    let text = path.as_os_str().to_string_lossy();
    if text.ends_with(VAULT_SUFFIX) {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{}{}", text, VAULT_SUFFIX))
    }
}

/// Plaintext source paths in load order.
///
/// Explicit paths are home-expanded and resolved against the working
/// directory; without any, `<cwd>/.env` is used.
pub fn source_paths(options: &Options) -> Vec<PathBuf> {
    let cwd = options.working_dir();
    match &options.path {
        Some(spec) => spec.paths().iter().map(|p| cwd.join(expand_home(p))).collect(),
        None => vec![cwd.join(ENV_FILE)],
    }
}

/// Locate the vault file.
///
/// - no path: `<cwd>/.env.vault`
/// - one path: that path with the vault suffix
/// - several paths: the first whose suffixed form exists
///
/// Returns `None` unless the chosen path exists on disk.
pub fn locate(options: &Options) -> Option<PathBuf> {
    let cwd = options.working_dir();
    let candidates: Vec<PathBuf> = match &options.path {
        Some(spec) => spec
            .paths()
            .iter()
            .map(|p| ensure_vault_suffix(&cwd.join(expand_home(p))))
            .collect(),
        None => vec![cwd.join(VAULT_FILE)],
    };

    let found = candidates.into_iter().find(|candidate| candidate.exists());
    debug!(vault = ?found, "located vault");
    found
}
