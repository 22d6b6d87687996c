//! Helpers for colls.
//!
//! Small path utilities shared by the config loader and the entry point.

use std::path::{Path, PathBuf};

/// Home directory of the current user, if one is known.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` or `~/` to the home directory. Other paths are returned unchanged.
pub fn expand_home_path(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = get_home() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

/// Turns the optional path argument into the listing target.
///
/// No argument means `cwd`. Relative arguments are kept relative so names and
/// error messages show the path the way it was typed.
pub fn resolve_target(arg: Option<&str>, cwd: &Path) -> PathBuf {
    match arg {
        Some(raw) => expand_home_path(raw),
        None => cwd.to_path_buf(),
    }
}
