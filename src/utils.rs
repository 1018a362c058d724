use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// deals with `~/` and `$HOME/` prefixes
///
/// Unlike a canonicalization, the path does not need to exist yet.
pub fn expand_home(p: impl AsRef<Path>) -> Result<PathBuf> {
    let p = p.as_ref();
    let p = if let Ok(rest) = p.strip_prefix("~") {
        home()?.join(rest)
    } else if let Ok(rest) = p.strip_prefix("$HOME") {
        home()?.join(rest)
    } else {
        p.to_path_buf()
    };
    Ok(p)
}

/// home path wrapper
pub fn home() -> Result<PathBuf> {
    home::home_dir().context("$HOME was not set")
}
