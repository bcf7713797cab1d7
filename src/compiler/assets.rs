//! Static assets: the public directory is copied verbatim into the output.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Copy `[build.public]` into `[build.output]`, keeping relative paths.
///
/// A missing public directory is not an error. Returns the number of files copied.
pub fn copy_public(config: &SiteConfig) -> Result<usize> {
    let public = &config.build.public;
    if !public.is_dir() {
        log!("assets"; "no public directory at {}, skipping", public.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(public).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || is_ignored(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(public)?;
        let dest = config.build.output.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    log!("assets"; "{copied} files");
    Ok(copied)
}

fn is_ignored(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| IGNORED_FILES.contains(&name))
}
