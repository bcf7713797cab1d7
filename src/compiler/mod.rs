//! Content compilation.
//!
//! - **route**: output path and public URL of a document
//! - **meta**: post metadata parsed from frontmatter
//! - **shell**: the HTML document wrapper
//! - **posts**: `*.mdx` posts → `<blog>/<slug>/index.html` + `posts.json`
//! - **pages**: page modules → `index.html`, `<slug>/index.html`
//! - **assets**: static files copied verbatim
//!
//! # Build Flow
//!
//! ```text
//! compile_posts() ──► BuildState { urls, posts } ──► compile_pages()
//!       │                                                │
//!       ▼                                                ▼
//!  posts.json ─────────────── read back by ─────── listing pages
//! ```

pub mod assets;
pub mod meta;
pub mod pages;
pub mod posts;
pub mod route;
pub mod shell;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use assets::copy_public;
pub use pages::{FsPageResolver, PageResolver, compile_pages};
pub use posts::compile_posts;

/// Files directly inside `dir` with extension `ext`, sorted by file name.
pub fn collect_sources(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|e| e == ext) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// File name without its extension.
pub fn slug_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_sources_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b.mdx", "a.mdx", "notes.txt", "c.md"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.mdx")).unwrap();
        fs::write(dir.path().join("nested.mdx/d.mdx"), "").unwrap();

        let files = collect_sources(dir.path(), "mdx").unwrap();
        let names: Vec<_> = files.iter().map(|p| slug_of(p)).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_collect_sources_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(collect_sources(&dir.path().join("missing"), "mdx").is_err());
    }

    #[test]
    fn test_slug_of() {
        assert_eq!(slug_of(Path::new("/posts/hello-world.mdx")), "hello-world");
        assert_eq!(slug_of(Path::new("a.b.mdx")), "a.b");
    }
}
