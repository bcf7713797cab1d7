//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── clean_output()   ──► remove <output>, recreate <output>/<blog>
//!     ├── copy_public()    ──► static files
//!     ├── compile_posts()  ──► BuildState.posts + urls, posts.json
//!     ├── compile_pages()  ──► BuildState.urls
//!     ├── build_sitemap()  ──► sitemap.xml   (reads urls)
//!     ├── build_feed()     ──► feed.rss      (reads posts)
//!     └── run_tailwind()   ──► styles.css
//! ```
//!
//! Every step runs to completion before the next starts; the first error
//! aborts the build.

use crate::{
    compiler::{
        FsPageResolver, PageResolver, compile_pages, compile_posts, copy_public, meta::Post,
    },
    config::SiteConfig,
    generator::{build_feed, build_sitemap},
    log,
    utils::css,
};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use std::{fs, path::Path};

/// Accumulated output of the compilers, consumed by the generators.
#[derive(Debug, Default)]
pub struct BuildState {
    /// Public URLs in emission order.
    pub urls: Vec<String>,
    /// Published (non-draft) posts in compilation order.
    pub posts: Vec<Post>,
}

/// Build the site from the filesystem, stamping the sitemap with the current time.
pub fn build_site(config: &SiteConfig) -> Result<BuildState> {
    let resolver = FsPageResolver::new(config);
    build_with(config, &resolver, Utc::now)
}

/// Build with an explicit page resolver and clock.
pub fn build_with(
    config: &SiteConfig,
    pages: &dyn PageResolver,
    clock: impl FnOnce() -> DateTime<Utc>,
) -> Result<BuildState> {
    let mut state = BuildState::default();

    clean_output(config)?;
    copy_public(config)?;

    compile_posts(config, &mut state)?;
    compile_pages(config, pages, &mut state)?;

    build_sitemap(config, &state.urls, clock())?;
    build_feed(config, &state.posts)?;

    css::run_tailwind(config)?;

    log!("build"; "done, {} urls", state.urls.len());
    Ok(state)
}

/// Remove the output directory and recreate `<output>/<blog>`.
fn clean_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    guard_output(config)?;

    if output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }

    let blog = output.join(&config.build.blog);
    fs::create_dir_all(&blog)
        .with_context(|| format!("Failed to create {}", blog.display()))?;
    Ok(())
}

/// Refuse to clear a directory that holds the site's own sources.
fn guard_output(config: &SiteConfig) -> Result<()> {
    let build = &config.build;
    let sources: [&Path; 4] = [config.get_root(), &build.pages, &build.posts, &build.public];

    if let Some(source) = sources.iter().find(|source| source.starts_with(&build.output)) {
        bail!(
            "output directory {} contains sources ({}), refusing to clear it",
            build.output.display(),
            source.display()
        );
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
