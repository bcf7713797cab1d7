//! Page compilation.
//!
//! Pages are loaded through [`PageResolver`], which enumerates
//! [`PageModule`]s. The filesystem resolver reads `*.html` fragments from
//! the pages directory; tests can hand in modules built in memory.
//!
//! A fragment may contain a `<!-- posts -->` marker, which is replaced by a
//! listing of the posts read back from `posts.json`, newest first.

use super::{
    collect_sources,
    meta::{ContentError, Post},
    route::{INDEX, Route},
    shell::{self, Subject},
    slug_of,
};
use crate::{
    build::BuildState,
    config::SiteConfig,
    generator::index,
    log,
    utils::{
        date,
        xml::{create_xml_writer, into_string, write_end, write_start, write_text},
    },
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Page fragment extension.
pub const PAGE_EXT: &str = "html";

/// Marker expanded into the post listing.
pub const POSTS_MARKER: &str = "<!-- posts -->";

// ============================================================================
// Page modules
// ============================================================================

/// One renderable page.
pub trait PageModule {
    /// File name without extension; `index` maps to the site root.
    fn name(&self) -> &str;

    /// Render the page body.
    fn render(&self) -> Result<String>;
}

/// Source of page modules.
pub trait PageResolver {
    fn modules(&self) -> Result<Vec<Box<dyn PageModule + '_>>>;
}

/// Reads `*.html` fragments from a directory.
pub struct FsPageResolver {
    dir: PathBuf,
    posts_index: PathBuf,
    blog: String,
}

impl FsPageResolver {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            dir: config.build.pages.clone(),
            posts_index: config.build.posts_index(),
            blog: config.build.blog.clone(),
        }
    }
}

impl PageResolver for FsPageResolver {
    fn modules(&self) -> Result<Vec<Box<dyn PageModule + '_>>> {
        let modules = collect_sources(&self.dir, PAGE_EXT)?
            .into_iter()
            .map(|path| {
                Box::new(FsPage {
                    name: slug_of(&path),
                    path,
                    resolver: self,
                }) as Box<dyn PageModule + '_>
            })
            .collect();
        Ok(modules)
    }
}

struct FsPage<'a> {
    name: String,
    path: PathBuf,
    resolver: &'a FsPageResolver,
}

impl PageModule for FsPage<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> Result<String> {
        let fragment = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read page {}", self.path.display()))?;

        if !fragment.contains(POSTS_MARKER) {
            return Ok(fragment);
        }

        let posts = index::read_posts(&self.resolver.posts_index);
        let listing = post_listing(&posts, &self.resolver.blog)?;
        Ok(fragment.replace(POSTS_MARKER, &listing))
    }
}

/// Listing markup for `posts`, newest first.
pub fn post_listing(posts: &[Post], blog: &str) -> Result<String> {
    let mut posts: Vec<_> = posts.iter().collect();
    posts.sort_by_key(|post| std::cmp::Reverse(post.published().ok()));

    let mut w = create_xml_writer();
    for post in posts {
        let href = format!("/{blog}/{}", post.slug);
        let published = post
            .published()
            .map(date::to_display)
            .unwrap_or_else(|_| post.published_at.clone());

        write_start(&mut w, "div", &[("class", "flex flex-col space-y-1 mb-4")])?;
        write_start(&mut w, "div", &[("class", "w-full flex")])?;
        write_start(&mut w, "a", &[("class", "font-bold no-underline"), ("href", &href)])?;
        write_text(&mut w, &post.title)?;
        write_end(&mut w, "a")?;
        write_start(&mut w, "div", &[("class", "flex-1")])?;
        write_end(&mut w, "div")?;
        write_start(&mut w, "span", &[("class", "text-sm mb-2")])?;
        write_text(&mut w, &published)?;
        write_end(&mut w, "span")?;
        write_end(&mut w, "div")?;
        write_start(&mut w, "div", &[("class", "text-zinc-400")])?;
        write_text(&mut w, &post.summary)?;
        write_end(&mut w, "div")?;
        write_end(&mut w, "div")?;
    }
    into_string(w)
}

// ============================================================================
// Compilation
// ============================================================================

/// Compile every module `resolver` yields into `state`.
pub fn compile_pages(
    config: &SiteConfig,
    resolver: &dyn PageResolver,
    state: &mut BuildState,
) -> Result<()> {
    for module in resolver.modules()? {
        let name = module.name().to_owned();
        compile_page(module.as_ref(), config, state)
            .with_context(|| format!("Failed to compile page `{name}`"))?;
    }
    Ok(())
}

fn compile_page(module: &dyn PageModule, config: &SiteConfig, state: &mut BuildState) -> Result<()> {
    let body = module.render()?;
    if body.trim().is_empty() {
        return Err(ContentError::EmptyPage(module.name().to_owned()).into());
    }

    let slug = match module.name() {
        INDEX => "",
        name => name,
    };
    let route = Route::page(slug, config);
    let html = shell::render(config, &route, Subject::Page { slug }, &body)?;
    shell::write_document(&route.path, &html, config)?;

    log!("pages"; "{}", relative_to(&route.path, &config.build.output));
    state.urls.push(route.url);
    Ok(())
}

fn relative_to(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryResolver;
    use super::*;
    use tempfile::tempdir;

    fn post(slug: &str, title: &str, published_at: &str) -> Post {
        Post {
            published_at: published_at.into(),
            slug: slug.into(),
            title: title.into(),
            summary: format!("about {title}"),
            tags: String::new(),
            draft: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_index_and_named_pages() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::for_root(dir.path());
        let resolver = MemoryResolver(vec![("about", "<p>about</p>"), ("index", "<p>home</p>")]);
        let mut state = BuildState::default();

        compile_pages(&config, &resolver, &mut state).unwrap();

        assert_eq!(state.urls, ["https://example.com/about", "https://example.com"]);
        let index = fs::read_to_string(config.build.output.join("index.html")).unwrap();
        assert!(index.contains("<title>Blogging</title>"));
        assert!(index.contains("<p>home</p>"));
        let about = fs::read_to_string(config.build.output.join("about/index.html")).unwrap();
        assert!(about.contains("<title>about | Blogging</title>"));
    }

    #[test]
    fn test_empty_page_is_error() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::for_root(dir.path());
        let resolver = MemoryResolver(vec![("broken", "  \n")]);
        let mut state = BuildState::default();

        let err = compile_pages(&config, &resolver, &mut state).unwrap_err();
        assert!(format!("{err:#}").contains("page `broken` renders nothing"));
        assert!(state.urls.is_empty());
    }

    #[test]
    fn test_post_listing_newest_first() {
        let posts = [
            post("old", "Old", "2023-05-01"),
            post("new", "New & shiny", "2024-03-09"),
        ];
        let html = post_listing(&posts, "blog").unwrap();

        let new = html.find(r#"href="/blog/new""#).unwrap();
        let old = html.find(r#"href="/blog/old""#).unwrap();
        assert!(new < old);
        assert!(html.contains("New &amp; shiny"));
        assert!(html.contains(r#"<span class="text-sm mb-2">9 Mar 2024</span>"#));
        assert!(html.contains(r#"<div class="text-zinc-400">about Old</div>"#));
    }

    #[test]
    fn test_fs_resolver_reads_fragments() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::for_root(dir.path());
        fs::create_dir_all(&config.build.pages).unwrap();
        fs::write(config.build.pages.join("index.html"), "<h1>Home</h1>").unwrap();
        fs::write(config.build.pages.join("styles.css"), "body {}").unwrap();

        let resolver = FsPageResolver::new(&config);
        let modules = resolver.modules().unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name(), "index");
        assert_eq!(modules[0].render().unwrap(), "<h1>Home</h1>");
    }

    #[test]
    fn test_fs_resolver_expands_posts_marker() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::for_root(dir.path());
        fs::create_dir_all(&config.build.pages).unwrap();
        fs::write(
            config.build.pages.join("blog.html"),
            "<section><h1>Posts</h1><!-- posts --></section>",
        )
        .unwrap();
        index::write_posts(&config.build.posts_index(), &[post("a", "A", "2024-01-01")]).unwrap();

        let resolver = FsPageResolver::new(&config);
        let body = resolver.modules().unwrap()[0].render().unwrap();
        assert!(body.starts_with("<section><h1>Posts</h1><div"));
        assert!(body.contains(r#"href="/blog/a""#));
        assert!(!body.contains(POSTS_MARKER));
    }

    #[test]
    fn test_posts_marker_without_index_is_empty_listing() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::for_root(dir.path());
        fs::create_dir_all(&config.build.pages).unwrap();
        fs::write(config.build.pages.join("blog.html"), "<h1>Posts</h1><!-- posts -->").unwrap();

        let resolver = FsPageResolver::new(&config);
        assert_eq!(resolver.modules().unwrap()[0].render().unwrap(), "<h1>Posts</h1>");
    }
}
