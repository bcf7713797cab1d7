//! Post compilation.
//!
//! Every `*.mdx` file in the posts directory is rendered with the markdown
//! pipeline, wrapped in the page shell and written to its route. A draft's
//! frontmatter must still be valid YAML, but it produces nothing.

use super::{
    collect_sources,
    meta::{ContentError, Post},
    route::Route,
    shell::{self, Subject},
    slug_of,
};
use crate::{
    build::BuildState,
    config::SiteConfig,
    generator::index,
    log,
    utils::{highlight::Highlighter, markdown::Markdown},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Post source extension.
pub const POST_EXT: &str = "mdx";

/// Compile all posts into `state`, then persist the index.
pub fn compile_posts(config: &SiteConfig, state: &mut BuildState) -> Result<()> {
    let markdown = Markdown::new(Highlighter::new(&config.build.theme, config.get_root())?);

    for path in collect_sources(&config.build.posts, POST_EXT)? {
        compile_post(&path, &markdown, config, state)
            .with_context(|| format!("Failed to compile post {}", path.display()))?;
    }

    index::write_posts(&config.build.posts_index(), &state.posts)?;
    log!("posts"; "{} compiled", state.posts.len());
    Ok(())
}

/// Compile one post; drafts leave `state` untouched.
fn compile_post(
    path: &Path,
    markdown: &Markdown,
    config: &SiteConfig,
    state: &mut BuildState,
) -> Result<()> {
    let source = fs::read_to_string(path)?;
    let rendered = markdown.render(&source)?;

    let yaml = rendered
        .frontmatter
        .ok_or_else(|| ContentError::MissingFrontmatter(path.to_path_buf()))?;
    let slug = slug_of(path);
    let Some(mut post) = Post::from_frontmatter(&yaml, path.to_path_buf())? else {
        log!("draft"; "skipping {slug}");
        return Ok(());
    };
    post.slug = slug;

    let route = Route::post(&post.slug, config);
    let article = format!(
        r#"<article class="prose prose-zinc dark:prose-invert">{}</article>"#,
        rendered.html
    );
    let html = shell::render(config, &route, Subject::Post(&post), &article)?;
    shell::write_document(&route.path, &html, config)?;

    log!("posts"; "{}", post.slug);
    state.posts.push(post);
    state.urls.push(route.url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn setup(posts: &[(&str, &str)]) -> (TempDir, SiteConfig) {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        for (name, content) in posts {
            fs::write(dir.path().join("posts").join(name), content).unwrap();
        }
        let config = SiteConfig::for_root(dir.path());
        (dir, config)
    }

    #[test]
    fn test_compile_post_writes_route() {
        let (_dir, config) = setup(&[(
            "hello.mdx",
            "---\ntitle: Hello\npublishedAt: 2024-01-01\nslug: ignored\n---\n\n# Hi\n",
        )]);
        let mut state = BuildState::default();
        compile_posts(&config, &mut state).unwrap();

        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].slug, "hello");
        assert_eq!(state.urls, ["https://example.com/blog/hello"]);

        let html =
            fs::read_to_string(config.build.output.join("blog/hello/index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html><html"));
        assert!(html.contains(r#"<article class="prose prose-zinc dark:prose-invert"><h1>Hi</h1>"#));
        assert!(!html.contains("publishedAt"));
    }

    #[test]
    fn test_drafts_are_skipped() {
        let (_dir, config) = setup(&[(
            "wip.mdx",
            "---\ntitle: WIP\npublishedAt: 2024-01-01\ndraft: true\n---\nbody\n",
        )]);
        let mut state = BuildState::default();
        compile_posts(&config, &mut state).unwrap();

        assert!(state.posts.is_empty());
        assert!(state.urls.is_empty());
        assert!(!config.build.output.join("blog/wip").exists());
        assert_eq!(
            fs::read_to_string(config.build.posts_index()).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_incomplete_draft_is_skipped() {
        let (_dir, config) = setup(&[
            ("wip.mdx", "---\ntitle: WIP\ndraft: true\n---\nnot ready\n"),
            ("a.mdx", "---\ntitle: A\npublishedAt: 2024-01-01\n---\n"),
        ]);
        let mut state = BuildState::default();
        compile_posts(&config, &mut state).unwrap();

        assert_eq!(state.urls, ["https://example.com/blog/a"]);
        assert!(!config.build.output.join("blog/wip").exists());
    }

    #[test]
    fn test_extra_frontmatter_reaches_index() {
        let (_dir, config) = setup(&[(
            "a.mdx",
            "---\ntitle: A\npublishedAt: 2024-01-01\ncover: /img/a.png\n---\n",
        )]);
        let mut state = BuildState::default();
        compile_posts(&config, &mut state).unwrap();

        let index = fs::read_to_string(config.build.posts_index()).unwrap();
        assert!(index.contains(r#""cover":"/img/a.png""#));
        assert_eq!(index::read_posts(&config.build.posts_index()), state.posts);
    }

    #[test]
    fn test_other_extensions_ignored() {
        let (_dir, config) = setup(&[("notes.md", "no frontmatter here")]);
        let mut state = BuildState::default();
        compile_posts(&config, &mut state).unwrap();
        assert!(state.posts.is_empty());
    }

    #[test]
    fn test_missing_frontmatter_fails() {
        let (_dir, config) = setup(&[("bare.mdx", "# Just a heading\n")]);
        let mut state = BuildState::default();
        let err = compile_posts(&config, &mut state).unwrap_err();

        assert!(format!("{err:#}").contains("no frontmatter"));
        assert!(!config.build.posts_index().exists());
    }

    #[test]
    fn test_bad_date_fails() {
        let (_dir, config) = setup(&[(
            "a.mdx",
            "---\ntitle: A\npublishedAt: yesterday\n---\n",
        )]);
        let mut state = BuildState::default();
        let err = compile_posts(&config, &mut state).unwrap_err();
        assert!(format!("{err:#}").contains("yesterday"));
    }

    #[test]
    fn test_posts_compiled_in_file_name_order() {
        let (_dir, config) = setup(&[
            ("b.mdx", "---\ntitle: B\npublishedAt: 2024-01-01\n---\n"),
            ("a.mdx", "---\ntitle: A\npublishedAt: 2024-02-01\n---\n"),
        ]);
        let mut state = BuildState::default();
        compile_posts(&config, &mut state).unwrap();

        let slugs: Vec<_> = state.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b"]);
    }
}
