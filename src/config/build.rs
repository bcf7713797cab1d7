//! `[build]` section configuration.
//!
//! Contains build settings including paths, blog segment, highlighting theme, css, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the persisted post index inside the output directory.
pub const POSTS_INDEX: &str = "posts.json";

/// File name of the stylesheet, both as css input (in `pages`) and output.
pub const STYLESHEET: &str = "styles.css";

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in reblog.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// pages = "pages"          # Page fragments (*.html) and styles.css
/// posts = "posts"          # Blog posts (*.mdx)
/// output = "dist"          # Output directory, cleared on every build
/// blog = "blog"            # Posts are published under /blog/<slug>
/// theme = "base16-ocean.dark"
///
/// [build.css]
/// command = ["npx", "tailwindcss"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Page sources directory.
    #[serde(default = "defaults::build::pages")]
    #[educe(Default = defaults::build::pages())]
    pub pages: PathBuf,

    /// Post sources directory.
    #[serde(default = "defaults::build::posts")]
    #[educe(Default = defaults::build::posts())]
    pub posts: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static files copied verbatim into the output directory.
    #[serde(default = "defaults::build::public")]
    #[educe(Default = defaults::build::public())]
    pub public: PathBuf,

    /// URL path segment posts are published under.
    #[serde(default = "defaults::build::blog")]
    #[educe(Default = defaults::build::blog())]
    pub blog: String,

    /// Syntax highlighting theme: a built-in syntect theme name or a `.tmTheme` path.
    #[serde(default = "defaults::build::theme")]
    #[educe(Default = defaults::build::theme())]
    pub theme: String,

    /// Layout template wrapping every page body; must contain `{children}`.
    #[serde(default = "defaults::build::layout")]
    #[educe(Default = defaults::build::layout())]
    pub layout: Option<PathBuf>,

    /// Minify HTML output.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// CSS compiler integration.
    #[serde(default)]
    pub css: CssConfig,
}

impl BuildConfig {
    /// `<output>/posts.json`
    pub fn posts_index(&self) -> PathBuf {
        self.output.join(POSTS_INDEX)
    }

    /// `<pages>/styles.css`
    pub fn styles_input(&self) -> PathBuf {
        self.pages.join(STYLESHEET)
    }

    /// `<output>/styles.css`
    pub fn styles_output(&self) -> PathBuf {
        self.output.join(STYLESHEET)
    }
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.css]` section - external css compiler (tailwindcss).
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CssConfig {
    /// Run the css compiler after content is built.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// CSS compiler command and leading arguments.
    #[serde(default = "defaults::build::css::command")]
    #[educe(Default = defaults::build::css::command())]
    pub command: Vec<String>,
}
