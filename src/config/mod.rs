//! Site configuration management for `reblog.toml`.
//!
//! # Sections
//!
//! | Section         | Purpose                                       |
//! |-----------------|-----------------------------------------------|
//! | `[base]`        | Site metadata (title, author, url, language)  |
//! | `[build]`       | Source/output paths, blog segment, theme      |
//! | `[build.css]`   | External css compiler                         |
//! | `[serve]`       | Development server (interface, port)          |
//!
//! Every field has a default, so a partial file (or no file at all) is a
//! valid configuration: supplied fields override defaults one by one.
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Sample site"
//! url = "https://www.example.site"
//!
//! [build]
//! layout = "layout.html"
//!
//! [serve]
//! port = 3000
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod layout;
mod serve;

pub use layout::Layout;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing reblog.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Resolved layout (from `[build.layout]` or the built-in one)
    #[serde(skip)]
    pub layout: Layout,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.base.url, cli.base_url.as_ref());

        let build_args = cli.build_args();
        Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
        Self::update_option(&mut self.build.css.enable, build_args.css.as_ref());

        if let Commands::Dev {
            interface, port, ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }

        self.update_path_with_root(&root);
        self.config_path = Self::normalize_path(&self.get_root().join(&cli.config));
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths relative to root directory and normalize to absolute paths
    pub fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.build.pages = Self::normalize_path(&root.join(&self.build.pages));
        self.build.posts = Self::normalize_path(&root.join(&self.build.posts));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.public = Self::normalize_path(&root.join(&self.build.public));

        if let Some(layout) = self.build.layout.as_ref() {
            self.build.layout = Some(Self::normalize_path(&root.join(layout)));
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Load the layout template named by `[build.layout]`, if any.
    pub fn resolve_layout(&mut self) -> Result<()> {
        if let Some(path) = &self.build.layout {
            let template =
                fs::read_to_string(path).map_err(|err| ConfigError::Io(path.clone(), err))?;
            self.layout = Layout::from_template(template)?;
        }
        Ok(())
    }

    /// Validate the resolved configuration
    pub fn validate(&self) -> Result<()> {
        if !self.base.url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        let blog = &self.build.blog;
        if blog.is_empty() || blog.contains('/') {
            bail!(ConfigError::Validation(
                "[build.blog] must be a single non-empty path segment".into()
            ));
        }

        if self.build.css.enable {
            Self::check_command_installed("[build.css.command]", &self.build.css.command)?;
        }

        Ok(())
    }

    /// Check if a command is installed and available
    fn check_command_installed(field: &str, command: &[String]) -> Result<()> {
        let Some(cmd) = command.first() else {
            bail!(ConfigError::Validation(format!(
                "{field} must have at least one element"
            )));
        };

        which::which(cmd)
            .with_context(|| format!("`{cmd}` not found. Please install it first."))?;

        Ok(())
    }

    /// Configuration rooted at `root` with the css compiler disabled.
    #[cfg(test)]
    pub fn for_root(root: &Path) -> Self {
        let mut config = Self::default();
        config.base.url = "https://example.com".into();
        config.build.css.enable = false;
        config.update_path_with_root(root);
        config
    }
}

// ============================================================================
// Tests
// ============================================================================
