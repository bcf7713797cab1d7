//! Reblog - A static site generator for markdown blogs.

mod build;
mod cli;
mod compiler;
mod config;
mod generator;
mod serve;
mod utils;

use anyhow::{Context, Result};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use serve::serve_site;
use std::{path::Path, process::ExitCode};

fn main() -> ExitCode {
    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Dev { .. } => {
            build_site(&config)?;
            serve_site(&config)
        }
    }
}

/// Load, resolve and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every field has a default.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let found = config_path.exists();
    let mut config = if found {
        SiteConfig::from_path(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };

    config.update_with_cli(cli);
    if found {
        log!("config"; "using {}", config.config_path.display());
    }
    config.resolve_layout()?;
    config.validate()?;

    Ok(config)
}
