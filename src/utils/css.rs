//! Tailwind CSS integration.

use crate::config::SiteConfig;
use crate::exec;
use crate::log;
use crate::utils::exec::FilterRule;
use anyhow::{Result, bail};

/// Tailwind filter: skip version banner in output.
pub static TAILWIND_FILTER: FilterRule = FilterRule::new(&["≈ tailwindcss"]);

/// Compile `<pages>/styles.css` into `<output>/styles.css`.
///
/// Does nothing when `[build.css] enable = false`.
pub fn run_tailwind(config: &SiteConfig) -> Result<()> {
    if !config.build.css.enable {
        return Ok(());
    }

    let input = config.build.styles_input();
    let output = config.build.styles_output();
    if !input.is_file() {
        bail!("css input {} does not exist", input.display());
    }

    exec!(
        filter=&TAILWIND_FILTER;
        config.get_root();
        &config.build.css.command;
        "-i", &input, "-o", &output, "--minify"
    )?;

    log!("css"; "{}", output.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}
