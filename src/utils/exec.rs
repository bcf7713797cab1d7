//! External command execution utilities.
//!
//! Provides a macro and functions for running commands with captured output,
//! filtered logging, and error reporting that carries the exit status.

use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Output},
};

// ============================================================================
// Macros
// ============================================================================

/// Run an external command with arguments.
///
/// Supports an optional `filter` argument.
///
/// # Examples
/// ```ignore
/// // With working directory
/// exec!(root; &["tailwindcss".to_string()]; "-i", input, "-o", output)?;
///
/// // With custom filter
/// static MY_FILTER: FilterRule = FilterRule::new(&["warning:"]);
/// exec!(filter=&MY_FILTER; root; &command; "--minify")?;
/// ```
#[macro_export]
macro_rules! exec {
    (filter=$filter:expr; $root:expr; $cmd:expr; $($arg:expr),* $(,)?) => {
        $crate::utils::exec::exec(
            $root,
            $cmd,
            &$crate::utils::exec::filter_args(&[$(::std::ffi::OsString::from($arg)),*]),
            $filter,
        )
    };
    ($root:expr; $cmd:expr; $($arg:expr),* $(,)?) => {
        $crate::exec!(filter=&$crate::utils::exec::EMPTY_FILTER; $root; $cmd; $($arg),*)
    };
}

// ============================================================================
// Output Filtering
// ============================================================================

/// Lines of command output that should not be echoed to the log.
pub struct FilterRule {
    prefixes: &'static [&'static str],
}

/// Echo everything.
pub static EMPTY_FILTER: FilterRule = FilterRule::new(&[]);

impl FilterRule {
    pub const fn new(prefixes: &'static [&'static str]) -> Self {
        Self { prefixes }
    }

    /// Whether `line` should be hidden.
    pub fn is_filtered(&self, line: &str) -> bool {
        let line = line.trim();
        line.is_empty() || self.prefixes.iter().any(|p| line.starts_with(p))
    }

    /// Log every visible line of `output` under `name`.
    pub fn log(&self, name: &str, output: &str) {
        for line in output.lines().filter(|l| !self.is_filtered(l)) {
            log!(name; "{}", line.trim_end());
        }
    }
}

/// Filter out empty args.
#[inline]
pub fn filter_args(args: &[OsString]) -> Vec<OsString> {
    args.iter().filter(|a| !a.is_empty()).cloned().collect()
}

// ============================================================================
// Command Execution
// ============================================================================

/// Execute a command and capture its output.
///
/// `cmd` is the program followed by any leading arguments from config,
/// e.g. `["npx", "tailwindcss"]`.
///
/// # Errors
/// Returns error if command fails to execute or returns non-zero exit code.
pub fn exec(
    root: &Path,
    cmd: &[String],
    args: &[OsString],
    filter: &'static FilterRule,
) -> Result<Output> {
    let Some((program, leading)) = cmd.split_first() else {
        bail!("Empty command");
    };
    let name = Path::new(program)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.clone());

    let output = Command::new(program)
        .args(leading)
        .args(args)
        .current_dir(root)
        .output()
        .with_context(|| format!("Failed to execute `{name}`"))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        bail!(
            "Command `{name}` failed with {}\n{}{}",
            output.status,
            stdout.trim_end(),
            stderr.trim_end()
        );
    }

    filter.log(&name, &stdout);
    filter.log(&name, &stderr);
    Ok(output)
}
