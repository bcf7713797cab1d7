//! Utility modules for the static site generator.

pub mod css;
pub mod date;
pub mod exec;
pub mod highlight;
pub mod log;
pub mod markdown;
pub mod minify;
pub mod xml;
