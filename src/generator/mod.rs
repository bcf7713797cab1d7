//! Artifacts derived from the build state once all content is compiled.

pub mod feed;
pub mod index;
pub mod sitemap;

pub use feed::build_feed;
pub use sitemap::build_sitemap;
