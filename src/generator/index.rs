//! `posts.json`: the compiled post list, persisted for listing pages.

use crate::{compiler::meta::Post, log};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Write `posts` as compact JSON to `path`.
pub fn write_posts(path: &Path, posts: &[Post]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(posts)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Read the post list back. A missing or unreadable index yields no posts.
pub fn read_posts(path: &Path) -> Vec<Post> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&content).unwrap_or_else(|err| {
        log!("warn"; "ignoring {}: {err}", path.display());
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn post() -> Post {
        Post {
            published_at: "2024-01-01".into(),
            slug: "a".into(),
            title: "A".into(),
            summary: String::new(),
            tags: String::new(),
            draft: Some(false),
            extra: [("cover".to_string(), serde_json::json!("/img/a.png"))].into(),
        }
    }

    #[test]
    fn test_write_compact_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dist/posts.json");
        write_posts(&path, &[post()]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"[{"publishedAt":"2024-01-01","slug":"a","title":"A","summary":"","tags":"","draft":false,"cover":"/img/a.png"}]"#
        );
        assert_eq!(read_posts(&path), vec![post()]);
    }

    #[test]
    fn test_read_missing_or_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        assert!(read_posts(&path).is_empty());

        fs::write(&path, "{not json").unwrap();
        assert!(read_posts(&path).is_empty());
    }
}
