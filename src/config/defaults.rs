//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Blogging".into()
    }

    pub fn author() -> String {
        "The Writer".into()
    }

    pub fn description() -> String {
        "A great blog".into()
    }

    pub fn url() -> String {
        "https://example.com".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn pages() -> PathBuf {
        "pages".into()
    }

    pub fn posts() -> PathBuf {
        "posts".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn public() -> PathBuf {
        "public".into()
    }

    pub fn blog() -> String {
        "blog".into()
    }

    pub fn theme() -> String {
        "base16-ocean.dark".into()
    }

    pub fn layout() -> Option<PathBuf> {
        None
    }

    pub mod css {
        pub fn command() -> Vec<String> {
            vec!["tailwindcss".into()]
        }
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        3000
    }
}
