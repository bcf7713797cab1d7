//! Site layout: the wrapper rendered around every page body.

use super::error::ConfigError;

/// Placeholder replaced by the page body.
pub const CHILDREN: &str = "{children}";

const DEFAULT_LAYOUT: &str =
    r#"<main class="max-w-2xl flex flex-col mx-auto px-10">{children}</main>"#;

/// Layout template with a single `{children}` slot.
#[derive(Debug, Clone)]
pub struct Layout {
    template: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            template: DEFAULT_LAYOUT.to_owned(),
        }
    }
}

impl Layout {
    pub fn from_template(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();
        if !template.contains(CHILDREN) {
            return Err(ConfigError::Validation(format!(
                "[build.layout] must contain a `{CHILDREN}` placeholder"
            )));
        }
        Ok(Self { template })
    }

    /// Wrap `children` in the layout.
    pub fn render(&self, children: &str) -> String {
        self.template.replacen(CHILDREN, children, 1)
    }
}
