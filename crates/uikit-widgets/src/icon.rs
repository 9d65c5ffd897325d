//! Icon font glyph.

use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, Widget};

/// An `<i class="uk-icon-NAME"></i>` glyph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Icon {
    /// Icon name without the `uk-icon-` prefix. Required.
    pub name: String,
    pub options: Attributes,
}

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Attributes::new(),
        }
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }
}

impl Widget for Icon {
    fn render(&self, _ctx: &RenderContext) -> Result<String, ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::missing("Icon", "name"));
        }
        let mut options = self.options.clone();
        options.add_class(&format!("uk-icon-{}", self.name));
        Ok(html::tag("i", "", &options))
    }
}
