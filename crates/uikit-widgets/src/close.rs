//! Close button.

use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, Widget};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Close {
    /// `a` by default; `button` is the other common choice.
    pub tag_name: String,
    /// Alternative (filled) style.
    pub is_alternative: bool,
    pub options: Attributes,
}

impl Default for Close {
    fn default() -> Self {
        Self {
            tag_name: "a".to_string(),
            is_alternative: false,
            options: Attributes::new(),
        }
    }
}

impl Close {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn alternative(mut self) -> Self {
        self.is_alternative = true;
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }
}

impl Widget for Close {
    fn render(&self, _ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut options = self.options.clone();
        options.add_class("uk-close");
        if self.is_alternative {
            options.add_class("uk-close-alt");
        }
        Ok(html::tag(&self.tag_name, "", &options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_close() {
        assert_eq!(
            Close::new().render(&RenderContext::default()).unwrap(),
            r#"<a class="uk-close"></a>"#
        );
    }

    #[test]
    fn alternative_button() {
        let close = Close::new()
            .with_tag_name("button")
            .alternative()
            .with_options(Attributes::new().with("type", "button"));
        assert_eq!(
            close.render(&RenderContext::default()).unwrap(),
            r#"<button type="button" class="uk-close uk-close-alt"></button>"#
        );
    }
}
