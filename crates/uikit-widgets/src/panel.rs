//! Content panel with optional badge and title.

use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, Widget};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Panel {
    /// Badge text shown in the corner.
    pub badge: Option<String>,
    pub title: Option<String>,
    /// Markup of the panel body, not encoded.
    pub body: String,
    /// Boxed style.
    pub is_box: bool,
    pub options: Attributes,
}

impl Panel {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn boxed(mut self) -> Self {
        self.is_box = true;
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }
}

impl Widget for Panel {
    fn render(&self, _ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut options = self.options.clone();
        options.add_class("uk-panel");
        if self.is_box {
            options.add_class("uk-panel-box");
        }

        let mut parts = Vec::with_capacity(3);
        if let Some(badge) = &self.badge {
            parts.push(html::tag(
                "div",
                badge,
                &Attributes::new().with_class("uk-panel-badge uk-badge"),
            ));
        }
        if let Some(title) = &self.title {
            parts.push(html::tag(
                "h3",
                title,
                &Attributes::new().with_class("uk-panel-title"),
            ));
        }
        parts.push(self.body.clone());

        Ok(html::tag("div", &format!("\n{}\n", parts.join("\n")), &options))
    }
}
