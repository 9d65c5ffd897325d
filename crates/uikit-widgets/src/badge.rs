//! Badge and notification bubble.

use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, Widget};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Badge {
    /// Markup inside the badge, not encoded.
    pub body: String,
    /// Round notification style.
    pub is_notification: bool,
    pub options: Attributes,
}

impl Badge {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn notification(mut self) -> Self {
        self.is_notification = true;
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }
}

impl Widget for Badge {
    fn render(&self, _ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut options = self.options.clone();
        options.add_class("uk-badge");
        if self.is_notification {
            options.add_class("uk-badge-notification");
        }
        Ok(html::tag("div", &format!("\n{}\n", self.body), &options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_badge() {
        let markup = Badge::new("New").render(&RenderContext::default()).unwrap();
        assert_eq!(markup, "<div class=\"uk-badge\">\nNew\n</div>");
    }

    #[test]
    fn notification_badge() {
        let markup = Badge::new("3")
            .notification()
            .with_options(Attributes::new().with_class("uk-badge-danger"))
            .render(&RenderContext::default())
            .unwrap();
        assert_eq!(
            markup,
            "<div class=\"uk-badge-danger uk-badge uk-badge-notification\">\n3\n</div>"
        );
    }
}
