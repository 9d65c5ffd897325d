//! Navbar container.

use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, Widget};

/// A `<nav class="uk-navbar">` around arbitrary content, typically one or
/// more navbar-mode [`Nav`](crate::nav::Nav)s.
///
/// # Example
///
/// ```ignore
/// let bar = NavBar::new().wrap(&Nav::new(items).with_navbar(true), &ctx)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavBar {
    /// Markup placed inside the bar, not encoded.
    pub content: String,
    pub options: Attributes,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Append markup after the existing content.
    pub fn push(&mut self, markup: &str) {
        self.content.push_str(markup);
    }

    /// Render `inner` and place it after the bar's own content.
    pub fn wrap<W: Widget>(&self, inner: &W, ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut bar = self.clone();
        bar.push(&inner.render(ctx)?);
        bar.render(ctx)
    }
}

impl Widget for NavBar {
    fn render(&self, _ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut options = self.options.clone();
        options.add_class("uk-navbar");
        if options.get("role").is_none_or(str::is_empty) {
            options.set("role", "navigation");
        }
        Ok(html::tag("nav", &self.content, &options))
    }
}
