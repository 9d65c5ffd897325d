//! Off-canvas sidebar: a toggle plus the hidden `uk-offcanvas` container.
//!
//! The bar usually holds a [`Nav`](crate::nav::Nav) rendered with
//! `with_offcanvas(true)`; its `uk-nav-offcanvas` styling only applies
//! inside this container.

use crate::dropdown::{toggle_defaults, ToggleButton};
use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, Widget};

/// Behavior attribute read by the off-canvas script.
const BEHAVIOR: &str = "data-uk-offcanvas";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OffCanvas {
    /// Id of the container. The toggle targets it.
    pub id: Option<String>,
    /// Markup of the bar, inserted verbatim.
    pub body: String,
    /// `None` renders no toggle. The tag defaults to `button`.
    pub toggle_button: Option<ToggleButton>,
    /// Slide the bar in from the right.
    pub is_flip: bool,
    /// Attributes of the `uk-offcanvas` container.
    pub options: Attributes,
    /// Attributes of the inner `uk-offcanvas-bar`.
    pub bar_options: Attributes,
}

impl Default for OffCanvas {
    fn default() -> Self {
        Self {
            id: None,
            body: String::new(),
            toggle_button: Some(ToggleButton::default()),
            is_flip: false,
            options: Attributes::new(),
            bar_options: Attributes::new(),
        }
    }
}

impl OffCanvas {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_toggle_button(mut self, toggle: Option<ToggleButton>) -> Self {
        self.toggle_button = toggle;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.is_flip = flip;
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    pub fn with_bar_options(mut self, options: Attributes) -> Self {
        self.bar_options = options;
        self
    }

    fn render_toggle_button(&self, target: Option<&str>) -> Result<Option<String>, ConfigError> {
        let Some(toggle) = &self.toggle_button else {
            return Ok(None);
        };
        let tag_name = toggle.tag.as_deref().unwrap_or("button");
        let mut attrs = toggle.attributes.clone();

        let needs_target =
            !attrs.contains("href") && (tag_name == "a" || !attrs.contains(BEHAVIOR));
        let target = match target {
            Some(id) if !id.is_empty() => id,
            _ if needs_target => return Err(ConfigError::missing("OffCanvas", "id")),
            _ => "",
        };

        if !attrs.contains(BEHAVIOR) {
            let behavior = if attrs.contains("href") {
                String::new()
            } else {
                format!("{{target:'#{}'}}", target)
            };
            attrs.set(BEHAVIOR, behavior);
        }
        toggle_defaults(tag_name, &mut attrs, target);
        Ok(Some(html::tag(tag_name, &toggle.label, &attrs)))
    }
}

impl Widget for OffCanvas {
    fn render(&self, _ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut options = self.options.clone();
        options.add_class("uk-offcanvas");
        if let Some(id) = &self.id {
            options.set_default("id", id.as_str());
        }
        let mut bar = self.bar_options.clone();
        bar.add_class("uk-offcanvas-bar");
        if self.is_flip {
            bar.add_class("uk-offcanvas-bar-flip");
        }

        let toggle = self
            .render_toggle_button(options.get("id"))
            .inspect_err(|err| tracing::warn!(%err, "offcanvas rejected its configuration"))?;

        let mut out = toggle.unwrap_or_default();
        out.push('\n');
        out.push_str(&html::begin_tag("div", &options));
        out.push('\n');
        out.push_str(&html::begin_tag("div", &bar));
        out.push_str("\n\n");
        out.push_str(&self.body);
        out.push_str("\n\n");
        out.push_str(&html::end_tag("div"));
        out.push('\n');
        out.push_str(&html::end_tag("div"));
        Ok(out)
    }
}
