//! Subnav: a horizontal row of links, optionally pills or separated by lines.

use crate::menu::{self, MenuItem, ACTIVE_CLASS};
use crate::nav::Nav;
use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, Widget};

/// A `<ul class="uk-subnav">`.
///
/// Items with children open a small dropdown, on hover by default or on
/// click when `hover_mode` is off.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubNav {
    pub items: Vec<MenuItem>,
    pub encode_labels: bool,
    pub activate_items: bool,
    pub options: Attributes,
    /// Highlight the active item with a background.
    pub show_pills: bool,
    /// Separate items with lines.
    pub show_line: bool,
    pub hover_mode: bool,
}

impl Default for SubNav {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            encode_labels: true,
            activate_items: true,
            options: Attributes::new(),
            show_pills: false,
            show_line: false,
            hover_mode: true,
        }
    }
}

impl SubNav {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_pills(mut self, show: bool) -> Self {
        self.show_pills = show;
        self
    }

    pub fn with_line(mut self, show: bool) -> Self {
        self.show_line = show;
        self
    }

    pub fn with_hover_mode(mut self, hover: bool) -> Self {
        self.hover_mode = hover;
        self
    }

    pub fn with_encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    pub fn with_activate_items(mut self, activate: bool) -> Self {
        self.activate_items = activate;
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    pub fn render_item(&self, item: &MenuItem, ctx: &RenderContext) -> Result<String, ConfigError> {
        let link = match item {
            MenuItem::Text(markup) => return Ok(html::tag("li", markup, &Attributes::new())),
            MenuItem::Link(link) => link,
        };
        let label = link
            .label
            .as_deref()
            .ok_or_else(|| ConfigError::missing("SubNav", "label"))?;
        let label = menu::resolve_label(label, self.encode_labels, false);

        let mut options = link.container_attributes.clone();
        let active = match link.active {
            Some(active) => active,
            None => self.activate_items && menu::is_item_active(link, ctx),
        };
        if active {
            options.add_class(ACTIVE_CLASS);
        }

        let mut dropdown = String::new();
        if let Some(children) = &link.children {
            let mode = if self.hover_mode { "" } else { "{mode:'click'}" };
            options.prepend_default("data-uk-dropdown", mode);
            let nav = Nav::default()
                .with_options(Attributes::new().with_class("uk-nav-dropdown"))
                .with_encode_labels(self.encode_labels)
                .with_activate_items(self.activate_items)
                .render_items(children, ctx)?;
            dropdown = html::tag(
                "div",
                &nav,
                &Attributes::new().with_class("uk-dropdown uk-dropdown-small"),
            );
        }

        let body = match link.url.as_ref().and_then(|url| ctx.href(url)) {
            Some(href) => html::link(&label, Some(&href), &link.link_attributes),
            None => label,
        };
        Ok(html::tag("li", &format!("{}{}", body, dropdown), &options))
    }
}

impl Widget for SubNav {
    fn render(&self, ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut options = self.options.clone();
        options.add_class("uk-subnav");
        if self.show_pills {
            options.add_class("uk-subnav-pill");
        }
        if self.show_line {
            options.add_class("uk-subnav-line");
        }

        let mut rendered = Vec::with_capacity(self.items.len());
        for item in self.items.iter().filter(|item| item.is_visible()) {
            rendered.push(self.render_item(item, ctx)?);
        }
        tracing::debug!(rendered = rendered.len(), "rendered subnav items");
        Ok(html::tag("ul", &rendered.join("\n"), &options))
    }
}
