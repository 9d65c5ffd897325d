//! Dot navigation, e.g. for slideshows.

use crate::menu::MenuItem;
use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, Widget};

/// A `<ul class="uk-dotnav">` with one dot per item.
///
/// Labels are emitted as given; dots usually carry no visible text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dotnav {
    pub items: Vec<MenuItem>,
    pub is_vertical: bool,
    pub options: Attributes,
}

impl Dotnav {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn vertical(mut self) -> Self {
        self.is_vertical = true;
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    fn render_item(&self, item: &MenuItem, ctx: &RenderContext) -> Result<String, ConfigError> {
        let link = match item {
            MenuItem::Text(markup) => return Ok(html::tag("li", markup, &Attributes::new())),
            MenuItem::Link(link) => link,
        };
        let label = link
            .label
            .as_deref()
            .ok_or_else(|| ConfigError::missing("Dotnav", "label"))?;
        let href = link.url.as_ref().and_then(|url| ctx.href(url));
        let mut options = link.container_attributes.clone();
        if link.active == Some(true) {
            options.add_class("uk-active");
        }
        let body = html::link(label, href.as_deref(), &Attributes::new());
        Ok(html::tag("li", &body, &options))
    }
}

impl Widget for Dotnav {
    fn render(&self, ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut options = self.options.clone();
        options.add_class("uk-dotnav");
        if self.is_vertical {
            options.add_class("uk-dotnav-vertical");
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.is_visible())
            .map(|item| self.render_item(item, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(html::tag("ul", &items.join("\n"), &options))
    }
}
