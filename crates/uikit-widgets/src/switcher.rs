//! Switcher: a subnav whose items flip between content panels.

use crate::menu::{LinkItem, MenuItem};
use crate::subnav::SubNav;
use serde::Deserialize;
use uikit_core::{html, Attributes, ClientOptions, ConfigError, RenderContext, Url, Widget};

/// One tab of a [`Switcher`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitcherItem {
    pub label: Option<String>,
    /// Link of the tab, `#` when unset.
    pub url: Option<Url>,
    /// Markup of the panel, inserted verbatim.
    pub content: Option<String>,
    /// Attributes of the panel `<li>`.
    pub item_options: Attributes,
}

impl SwitcherItem {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<Url>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_item_options(mut self, options: Attributes) -> Self {
        self.item_options = options;
        self
    }
}

/// A [`SubNav`] connected to a `<ul class="uk-switcher">` of panels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Switcher {
    /// Id of the panel list. The subnav connects to it.
    pub id: Option<String>,
    pub items: Vec<SwitcherItem>,
    /// Attributes of the subnav `<ul>`.
    pub nav_options: Attributes,
    /// Attributes of the panel `<ul>`.
    pub options: Attributes,
}

impl Switcher {
    pub fn new(id: impl Into<String>, items: Vec<SwitcherItem>) -> Self {
        Self {
            id: Some(id.into()),
            items,
            ..Self::default()
        }
    }

    pub fn with_nav_options(mut self, options: Attributes) -> Self {
        self.nav_options = options;
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }
}

impl Widget for Switcher {
    fn render(&self, ctx: &RenderContext) -> Result<String, ConfigError> {
        let mut options = self.options.clone();
        options.add_class("uk-switcher");
        if let Some(id) = &self.id {
            options.set_default("id", id.as_str());
        }
        let id = options
            .get("id")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ConfigError::missing("Switcher", "id"))?;

        let mut tabs = Vec::with_capacity(self.items.len());
        let mut panels = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let label = item
                .label
                .as_deref()
                .ok_or_else(|| ConfigError::missing("Switcher", "label"))?;
            let content = item
                .content
                .as_deref()
                .ok_or_else(|| ConfigError::missing("Switcher", "content"))?;
            let url = item.url.clone().unwrap_or_else(|| Url::from("#"));
            tabs.push(MenuItem::from(LinkItem::new(label).with_url(url)));
            panels.push(html::tag("li", content, &item.item_options));
        }

        let mut nav_options = self.nav_options.clone();
        let connect = ClientOptions::new().with("connect", format!("#{}", id));
        nav_options.set("data-uk-switcher", connect.to_attribute());
        let nav = SubNav::new(tabs).with_options(nav_options).render(ctx)?;

        tracing::debug!(panels = panels.len(), "rendered switcher");
        Ok(format!("{}{}", nav, html::tag("ul", &panels.join("\n"), &options)))
    }
}
