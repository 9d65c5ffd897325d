//! Navigation list with the component kit's presentation modes.
//!
//! [`Nav`] renders a `<ul>` of menu items. Besides the plain side nav it
//! supports the navbar (horizontal bar with dropdowns), offcanvas and
//! accordion variants. Items with children become parents: a nested
//! `uk-nav-sub` list in plain mode, a navbar [`Dropdown`] in navbar mode.

use crate::dropdown::Dropdown;
use crate::menu::{self, MenuItem, RenderOptions, ACTIVE_CLASS, PARENT_CLASS};
use serde::Deserialize;
use uikit_core::{html, Attributes, ClientOptions, ConfigError, RenderContext, Widget};

/// A navigation menu.
///
/// # Example
///
/// ```ignore
/// use uikit_core::{RenderContext, RouteRef, Widget};
/// use uikit_widgets::menu::{LinkItem, MenuItem};
/// use uikit_widgets::nav::Nav;
///
/// let nav = Nav::new(vec![
///     MenuItem::link("Home", RouteRef::new("site/index")),
///     LinkItem::new("More")
///         .with_children(vec![MenuItem::link("Level 1 - A", "#")])
///         .into(),
/// ])
/// .with_navbar(true);
///
/// let markup = nav.render(&RenderContext::new("site/index"))?;
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nav {
    pub items: Vec<MenuItem>,
    pub encode_labels: bool,
    pub encode_spaces: bool,
    pub activate_items: bool,
    /// Attributes of the `<ul>`.
    pub options: Attributes,
    /// Collapsible parents; enables the `data-uk-nav` behavior.
    pub accordion: bool,
    /// Float a navbar nav to the right.
    pub flip: bool,
    pub show_parent_icon: bool,
    /// Render as a navbar nav. Labels are never encoded in this mode.
    pub navbar: bool,
    /// Style for an offcanvas bar. Cannot be combined with `navbar`.
    pub offcanvas: bool,
    /// Forwarded to `data-uk-nav` (accordion) or `data-uk-dropdown` (navbar
    /// parents).
    pub client_options: ClientOptions,
}

impl Default for Nav {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            encode_labels: true,
            encode_spaces: false,
            activate_items: true,
            options: Attributes::new(),
            accordion: false,
            flip: false,
            show_parent_icon: false,
            navbar: false,
            offcanvas: false,
            client_options: ClientOptions::new(),
        }
    }
}

impl From<RenderOptions> for Nav {
    fn from(options: RenderOptions) -> Self {
        Self {
            encode_labels: options.encode_labels,
            encode_spaces: options.encode_spaces,
            activate_items: options.activate_items,
            options: options.container_attributes,
            ..Self::default()
        }
    }
}

impl Nav {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    pub fn with_encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    pub fn with_encode_spaces(mut self, encode: bool) -> Self {
        self.encode_spaces = encode;
        self
    }

    pub fn with_activate_items(mut self, activate: bool) -> Self {
        self.activate_items = activate;
        self
    }

    pub fn with_accordion(mut self, accordion: bool) -> Self {
        self.accordion = accordion;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_parent_icon(mut self, show: bool) -> Self {
        self.show_parent_icon = show;
        self
    }

    pub fn with_navbar(mut self, navbar: bool) -> Self {
        self.navbar = navbar;
        self
    }

    pub fn with_offcanvas(mut self, offcanvas: bool) -> Self {
        self.offcanvas = offcanvas;
        self
    }

    pub fn with_client_options(mut self, options: ClientOptions) -> Self {
        self.client_options = options;
        self
    }

    /// Render an arbitrary item list with this nav's settings.
    pub(crate) fn render_items(
        &self,
        items: &[MenuItem],
        ctx: &RenderContext,
    ) -> Result<String, ConfigError> {
        let options = self.list_attributes()?;

        let mut rendered = Vec::with_capacity(items.len());
        for item in items.iter().filter(|item| item.is_visible()) {
            rendered.push(self.render_item(item, ctx)?);
        }
        tracing::debug!(
            rendered = rendered.len(),
            hidden = items.len() - rendered.len(),
            navbar = self.navbar,
            "rendered nav items"
        );

        let list = html::tag("ul", &rendered.join("\n"), &options);
        if self.navbar && self.flip {
            return Ok(html::tag(
                "div",
                &list,
                &Attributes::new().with_class("uk-navbar-flip"),
            ));
        }
        Ok(list)
    }

    /// Render a single item as its `<li>` (or, for raw markup, as given).
    pub fn render_item(&self, item: &MenuItem, ctx: &RenderContext) -> Result<String, ConfigError> {
        let link = match item {
            MenuItem::Text(markup) if self.navbar => {
                return Ok(html::link(markup, None, &Attributes::new()))
            }
            MenuItem::Text(markup) => return Ok(markup.clone()),
            MenuItem::Link(link) => link,
        };

        let label = link
            .label
            .as_deref()
            .ok_or_else(|| ConfigError::missing("Nav", "label"))?;
        let mut label = menu::resolve_label(label, self.encodes_labels(), self.encode_spaces);
        let href = link.url.as_ref().and_then(|url| ctx.href(url));
        if self.navbar && href.is_none() {
            label = html::link(&label, None, &link.link_attributes);
        }

        let mut options = link.container_attributes.clone();
        let active = match link.active {
            Some(active) => active,
            None => self.activate_items && menu::is_item_active(link, ctx),
        };
        if active {
            options.add_class(ACTIVE_CLASS);
        }

        let mut submenu = String::new();
        if let Some(children) = &link.children {
            options.add_class(PARENT_CLASS);
            submenu = if self.navbar {
                options.set("data-uk-dropdown", self.client_options.to_attribute());
                Dropdown::default()
                    .with_navbar(true)
                    .with_items_options(link.items_options.clone())
                    .render_items(children, ctx)?
            } else {
                self.submenu().render_items(children, ctx)?
            };
        }

        let body = match href {
            Some(href) => html::link(&label, Some(&href), &link.link_attributes),
            None => label,
        };
        Ok(html::tag("li", &format!("{}{}", body, submenu), &options))
    }

    fn encodes_labels(&self) -> bool {
        self.encode_labels && !self.navbar
    }

    fn list_attributes(&self) -> Result<Attributes, ConfigError> {
        let mut options = self.options.clone();
        options.add_class(if self.navbar { "uk-navbar-nav" } else { "uk-nav" });
        if self.offcanvas {
            if self.navbar {
                return Err(ConfigError::conflict("Nav", "navbar", "offcanvas"));
            }
            options.add_class("uk-nav-offcanvas");
        }
        if self.accordion {
            options.set("data-uk-nav", self.client_options.to_attribute());
        }
        if self.navbar && self.show_parent_icon {
            options.add_class("uk-nav-parent-icon");
        }
        Ok(options)
    }

    /// Nested lists keep the label and activation settings of their parent.
    fn submenu(&self) -> Nav {
        Nav {
            encode_labels: self.encode_labels,
            encode_spaces: self.encode_spaces,
            activate_items: self.activate_items,
            options: Attributes::new().with_class("uk-nav-sub"),
            ..Nav::default()
        }
    }
}

impl Widget for Nav {
    fn render(&self, ctx: &RenderContext) -> Result<String, ConfigError> {
        self.render_items(&self.items, ctx)
            .inspect_err(|err| tracing::warn!(%err, "nav rejected its configuration"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::LinkItem;
    use pretty_assertions::assert_eq;
    use uikit_core::testing::{find_all, parse};
    use uikit_core::RouteRef;

    fn ctx() -> RenderContext {
        RenderContext::new("site/index")
    }

    #[test]
    fn plain_nav() {
        let nav = Nav::new(vec![
            "<li class=\"uk-nav-header\">Header</li>".into(),
            MenuItem::link("Home", RouteRef::new("site/index")),
        ]);
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            "<ul class=\"uk-nav\"><li class=\"uk-nav-header\">Header</li>\n\
             <li class=\"uk-active\"><a href=\"/site/index\">Home</a></li></ul>"
        );
    }

    #[test]
    fn user_classes_come_first() {
        let nav = Nav::new(vec![]).with_options(Attributes::new().with_class("uk-nav-side"));
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            r#"<ul class="uk-nav-side uk-nav"></ul>"#
        );
    }

    #[test]
    fn offcanvas_adds_class() {
        let nav = Nav::new(vec![]).with_offcanvas(true);
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            r#"<ul class="uk-nav uk-nav-offcanvas"></ul>"#
        );
    }

    #[test]
    fn navbar_and_offcanvas_conflict() {
        let nav = Nav::new(vec![MenuItem::link("Home", "#")])
            .with_navbar(true)
            .with_offcanvas(true);
        assert_eq!(
            nav.render(&ctx()).unwrap_err(),
            ConfigError::conflict("Nav", "navbar", "offcanvas")
        );
    }

    #[test]
    fn accordion_sets_client_options() {
        let nav = Nav::new(vec![])
            .with_accordion(true)
            .with_client_options(ClientOptions::new().with("multiple", true));
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            r#"<ul class="uk-nav" data-uk-nav="{&quot;multiple&quot;:true}"></ul>"#
        );
    }

    #[test]
    fn accordion_without_options_has_empty_attribute() {
        let nav = Nav::new(vec![]).with_accordion(true);
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            r#"<ul class="uk-nav" data-uk-nav=""></ul>"#
        );
    }

    #[test]
    fn navbar_wraps_text_and_urlless_labels() {
        let nav = Nav::new(vec![
            "Plain".into(),
            LinkItem::new("<i class=\"uk-icon-home\"></i> Home")
                .with_link_attributes(Attributes::new().with_class("home"))
                .into(),
        ])
        .with_navbar(true);
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            "<ul class=\"uk-navbar-nav\"><a>Plain</a>\n\
             <li><a class=\"home\"><i class=\"uk-icon-home\"></i> Home</a></li></ul>"
        );
    }

    #[test]
    fn navbar_ignores_encode_labels() {
        let nav = Nav::new(vec![MenuItem::link("<b>Bold</b>", "#")])
            .with_navbar(true)
            .with_encode_labels(true);
        assert!(nav.render(&ctx()).unwrap().contains("<b>Bold</b>"));
    }

    #[test]
    fn navbar_flip_and_parent_icon() {
        let nav = Nav::new(vec![])
            .with_navbar(true)
            .with_flip(true)
            .with_parent_icon(true);
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            r#"<div class="uk-navbar-flip"><ul class="uk-navbar-nav uk-nav-parent-icon"></ul></div>"#
        );
    }

    #[test]
    fn flip_requires_navbar() {
        let nav = Nav::new(vec![]).with_flip(true);
        assert_eq!(nav.render(&ctx()).unwrap(), r#"<ul class="uk-nav"></ul>"#);
    }

    #[test]
    fn navbar_parent_renders_dropdown() {
        let nav = Nav::new(vec![LinkItem::new("More")
            .with_url("#")
            .with_children(vec![
                MenuItem::link("A", "#a"),
                MenuItem::link("B", "#b"),
            ])
            .into()])
        .with_navbar(true);
        let markup = nav.render(&ctx()).unwrap();
        assert_eq!(
            markup,
            "<ul class=\"uk-navbar-nav\"><li class=\"uk-parent\" data-uk-dropdown=\"\">\
             <a href=\"#\">More</a>\
             <div class=\"uk-dropdown uk-dropdown-navbar\"><ul class=\"uk-nav\">\
             <li><a href=\"#a\">A</a></li>\n<li><a href=\"#b\">B</a></li></ul></div></li></ul>"
        );
    }

    #[test]
    fn nested_lists_inherit_label_settings() {
        let nav = Nav::new(vec![LinkItem::new("Top")
            .with_children(vec![MenuItem::link("Sub item", "#")])
            .into()])
        .with_encode_spaces(true);
        let markup = nav.render(&ctx()).unwrap();
        assert!(markup.contains("Sub&nbsp;item"));
    }

    #[test]
    fn two_levels_of_children() {
        let nav = Nav::new(vec![LinkItem::new("L0")
            .with_children(vec![LinkItem::new("L1")
                .with_children(vec![MenuItem::link("L2", "#")])
                .into()])
            .into()]);
        let markup = nav.render(&ctx()).unwrap();
        let nodes = parse(&markup).unwrap();
        assert_eq!(find_all(&nodes, "ul").len(), 3);
        assert_eq!(find_all(&nodes, "li").len(), 3);
    }

    #[test]
    fn render_item_directly() {
        let nav = Nav::default();
        let item = MenuItem::link("About", RouteRef::new("site/about"));
        assert_eq!(
            nav.render_item(&item, &ctx()).unwrap(),
            r#"<li><a href="/site/about">About</a></li>"#
        );
    }

    #[test]
    fn empty_href_renders_plain_label() {
        let nav = Nav::new(vec![MenuItem::link("Nowhere", "")]);
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            r#"<ul class="uk-nav"><li>Nowhere</li></ul>"#
        );
    }

    #[test]
    fn deserialize_nav() {
        let nav: Nav = serde_json::from_str(
            r#"{
                "navbar": true,
                "encodeSpaces": true,
                "options": {"id": "top"},
                "items": [{"label": "Home", "url": ["/site/index"]}]
            }"#,
        )
        .unwrap();
        assert!(nav.navbar);
        assert!(nav.encode_spaces);
        assert!(nav.encode_labels);
        assert_eq!(nav.items.len(), 1);
        assert_eq!(
            nav.render(&ctx()).unwrap(),
            r#"<ul id="top" class="uk-navbar-nav"><li class="uk-active"><a href="/site/index">Home</a></li></ul>"#
        );
    }
}
