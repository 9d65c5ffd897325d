//! Menu item model shared by every navigation widget.
//!
//! A menu is an ordered list of [`MenuItem`]s. Plain strings are raw markup
//! emitted as-is; structured entries are [`LinkItem`]s carrying a label, an
//! optional link target, visibility and active-state overrides, attribute
//! maps for the link and its container, and optional children.
//!
//! [`render`] is the plain menu renderer: it produces a `<ul class="uk-nav">`
//! list with one `<li>` per visible item. [`Nav`](crate::nav::Nav) exposes
//! the same renderer with the component kit's presentation modes.

use crate::dropdown::ItemsOptions;
use crate::nav::Nav;
use serde::Deserialize;
use uikit_core::{html, Attributes, ConfigError, RenderContext, RouteRef, Url};

/// Class added to the container of the item matching the current page.
pub const ACTIVE_CLASS: &str = "uk-active";
/// Class added to the container of an item that has children.
pub const PARENT_CLASS: &str = "uk-parent";

/// One entry of a menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MenuItem {
    /// Raw markup, emitted without encoding.
    Text(String),
    Link(LinkItem),
}

impl MenuItem {
    pub fn text(markup: impl Into<String>) -> Self {
        MenuItem::Text(markup.into())
    }

    /// A link item with a label and target.
    pub fn link(label: impl Into<String>, url: impl Into<Url>) -> Self {
        MenuItem::Link(LinkItem::new(label).with_url(url))
    }

    /// Raw markup is always visible.
    pub fn is_visible(&self) -> bool {
        match self {
            MenuItem::Text(_) => true,
            MenuItem::Link(link) => link.visible,
        }
    }
}

impl From<LinkItem> for MenuItem {
    fn from(link: LinkItem) -> Self {
        MenuItem::Link(link)
    }
}

impl From<&str> for MenuItem {
    fn from(markup: &str) -> Self {
        MenuItem::Text(markup.to_string())
    }
}

/// A structured menu entry.
///
/// Configuration documents use the option names `label`, `url`, `visible`,
/// `active`, `linkOptions`, `options`, `items` and `itemsOptions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkItem {
    /// Required when rendering; left optional so a missing label surfaces
    /// as a [`ConfigError`] rather than a deserialization failure.
    pub label: Option<String>,
    pub url: Option<Url>,
    /// Hidden items are skipped before any other processing.
    pub visible: bool,
    /// Overrides automatic route matching when set.
    pub active: Option<bool>,
    /// Attributes of the `<a>` element.
    #[serde(rename = "linkOptions", alias = "linkAttributes")]
    pub link_attributes: Attributes,
    /// Attributes of the `<li>` container.
    #[serde(rename = "options", alias = "containerAttributes")]
    pub container_attributes: Attributes,
    /// Nested entries, rendered as a sub-menu.
    #[serde(rename = "items", alias = "children")]
    pub children: Option<Vec<MenuItem>>,
    /// Options for the dropdown that holds `children` in navbar mode.
    pub items_options: ItemsOptions,
}

impl Default for LinkItem {
    fn default() -> Self {
        Self {
            label: None,
            url: None,
            visible: true,
            active: None,
            link_attributes: Attributes::new(),
            container_attributes: Attributes::new(),
            children: None,
            items_options: ItemsOptions::default(),
        }
    }
}

impl LinkItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<Url>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_link_attributes(mut self, attrs: Attributes) -> Self {
        self.link_attributes = attrs;
        self
    }

    pub fn with_container_attributes(mut self, attrs: Attributes) -> Self {
        self.container_attributes = attrs;
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_items_options(mut self, options: ItemsOptions) -> Self {
        self.items_options = options;
        self
    }

    /// The route this item points at, if its target is a route.
    pub fn route(&self) -> Option<&RouteRef> {
        self.url.as_ref().and_then(Url::as_route)
    }
}

/// Options for [`render`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub encode_labels: bool,
    /// Replace spaces in labels with `&nbsp;`.
    pub encode_spaces: bool,
    /// Derive active state from the current route for items without an
    /// explicit `active` flag.
    pub activate_items: bool,
    /// Attributes of the outer `<ul>`.
    #[serde(rename = "options", alias = "containerAttributes")]
    pub container_attributes: Attributes,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            encode_labels: true,
            encode_spaces: false,
            activate_items: true,
            container_attributes: Attributes::new(),
        }
    }
}

/// Render `items` as a `<ul class="uk-nav">` list.
///
/// Fails with [`ConfigError::MissingOption`] if any visible link item, at
/// any depth, has no label; nothing is returned in that case.
///
/// # Example
///
/// ```
/// use uikit_core::{RenderContext, RouteRef};
/// use uikit_widgets::menu::{render, MenuItem, RenderOptions};
///
/// let items: Vec<MenuItem> = vec![
///     MenuItem::link("Home", RouteRef::new("site/index")),
///     MenuItem::link("About", RouteRef::new("site/about")),
/// ];
/// let ctx = RenderContext::new("site/about");
/// let markup = render(&items, &ctx, &RenderOptions::default()).unwrap();
/// assert!(markup.contains(r#"<li class="uk-active"><a href="/site/about">About</a></li>"#));
/// ```
pub fn render(
    items: &[MenuItem],
    ctx: &RenderContext,
    options: &RenderOptions,
) -> Result<String, ConfigError> {
    Nav::from(options.clone()).render_items(items, ctx)
}

/// Whether `item` points at the page described by `ctx`.
///
/// Only route targets can be active; plain hrefs never are. See
/// [`RenderContext::is_current`] for the matching rule.
pub fn is_item_active(item: &LinkItem, ctx: &RenderContext) -> bool {
    let Some(route) = item.route() else {
        return false;
    };
    let active = ctx.is_current(route);
    tracing::trace!(route = route.route(), current = ctx.route(), active, "active match");
    active
}

/// Encode a label for output: HTML-encoded when `encode`, then spaces turned
/// into `&nbsp;` when `encode_spaces`.
pub fn resolve_label(label: &str, encode: bool, encode_spaces: bool) -> String {
    let label = if encode {
        html::encode(label)
    } else {
        label.to_string()
    };
    if encode_spaces {
        label.replace(' ', "&nbsp;")
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uikit_core::testing::{find_all, parse};

    fn home_about() -> Vec<MenuItem> {
        vec![
            MenuItem::link("Home", RouteRef::new("site/index")),
            MenuItem::link("About", RouteRef::new("site/about")),
        ]
    }

    #[test]
    fn only_current_item_is_active() {
        let ctx = RenderContext::new("site/about");
        let markup = render(&home_about(), &ctx, &RenderOptions::default()).unwrap();
        let nodes = parse(&markup).unwrap();
        let items = find_all(&nodes, "li");
        assert_eq!(items.len(), 2);
        assert!(!items[0].has_class(ACTIVE_CLASS));
        assert!(items[1].has_class(ACTIVE_CLASS));
    }

    #[test]
    fn renders_expected_markup() {
        let ctx = RenderContext::new("site/index");
        let markup = render(&home_about(), &ctx, &RenderOptions::default()).unwrap();
        assert_eq!(
            markup,
            "<ul class=\"uk-nav\"><li class=\"uk-active\"><a href=\"/site/index\">Home</a></li>\n\
             <li><a href=\"/site/about\">About</a></li></ul>"
        );
    }

    #[test]
    fn hidden_items_are_dropped() {
        let items: Vec<MenuItem> = vec![
            MenuItem::link("One", "#one"),
            LinkItem::new("Secret").with_url("#secret").with_visible(false).into(),
            MenuItem::link("Two", "#two"),
        ];
        let markup = render(&items, &RenderContext::default(), &RenderOptions::default()).unwrap();
        assert!(!markup.contains("Secret"));
        let nodes = parse(&markup).unwrap();
        let labels: Vec<String> = find_all(&nodes, "li").iter().map(|li| li.text()).collect();
        assert_eq!(labels, vec!["One", "Two"]);
    }

    #[test]
    fn hidden_item_without_label_is_not_an_error() {
        let items: Vec<MenuItem> = vec![LinkItem::default().with_visible(false).into()];
        let markup = render(&items, &RenderContext::default(), &RenderOptions::default()).unwrap();
        assert_eq!(markup, r#"<ul class="uk-nav"></ul>"#);
    }

    #[test]
    fn explicit_inactive_overrides_route_match() {
        let items: Vec<MenuItem> = vec![LinkItem::new("Home")
            .with_url(RouteRef::new("site/index"))
            .with_active(false)
            .into()];
        let ctx = RenderContext::new("site/index");
        let markup = render(&items, &ctx, &RenderOptions::default()).unwrap();
        assert!(!markup.contains(ACTIVE_CLASS));
    }

    #[test]
    fn explicit_active_without_url() {
        let items: Vec<MenuItem> = vec![LinkItem::new("Here").with_active(true).into()];
        let markup = render(&items, &RenderContext::default(), &RenderOptions::default()).unwrap();
        assert_eq!(markup, r#"<ul class="uk-nav"><li class="uk-active">Here</li></ul>"#);
    }

    #[test]
    fn activation_can_be_disabled() {
        let options = RenderOptions {
            activate_items: false,
            ..RenderOptions::default()
        };
        let ctx = RenderContext::new("site/about");
        let markup = render(&home_about(), &ctx, &options).unwrap();
        assert!(!markup.contains(ACTIVE_CLASS));
    }

    #[test]
    fn children_render_nested_list() {
        let items: Vec<MenuItem> = vec![LinkItem::new("Parent")
            .with_children(vec![
                LinkItem::new("A").into(),
                LinkItem::new("B").into(),
            ])
            .into()];
        let markup = render(&items, &RenderContext::default(), &RenderOptions::default()).unwrap();
        let nodes = parse(&markup).unwrap();
        let root = match &nodes[0] {
            uikit_core::testing::Node::Element(el) => el,
            other => panic!("expected element, got {:?}", other),
        };
        let parent = root.child("li").unwrap();
        assert!(parent.has_class(PARENT_CLASS));
        assert!(!parent.has_class(ACTIVE_CLASS));
        let sub = parent.child("ul").unwrap();
        assert!(sub.has_class("uk-nav-sub"));
        let labels: Vec<String> = sub.elements().map(|li| li.text()).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn empty_children_still_mark_parent() {
        let items: Vec<MenuItem> = vec![LinkItem::new("Parent").with_children(vec![]).into()];
        let markup = render(&items, &RenderContext::default(), &RenderOptions::default()).unwrap();
        assert!(markup.contains(r#"<li class="uk-parent">Parent<ul class="uk-nav-sub uk-nav"></ul></li>"#));
    }

    #[test]
    fn active_child_marks_only_child() {
        let items: Vec<MenuItem> = vec![LinkItem::new("Blog")
            .with_children(vec![MenuItem::link("Latest", RouteRef::new("post/index"))])
            .into()];
        let ctx = RenderContext::new("post/index");
        let markup = render(&items, &ctx, &RenderOptions::default()).unwrap();
        let nodes = parse(&markup).unwrap();
        let items = find_all(&nodes, "li");
        assert!(!items[0].has_class(ACTIVE_CLASS));
        assert!(items[1].has_class(ACTIVE_CLASS));
    }

    #[test]
    fn missing_label_fails() {
        let items: Vec<MenuItem> = vec![MenuItem::link("Home", "#"), LinkItem::default().with_url("#").into()];
        let err = render(&items, &RenderContext::default(), &RenderOptions::default()).unwrap_err();
        assert_eq!(err, ConfigError::missing("Nav", "label"));
    }

    #[test]
    fn missing_label_in_children_fails() {
        let items: Vec<MenuItem> = vec![LinkItem::new("Parent")
            .with_children(vec![LinkItem::default().into()])
            .into()];
        assert!(render(&items, &RenderContext::default(), &RenderOptions::default()).is_err());
    }

    #[test]
    fn encode_spaces_after_encoding() {
        let options = RenderOptions {
            encode_spaces: true,
            ..RenderOptions::default()
        };
        let items: Vec<MenuItem> = vec![MenuItem::link("Foo Bar & Co", "#")];
        let markup = render(&items, &RenderContext::default(), &options).unwrap();
        assert!(markup.contains(r##"<a href="#">Foo&nbsp;Bar&nbsp;&amp;&nbsp;Co</a>"##));
    }

    #[test]
    fn labels_raw_when_encoding_disabled() {
        let options = RenderOptions {
            encode_labels: false,
            ..RenderOptions::default()
        };
        let items: Vec<MenuItem> = vec![MenuItem::link("<b>Bold</b>", "#")];
        let markup = render(&items, &RenderContext::default(), &options).unwrap();
        assert!(markup.contains("<b>Bold</b>"));
    }

    #[test]
    fn labels_encoded_by_default() {
        let items: Vec<MenuItem> = vec![LinkItem::new("<script>").into()];
        let markup = render(&items, &RenderContext::default(), &RenderOptions::default()).unwrap();
        assert!(markup.contains("<li>&lt;script&gt;</li>"));
    }

    #[test]
    fn text_items_round_trip() {
        let items: Vec<MenuItem> = ["<li>Alpha</li>", "<li>Beta</li>", "<li>Gamma</li>"]
            .into_iter()
            .map(MenuItem::from)
            .collect();
        let markup = render(&items, &RenderContext::default(), &RenderOptions::default()).unwrap();
        let nodes = parse(&markup).unwrap();
        let labels: Vec<String> = find_all(&nodes, "li").iter().map(|li| li.text()).collect();
        assert_eq!(labels, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn container_and_link_attributes() {
        let items: Vec<MenuItem> = vec![LinkItem::new("Docs")
            .with_url("/docs")
            .with_link_attributes(Attributes::new().with("target", "_blank"))
            .with_container_attributes(Attributes::new().with_class("docs"))
            .with_active(true)
            .into()];
        let options = RenderOptions {
            container_attributes: Attributes::new().with("id", "main-menu"),
            ..RenderOptions::default()
        };
        let markup = render(&items, &RenderContext::default(), &options).unwrap();
        assert_eq!(
            markup,
            r#"<ul id="main-menu" class="uk-nav"><li class="docs uk-active"><a target="_blank" href="/docs">Docs</a></li></ul>"#
        );
    }

    #[test]
    fn is_item_active_needs_route_target() {
        let ctx = RenderContext::new("site/index");
        assert!(!is_item_active(&LinkItem::new("Home"), &ctx));
        assert!(!is_item_active(&LinkItem::new("Home").with_url("/site/index"), &ctx));
        assert!(is_item_active(
            &LinkItem::new("Home").with_url(RouteRef::new("site/index")),
            &ctx
        ));
    }

    #[test]
    fn single_param_mismatch_is_inactive() {
        let ctx = RenderContext::new("post/view").with_params([("id", "1"), ("tab", "info")]);
        let item = LinkItem::new("Post").with_url(
            RouteRef::new("post/view")
                .with_param("id", "1")
                .with_param("tab", "history"),
        );
        assert!(!is_item_active(&item, &ctx));
    }

    #[test]
    fn resolve_label_flags_are_independent() {
        assert_eq!(resolve_label("a <b>", true, false), "a &lt;b&gt;");
        assert_eq!(resolve_label("a <b>", false, true), "a&nbsp;<b>");
        assert_eq!(resolve_label("a <b>", true, true), "a&nbsp;&lt;b&gt;");
    }

    #[test]
    fn deserialize_items() {
        let items: Vec<MenuItem> = serde_json::from_str(
            r##"[
                "<li class=\"uk-nav-divider\"></li>",
                {"label": "Home", "url": ["site/index"], "linkOptions": {"class": "home"}},
                {"label": "Hidden", "visible": false},
                {"label": "More", "items": [{"label": "A", "url": "#a"}]}
            ]"##,
        )
        .unwrap();
        assert_eq!(items.len(), 4);
        assert!(matches!(&items[0], MenuItem::Text(_)));
        match &items[1] {
            MenuItem::Link(link) => {
                assert_eq!(link.label.as_deref(), Some("Home"));
                assert_eq!(link.route().map(RouteRef::route), Some("site/index"));
                assert!(link.link_attributes.has_class("home"));
                assert!(link.visible);
            }
            other => panic!("expected link, got {:?}", other),
        }
        assert!(!items[2].is_visible());
        match &items[3] {
            MenuItem::Link(link) => assert_eq!(link.children.as_ref().map(Vec::len), Some(1)),
            other => panic!("expected link, got {:?}", other),
        }
    }
}
