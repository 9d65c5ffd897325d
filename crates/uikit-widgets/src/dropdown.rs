//! Dropdown menu: a toggle button plus a `uk-dropdown` panel holding a nav.
//!
//! Outside a navbar the dropdown renders its own wrapper element (carrying
//! the `data-uk-dropdown` behavior) and toggle button. Inside a navbar the
//! parent `<li>` plays both roles, so only the panel is emitted.

use crate::icon::Icon;
use crate::menu::MenuItem;
use crate::nav::Nav;
use serde::Deserialize;
use uikit_core::html::{begin_tag, end_tag, tag};
use uikit_core::{Attributes, ClientOptions, ConfigError, RenderContext, Widget};

/// Settings for the nav rendered inside a dropdown panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemsOptions {
    /// `None` keeps the nav default (encoded). Navbar dropdowns never encode.
    pub encode_labels: Option<bool>,
    pub encode_spaces: bool,
    pub activate_items: bool,
    /// Attributes of the inner `<ul>`.
    pub options: Attributes,
}

impl Default for ItemsOptions {
    fn default() -> Self {
        Self {
            encode_labels: None,
            encode_spaces: false,
            activate_items: true,
            options: Attributes::new(),
        }
    }
}

/// Where the caret icon sits on the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaretAlign {
    /// Appended after the label (default).
    #[default]
    Inline,
    /// Floated to the right edge of the button.
    Right,
}

/// The element that opens a dropdown or an off-canvas bar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleButton {
    /// `a` or `button`. `None` uses the owning widget's default.
    pub tag: Option<String>,
    pub label: String,
    pub align_caret: CaretAlign,
    /// Any other key becomes an attribute of the toggle element.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Default for ToggleButton {
    fn default() -> Self {
        Self {
            tag: None,
            label: "Show".to_string(),
            align_caret: CaretAlign::Inline,
            attributes: Attributes::new(),
        }
    }
}

impl ToggleButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// A `<button>` toggle.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            tag: Some("button".to_string()),
            ..Self::new(label)
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_align_caret(mut self, align: CaretAlign) -> Self {
        self.align_caret = align;
        self
    }

    pub fn with_attributes(mut self, attrs: Attributes) -> Self {
        self.attributes = attrs;
        self
    }
}

/// A dropdown menu.
///
/// # Example
///
/// ```ignore
/// use uikit_widgets::dropdown::{Dropdown, ToggleButton};
/// use uikit_widgets::menu::MenuItem;
///
/// let dropdown = Dropdown::new(vec![
///     MenuItem::link("Level 1 - Dropdown A", "#"),
///     "<li class=\"uk-nav-divider\"></li>".into(),
///     MenuItem::link("Level 1 - Dropdown B", "#"),
/// ])
/// .with_toggle_button(Some(ToggleButton::button("Action")));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dropdown {
    /// Id of the panel; `a` toggles link to it.
    pub id: Option<String>,
    pub items: Vec<MenuItem>,
    pub items_options: ItemsOptions,
    /// `None` renders no toggle.
    pub toggle_button: Option<ToggleButton>,
    /// Wrapper element; `None` or empty renders the toggle and panel bare.
    pub tag: Option<String>,
    /// Attributes of the wrapper element.
    pub tag_options: Attributes,
    /// Attributes of the `uk-dropdown` panel.
    pub options: Attributes,
    /// Render only the panel, for use inside a navbar parent item.
    pub navbar: bool,
    pub show_caret: bool,
    /// Forwarded to the wrapper's `data-uk-dropdown` attribute.
    pub client_options: ClientOptions,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self {
            id: None,
            items: Vec::new(),
            items_options: ItemsOptions::default(),
            toggle_button: Some(ToggleButton::default()),
            tag: Some("div".to_string()),
            tag_options: Attributes::new(),
            options: Attributes::new(),
            navbar: false,
            show_caret: true,
            client_options: ClientOptions::new(),
        }
    }
}

impl Dropdown {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_items_options(mut self, options: ItemsOptions) -> Self {
        self.items_options = options;
        self
    }

    pub fn with_toggle_button(mut self, toggle: Option<ToggleButton>) -> Self {
        self.toggle_button = toggle;
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_tag_options(mut self, attrs: Attributes) -> Self {
        self.tag_options = attrs;
        self
    }

    pub fn with_options(mut self, attrs: Attributes) -> Self {
        self.options = attrs;
        self
    }

    pub fn with_navbar(mut self, navbar: bool) -> Self {
        self.navbar = navbar;
        self
    }

    pub fn with_caret(mut self, show: bool) -> Self {
        self.show_caret = show;
        self
    }

    pub fn with_client_options(mut self, options: ClientOptions) -> Self {
        self.client_options = options;
        self
    }

    fn wrapper(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }

    pub(crate) fn render_items(
        &self,
        items: &[MenuItem],
        ctx: &RenderContext,
    ) -> Result<String, ConfigError> {
        let mut panel = self.options.clone();
        panel.add_class("uk-dropdown");
        if let Some(id) = &self.id {
            panel.set_default("id", id.as_str());
        }

        let mut out = String::new();
        if self.navbar {
            panel.add_class("uk-dropdown-navbar");
        } else {
            let mut wrapper_attrs = self.tag_options.clone();
            wrapper_attrs.set("data-uk-dropdown", self.client_options.to_attribute());
            if self.toggle_button.is_some() {
                wrapper_attrs.add_class("uk-button-dropdown");
            }
            if let Some(wrapper) = self.wrapper() {
                out.push_str(&begin_tag(wrapper, &wrapper_attrs));
                out.push('\n');
            }
            if let Some(toggle) = self.render_toggle_button(ctx)? {
                out.push_str(&toggle);
            }
            out.push('\n');
        }

        out.push_str(&begin_tag("div", &panel));
        out.push_str(&self.nav().render_items(items, ctx)?);
        out.push_str(&end_tag("div"));

        if !self.navbar {
            if let Some(wrapper) = self.wrapper() {
                out.push_str(&end_tag(wrapper));
            }
        }
        Ok(out)
    }

    fn nav(&self) -> Nav {
        let mut options = self.items_options.options.clone();
        if self.wrapper().is_some() && !self.navbar {
            options.add_class("uk-nav-dropdown");
        }
        let encode_labels = !self.navbar && self.items_options.encode_labels.unwrap_or(true);
        Nav::default()
            .with_options(options)
            .with_encode_labels(encode_labels)
            .with_encode_spaces(self.items_options.encode_spaces)
            .with_activate_items(self.items_options.activate_items)
    }

    fn render_toggle_button(&self, ctx: &RenderContext) -> Result<Option<String>, ConfigError> {
        let Some(toggle) = &self.toggle_button else {
            return Ok(None);
        };
        let mut attrs = toggle.attributes.clone();
        let mut label = toggle.label.clone();

        if self.show_caret {
            let caret = Icon::new("caret-down").render(ctx)?;
            match toggle.align_caret {
                CaretAlign::Right => {
                    label = format!(
                        "{}{}",
                        tag("div", &label, &Attributes::new().with_class("uk-float-left")),
                        tag("div", &caret, &Attributes::new().with_class("uk-float-right")),
                    );
                    attrs.add_class("uk-clearfix");
                }
                CaretAlign::Inline => label = format!("{} {}", label, caret),
            }
        }

        let tag_name = toggle.tag.as_deref().unwrap_or("a");
        let plain_button = tag_name == "button" && !attrs.contains("type");
        toggle_defaults(tag_name, &mut attrs, self.id.as_deref().unwrap_or_default());
        if plain_button {
            attrs.add_class("uk-button");
        }
        Ok(Some(tag(tag_name, &label, &attrs)))
    }
}

/// Fills in what a toggle element needs to work: `type="button"` on a
/// `button` and a link to `#target` on an `a`. Attributes already set win.
pub(crate) fn toggle_defaults(tag_name: &str, attrs: &mut Attributes, target: &str) {
    match tag_name {
        "button" if !attrs.contains("type") => attrs.set("type", "button"),
        "a" if !attrs.contains("href") => attrs.set("href", format!("#{}", target)),
        _ => {}
    }
}

impl Widget for Dropdown {
    fn render(&self, ctx: &RenderContext) -> Result<String, ConfigError> {
        self.render_items(&self.items, ctx)
    }
}
