use crate::context::RenderContext;
use crate::error::ConfigError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A configured piece of markup that renders against a [`RenderContext`].
///
/// Widgets are plain values: build one, then call
/// [`render`](Widget::render) as many times as needed. Rendering is pure,
/// reads nothing but `self` and the context, and either returns the complete
/// markup or a [`ConfigError`] without producing any output.
///
/// # Composition pattern
///
/// Widgets compose by rendering children into strings and placing them
/// inside their own tags:
///
/// ```rust,ignore
/// use uikit_core::{html, ConfigError, RenderContext, Widget};
///
/// struct Card<W: Widget> { body: W }
///
/// impl<W: Widget> Widget for Card<W> {
///     fn render(&self, ctx: &RenderContext) -> Result<String, ConfigError> {
///         let body = self.body.render(ctx)?;
///         Ok(html::tag("div", &body, &html::Attributes::new().with_class("uk-panel")))
///     }
/// }
/// ```
pub trait Widget: Send + Sync {
    /// Produce the widget's markup.
    fn render(&self, ctx: &RenderContext) -> Result<String, ConfigError>;
}

/// Options forwarded to the component kit's JavaScript through a
/// `data-uk-*` attribute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ClientOptions(Map<String, Value>);

impl ClientOptions {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder that sets one option.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The attribute value: empty when no options are set, JSON otherwise.
    pub fn to_attribute(&self) -> String {
        if self.0.is_empty() {
            String::new()
        } else {
            Value::Object(self.0.clone()).to_string()
        }
    }
}
