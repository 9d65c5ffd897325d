//! Markup primitives: HTML encoding, ordered attribute maps and tag builders.
//!
//! Every widget in the workspace emits its markup through these helpers, so
//! attribute encoding and class merging behave the same everywhere.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Elements that never carry a body or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Encode `text` for safe inclusion in element bodies and attribute values.
///
/// Converts `&`, `<`, `>`, `"` and `'`. Existing entities are encoded again,
/// so `&amp;` becomes `&amp;amp;`.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A scalar configuration value coerced to its string form.
///
/// Attribute values and route parameters may be written as numbers or
/// booleans in configuration documents; markup only ever sees strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::String(s) => s,
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// An insertion-ordered map of HTML attributes.
///
/// Attributes render in the order they were first inserted. The `class`
/// attribute is treated as a whitespace-delimited token set by
/// [`add_class`](Attributes::add_class).
///
/// # Example
///
/// ```
/// use uikit_core::html::Attributes;
///
/// let mut attrs = Attributes::new().with("id", "main");
/// attrs.add_class("uk-nav");
/// attrs.add_class("uk-nav uk-nav-side");
/// assert_eq!(attrs.get("class"), Some("uk-nav uk-nav-side"));
/// assert_eq!(attrs.render(), r#" id="main" class="uk-nav uk-nav-side""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder form of [`set`](Attributes::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder form of [`add_class`](Attributes::add_class).
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Set an attribute, keeping its original position if it already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Set an attribute only if it is not present yet.
    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_insert_with(|| value.into());
    }

    /// Put `name` first unless the map already defines it, in which case the
    /// existing value wins and keeps its position.
    pub fn prepend_default(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !self.0.contains_key(&name) {
            self.0.shift_insert(0, name, value.into());
        }
    }

    /// Look up an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove an attribute, preserving the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    /// Add one or more whitespace-separated class tokens.
    ///
    /// Tokens already present are skipped, so calling this repeatedly with
    /// the same class is a no-op. New tokens are appended after existing ones.
    pub fn add_class(&mut self, class: &str) {
        let mut tokens: Vec<&str> = Vec::new();
        let existing = self.0.get("class").map(String::as_str).unwrap_or("");
        for token in existing.split_whitespace().chain(class.split_whitespace()) {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        if tokens.is_empty() {
            return;
        }
        let joined = tokens.join(" ");
        self.0.insert("class".to_string(), joined);
    }

    /// Whether the `class` attribute contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|token| token == class)
    }

    /// Iterate over the class tokens.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.0
            .get("class")
            .map(String::as_str)
            .unwrap_or("")
            .split_whitespace()
    }

    /// Copy every attribute of `other` into `self`, overwriting duplicates.
    /// Class tokens are merged rather than replaced.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in &other.0 {
            if name == "class" {
                self.add_class(value);
            } else {
                self.0.insert(name.clone(), value.clone());
            }
        }
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as ` name="value"` pairs with encoded values, ready to be
    /// placed after a tag name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&encode(value));
            out.push('"');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Scalar>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(k, v)| (k, String::from(v))).collect())
    }
}

/// Opening tag with attributes.
pub fn begin_tag(name: &str, attrs: &Attributes) -> String {
    format!("<{}{}>", name, attrs.render())
}

/// Closing tag.
pub fn end_tag(name: &str) -> String {
    format!("</{}>", name)
}

/// A complete element. `body` is inserted verbatim, so encode it first if it
/// is plain text. Void elements ignore `body` and have no closing tag.
pub fn tag(name: &str, body: &str, attrs: &Attributes) -> String {
    if VOID_ELEMENTS.contains(&name) {
        return begin_tag(name, attrs);
    }
    format!("{}{}{}", begin_tag(name, attrs), body, end_tag(name))
}

/// An `<a>` element. `href` is added after the given attributes when set;
/// without it the anchor carries no `href` at all.
pub fn link(label: &str, href: Option<&str>, attrs: &Attributes) -> String {
    match href {
        Some(href) => {
            let mut attrs = attrs.clone();
            attrs.set("href", href);
            tag("a", label, &attrs)
        }
        None => tag("a", label, attrs),
    }
}
