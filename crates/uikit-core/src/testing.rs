//! Markup inspection helpers for widget tests.
//!
//! Rendered markup is parsed into a small element tree so tests can assert
//! on structure (which `<li>` carries which class, how many entries a nested
//! list has) instead of matching substrings. Text and attribute values are
//! kept exactly as rendered: entities such as `&amp;` or `&nbsp;` are not
//! decoded.
//!
//! # Example
//!
//! ```rust,ignore
//! use uikit_core::testing::{find_all, parse};
//!
//! let nodes = parse(r#"<ul class="uk-nav"><li class="uk-active">Home</li></ul>"#)?;
//! let items = find_all(&nodes, "li");
//! assert_eq!(items.len(), 1);
//! assert!(items[0].has_class("uk-active"));
//! assert_eq!(items[0].text(), "Home");
//! ```

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// A parsed node: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A parsed element with its attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Raw value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn classes(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    /// Direct child elements, text skipped.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// First direct child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|el| el.name == name)
    }

    /// All descendant elements named `name`, in document order.
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        find_all(&self.children, name)
    }

    /// Concatenated text of this element and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

/// Parse a markup fragment. Fragments may have several root nodes.
///
/// Whitespace-only text between tags is dropped; elements left open at the
/// end of input are closed implicitly.
pub fn parse(markup: &str) -> Result<Vec<Node>, quick_xml::Error> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(true);

    let mut roots = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element(&start)?),
            Event::Empty(start) => {
                let el = element(&start)?;
                attach(&mut stack, &mut roots, Node::Element(el));
            }
            Event::End(_) => {
                if let Some(el) = stack.pop() {
                    attach(&mut stack, &mut roots, Node::Element(el));
                }
            }
            Event::Text(text) => {
                let text = String::from_utf8_lossy(&text).into_owned();
                if !text.is_empty() {
                    attach(&mut stack, &mut roots, Node::Text(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    while let Some(el) = stack.pop() {
        attach(&mut stack, &mut roots, Node::Element(el));
    }
    Ok(roots)
}

/// All elements named `name` anywhere in `nodes`, in document order.
pub fn find_all<'a>(nodes: &'a [Node], name: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    walk(nodes, name, &mut found);
    found
}

fn walk<'a>(nodes: &'a [Node], name: &str, found: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.name == name {
                found.push(el);
            }
            walk(&el.children, name, found);
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

fn element(start: &BytesStart<'_>) -> Result<Element, quick_xml::Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        attrs.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            String::from_utf8_lossy(&attr.value).into_owned(),
        ));
    }
    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
    })
}

fn attach(stack: &mut [Element], roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_lists() {
        let nodes = parse(
            r#"<ul class="uk-nav"><li class="uk-parent">Menu<ul class="uk-nav-sub"><li>A</li><li>B</li></ul></li></ul>"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        let items = find_all(&nodes, "li");
        assert_eq!(items.len(), 3);
        assert!(items[0].has_class("uk-parent"));
        let sub = items[0].child("ul").unwrap();
        assert_eq!(sub.elements().count(), 2);
        assert_eq!(items[0].text(), "MenuAB");
    }

    #[test]
    fn keeps_entities_raw() {
        let nodes = parse("<a href=\"/a?x=1&amp;y=2\">Foo&nbsp;Bar</a>").unwrap();
        let links = find_all(&nodes, "a");
        assert_eq!(links[0].text(), "Foo&nbsp;Bar");
        assert_eq!(links[0].attr("href"), Some("/a?x=1&amp;y=2"));
    }

    #[test]
    fn multiple_roots_and_empty_elements() {
        let nodes = parse("<li>one</li>\n<li>two</li><br/>").unwrap();
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn mismatched_tags_fail() {
        assert!(parse("<ul><li></ul>").is_err());
    }
}
