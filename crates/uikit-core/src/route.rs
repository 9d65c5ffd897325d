//! Route references and the resolver seam that turns them into link targets.

use crate::html::Scalar;
use indexmap::IndexMap;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A route plus the query parameters that identify one page of it.
///
/// Written in configuration as a sequence: the route first, then an optional
/// map of parameters, e.g. `["post/view", {"id": 3, "#": "comments"}]`.
/// The `#` key is the fragment: it ends up in the link target but takes no
/// part in deciding whether the route is the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRef {
    route: String,
    params: IndexMap<String, String>,
    fragment: Option<String>,
}

impl RouteRef {
    /// Parameter key holding the URL fragment.
    pub const FRAGMENT_KEY: &'static str = "#";

    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: IndexMap::new(),
            fragment: None,
        }
    }

    /// Add a parameter constraint. The `#` key sets the fragment instead.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name == Self::FRAGMENT_KEY {
            self.fragment = Some(value.into());
        } else {
            self.params.insert(name, value.into());
        }
        self
    }

    /// Set the fragment appended to the link target.
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// Parameters in declaration order, fragment excluded.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Routes without a leading `/` are relative to the current module.
    pub fn is_relative(&self) -> bool {
        !self.route.starts_with('/')
    }
}

impl<'de> Deserialize<'de> for RouteRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RouteVisitor;

        impl<'de> Visitor<'de> for RouteVisitor {
            type Value = RouteRef;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a route followed by an optional map of parameters")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RouteRef, A::Error> {
                let route: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut target = RouteRef::new(route);
                if let Some(params) = seq.next_element::<IndexMap<String, Scalar>>()? {
                    for (name, value) in params {
                        target = target.with_param(name, String::from(value));
                    }
                }
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(target)
            }
        }

        deserializer.deserialize_seq(RouteVisitor)
    }
}

/// The target of a link: a literal href or a route to be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Url {
    Href(String),
    Route(RouteRef),
}

impl Url {
    /// An empty href counts as no link at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Url::Href(href) if href.is_empty())
    }

    pub fn as_route(&self) -> Option<&RouteRef> {
        match self {
            Url::Route(route) => Some(route),
            Url::Href(_) => None,
        }
    }
}

impl From<&str> for Url {
    fn from(href: &str) -> Self {
        Url::Href(href.to_string())
    }
}

impl From<String> for Url {
    fn from(href: String) -> Self {
        Url::Href(href)
    }
}

impl From<RouteRef> for Url {
    fn from(route: RouteRef) -> Self {
        Url::Route(route)
    }
}

/// Maps routes onto the host application's URL space.
///
/// The resolver is the only piece of the host framework the widgets depend
/// on. Closures of type `Fn(&str) -> String` implement it directly and use
/// the default [`url_for`](RouteResolver::url_for).
pub trait RouteResolver: Send + Sync {
    /// Turn a relative route (no leading `/`) into an absolute one.
    fn resolve_route(&self, route: &str) -> String;

    /// Build the href for a route reference.
    ///
    /// The default produces `/<route>?<params>#<fragment>` with the query
    /// string form-urlencoded.
    fn url_for(&self, target: &RouteRef) -> String {
        let route = if target.is_relative() {
            self.resolve_route(target.route())
        } else {
            target.route().to_string()
        };
        let mut href = format!("/{}", route.trim_start_matches('/'));
        if !target.params.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(target.params())
                .finish();
            href.push('?');
            href.push_str(&query);
        }
        if let Some(fragment) = target.fragment() {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

impl<F> RouteResolver for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn resolve_route(&self, route: &str) -> String {
        self(route)
    }
}

/// Resolves relative routes against the unique id of the module handling
/// the request. The application module has an empty id, so `site/index`
/// resolves to `/site/index`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRoutes {
    module_id: String,
}

impl ModuleRoutes {
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
        }
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }
}

impl RouteResolver for ModuleRoutes {
    fn resolve_route(&self, route: &str) -> String {
        format!("{}/{}", self.module_id, route)
    }
}
