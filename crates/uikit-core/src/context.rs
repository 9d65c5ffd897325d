//! Per-request render context.

use crate::route::{ModuleRoutes, RouteRef, RouteResolver, Url};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// The navigation state a render call compares menu items against.
///
/// A context is built once per request from the host framework's current
/// route and query parameters, then passed by reference into every
/// [`Widget::render`](crate::Widget::render) call. Rendering never mutates
/// it, so one context can be shared by any number of widgets and threads.
///
/// # Example
///
/// ```
/// use uikit_core::{RenderContext, RouteRef};
///
/// let ctx = RenderContext::new("post/view").with_param("id", "7");
/// assert!(ctx.is_current(&RouteRef::new("post/view").with_param("id", "7")));
/// assert!(!ctx.is_current(&RouteRef::new("post/view").with_param("id", "8")));
/// ```
#[derive(Clone)]
pub struct RenderContext {
    route: String,
    params: IndexMap<String, String>,
    resolver: Arc<dyn RouteResolver>,
}

impl RenderContext {
    /// Create a context for `route` with no parameters, resolving relative
    /// routes against the application module.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: IndexMap::new(),
            resolver: Arc::new(ModuleRoutes::default()),
        }
    }

    /// Add a current query parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Add several current query parameters.
    pub fn with_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Replace the route resolver.
    pub fn with_resolver(mut self, resolver: impl RouteResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// The current route as reported by the host framework.
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn resolver(&self) -> &dyn RouteResolver {
        self.resolver.as_ref()
    }

    /// The href for a link target. Empty hrefs yield `None`.
    pub fn href(&self, url: &Url) -> Option<String> {
        if url.is_empty() {
            return None;
        }
        match url {
            Url::Href(href) => Some(href.clone()),
            Url::Route(route) => Some(self.resolver.url_for(route)),
        }
    }

    /// Whether `target` points at the page being rendered.
    ///
    /// Relative routes are resolved first, leading slashes are ignored on
    /// both sides, and every parameter of `target` must be present in the
    /// current parameters with the same value. The fragment is ignored.
    pub fn is_current(&self, target: &RouteRef) -> bool {
        let resolved = if target.is_relative() {
            self.resolver.resolve_route(target.route())
        } else {
            target.route().to_string()
        };
        if resolved.trim_start_matches('/') != self.route.trim_start_matches('/') {
            return false;
        }
        target.params().all(|(name, expected)| {
            let matched = self.param(name) == Some(expected);
            if !matched {
                tracing::trace!(route = %resolved, param = name, "route parameter mismatch");
            }
            matched
        })
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("route", &self.route)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
