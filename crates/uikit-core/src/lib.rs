//! Core building blocks for the **uikit** widget library.
//!
//! `uikit-core` holds everything the widgets share: markup primitives, the
//! per-request [`RenderContext`], route references and the
//! [`RouteResolver`] seam to the host framework, the [`Widget`] trait and
//! the [`ConfigError`] taxonomy.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Attributes`] | Ordered HTML attribute map with class-token merging |
//! | [`RenderContext`] | Current route and parameters, plus the route resolver |
//! | [`RouteRef`] / [`Url`] | Link targets, used for hrefs and active-state matching |
//! | [`RouteResolver`] | Resolves relative routes and builds hrefs |
//! | [`Widget`] | Anything that renders markup against a context |
//! | [`ConfigError`] | The one error kind widgets report |
//!
//! With the `testing` feature, [`testing`] parses rendered markup back into
//! an element tree for assertions.

pub mod context;
pub mod error;
pub mod html;
pub mod route;
#[cfg(feature = "testing")]
pub mod testing;
pub mod widget;

pub use context::RenderContext;
pub use error::ConfigError;
pub use html::Attributes;
pub use route::{ModuleRoutes, RouteRef, RouteResolver, Url};
pub use widget::{ClientOptions, Widget};
