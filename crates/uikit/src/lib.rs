//! **uikit** -- server-side markup widgets for the UIkit front-end kit.
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! uikit = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`uikit_core`] are available at the crate root
//!   ([`Widget`], [`RenderContext`], [`RouteRef`], [`Attributes`],
//!   [`ConfigError`], etc.).
//! * The [`widgets`] module re-exports everything from [`uikit_widgets`]
//!   (navs, subnavs, dropdowns, panels, and more).
//! * [`serde_json`] is re-exported for building [`ClientOptions`] values.
//!
//! # Quick start
//!
//! ```ignore
//! use uikit::widgets::menu::{LinkItem, MenuItem};
//! use uikit::widgets::nav::Nav;
//! use uikit::{RenderContext, RouteRef, Widget};
//!
//! let nav = Nav::new(vec![
//!     MenuItem::link("Home", RouteRef::new("site/index")),
//!     LinkItem::new("Blog")
//!         .with_children(vec![MenuItem::link("Latest", RouteRef::new("post/index"))])
//!         .into(),
//! ]);
//!
//! // One context per request, built from the router's current state.
//! let ctx = RenderContext::new("site/index");
//! println!("{}", nav.render(&ctx)?);
//! ```

pub use uikit_core::*;
pub mod widgets {
    pub use uikit_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use serde_json;
