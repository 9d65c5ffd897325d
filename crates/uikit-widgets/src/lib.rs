//! Ready-made widgets for the **uikit** markup library.
//!
//! Every widget implements [`uikit_core::Widget`]: configure it in code or
//! load it from a configuration document with [`config`], then render it
//! against the request's [`RenderContext`](uikit_core::RenderContext).
//!
//! # Navigation
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`menu`] | Menu item model, active-route matching and the plain menu renderer |
//! | [`nav`] | Side, navbar, offcanvas and accordion navs |
//! | [`subnav`] | Horizontal subnav with pills, lines and small dropdowns |
//! | [`dropdown`] | Toggle button plus dropdown panel |
//! | [`navbar`] | `<nav class="uk-navbar">` container |
//! | [`dotnav`] | Dot navigation |
//! | [`offcanvas`] | Off-canvas sidebar and its toggle button |
//! | [`switcher`] | Subnav tabs connected to switchable panels |
//!
//! # Content
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`badge`] | Badges and notification bubbles |
//! | [`close`] | Close button |
//! | [`icon`] | Icon font glyph |
//! | [`panel`] | Panel with optional badge and title |

pub mod badge;
pub mod close;
pub mod config;
pub mod dotnav;
pub mod dropdown;
pub mod icon;
pub mod menu;
pub mod nav;
pub mod navbar;
pub mod offcanvas;
pub mod panel;
pub mod subnav;
pub mod switcher;
