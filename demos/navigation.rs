//! Renders a page header: a navbar loaded from TOML, a subnav, a dropdown
//! and an off-canvas copy of the menu for small screens, all against the
//! same request context.
//!
//! Run with `RUST_LOG=debug` to see the render trace.

use uikit::widgets::config::from_toml;
use uikit::widgets::dropdown::{Dropdown, ToggleButton};
use uikit::widgets::menu::{LinkItem, MenuItem};
use uikit::widgets::nav::Nav;
use uikit::widgets::navbar::NavBar;
use uikit::widgets::offcanvas::OffCanvas;
use uikit::widgets::subnav::SubNav;
use uikit::{ConfigError, ModuleRoutes, RenderContext, RouteRef, Widget};

const MAIN_MENU: &str = r##"
navbar = true

[[items]]
label = "Home"
url = ["site/index"]

[[items]]
label = "Posts"
url = ["post/index"]

[[items]]
label = "Account"
visible = true
items = [
    { label = "Profile", url = ["user/profile"] },
    "<li class=\"uk-nav-divider\"></li>",
    { label = "Sign out", url = "/logout", linkOptions = { "data-method" = "post" } },
]
"##;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let ctx = RenderContext::new("blog/post/view")
        .with_param("id", "42")
        .with_resolver(ModuleRoutes::new("blog"));

    let main_menu: Nav = from_toml(MAIN_MENU)?;
    let header = NavBar::new()
        .with_content(r#"<a class="uk-navbar-brand" href="/">Demo</a>"#)
        .wrap(&main_menu, &ctx)?;
    println!("{}\n", header);

    let tabs = SubNav::new(vec![
        MenuItem::link("Article", RouteRef::new("post/view").with_param("id", "42")),
        MenuItem::link(
            "Comments",
            RouteRef::new("post/view")
                .with_param("id", "42")
                .with_param("tab", "comments"),
        ),
        LinkItem::new("Drafts")
            .with_url(RouteRef::new("post/drafts"))
            .with_visible(false)
            .into(),
    ])
    .with_pills(true);
    println!("{}\n", tabs.render(&ctx)?);

    let actions = Dropdown::new(vec![
        MenuItem::link("Edit", RouteRef::new("post/update").with_param("id", "42")),
        "<li class=\"uk-nav-divider\"></li>".into(),
        MenuItem::link("Delete", RouteRef::new("post/delete").with_param("id", "42")),
    ])
    .with_id("post-actions")
    .with_toggle_button(Some(ToggleButton::button("Actions")));
    println!("{}\n", actions.render(&ctx)?);

    let side_menu = Nav::new(vec![
        MenuItem::link("Home", RouteRef::new("/site/index")),
        MenuItem::link("Posts", RouteRef::new("post/index")),
    ])
    .with_offcanvas(true)
    .render(&ctx)?;
    let drawer = OffCanvas::new("side-menu", side_menu)
        .with_toggle_button(Some(ToggleButton::new("Menu").with_tag("a")));
    println!("{}", drawer.render(&ctx)?);

    Ok(())
}
