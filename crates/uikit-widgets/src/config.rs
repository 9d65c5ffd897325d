//! Loading widgets from configuration documents.
//!
//! Every widget deserializes from the option names the component kit's
//! documentation uses (`items`, `label`, `url`, `linkOptions`, `options`,
//! `encodeLabels`, ...). Routes are written as a sequence of the route and
//! an optional parameter map.
//!
//! ```toml
//! navbar = true
//!
//! [[items]]
//! label = "Home"
//! url = ["site/index"]
//!
//! [[items]]
//! label = "Post"
//! url = ["post/view", { id = 3 }]
//! ```

use serde::de::DeserializeOwned;
use std::path::Path;
use uikit_core::ConfigError;

/// Deserialize a widget from JSON.
pub fn from_json<T: DeserializeOwned>(source: &str) -> Result<T, ConfigError> {
    serde_json::from_str(source).map_err(|err| ConfigError::Invalid(err.to_string()))
}

/// Deserialize a widget from TOML.
pub fn from_toml<T: DeserializeOwned>(source: &str) -> Result<T, ConfigError> {
    toml::from_str(source).map_err(|err| ConfigError::Invalid(err.to_string()))
}

/// Read and deserialize a widget from a `.json` or `.toml` file.
pub fn from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|err| ConfigError::Invalid(format!("{}: {}", path.display(), err)))?;
    tracing::debug!(path = %path.display(), "loading widget configuration");
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json(&source),
        Some("toml") => from_toml(&source),
        other => Err(ConfigError::Invalid(format!(
            "{}: unsupported configuration format {:?}",
            path.display(),
            other.unwrap_or("")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;
    use crate::nav::Nav;
    use crate::subnav::SubNav;
    use uikit_core::{RenderContext, Widget};

    #[test]
    fn nav_from_toml() {
        let nav: Nav = from_toml(
            r##"
            navbar = true

            [[items]]
            label = "Home"
            url = ["site/index"]

            [[items]]
            label = "Post"
            url = ["post/view", { id = 3, "#" = "comments" }]
            "##,
        )
        .unwrap();
        assert!(nav.navbar);
        assert_eq!(nav.items.len(), 2);

        let ctx = RenderContext::new("post/view").with_param("id", "3");
        let markup = nav.render(&ctx).unwrap();
        assert!(markup.contains(
            r#"<li class="uk-active"><a href="/post/view?id=3#comments">Post</a></li>"#
        ));
    }

    #[test]
    fn subnav_from_json() {
        let subnav: SubNav = from_json(
            r##"{"showPills": true, "items": ["<li>raw</li>", {"label": "A", "url": "#a"}]}"##,
        )
        .unwrap();
        assert!(subnav.show_pills);
        assert!(matches!(subnav.items[0], MenuItem::Text(_)));
    }

    #[test]
    fn missing_label_is_a_render_error_not_a_parse_error() {
        let nav: Nav = from_json(r##"{"items": [{"url": "#"}]}"##).unwrap();
        assert!(nav.render(&RenderContext::default()).is_err());
    }

    #[test]
    fn invalid_documents_are_config_errors() {
        let err = from_json::<Nav>(r#"{"items": 5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = from_toml::<Nav>("navbar = ").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_extension_rejected() {
        let dir = std::env::temp_dir().join("uikit-config-test.yaml");
        std::fs::write(&dir, "navbar: true").unwrap();
        let err = from_path::<Nav>(&dir).unwrap_err();
        assert!(err.to_string().contains("unsupported configuration format"));
        let _ = std::fs::remove_file(&dir);
    }

    #[test]
    fn missing_file_rejected() {
        let err = from_path::<Nav>("/nonexistent/uikit/nav.json").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
