//! Configuration errors raised while rendering widgets.

/// Errors raised when a widget is configured in a way it cannot render.
///
/// These are caller mistakes rather than transient conditions: they are
/// returned from the render call that detected them and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required option was not supplied (e.g. a menu item without a label).
    #[error("The '{option}' option is required.")]
    MissingOption {
        /// Widget that rejected the configuration.
        widget: &'static str,
        /// Name of the missing option.
        option: &'static str,
    },
    /// Two presentation flags that cannot be combined were both enabled.
    #[error("Options '{first}' and '{second}' cannot be used together.")]
    Conflict {
        /// Widget that rejected the configuration.
        widget: &'static str,
        first: &'static str,
        second: &'static str,
    },
    /// A configuration document could not be deserialized.
    #[error("invalid widget configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::MissingOption`].
    pub fn missing(widget: &'static str, option: &'static str) -> Self {
        Self::MissingOption { widget, option }
    }

    /// Shorthand for [`ConfigError::Conflict`].
    pub fn conflict(widget: &'static str, first: &'static str, second: &'static str) -> Self {
        Self::Conflict {
            widget,
            first,
            second,
        }
    }
}
