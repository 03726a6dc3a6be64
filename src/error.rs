use thiserror::Error;

use loomcss_plugin_api::OptionsError;

/// Errors surfaced while loading or querying a configuration document.
///
/// None of these are recovered from or retried; the build invoking the
/// loader halts and reports the offending field.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The serialized document could not be parsed into the expected shape.
    #[error("failed to parse configuration: {reason}")]
    Parse { reason: String },

    /// The document parsed but references something the tool does not know.
    #[error("invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A dotted-path lookup addressed a value that does not exist.
    #[error("no value at configuration path '{path}'")]
    KeyNotFound { path: String },
}

impl ConfigError {
    pub(crate) fn parse<R>(reason: R) -> Self
    where
        R: Into<String>,
    {
        Self::Parse {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid<F, R>(field: F, reason: R) -> Self
    where
        F: Into<String>,
        R: Into<String>,
    {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn key_not_found<P>(path: P) -> Self
    where
        P: Into<String>,
    {
        Self::KeyNotFound { path: path.into() }
    }
}

impl From<OptionsError> for ConfigError {
    fn from(err: OptionsError) -> Self {
        Self::Validation {
            field: format!("{}.{}", err.plugin, err.field),
            reason: err.reason,
        }
    }
}
