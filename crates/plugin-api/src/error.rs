use thiserror::Error;

/// Errors that can occur when mutating the [`PluginRegistry`](crate::PluginRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluginRegistryError {
    /// A plugin attempted to register an identifier that already exists in the registry.
    #[error("plugin id '{id}' is already registered")]
    DuplicateId { id: &'static str },
}

/// Raised by a plugin rejecting the option block addressed to it.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid options for plugin '{plugin}': {reason} (field: {field})")]
pub struct OptionsError {
    /// Identifier of the plugin the block was addressed to.
    pub plugin: &'static str,
    /// The option field the plugin objected to.
    pub field: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl OptionsError {
    /// Construct an error for the given option field.
    pub fn new<F, R>(plugin: &'static str, field: F, reason: R) -> Self
    where
        F: Into<String>,
        R: Into<String>,
    {
        Self {
            plugin,
            field: field.into(),
            reason: reason.into(),
        }
    }
}
