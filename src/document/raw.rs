use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

use super::sources::DocumentFormat;

/// Mirror of the on-disk document representation before validation.
///
/// Top-level keys that are not part of the core schema are collected into
/// `options`; each one is expected to be an option block addressed to a
/// registered plugin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawDocument {
    pub(super) content: Vec<String>,
    pub(super) theme: RawTheme,
    pub(super) plugins: Vec<String>,
    #[serde(flatten)]
    pub(super) options: BTreeMap<String, Value>,
}

/// Theme section as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawTheme {
    pub(super) container: Option<RawContainer>,
    pub(super) extend: RawExtend,
}

/// Container defaults prior to validation.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawContainer {
    #[serde(default)]
    pub(super) center: bool,
    pub(super) padding: Option<String>,
}

/// Design-token extensions merged into the tool's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawExtend {
    pub(super) colors: BTreeMap<String, String>,
    #[serde(flatten)]
    pub(super) rest: BTreeMap<String, Value>,
}

impl RawDocument {
    /// Deserialize a document; structural mismatches surface as parse errors.
    pub(super) fn parse(text: &str, format: DocumentFormat) -> Result<Self, ConfigError> {
        match format {
            DocumentFormat::Toml => {
                toml::from_str(text).map_err(|err| ConfigError::parse(err.to_string()))
            }
            DocumentFormat::Json => {
                serde_json::from_str(text).map_err(|err| ConfigError::parse(err.to_string()))
            }
        }
    }
}

/// Parse the same text into a generic value tree for path lookups.
pub(super) fn parse_tree(text: &str, format: DocumentFormat) -> Result<Value, ConfigError> {
    match format {
        DocumentFormat::Toml => {
            let value: toml::Value =
                toml::from_str(text).map_err(|err| ConfigError::parse(err.to_string()))?;
            serde_json::to_value(value).map_err(|err| ConfigError::parse(err.to_string()))
        }
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|err| ConfigError::parse(err.to_string()))
        }
    }
}
