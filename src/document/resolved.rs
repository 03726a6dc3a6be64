use std::collections::BTreeMap;

use log::{debug, warn};
use serde_json::Value;

use loomcss_plugin_api::PluginRegistry;

use crate::error::ConfigError;

use super::raw::RawDocument;
use super::validate;

/// Build-ready configuration document.
///
/// The document is read once per build invocation and never mutated; every
/// accessor borrows from the record produced at load time.
#[derive(Debug)]
pub struct ConfigDocument {
    content: Vec<String>,
    theme: ThemeConfig,
    plugins: Vec<String>,
    options: BTreeMap<String, Value>,
    tree: Value,
}

/// Theme settings after validation.
#[derive(Debug, Default)]
pub struct ThemeConfig {
    /// Container layout defaults, when the document declares them.
    pub container: Option<ContainerConfig>,
    /// Color tokens merged into the tool's default design-token set.
    pub colors: BTreeMap<String, String>,
}

/// Validated `theme.container` record.
#[derive(Debug)]
pub struct ContainerConfig {
    pub center: bool,
    pub padding: Option<String>,
}

impl ConfigDocument {
    /// Validate a parsed document against the plugin registry.
    pub(super) fn resolve(
        raw: RawDocument,
        tree: Value,
        registry: &PluginRegistry,
    ) -> Result<Self, ConfigError> {
        for pattern in &raw.content {
            validate::glob(pattern)?;
        }

        let container = match raw.theme.container {
            Some(container) => {
                if let Some(padding) = &container.padding {
                    validate::length("theme.container.padding", padding)?;
                }
                Some(ContainerConfig {
                    center: container.center,
                    padding: container.padding,
                })
            }
            None => None,
        };

        for (token, value) in &raw.theme.extend.colors {
            validate::color(token, value)?;
        }

        for (key, value) in &raw.theme.extend.rest {
            if !value.is_object() {
                return Err(ConfigError::invalid(
                    format!("theme.extend.{key}"),
                    "extension values must be tables of tokens",
                ));
            }
        }

        for name in &raw.plugins {
            if !registry.contains_id(name) {
                return Err(ConfigError::invalid(
                    "plugins",
                    format!("unknown plugin '{name}'"),
                ));
            }
        }

        for (key, block) in &raw.options {
            let Some(plugin) = registry.plugin_by_id(key) else {
                return Err(ConfigError::invalid(
                    key.clone(),
                    "options block does not match any registered plugin",
                ));
            };
            if !raw.plugins.iter().any(|listed| listed == key) {
                warn!("options block '{key}' targets a plugin not listed in `plugins`; the build will ignore it");
            }
            plugin.validate_options(block)?;
        }

        debug!(
            "configuration resolved: {} content globs, {} color tokens, {} plugins",
            raw.content.len(),
            raw.theme.extend.colors.len(),
            raw.plugins.len()
        );

        Ok(Self {
            content: raw.content,
            theme: ThemeConfig {
                container,
                colors: raw.theme.extend.colors,
            },
            plugins: raw.plugins,
            options: raw.options,
            tree,
        })
    }

    /// Glob patterns the scanner inspects for utility-class usage, in order.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Validated theme settings.
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Plugins to activate, in application-precedence order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// The option block addressed to a plugin, if the document carries one.
    pub fn plugin_options(&self, id: &str) -> Option<&Value> {
        self.options.get(id)
    }

    /// Read-only accessor for a nested field by dotted path.
    ///
    /// Path segments address object keys; numeric segments index into
    /// sequences (`content.0`).
    pub fn get(&self, path: &str) -> Result<&Value, ConfigError> {
        if path.is_empty() {
            return Err(ConfigError::key_not_found(path));
        }
        lookup(&self.tree, path).ok_or_else(|| ConfigError::key_not_found(path))
    }

    /// Print a human readable summary of the loaded configuration.
    pub fn print_summary(&self) {
        println!("Configuration:");
        match self.content.len() {
            0 => println!("  Content globs: (none)"),
            _ => println!("  Content globs: {}", self.content.join(", ")),
        }
        match &self.theme.container {
            Some(container) => {
                println!("  Container centered: {}", bool_to_word(container.center));
                match &container.padding {
                    Some(padding) => println!("  Container padding: {padding}"),
                    None => println!("  Container padding: (tool default)"),
                }
            }
            None => println!("  Container: (tool defaults)"),
        }
        if self.theme.colors.is_empty() {
            println!("  Extended colors: (none)");
        } else {
            for (token, value) in &self.theme.colors {
                println!("  Color {token}: {value}");
            }
        }
        match self.plugins.len() {
            0 => println!("  Plugins: (none)"),
            _ => println!("  Plugins: {}", self.plugins.join(", ")),
        }
        for (key, block) in &self.options {
            println!("  Options for {key}: {block}");
        }
    }
}

fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(tree, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
