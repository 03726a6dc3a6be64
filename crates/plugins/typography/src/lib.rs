//! Prose-styling plugin descriptor for loomcss.
//!
//! The upstream plugin takes a `className` override and nothing else, so the
//! option check here is correspondingly small.

use serde_json::Value;

use loomcss_plugin_api::{BuildPlugin, OptionsError, PluginDescriptor};

pub const PLUGIN_ID: &str = "@tailwindcss/typography";

pub static TYPOGRAPHY_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    id: PLUGIN_ID,
    summary: "Prose classes for long-form content",
    docs_url: "https://github.com/tailwindlabs/tailwindcss-typography",
};

pub fn descriptor() -> &'static PluginDescriptor {
    &TYPOGRAPHY_DESCRIPTOR
}

/// Configuration-side handle for the typography plugin.
#[derive(Debug, Default)]
pub struct TypographyPlugin;

impl BuildPlugin for TypographyPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &TYPOGRAPHY_DESCRIPTOR
    }

    fn validate_options(&self, options: &Value) -> Result<(), OptionsError> {
        if options.is_null() {
            return Ok(());
        }
        let Some(table) = options.as_object() else {
            return Err(OptionsError::new(PLUGIN_ID, "<root>", "expected a table"));
        };
        for (key, value) in table {
            match key.as_str() {
                "className" => {
                    if !value.is_string() {
                        return Err(OptionsError::new(
                            PLUGIN_ID,
                            "className",
                            "expected a string",
                        ));
                    }
                }
                other => {
                    return Err(OptionsError::new(
                        PLUGIN_ID,
                        other.to_string(),
                        "unknown option",
                    ));
                }
            }
        }
        Ok(())
    }
}
