//! The daisyUI theme-pack plugin as the loomcss configuration layer sees it.
//!
//! The plugin itself contributes component classes and named theme packs
//! during the build; here it only has to advertise which theme names exist
//! and vet the `daisyui` option block a configuration document may carry.

use serde_json::Value;

use loomcss_plugin_api::{BuildPlugin, OptionsError, PluginDescriptor};

pub const PLUGIN_ID: &str = "daisyui";

/// Theme packs bundled with the plugin.
pub const BUILTIN_THEMES: &[&str] = &[
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
    "dim",
    "nord",
    "sunset",
];

pub static DAISY_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    id: PLUGIN_ID,
    summary: "Component classes and named theme packs",
    docs_url: "https://daisyui.com/docs/config/",
};

pub fn descriptor() -> &'static PluginDescriptor {
    &DAISY_DESCRIPTOR
}

/// Configuration-side handle for the theme-pack plugin.
#[derive(Debug, Default)]
pub struct DaisyPlugin;

impl BuildPlugin for DaisyPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &DAISY_DESCRIPTOR
    }

    fn validate_options(&self, options: &Value) -> Result<(), OptionsError> {
        if options.is_null() {
            return Ok(());
        }
        let Some(table) = options.as_object() else {
            return Err(OptionsError::new(PLUGIN_ID, "<root>", "expected a table"));
        };

        let custom_names = custom_theme_names(table.get("custom"))?;
        let known = |name: &str| {
            BUILTIN_THEMES.contains(&name) || custom_names.iter().any(|custom| custom == name)
        };

        for (key, value) in table {
            match key.as_str() {
                "themes" => validate_theme_list(value, &known)?,
                "custom" => {}
                "darkTheme" => validate_theme_name(key, value, &known)?,
                "logs" => {
                    if !value.is_boolean() {
                        return Err(OptionsError::new(PLUGIN_ID, "logs", "expected a boolean"));
                    }
                }
                "prefix" => {
                    if !value.is_string() {
                        return Err(OptionsError::new(PLUGIN_ID, "prefix", "expected a string"));
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

    fn theme_names(&self) -> &'static [&'static str] {
        BUILTIN_THEMES
    }
}

/// Collect the names declared under `custom`, validating the block's shape.
fn custom_theme_names(custom: Option<&Value>) -> Result<Vec<String>, OptionsError> {
    let Some(custom) = custom else {
        return Ok(Vec::new());
    };
    let Some(table) = custom.as_object() else {
        return Err(OptionsError::new(
            PLUGIN_ID,
            "custom",
            "expected a table of theme definitions",
        ));
    };
    for (name, definition) in table {
        if !definition.is_object() {
            return Err(OptionsError::new(
                PLUGIN_ID,
                format!("custom.{name}"),
                "theme definition must be a table",
            ));
        }
    }
    Ok(table.keys().cloned().collect())
}

fn validate_theme_list<F>(value: &Value, known: &F) -> Result<(), OptionsError>
where
    F: Fn(&str) -> bool,
{
    let Some(entries) = value.as_array() else {
        return Err(OptionsError::new(
            PLUGIN_ID,
            "themes",
            "expected a list of theme names",
        ));
    };
    for entry in entries {
        let Some(name) = entry.as_str() else {
            return Err(OptionsError::new(
                PLUGIN_ID,
                "themes",
                format!("theme entries must be strings, found {entry}"),
            ));
        };
        if !known(name) {
            return Err(OptionsError::new(
                PLUGIN_ID,
                "themes",
                format!("unknown theme '{name}'"),
            ));
        }
    }
    Ok(())
}

fn validate_theme_name<F>(field: &str, value: &Value, known: &F) -> Result<(), OptionsError>
where
    F: Fn(&str) -> bool,
{
    let Some(name) = value.as_str() else {
        return Err(OptionsError::new(
            PLUGIN_ID,
            field.to_string(),
            "expected a theme name string",
        ));
    };
    if !known(name) {
        return Err(OptionsError::new(
            PLUGIN_ID,
            field.to_string(),
            format!("unknown theme '{name}'"),
        ));
    }
    Ok(())
}
