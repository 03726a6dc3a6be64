use loomcss_plugin_api::{BuildPlugin, PluginDescriptor, PluginRegistry, PluginRegistryError};
use loomcss_plugins_daisy::DaisyPlugin;
use loomcss_plugins_typography::TypographyPlugin;

static FORMS_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    id: "@tailwindcss/forms",
    summary: "Form element resets",
    docs_url: "https://github.com/tailwindlabs/tailwindcss-forms",
};

static ASPECT_RATIO_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    id: "@tailwindcss/aspect-ratio",
    summary: "Aspect-ratio utilities for older browsers",
    docs_url: "https://github.com/tailwindlabs/tailwindcss-aspect-ratio",
};

/// Descriptor-only entry for plugins the tool resolves but takes no options for.
struct DescriptorOnly(&'static PluginDescriptor);

impl BuildPlugin for DescriptorOnly {
    fn descriptor(&self) -> &'static PluginDescriptor {
        self.0
    }
}

/// Build the registry of plugins this tool ships with.
///
/// Documents validate their `plugins` list and option blocks against this
/// set; embedders can extend the returned registry before loading.
pub fn builtin_registry() -> Result<PluginRegistry, PluginRegistryError> {
    let mut registry = PluginRegistry::new();
    registry.register(DaisyPlugin)?;
    registry.register(TypographyPlugin)?;
    registry.register(DescriptorOnly(&FORMS_DESCRIPTOR))?;
    registry.register(DescriptorOnly(&ASPECT_RATIO_DESCRIPTOR))?;
    Ok(registry)
}
