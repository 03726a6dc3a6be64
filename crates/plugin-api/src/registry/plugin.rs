use serde_json::Value;

use crate::descriptors::PluginDescriptor;
use crate::error::OptionsError;

/// A plugin the build tool knows how to activate.
///
/// The configuration front-end never executes plugins; it only needs enough
/// of an interface to resolve the names a document lists, check the option
/// block addressed to each plugin, and collect the theme names plugins
/// contribute to the tool.
pub trait BuildPlugin: Send + Sync {
    /// Static descriptor advertising plugin metadata.
    fn descriptor(&self) -> &'static PluginDescriptor;

    /// Identifier the configuration document references this plugin by.
    fn id(&self) -> &'static str {
        self.descriptor().id
    }

    /// Validate the option block addressed to this plugin.
    ///
    /// The default implementation accepts only an absent block; plugins that
    /// take options override this.
    fn validate_options(&self, options: &Value) -> Result<(), OptionsError> {
        if options.is_null() {
            return Ok(());
        }
        Err(OptionsError::new(
            self.id(),
            "<root>",
            "plugin takes no options",
        ))
    }

    /// Theme names this plugin contributes to the build tool.
    fn theme_names(&self) -> &'static [&'static str] {
        &[]
    }
}
