use std::sync::Arc;

use crate::descriptors::PluginDescriptor;

use super::BuildPlugin;

/// Metadata and implementation pair stored by the registry.
#[derive(Clone)]
pub struct RegisteredPlugin {
    descriptor: &'static PluginDescriptor,
    plugin: Arc<dyn BuildPlugin>,
}

impl RegisteredPlugin {
    pub(super) fn new(plugin: Arc<dyn BuildPlugin>) -> Self {
        Self {
            descriptor: plugin.descriptor(),
            plugin,
        }
    }

    /// Static descriptor the plugin registered with.
    pub fn descriptor(&self) -> &'static PluginDescriptor {
        self.descriptor
    }

    /// Identifier the plugin registered under.
    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }

    /// The plugin implementation.
    pub fn plugin(&self) -> Arc<dyn BuildPlugin> {
        Arc::clone(&self.plugin)
    }
}

impl std::fmt::Debug for RegisteredPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredPlugin")
            .field("id", &self.descriptor.id)
            .finish_non_exhaustive()
    }
}
