use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptors::PluginDescriptor;
use crate::error::PluginRegistryError;

use super::{BuildPlugin, RegisteredPlugin};

/// Registry of all plugins the build tool can activate.
///
/// Registration order is preserved so listings match the order plugins were
/// installed in. Lookups go through an id index.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    order: Vec<&'static str>,
    plugins: HashMap<&'static str, RegisteredPlugin>,
}

impl PluginRegistry {
    /// Create an empty registry without any plugins registered.
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            plugins: HashMap::new(),
        }
    }

    /// Create a registry without registering any plugins.
    pub fn new() -> Self {
        Self::empty()
    }

    /// Register a plugin implementation under its declared identifier.
    pub fn register<P>(&mut self, plugin: P) -> Result<(), PluginRegistryError>
    where
        P: BuildPlugin + 'static,
    {
        self.register_arc(Arc::new(plugin))
    }

    /// Register an already shared plugin implementation.
    pub fn register_arc(
        &mut self,
        plugin: Arc<dyn BuildPlugin>,
    ) -> Result<(), PluginRegistryError> {
        let id = plugin.id();
        if self.plugins.contains_key(id) {
            return Err(PluginRegistryError::DuplicateId { id });
        }
        self.order.push(id);
        self.plugins.insert(id, RegisteredPlugin::new(plugin));
        Ok(())
    }

    /// Returns `true` if a plugin has been registered under the identifier.
    pub fn contains_id(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// Attempt to resolve an identifier to a registered plugin implementation.
    pub fn plugin_by_id(&self, id: &str) -> Option<Arc<dyn BuildPlugin>> {
        self.plugins.get(id).map(RegisteredPlugin::plugin)
    }

    /// Iterate over all registered plugins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredPlugin> {
        self.order.iter().filter_map(|id| self.plugins.get(id))
    }

    /// Iterate over registered plugin descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static PluginDescriptor> + '_ {
        self.iter().map(RegisteredPlugin::descriptor)
    }

    /// Remove the plugin registered for the provided identifier.
    pub fn deregister_by_id(&mut self, id: &str) -> Option<RegisteredPlugin> {
        let removed = self.plugins.remove(id)?;
        self.order.retain(|existing| *existing != id);
        Some(removed)
    }

    /// Return the number of registered plugins.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when no plugins have been registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Theme names contributed by registered plugins, in registration order.
    ///
    /// Duplicates across plugins are dropped, keeping the first contributor.
    pub fn theme_names(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for entry in self.iter() {
            for name in entry.plugin().theme_names() {
                if !seen.contains(name) {
                    seen.push(*name);
                }
            }
        }
        seen
    }
}
