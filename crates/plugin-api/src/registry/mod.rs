mod plugin;
mod registered_plugin;
mod store;


pub use plugin::BuildPlugin;
pub use registered_plugin::RegisteredPlugin;
pub use store::PluginRegistry;
