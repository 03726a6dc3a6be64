//! Configuration front-end for the loomcss utility-class stylesheet tool.
//!
//! The root module primarily re-exports the document pipeline and the plugin
//! registry types so that embedders can load and inspect a configuration
//! without digging through the module hierarchy.

pub mod app_dirs;
mod builtin;
pub mod document;
pub mod error;
pub mod logging;

pub use builtin::builtin_registry;
pub use document::{
	ConfigDocument, ContainerConfig, DocumentFormat, ThemeConfig, default_config_files,
	discover_config_file, load_path, load_str,
};
pub use error::ConfigError;

pub use loomcss_plugin_api::{
	BuildPlugin, OptionsError, PluginDescriptor, PluginRegistry, PluginRegistryError,
	RegisteredPlugin,
};
