//! Shared plugin interfaces for the loomcss configuration front-end.
//!
//! A configuration document activates plugins by name and may address an
//! option block to each one. This crate defines the descriptor metadata a
//! plugin advertises, the [`BuildPlugin`] trait option validation goes
//! through, and the [`PluginRegistry`] that resolves the names a document
//! references.

pub mod descriptors;
pub mod error;
pub mod registry;

pub use descriptors::PluginDescriptor;
pub use error::{OptionsError, PluginRegistryError};
pub use registry::{BuildPlugin, PluginRegistry, RegisteredPlugin};
