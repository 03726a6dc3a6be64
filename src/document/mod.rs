//! Loading and validation of the configuration document.
//!
//! This module is intentionally decomposed into smaller submodules to keep
//! the pipeline manageable. `load_path`/`load_str` are the primary entry
//! points and return an immutable [`ConfigDocument`] the rest of the build
//! reads from.

mod loader;
mod raw;
mod resolved;
mod sources;
mod validate;

pub use loader::{load_path, load_str};
pub use resolved::{ConfigDocument, ContainerConfig, ThemeConfig};
pub use sources::{DocumentFormat, default_config_files, discover_config_file};
