use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs;
use crate::error::ConfigError;

/// Serialized forms the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Derive the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(ConfigError::parse(format!(
                "unsupported configuration format '.{other}' for {}",
                path.display()
            ))),
            None => Err(ConfigError::parse(format!(
                "cannot determine configuration format for {}",
                path.display()
            ))),
        }
    }
}

/// Discover the default configuration file locations that should be consulted.
pub fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join("loomcss.config.toml"));
        files.push(current_dir.join(".loomcss.toml"));
    }

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    files
}

/// Return the first default location that exists on disk, if any.
pub fn discover_config_file() -> Option<PathBuf> {
    default_config_files()
        .into_iter()
        .find(|path| path.is_file())
}

/// Read a document off disk together with its detected format.
pub(super) fn read_document(path: &Path) -> Result<(String, DocumentFormat), ConfigError> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|err| {
        ConfigError::parse(format!("cannot read {}: {err}", path.display()))
    })?;
    Ok((text, format))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_files_include_current_directory_variants() {
        let files = default_config_files();
        assert!(files.iter().any(|path| path.ends_with("loomcss.config.toml")));
        assert!(files.iter().any(|path| path.ends_with(".loomcss.toml")));
    }

    #[test]
    fn format_is_detected_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("loomcss.config.toml")).unwrap(),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("loomcss.config.json")).unwrap(),
            DocumentFormat::Json
        );
    }

    #[test]
    fn unsupported_extension_is_a_parse_error() {
        let err = DocumentFormat::from_path(Path::new("loomcss.config.js")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn read_document_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = read_document(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn read_document_returns_contents_and_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loomcss.config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "content = []").unwrap();

        let (text, format) = read_document(&path).unwrap();
        assert_eq!(format, DocumentFormat::Toml);
        assert!(text.contains("content"));
    }
}
