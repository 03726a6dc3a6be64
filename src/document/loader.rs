use std::path::Path;

use loomcss_plugin_api::PluginRegistry;

use crate::error::ConfigError;

use super::raw::{self, RawDocument};
use super::resolved::ConfigDocument;
use super::sources::{self, DocumentFormat};

/// Load and validate a configuration document from disk.
///
/// The format is derived from the file extension. Structural problems fail
/// with [`ConfigError::Parse`]; references the registry cannot resolve fail
/// with [`ConfigError::Validation`].
pub fn load_path(path: &Path, registry: &PluginRegistry) -> Result<ConfigDocument, ConfigError> {
	let (text, format) = sources::read_document(path)?;
	load_str(&text, format, registry)
}

/// Load and validate a configuration document from an in-memory string.
pub fn load_str(
	text: &str,
	format: DocumentFormat,
	registry: &PluginRegistry,
) -> Result<ConfigDocument, ConfigError> {
	let raw = RawDocument::parse(text, format)?;
	let tree = raw::parse_tree(text, format)?;
	ConfigDocument::resolve(raw, tree, registry)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use serde_json::json;

	use crate::builtin::builtin_registry;
	use crate::error::ConfigError;

	use super::*;

	const REFERENCE: &str = r##"
content = ["./css/**/*.{html,js}", "./views/**/*.{html,js}"]
plugins = ["daisyui"]

[theme.container]
center = true
padding = "2rem"

[theme.extend.colors]
customOrange = "#FF865B"

[daisyui]
themes = ["light", "dark", "forest", "sunset"]
"##;

	#[test]
	fn content_globs_round_trip_in_order() {
		let registry = builtin_registry().unwrap();
		let document = load_str(REFERENCE, DocumentFormat::Toml, &registry).unwrap();

		assert_eq!(
			document.get("content").unwrap(),
			&json!(["./css/**/*.{html,js}", "./views/**/*.{html,js}"])
		);
		assert_eq!(
			document.content(),
			&["./css/**/*.{html,js}".to_string(), "./views/**/*.{html,js}".to_string()]
		);
	}

	#[test]
	fn container_padding_reads_back_verbatim() {
		let registry = builtin_registry().unwrap();
		let document = load_str(REFERENCE, DocumentFormat::Toml, &registry).unwrap();

		assert_eq!(
			document.get("theme.container.padding").unwrap(),
			&json!("2rem")
		);
	}

	#[test]
	fn extended_color_token_reads_back_verbatim() {
		let registry = builtin_registry().unwrap();
		let document = load_str(REFERENCE, DocumentFormat::Toml, &registry).unwrap();

		assert_eq!(
			document.get("theme.extend.colors.customOrange").unwrap(),
			&json!("#FF865B")
		);
	}

	#[test]
	fn theme_accessor_exposes_validated_settings() {
		let registry = builtin_registry().unwrap();
		let document = load_str(REFERENCE, DocumentFormat::Toml, &registry).unwrap();

		let theme = document.theme();
		let container = theme.container.as_ref().expect("container declared");
		assert!(container.center);
		assert_eq!(container.padding.as_deref(), Some("2rem"));
		assert_eq!(
			theme.colors.get("customOrange").map(String::as_str),
			Some("#FF865B")
		);
	}

	#[test]
	fn plugin_option_block_preserves_theme_order() {
		let registry = builtin_registry().unwrap();
		let document = load_str(REFERENCE, DocumentFormat::Toml, &registry).unwrap();

		assert_eq!(
			document.get("daisyui.themes").unwrap(),
			&json!(["light", "dark", "forest", "sunset"])
		);
	}

	#[test]
	fn unregistered_plugin_fails_validation() {
		let registry = builtin_registry().unwrap();
		let err = load_str(
			"plugins = [\"confetti\"]\n",
			DocumentFormat::Toml,
			&registry,
		)
		.unwrap_err();

		match err {
			ConfigError::Validation { field, reason } => {
				assert_eq!(field, "plugins");
				assert!(reason.contains("confetti"));
			}
			other => panic!("expected validation error, got {other:?}"),
		}
	}

	#[test]
	fn non_boolean_center_fails_parsing() {
		let registry = builtin_registry().unwrap();
		let err = load_str(
			"[theme.container]\ncenter = \"yes\"\n",
			DocumentFormat::Toml,
			&registry,
		)
		.unwrap_err();

		assert!(matches!(err, ConfigError::Parse { .. }));
	}

	#[test]
	fn unknown_theme_in_option_block_fails_validation() {
		let registry = builtin_registry().unwrap();
		let err = load_str(
			"plugins = [\"daisyui\"]\n\n[daisyui]\nthemes = [\"moonbase\"]\n",
			DocumentFormat::Toml,
			&registry,
		)
		.unwrap_err();

		match err {
			ConfigError::Validation { field, reason } => {
				assert_eq!(field, "daisyui.themes");
				assert!(reason.contains("moonbase"));
			}
			other => panic!("expected validation error, got {other:?}"),
		}
	}

	#[test]
	fn stray_option_block_fails_validation() {
		let registry = builtin_registry().unwrap();
		let err = load_str(
			"[confetti]\nburst = true\n",
			DocumentFormat::Toml,
			&registry,
		)
		.unwrap_err();

		match err {
			ConfigError::Validation { field, .. } => assert_eq!(field, "confetti"),
			other => panic!("expected validation error, got {other:?}"),
		}
	}

	#[test]
	fn invalid_content_glob_fails_validation() {
		let registry = builtin_registry().unwrap();
		let err = load_str(
			"content = [\"./css/[oops\"]\n",
			DocumentFormat::Toml,
			&registry,
		)
		.unwrap_err();

		assert!(matches!(err, ConfigError::Validation { .. }));
	}

	#[test]
	fn missing_path_is_a_key_not_found_error() {
		let registry = builtin_registry().unwrap();
		let document = load_str(REFERENCE, DocumentFormat::Toml, &registry).unwrap();

		let err = document.get("theme.extend.colors.customTeal").unwrap_err();
		match err {
			ConfigError::KeyNotFound { path } => {
				assert_eq!(path, "theme.extend.colors.customTeal");
			}
			other => panic!("expected key-not-found error, got {other:?}"),
		}
	}

	#[test]
	fn numeric_segments_index_into_sequences() {
		let registry = builtin_registry().unwrap();
		let document = load_str(REFERENCE, DocumentFormat::Toml, &registry).unwrap();

		assert_eq!(document.get("daisyui.themes.2").unwrap(), &json!("forest"));
		assert!(document.get("daisyui.themes.9").is_err());
	}

	#[test]
	fn json_form_of_the_reference_document_loads() {
		let registry = builtin_registry().unwrap();
		let text = json!({
			"content": ["./css/**/*.{html,js}"],
			"theme": {
				"container": { "center": true, "padding": "2rem" },
				"extend": { "colors": { "customOrange": "#FF865B" } }
			},
			"plugins": ["daisyui"],
			"daisyui": { "themes": ["light", "dark", "forest", "sunset"] }
		})
		.to_string();

		let document = load_str(&text, DocumentFormat::Json, &registry).unwrap();
		assert_eq!(
			document.get("theme.extend.colors.customOrange").unwrap(),
			&json!("#FF865B")
		);
	}

	#[test]
	fn load_path_reads_a_document_off_disk() {
		let registry = builtin_registry().unwrap();
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("loomcss.config.toml");
		fs::write(&path, REFERENCE).unwrap();

		let document = load_path(&path, &registry).unwrap();
		assert_eq!(document.plugins(), &["daisyui".to_string()]);
		assert!(document.plugin_options("daisyui").is_some());
	}
}
