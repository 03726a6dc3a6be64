use anyhow::Result;
use serde_json::Value;

/// Print a plain-text representation of a queried configuration value.
///
/// Strings print without quotes and sequences of scalars print one entry per
/// line, so output composes with shell pipelines. Anything nested falls back
/// to its JSON rendering.
pub(crate) fn print_plain(value: &Value) {
	match value {
		Value::Array(items) => {
			for item in items {
				println!("{}", scalar_text(item));
			}
		}
		other => println!("{}", scalar_text(other)),
	}
}

/// Render a scalar without JSON quoting; nested values keep JSON syntax.
fn scalar_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// Format a queried value as a JSON string.
pub(crate) fn format_value_json(value: &Value) -> Result<String> {
	Ok(serde_json::to_string_pretty(value)?)
}

/// Print the JSON representation of a queried value.
pub(crate) fn print_json(value: &Value) -> Result<()> {
	println!("{}", format_value_json(value)?);
	Ok(())
}
