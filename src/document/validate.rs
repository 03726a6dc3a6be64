use ignore::overrides::OverrideBuilder;

use crate::error::ConfigError;

/// Check a content glob for syntactic validity.
///
/// The scanner consumes these through the same matcher `OverrideBuilder`
/// builds, so compiling the pattern here catches exactly the set of mistakes
/// the build would later trip over (unclosed classes, dangling alternates).
pub(super) fn glob(pattern: &str) -> Result<(), ConfigError> {
    if pattern.trim().is_empty() {
        return Err(ConfigError::invalid("content", "glob pattern is empty"));
    }
    OverrideBuilder::new(".")
        .add(pattern)
        .map(|_| ())
        .map_err(|err| {
            ConfigError::invalid(format!("content ('{pattern}')"), err.to_string())
        })
}

const COLOR_KEYWORDS: &[&str] = &["transparent", "currentColor", "inherit"];
const COLOR_FUNCTIONS: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla("];

/// Check a theme color token for a valid color-string literal.
pub(super) fn color(token: &str, value: &str) -> Result<(), ConfigError> {
    let field = || format!("theme.extend.colors.{token}");

    if let Some(digits) = value.strip_prefix('#') {
        let valid_len = matches!(digits.len(), 3 | 4 | 6 | 8);
        if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(());
        }
        return Err(ConfigError::invalid(
            field(),
            format!("'{value}' is not a valid hex color"),
        ));
    }

    if COLOR_FUNCTIONS
        .iter()
        .any(|prefix| value.starts_with(prefix))
        && value.ends_with(')')
    {
        return Ok(());
    }

    if COLOR_KEYWORDS.contains(&value) {
        return Ok(());
    }

    Err(ConfigError::invalid(
        field(),
        format!("'{value}' is not a recognized color literal"),
    ))
}

const LENGTH_UNITS: &[&str] = &["rem", "em", "px", "%", "vh", "vw", "ch", "pt"];

/// Check a CSS length such as the container `padding` value.
pub(super) fn length(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed == "0" {
        return Ok(());
    }

    for unit in LENGTH_UNITS {
        if let Some(number) = trimmed.strip_suffix(unit) {
            if !number.is_empty() && number.parse::<f64>().is_ok() {
                return Ok(());
            }
        }
    }

    Err(ConfigError::invalid(
        field,
        format!("'{value}' is not a CSS length (expected a number with a unit)"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brace_alternates_are_valid_globs() {
        assert!(glob("./css/**/*.{html,js}").is_ok());
        assert!(glob("./views/**/*.{html,js}").is_ok());
    }

    #[test]
    fn unclosed_class_is_rejected() {
        assert!(glob("./css/[abc").is_err());
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(glob("   ").is_err());
    }

    #[test]
    fn hex_colors_of_common_widths_pass() {
        assert!(color("customOrange", "#FF865B").is_ok());
        assert!(color("ink", "#000").is_ok());
        assert!(color("mist", "#FF86").is_ok());
        assert!(color("veil", "#00000080").is_ok());
    }

    #[test]
    fn malformed_colors_fail_with_the_token_in_the_field() {
        let err = color("customOrange", "#FF865").unwrap_err();
        match err {
            ConfigError::Validation { field, .. } => {
                assert_eq!(field, "theme.extend.colors.customOrange");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(color("sky", "skyish-blue").is_err());
        assert!(color("ash", "#GG0011").is_err());
    }

    #[test]
    fn functional_and_keyword_colors_pass() {
        assert!(color("overlay", "rgba(0, 0, 0, 0.4)").is_ok());
        assert!(color("accent", "hsl(20, 90%, 60%)").is_ok());
        assert!(color("none", "transparent").is_ok());
    }

    #[test]
    fn lengths_require_a_unit() {
        assert!(length("theme.container.padding", "2rem").is_ok());
        assert!(length("theme.container.padding", "0").is_ok());
        assert!(length("theme.container.padding", "1.5em").is_ok());
        assert!(length("theme.container.padding", "2").is_err());
        assert!(length("theme.container.padding", "rem").is_err());
    }
}
