//! Environment-variable references in configuration values.
//!
//! A value written as `$VAR` or `${VAR}` is replaced by the content of the
//! named variable when the registry is loaded. Anything else is taken
//! literally.

use crate::error::ConfigError;

/// Resolve an environment-variable reference (`$VAR` or `${VAR}`), returning
/// the literal string unchanged if it does not match either pattern.
pub(crate) fn resolve_env(value: &str) -> Result<String, ConfigError> {
    resolve_with(value, |name| std::env::var(name).ok())
}

/// Same as [`resolve_env`] with an injectable variable lookup.
pub(crate) fn resolve_with(
    value: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    let var_name = value
        .strip_prefix("${")
        .and_then(|v| v.strip_suffix('}'))
        .or_else(|| value.strip_prefix('$'))
        .filter(|name| !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_'));

    match var_name {
        Some(name) => lookup(name).ok_or_else(|| ConfigError::UnresolvedEnv {
            var: name.to_owned(),
        }),
        None => Ok(value.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        (name == "POLAR_MNEMONIC").then(|| "word ".repeat(12).trim_end().to_owned())
    }

    #[test]
    fn literal_values_pass_through() {
        let value = resolve_with("echo strong slender", lookup).unwrap();
        assert_eq!(value, "echo strong slender");
    }

    #[test]
    fn both_reference_forms_resolve() {
        let plain = resolve_with("$POLAR_MNEMONIC", lookup).unwrap();
        let braced = resolve_with("${POLAR_MNEMONIC}", lookup).unwrap();
        assert_eq!(plain, braced);
        assert_eq!(plain.split_whitespace().count(), 12);
    }

    #[test]
    fn missing_variable_is_reported() {
        let err = resolve_with("${NOT_SET_ANYWHERE}", lookup).unwrap_err();
        assert!(matches!(err, ConfigError::UnresolvedEnv { var } if var == "NOT_SET_ANYWHERE"));
    }

    #[test]
    fn dollar_with_punctuation_is_literal() {
        assert_eq!(resolve_with("$5 fee", lookup).unwrap(), "$5 fee");
        assert_eq!(resolve_with("$", lookup).unwrap(), "$");
    }

    #[test]
    fn empty_braced_reference_is_literal() {
        assert_eq!(resolve_with("${}", lookup).unwrap(), "${}");
        assert_eq!(resolve_with("${A B}", lookup).unwrap(), "${A B}");
    }
}
