use std::collections::BTreeMap;

use crate::error::{AnonymizerError, Result};

/// Multi-valued option mapping handed to a strategy at construction.
/// Repeating a key accumulates values; single-valued options read the
/// last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyOptions {
    values: BTreeMap<String, Vec<String>>,
}

impl StrategyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values recorded for `key`, in insertion order.
    pub fn all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The effective value for a single-valued option: the last one given.
    pub fn last(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Boolean option with a default. Accepts y/yes/t/true/1 and
    /// n/no/f/false/0, case-insensitively; anything else is a
    /// configuration fault.
    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool> {
        match self.last(key) {
            None => Ok(default),
            Some(value) => parse_bool(key, value),
        }
    }

    /// Single-character option, e.g. a mask symbol override.
    pub fn single_char(&self, key: &str) -> Result<Option<char>> {
        match self.last(key) {
            None => Ok(None),
            Some(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Some(c)),
                    _ => Err(AnonymizerError::InvalidOption {
                        option: key.to_string(),
                        value: value.to_string(),
                        reason: "expected exactly one character".to_string(),
                    }),
                }
            }
        }
    }
}

/// Parse a boolean option value.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "1" => Ok(true),
        "n" | "no" | "f" | "false" | "0" => Ok(false),
        _ => Err(AnonymizerError::InvalidOption {
            option: key.to_string(),
            value: value.to_string(),
            reason: "expected a boolean (y/yes/t/true/1 or n/no/f/false/0)".to_string(),
        }),
    }
}

/// A parsed strategy selector: a name plus its option mapping.
///
/// The CLI form is `name?key=value&key=value2&flag=`. Blank values are
/// permitted; a pair without `=` is malformed. An absent or blank
/// argument selects the default strategy with no options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySpec {
    pub name: String,
    pub options: StrategyOptions,
}

impl StrategySpec {
    pub fn parse(arg: &str) -> Result<Self> {
        let arg = arg.trim();
        let (name, query) = match arg.split_once('?') {
            Some((name, query)) => (name, Some(query)),
            None => (arg, None),
        };

        let name = if name.is_empty() { "default" } else { name };
        let mut options = StrategyOptions::new();

        if let Some(query) = query {
            for pair in query.split('&').filter(|p| !p.is_empty()) {
                let (key, value) =
                    pair.split_once('=')
                        .ok_or_else(|| AnonymizerError::MalformedSpec {
                            spec: arg.to_string(),
                            reason: format!("option `{pair}` has no `=`"),
                        })?;
                if key.is_empty() {
                    return Err(AnonymizerError::MalformedSpec {
                        spec: arg.to_string(),
                        reason: "empty option name".to_string(),
                    });
                }
                options.insert(key, value);
            }
        }

        Ok(Self {
            name: name.to_lowercase(),
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_argument_selects_default() {
        let spec = StrategySpec::parse("").unwrap();
        assert_eq!(spec.name, "default");
        assert!(spec.options.is_empty());

        let spec = StrategySpec::parse("   ").unwrap();
        assert_eq!(spec.name, "default");
    }

    #[test]
    fn name_only() {
        let spec = StrategySpec::parse("paranoid").unwrap();
        assert_eq!(spec.name, "paranoid");
        assert!(spec.options.is_empty());
    }

    #[test]
    fn name_is_lowercased() {
        let spec = StrategySpec::parse("Hash?salt=abc").unwrap();
        assert_eq!(spec.name, "hash");
    }

    #[test]
    fn query_string_options() {
        let spec = StrategySpec::parse("hash?salt=pepper&short_sha=true").unwrap();
        assert_eq!(spec.options.last("salt"), Some("pepper"));
        assert_eq!(spec.options.last("short_sha"), Some("true"));
    }

    #[test]
    fn repeated_key_accumulates_and_last_wins() {
        let spec = StrategySpec::parse("smart?mask_symbol=%&mask_symbol=#").unwrap();
        assert_eq!(spec.options.all("mask_symbol"), ["%", "#"]);
        assert_eq!(spec.options.last("mask_symbol"), Some("#"));
    }

    #[test]
    fn blank_value_is_allowed() {
        let spec = StrategySpec::parse("hash?salt=s&flag=").unwrap();
        assert_eq!(spec.options.last("flag"), Some(""));
    }

    #[test]
    fn pair_without_equals_is_malformed() {
        let err = StrategySpec::parse("hash?salt").unwrap_err();
        assert!(matches!(
            err,
            crate::error::AnonymizerError::MalformedSpec { .. }
        ));
    }

    #[test]
    fn empty_key_is_malformed() {
        assert!(StrategySpec::parse("hash?=value").is_err());
    }

    #[test]
    fn bool_parsing_accepts_all_spellings() {
        for v in ["y", "YES", "t", "True", "1"] {
            assert!(parse_bool("k", v).unwrap());
        }
        for v in ["n", "No", "F", "false", "0"] {
            assert!(!parse_bool("k", v).unwrap());
        }
        assert!(parse_bool("k", "maybe").is_err());
    }

    #[test]
    fn single_char_rejects_longer_values() {
        let mut opts = StrategyOptions::new();
        opts.insert("mask_symbol", "**");
        assert!(opts.single_char("mask_symbol").is_err());

        let mut opts = StrategyOptions::new();
        opts.insert("mask_symbol", "#");
        assert_eq!(opts.single_char("mask_symbol").unwrap(), Some('#'));
    }
}
