//! Configuration for selecting a punctuation system

use std::env;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::{AbbreviationFault, PunctuationError, Result},
    state::BookAbbreviation,
    systems::{self, PunctuationSystem},
};

pub const SYSTEM_ENV_VAR: &str = "BIBLE_PUNCTUATION_SYSTEM";
pub const STRICT_ENV_VAR: &str = "BIBLE_PUNCTUATION_STRICT";

pub const DEFAULT_SYSTEM: &str = "English";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunctuationConfig {
    /// Name of the system to use, e.g. `English_brief`
    pub default_system: String,

    /// Require abbreviations to already be uppercase codes. When false,
    /// input such as `gen` is upper-cased before parsing.
    pub strict_abbreviations: bool,
}

impl Default for PunctuationConfig {
    fn default() -> Self {
        Self {
            default_system: DEFAULT_SYSTEM.to_string(),
            strict_abbreviations: true,
        }
    }
}

impl PunctuationConfig {
    /// Parse a TOML document; missing keys fall back to the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PunctuationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source, keyed like the environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            default_system: lookup(SYSTEM_ENV_VAR).unwrap_or(defaults.default_system),
            strict_abbreviations: match lookup(STRICT_ENV_VAR) {
                Some(value) => value.trim().parse().map_err(|_| {
                    PunctuationError::InvalidConfig(format!(
                        "{} must be true or false, got {:?}",
                        STRICT_ENV_VAR, value
                    ))
                })?,
                None => defaults.strict_abbreviations,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_system.trim().is_empty() {
            return Err(PunctuationError::InvalidConfig(
                "default_system must not be empty".to_string(),
            ));
        }

        if systems::system_by_name(&self.default_system).is_none() {
            warn!(
                "Configured punctuation system {:?} is not one of {:?}",
                self.default_system,
                systems::system_names().collect::<Vec<_>>()
            );
            return Err(PunctuationError::UnknownSystem(self.default_system.clone()));
        }

        Ok(())
    }

    /// The configured system.
    pub fn resolve(&self) -> Result<&'static PunctuationSystem> {
        let system = systems::system_by_name(&self.default_system)
            .ok_or_else(|| PunctuationError::UnknownSystem(self.default_system.clone()))?;
        info!(
            "Using punctuation system {} (index {})",
            system.name(),
            system.index_number
        );
        Ok(system)
    }

    /// Parse user input into an abbreviation according to the strictness setting.
    pub fn parse_abbreviation(&self, input: &str) -> Result<BookAbbreviation> {
        let input = input.trim();
        if self.strict_abbreviations {
            if let Some((position, byte)) = input
                .bytes()
                .enumerate()
                .find(|(_, byte)| byte.is_ascii_lowercase())
            {
                return Err(AbbreviationFault::Lowercase { position, byte }.into());
            }
            return BookAbbreviation::try_from(input);
        }
        BookAbbreviation::try_from(input.to_ascii_uppercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PunctuationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.resolve().unwrap().name(), "English");
    }

    #[test]
    fn test_from_toml() {
        let config = PunctuationConfig::from_toml_str(
            r#"
            default_system = "Matigsalug"
            strict_abbreviations = false
            "#,
        )
        .unwrap();
        assert_eq!(config.default_system, "Matigsalug");
        assert!(!config.strict_abbreviations);
        assert_eq!(config.resolve().unwrap().index_number, systems::MATIGSALUG_INDEX);
    }

    #[test]
    fn test_from_toml_uses_defaults_for_missing_keys() {
        let config = PunctuationConfig::from_toml_str("").unwrap();
        assert_eq!(config, PunctuationConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_system() {
        let err = PunctuationConfig::from_toml_str(r#"default_system = "Klingon""#).unwrap_err();
        assert_eq!(err, PunctuationError::UnknownSystem("Klingon".to_string()));
    }

    #[test]
    fn test_from_toml_rejects_malformed_document() {
        let err = PunctuationConfig::from_toml_str("default_system = ").unwrap_err();
        assert!(matches!(err, PunctuationError::ConfigParse(_)));
    }

    #[test]
    fn test_from_vars() {
        let config = PunctuationConfig::from_vars(|key| match key {
            SYSTEM_ENV_VAR => Some("English_brief".to_string()),
            STRICT_ENV_VAR => Some("false".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.default_system, "English_brief");
        assert!(!config.strict_abbreviations);

        let config = PunctuationConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, PunctuationConfig::default());
    }

    #[test]
    fn test_from_vars_rejects_bad_flag() {
        let err = PunctuationConfig::from_vars(|key| {
            (key == STRICT_ENV_VAR).then(|| "sometimes".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, PunctuationError::InvalidConfig(_)));
    }

    #[test]
    fn test_parse_abbreviation_strictness() {
        let strict = PunctuationConfig::default();
        assert_eq!(strict.parse_abbreviation(" SA1 ").unwrap().as_str(), "SA1");
        assert_eq!(
            strict.parse_abbreviation("Gen").unwrap_err(),
            PunctuationError::InvalidAbbreviation(AbbreviationFault::Lowercase {
                position: 1,
                byte: b'e',
            })
        );

        let lenient = PunctuationConfig {
            strict_abbreviations: false,
            ..PunctuationConfig::default()
        };
        assert_eq!(lenient.parse_abbreviation("gen").unwrap().as_str(), "GEN");
        assert!(lenient.parse_abbreviation("gene").is_err());
    }
}
