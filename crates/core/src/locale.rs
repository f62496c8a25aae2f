use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language used for user-facing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish, the application's native language.
    #[default]
    Es,
    /// English.
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when parsing a locale tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unsupported locale: {0}")]
    Unsupported(String),
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Parses a language tag by its primary subtag, so `es-AR` and `en_US`
    /// are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Locale::default(), Locale::Es);
    }

    #[test]
    fn test_parse_primary_subtag() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("es-AR".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("EN_us".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn test_parse_unsupported() {
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(LocaleError::Unsupported("fr".to_string()))
        );
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for locale in [Locale::Es, Locale::En] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
