//! Language type: closed set of supported languages.
//!
//! Every language the pipeline understands is a variant here. Metadata (names,
//! rule tables, localized strings) lives in the registry and is looked up by
//! variant, so adding a language means adding a variant and a registry entry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported language, identified by its ISO 639-1 code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    Ja,
    Zh,
    Ko,
    Ru,
    Ar,
    Hi,
}

impl Language {
    /// All supported languages in enumeration order.
    ///
    /// Detection ties and the zero-signal winner follow this order.
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Ja,
        Language::Zh,
        Language::Ko,
        Language::Ru,
        Language::Ar,
        Language::Hi,
    ];

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "ja"), case-insensitive
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Language> {
        let normalized = code.trim().to_ascii_lowercase();
        match Language::ALL
            .iter()
            .find(|lang| lang.code() == normalized)
        {
            Some(lang) => Ok(*lang),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the default (canonical) language.
    ///
    /// Used when a language has no rule table of its own and as the
    /// zero-signal detection winner.
    pub const fn canonical() -> Language {
        Language::En
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Ko => "ko",
            Language::Ru => "ru",
            Language::Ar => "ar",
            Language::Hi => "hi",
        }
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config_for(*self)
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::En);
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Language::from_code("JA").unwrap(), Language::Ja);
        assert_eq!(Language::from_code(" ru ").unwrap(), Language::Ru);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("xx");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_str_round_trips_every_code() {
        for lang in Language::ALL {
            let parsed: Language = lang.code().parse().expect("Should parse");
            assert_eq!(parsed, lang);
        }
    }

    // ==================== canonical Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        let canonical = Language::canonical();
        assert_eq!(canonical, Language::En);
        assert!(canonical.config().is_canonical);
        assert!(!Language::Ja.config().is_canonical);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_uses_code() {
        assert_eq!(Language::Zh.to_string(), "zh");
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        let json = serde_json::to_string(&Language::Ko).unwrap();
        assert_eq!(json, "\"ko\"");
        let back: Language = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(back, Language::Hi);
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::Es.native_name(), "Español");
        assert_eq!(Language::Ja.native_name(), "日本語");
    }
}
