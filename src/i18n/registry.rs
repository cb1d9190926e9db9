//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of every supported language with
//! its compiled rule tables and localized strings. It uses a singleton pattern
//! with `OnceLock` so the tables are built once and shared read-only.

use crate::i18n::rules::{build_rule_set, LanguageRuleSet};
use crate::i18n::strings::*;
use crate::i18n::Language;
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata and tables for a specific language: its names, whether
/// it's the canonical language, its rule set and its localized strings.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// English name of the language (e.g., "English", "Japanese")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "日本語")
    pub native_name: &'static str,

    /// Whether this is the canonical/fallback language (only one should be true)
    pub is_canonical: bool,

    /// Compiled detection, formality and intent tables
    pub rules: LanguageRuleSet,

    /// Localized greetings and closings
    pub strings: LanguageStrings,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get the configuration for a language.
    ///
    /// Every `Language` variant has an entry, so this lookup cannot miss.
    pub fn config_for(&self, language: Language) -> &LanguageConfig {
        // Entries are built from Language::ALL, so the enum order is the index
        &self.languages[language as usize]
    }

    /// The canonical language's configuration.
    ///
    /// Supplies fallback tables (intent patterns, business topics) for
    /// languages that have none of their own.
    pub fn canonical(&self) -> &LanguageConfig {
        self.config_for(Language::canonical())
    }
}

/// Default language configurations, in `Language::ALL` order.
fn default_languages() -> Vec<LanguageConfig> {
    Language::ALL
        .iter()
        .map(|&language| {
            let (name, native_name, strings) = match language {
                Language::En => ("English", "English", ENGLISH_STRINGS),
                Language::Es => ("Spanish", "Español", SPANISH_STRINGS),
                Language::Fr => ("French", "Français", FRENCH_STRINGS),
                Language::De => ("German", "Deutsch", GERMAN_STRINGS),
                Language::Ja => ("Japanese", "日本語", JAPANESE_STRINGS),
                Language::Zh => ("Chinese", "中文", CHINESE_STRINGS),
                Language::Ko => ("Korean", "한국어", KOREAN_STRINGS),
                Language::Ru => ("Russian", "Русский", RUSSIAN_STRINGS),
                Language::Ar => ("Arabic", "العربية", ARABIC_STRINGS),
                Language::Hi => ("Hindi", "हिन्दी", HINDI_STRINGS),
            };
            LanguageConfig {
                language,
                name,
                native_name,
                is_canonical: language == Language::canonical(),
                rules: build_rule_set(language),
                strings,
            }
        })
        .collect()
}
