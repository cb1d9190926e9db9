//! Response adaptation: applies a cultural profile to a produced response.

use crate::culture::{format_currency, format_date, format_number, CulturalProfile, FormalityLevel};
use crate::i18n::{Language, LanguageRegistry};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

static FORMAT_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

const GREETING_SLOT: &str = "{greeting}";
const RESPONSE_SLOT: &str = "{response}";

/// Shapes executor output for the user's locale.
///
/// Per-language templates take precedence over the formality rules. A template
/// may use `{greeting}` and `{response}` slots.
#[derive(Debug, Clone, Default)]
pub struct ResponseAdapter {
    templates: HashMap<Language, String>,
}

impl ResponseAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, language: Language, template: impl Into<String>) -> Self {
        self.templates.insert(language, template.into());
        self
    }

    pub fn adapt(&self, response: &str, profile: &CulturalProfile) -> String {
        let response = expand_format_tokens(response, profile);
        let greeting = profile
            .business_etiquette
            .as_ref()
            .map(|etiquette| etiquette.greeting_style.as_str());

        if let Some(template) = self.templates.get(&profile.language) {
            return template
                .replace(GREETING_SLOT, greeting.unwrap_or_default())
                .replace(RESPONSE_SLOT, &response);
        }

        let strings = &LanguageRegistry::get().config_for(profile.language).strings;
        match (profile.formality_level, greeting) {
            (FormalityLevel::VeryFormal, Some(greeting)) => {
                if strings.formal_closing.is_empty() {
                    format!("{}\n\n{}", greeting, response)
                } else {
                    format!("{}\n\n{}\n\n{}", greeting, response, strings.formal_closing)
                }
            }
            (FormalityLevel::Formal, Some(greeting)) => format!("{}\n\n{}", greeting, response),
            (FormalityLevel::Informal, Some(_)) => {
                format!("{} {}", strings.informal_greeting, response)
            }
            _ => response,
        }
    }
}

/// Expand `{{date:YYYY-MM-DD}}`, `{{number:N}}` and `{{currency:N}}` tokens
/// with the profile's formatters. Unparseable values are left verbatim.
pub fn expand_format_tokens(text: &str, profile: &CulturalProfile) -> String {
    let regex = FORMAT_TOKEN_REGEX
        .get_or_init(|| Regex::new(r"\{\{(date|number|currency):([^}]*)\}\}").unwrap());

    regex
        .replace_all(text, |caps: &Captures| {
            let value = caps[2].trim();
            let formatted = match &caps[1] {
                "date" => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .ok()
                    .map(|date| format_date(date, profile)),
                "number" => value.parse::<f64>().ok().map(|n| format_number(n, profile)),
                "currency" => value.parse::<f64>().ok().map(|n| format_currency(n, profile)),
                _ => None,
            };
            formatted.unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::culture::base_profile;

    fn profile_with(language: Language, formality: FormalityLevel) -> CulturalProfile {
        let mut profile = base_profile(language).clone();
        profile.formality_level = formality;
        profile
    }

    // ==================== Formality Tests ====================

    #[test]
    fn test_neutral_is_unchanged() {
        let adapter = ResponseAdapter::new();
        let profile = profile_with(Language::En, FormalityLevel::Neutral);
        assert_eq!(adapter.adapt("Done.", &profile), "Done.");
    }

    #[test]
    fn test_formal_prepends_greeting() {
        let adapter = ResponseAdapter::new();
        let profile = profile_with(Language::De, FormalityLevel::Formal);
        assert_eq!(adapter.adapt("Erledigt.", &profile), "Guten Tag\n\nErledigt.");
    }

    #[test]
    fn test_very_formal_adds_closing() {
        let adapter = ResponseAdapter::new();
        let profile = profile_with(Language::Ja, FormalityLevel::VeryFormal);
        assert_eq!(
            adapter.adapt("完了しました。", &profile),
            "こんにちは\n\n完了しました。\n\nよろしくお願い申し上げます。"
        );
    }

    #[test]
    fn test_informal_uses_informal_greeting() {
        let adapter = ResponseAdapter::new();
        let profile = profile_with(Language::En, FormalityLevel::Informal);
        assert_eq!(adapter.adapt("Done.", &profile), "Hi! Done.");
    }

    #[test]
    fn test_no_etiquette_is_unchanged() {
        let adapter = ResponseAdapter::new();
        let profile = profile_with(Language::Hi, FormalityLevel::VeryFormal);
        assert_eq!(adapter.adapt("ठीक है", &profile), "ठीक है");
    }

    // ==================== Template Tests ====================

    #[test]
    fn test_template_takes_precedence() {
        let adapter = ResponseAdapter::new().with_template(Language::En, "[{greeting}] {response}");
        let profile = profile_with(Language::En, FormalityLevel::VeryFormal);
        assert_eq!(adapter.adapt("Done.", &profile), "[Hello] Done.");
    }

    #[test]
    fn test_template_for_other_language_is_ignored() {
        let adapter = ResponseAdapter::new().with_template(Language::Fr, "{response}!");
        let profile = profile_with(Language::En, FormalityLevel::Neutral);
        assert_eq!(adapter.adapt("Done.", &profile), "Done.");
    }

    // ==================== Format Token Tests ====================

    #[test]
    fn test_expand_format_tokens() {
        let profile = base_profile(Language::De);
        let text = "Am {{date:2024-03-07}} kostet es {{currency:1234.5}} ({{number:1000}})";
        assert_eq!(
            expand_format_tokens(text, profile),
            "Am 07.03.2024 kostet es 1.234,50 € (1.000)"
        );
    }

    #[test]
    fn test_unparseable_tokens_left_verbatim() {
        let profile = base_profile(Language::En);
        let text = "{{date:tomorrow}} {{number:many}}";
        assert_eq!(expand_format_tokens(text, profile), text);
    }
}
