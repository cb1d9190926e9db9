//! Cultural profile types and the static base profile per language.

use crate::culture::plural::PluralRule;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormalityLevel {
    Informal,
    Neutral,
    Formal,
    VeryFormal,
}

impl FormalityLevel {
    /// True for `Formal` and `VeryFormal`.
    pub fn is_formal(&self) -> bool {
        matches!(self, FormalityLevel::Formal | FormalityLevel::VeryFormal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Direct,
    Indirect,
    Contextual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionMaking {
    Individual,
    Consensus,
    Hierarchical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingDirection {
    Ltr,
    Rtl,
}

/// Business etiquette norms for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessEtiquette {
    pub greeting_style: String,
    pub communication_style: CommunicationStyle,
    pub decision_making: DecisionMaking,
}

/// Resolved locale formatting rules and etiquette norms for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalProfile {
    pub language: Language,
    pub region: String,
    pub timezone: String,
    /// Template with `YYYY`, `MM` and `DD` tokens
    pub date_format: String,
    /// Sample number such as `1,234.56` naming the group and decimal separators
    pub number_format: String,
    /// Template with an `{amount}` token
    pub currency_format: Option<String>,
    pub formality_level: FormalityLevel,
    pub business_etiquette: Option<BusinessEtiquette>,
    pub writing_direction: WritingDirection,
    pub pluralization_rule: PluralRule,
}

static BASE_PROFILES: OnceLock<HashMap<Language, CulturalProfile>> = OnceLock::new();

/// The static base profile for a language.
///
/// Callers that need to change fields must clone; the table itself is never
/// mutated.
pub fn base_profile(language: Language) -> &'static CulturalProfile {
    let profiles = BASE_PROFILES.get_or_init(|| {
        Language::ALL
            .iter()
            .map(|&language| (language, build_base_profile(language)))
            .collect()
    });
    &profiles[&language]
}

fn etiquette(
    greeting_style: &str,
    communication_style: CommunicationStyle,
    decision_making: DecisionMaking,
) -> Option<BusinessEtiquette> {
    Some(BusinessEtiquette {
        greeting_style: greeting_style.to_string(),
        communication_style,
        decision_making,
    })
}

fn build_base_profile(language: Language) -> CulturalProfile {
    use CommunicationStyle::*;
    use DecisionMaking::*;

    let (region, timezone, date_format, number_format, currency_format) = match language {
        Language::En => ("US", "America/New_York", "MM/DD/YYYY", "1,234.56", Some("${amount}")),
        Language::Es => ("ES", "Europe/Madrid", "DD/MM/YYYY", "1.234,56", Some("{amount} €")),
        Language::Fr => ("FR", "Europe/Paris", "DD/MM/YYYY", "1 234,56", Some("{amount} €")),
        Language::De => ("DE", "Europe/Berlin", "DD.MM.YYYY", "1.234,56", Some("{amount} €")),
        Language::Ja => ("JP", "Asia/Tokyo", "YYYY/MM/DD", "1,234.56", Some("¥{amount}")),
        Language::Zh => ("CN", "Asia/Shanghai", "YYYY-MM-DD", "1,234.56", Some("¥{amount}")),
        Language::Ko => ("KR", "Asia/Seoul", "YYYY.MM.DD", "1,234.56", Some("₩{amount}")),
        Language::Ru => ("RU", "Europe/Moscow", "DD.MM.YYYY", "1 234,56", Some("{amount} ₽")),
        Language::Ar => ("SA", "Asia/Riyadh", "DD/MM/YYYY", "1,234.56", Some("{amount} ر.س")),
        Language::Hi => ("IN", "Asia/Kolkata", "DD-MM-YYYY", "1,234.56", None),
    };

    let (formality_level, business_etiquette) = match language {
        Language::En => (FormalityLevel::Neutral, etiquette("Hello", Direct, Individual)),
        Language::Es => (FormalityLevel::Neutral, etiquette("Hola", Contextual, Hierarchical)),
        Language::Fr => (FormalityLevel::Formal, etiquette("Bonjour", Contextual, Hierarchical)),
        Language::De => (FormalityLevel::Formal, etiquette("Guten Tag", Direct, Consensus)),
        Language::Ja => (FormalityLevel::Formal, etiquette("こんにちは", Indirect, Consensus)),
        Language::Zh => (FormalityLevel::Neutral, etiquette("您好", Indirect, Hierarchical)),
        Language::Ko => (FormalityLevel::Formal, etiquette("안녕하세요", Indirect, Hierarchical)),
        Language::Ru => (
            FormalityLevel::Neutral,
            etiquette("Здравствуйте", Direct, Hierarchical),
        ),
        Language::Ar => (
            FormalityLevel::Formal,
            etiquette("السلام عليكم", Indirect, Hierarchical),
        ),
        // No etiquette table for Hindi yet
        Language::Hi => (FormalityLevel::Neutral, None),
    };

    let writing_direction = match language {
        Language::Ar => WritingDirection::Rtl,
        _ => WritingDirection::Ltr,
    };

    let pluralization_rule = match language {
        Language::Ja | Language::Zh | Language::Ko => PluralRule::AlwaysOther,
        Language::Fr | Language::Hi => PluralRule::OneIfZeroOrOne,
        Language::Ru => PluralRule::EastSlavic,
        Language::Ar => PluralRule::Arabic,
        Language::En | Language::Es | Language::De => PluralRule::OneIfEqualOne,
    };

    CulturalProfile {
        language,
        region: region.to_string(),
        timezone: timezone.to_string(),
        date_format: date_format.to_string(),
        number_format: number_format.to_string(),
        currency_format: currency_format.map(str::to_string),
        formality_level,
        business_etiquette,
        writing_direction,
        pluralization_rule,
    }
}
