//! Derives a per-request cultural profile from the language base profile and
//! the input text.

use crate::culture::profile::{
    base_profile, CommunicationStyle, CulturalProfile, DecisionMaking, FormalityLevel,
};
use crate::i18n::{BusinessTopic, FormalityMarkers, Language, LanguageRegistry};
use chrono::{NaiveTime, Timelike};
use tracing::debug;

/// Per-request overrides for [`analyze`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOptions {
    pub region: Option<String>,
    pub timezone: Option<String>,
    /// Local time used to pick a time-of-day greeting
    pub time_of_day: Option<NaiveTime>,
}

/// Build the cultural profile for `text` written in `language`.
///
/// Steps run in a fixed order: clone the base profile, apply overrides,
/// score formality, pick a time-of-day greeting, then scan for a business
/// topic. Missing tables leave the corresponding fields as they were.
pub fn analyze(language: Language, text: &str, options: &AnalysisOptions) -> CulturalProfile {
    let config = LanguageRegistry::get().config_for(language);
    let mut profile = base_profile(language).clone();

    if let Some(region) = &options.region {
        profile.region = region.clone();
    }
    if let Some(timezone) = &options.timezone {
        profile.timezone = timezone.clone();
    }

    let lowered = text.to_lowercase();

    if let Some(markers) = &config.rules.formality {
        profile.formality_level = score_formality(&lowered, markers);
    }

    if let (Some(time), Some(greetings), Some(etiquette)) = (
        options.time_of_day,
        &config.strings.time_of_day_greetings,
        profile.business_etiquette.as_mut(),
    ) {
        etiquette.greeting_style = greetings.for_hour(time.hour()).to_string();
    }

    if let Some(topic) = detect_business_topic(language, &lowered) {
        debug!("Business topic {:?} detected for {}", topic, language);
        if let Some(etiquette) = profile.business_etiquette.as_mut() {
            match topic {
                BusinessTopic::Negotiation => {
                    etiquette.communication_style = CommunicationStyle::Indirect;
                    etiquette.decision_making = DecisionMaking::Consensus;
                }
                BusinessTopic::Presentation => {
                    etiquette.communication_style = CommunicationStyle::Direct;
                    etiquette.decision_making = DecisionMaking::Hierarchical;
                }
                BusinessTopic::Meeting | BusinessTopic::Contract => {}
            }
        }
    }

    profile
}

/// Formality from marker occurrence counts over lowercased text.
fn score_formality(lowered: &str, markers: &FormalityMarkers) -> FormalityLevel {
    let count = |list: &[&str]| -> usize {
        list.iter()
            .map(|marker| lowered.matches(&marker.to_lowercase()).count())
            .sum()
    };

    let very_formal = count(markers.very_formal);
    let formal = count(markers.formal);
    let informal = count(markers.informal);

    if very_formal > 0 {
        FormalityLevel::VeryFormal
    } else if formal > informal {
        FormalityLevel::Formal
    } else if informal > formal {
        FormalityLevel::Informal
    } else {
        FormalityLevel::Neutral
    }
}

/// First business topic, in scan order, whose language or English keywords
/// occur in the text. Latin-script keywords must match whole words.
pub fn detect_business_topic(language: Language, lowered: &str) -> Option<BusinessTopic> {
    let registry = LanguageRegistry::get();
    let own = &registry.config_for(language).rules;
    let canonical = &registry.canonical().rules;

    BusinessTopic::ALL.into_iter().find(|&topic| {
        own.mentions_topic(topic, lowered) || canonical.mentions_topic(topic, lowered)
    })
}
