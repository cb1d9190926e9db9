//! Cultural sensitivity checks and communication recommendations.

use crate::culture::profile::{
    CommunicationStyle, CulturalProfile, DecisionMaking, FormalityLevel, WritingDirection,
};
use crate::i18n::LanguageRegistry;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static SENSITIVE_TOPIC_REGEX: OnceLock<Regex> = OnceLock::new();

fn sensitive_topic_regex() -> &'static Regex {
    SENSITIVE_TOPIC_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)\b(religion|religious|politics|political|salary|income|death|funeral|weight|pregnan\w*)\b",
        )
        .expect("Invalid sensitive topic regex")
    })
}

/// Result of a sensitivity check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub is_sensitive: bool,
    pub warnings: Vec<String>,
}

/// Flag sensitive topics, and informal expressions when the profile calls for
/// formality.
pub fn check_cultural_sensitivity(text: &str, profile: &CulturalProfile) -> SensitivityReport {
    let mut warnings = Vec::new();

    let mut seen = Vec::new();
    for m in sensitive_topic_regex().find_iter(text) {
        let topic = m.as_str().to_lowercase();
        if !seen.contains(&topic) {
            warnings.push(format!("Mentions a sensitive topic: '{}'", topic));
            seen.push(topic);
        }
    }

    if profile.formality_level.is_formal() {
        let rules = &LanguageRegistry::get().config_for(profile.language).rules;
        if let Some(markers) = &rules.formality {
            let lowered = text.to_lowercase();
            for marker in markers.informal {
                if lowered.contains(marker) {
                    warnings.push(format!(
                        "Informal expression '{}' in a formal context",
                        marker
                    ));
                }
            }
        }
    }

    SensitivityReport {
        is_sensitive: !warnings.is_empty(),
        warnings,
    }
}

/// Communication advice derived from the profile.
pub fn communication_recommendations(profile: &CulturalProfile) -> Vec<String> {
    let mut recommendations = vec![match profile.formality_level {
        FormalityLevel::VeryFormal => "Use honorifics and a formal closing",
        FormalityLevel::Formal => "Use formal address and polite phrasing",
        FormalityLevel::Neutral => "Keep a polite, neutral tone",
        FormalityLevel::Informal => "A casual, friendly tone is appropriate",
    }
    .to_string()];

    if let Some(etiquette) = &profile.business_etiquette {
        recommendations.push(format!("Open with \"{}\"", etiquette.greeting_style));
        recommendations.push(
            match etiquette.communication_style {
                CommunicationStyle::Direct => "State requests and conclusions explicitly",
                CommunicationStyle::Indirect => "Soften requests and avoid blunt refusals",
                CommunicationStyle::Contextual => {
                    "Adjust directness to the relationship and setting"
                }
            }
            .to_string(),
        );
        recommendations.push(
            match etiquette.decision_making {
                DecisionMaking::Individual => "Address the decision maker directly",
                DecisionMaking::Consensus => "Allow time for group consensus before a decision",
                DecisionMaking::Hierarchical => "Route proposals through senior stakeholders",
            }
            .to_string(),
        );
    }

    if profile.writing_direction == WritingDirection::Rtl {
        recommendations.push("Lay out text right-to-left".to_string());
    }

    recommendations
}
