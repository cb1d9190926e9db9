//! Cultural context: per-language profiles, request analysis, locale
//! formatting, pluralization and etiquette advice.
//!
//! # Example
//!
//! ```rust,ignore
//! use multilingual_pipeline::culture::{self, AnalysisOptions};
//! use multilingual_pipeline::i18n::Language;
//!
//! let profile = culture::analyze(Language::Ja, "誠にありがとうございます", &AnalysisOptions::default());
//! let price = culture::format_currency(1200.0, &profile);
//! ```

mod analyzer;
mod format;
mod plural;
mod profile;
mod sensitivity;

pub use analyzer::{analyze, detect_business_topic, AnalysisOptions};
pub use format::{apply_pluralization, format_currency, format_date, format_number};
pub use plural::{PluralCategory, PluralRule};
pub use profile::{
    base_profile, BusinessEtiquette, CommunicationStyle, CulturalProfile, DecisionMaking,
    FormalityLevel, WritingDirection,
};
pub use sensitivity::{check_cultural_sensitivity, communication_recommendations, SensitivityReport};
