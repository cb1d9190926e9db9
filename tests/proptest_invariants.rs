//! Property-based invariant tests for the pipeline.
//!
//! 1. Detection confidence is in [0, 1] and alternatives are well formed
//! 2. Detection and intent extraction are deterministic
//! 3. Normalization is idempotent for every language
//! 4. Intent confidence is always one of the two tier values
//! 5. Plural rules depend only on the last two digits
//! 6. Grouped number formatting preserves the digits
//! 7. Analysis always yields usable formats and never mutates the base
//! 8. The fan-out returns exactly the requested languages

use multilingual_pipeline::culture::{
    self, base_profile, format_number, AnalysisOptions, PluralCategory, PluralRule,
};
use multilingual_pipeline::detection::score_text;
use multilingual_pipeline::i18n::Language;
use multilingual_pipeline::intent::{extract_intent, FALLBACK_CONFIDENCE, PATTERN_CONFIDENCE};
use multilingual_pipeline::normalize::normalize;
use multilingual_pipeline::Pipeline;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ==================== Strategies ====================

/// Mixed-script text drawn from the scripts the detector knows about.
fn mixed_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?éñüçа-яА-Яぁ-んァ-ン一-龥가-힣ء-يअ-ह\u{3000}\u{FF01}-\u{FF5E}]{0,48}"
}

fn any_language() -> impl Strategy<Value = Language> {
    (0..Language::ALL.len()).prop_map(|i| Language::ALL[i])
}

// ==================== Detection Properties ====================

proptest! {
    #[test]
    fn detection_confidence_in_unit_interval(text in mixed_text()) {
        let result = score_text(&text);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        for alt in &result.alternatives {
            prop_assert!((0.0..=1.0).contains(&alt.confidence));
        }
    }

    #[test]
    fn detection_alternatives_well_formed(text in mixed_text()) {
        let result = score_text(&text);
        prop_assert!(result.alternatives.len() <= 3);
        for alt in &result.alternatives {
            prop_assert_ne!(alt.language, result.language);
            prop_assert!(alt.confidence > 0.0);
            prop_assert!(alt.confidence <= result.confidence);
        }
        for pair in result.alternatives.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn detection_is_deterministic(text in mixed_text()) {
        prop_assert_eq!(score_text(&text), score_text(&text));
    }
}

// ==================== Normalization Properties ====================

proptest! {
    #[test]
    fn normalization_is_idempotent(text in mixed_text(), language in any_language()) {
        let once = normalize(&text, language);
        prop_assert_eq!(normalize(&once, language), once);
    }

    #[test]
    fn normalization_trims(text in mixed_text(), language in any_language()) {
        let out = normalize(&text, language);
        prop_assert_eq!(out.trim(), out.as_str());
    }
}

// ==================== Intent Properties ====================

proptest! {
    #[test]
    fn intent_confidence_is_a_tier_value(text in mixed_text(), language in any_language()) {
        let normalized = normalize(&text, language);
        let result = extract_intent(&normalized, language);
        prop_assert!(
            result.confidence == PATTERN_CONFIDENCE || result.confidence == FALLBACK_CONFIDENCE
        );
        prop_assert!(!result.intent.is_empty());
    }

    #[test]
    fn intent_extraction_is_deterministic(text in mixed_text(), language in any_language()) {
        prop_assert_eq!(extract_intent(&text, language), extract_intent(&text, language));
    }
}

// ==================== Plural Properties ====================

proptest! {
    #[test]
    fn east_slavic_is_periodic(count in 0u64..1_000_000) {
        let rule = PluralRule::EastSlavic;
        prop_assert_eq!(rule.category(count), rule.category(count + 100));
    }

    #[test]
    fn arabic_is_periodic_above_two(count in 3u64..1_000_000) {
        let rule = PluralRule::Arabic;
        prop_assert_eq!(rule.category(count), rule.category(count + 100));
    }

    #[test]
    fn cjk_rule_always_other(count in any::<u64>()) {
        prop_assert_eq!(PluralRule::AlwaysOther.category(count), PluralCategory::Other);
    }
}

// ==================== Formatting Properties ====================

proptest! {
    #[test]
    fn grouping_preserves_digits(n in 0u32..u32::MAX) {
        let formatted = format_number(n as f64, base_profile(Language::En));
        prop_assert_eq!(formatted.replace(',', ""), n.to_string());
    }
}

// ==================== Analysis Properties ====================

proptest! {
    #[test]
    fn analysis_yields_usable_profile(text in mixed_text(), language in any_language()) {
        let before = base_profile(language).clone();
        let profile = culture::analyze(language, &text, &AnalysisOptions::default());

        prop_assert_eq!(profile.language, language);
        prop_assert!(!profile.date_format.is_empty());
        prop_assert!(!profile.number_format.is_empty());
        prop_assert_eq!(base_profile(language), &before);
    }
}

// ==================== Fan-out Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fan_out_returns_requested_languages(
        languages in proptest::collection::vec(any_language(), 0..6)
    ) {
        let pipeline = Pipeline::default();
        let responses = tokio_test::block_on(
            pipeline.generate_multilingual_response("hello", &languages),
        )
        .expect("tagging translator never fails");

        let requested: BTreeSet<Language> = languages.iter().copied().collect();
        let returned: BTreeSet<Language> = responses.keys().copied().collect();
        prop_assert_eq!(returned, requested);
    }
}
