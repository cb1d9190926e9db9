//! Language detection.
//!
//! Every supported language is scored against the input:
//!
//! ```text
//! score = lexical marker matches + 10 * common phrase hits
//! ```
//!
//! Confidence is the winner's share of the total score. The writing script is
//! classified independently from the characters present. Results are memoized
//! per exact input string in a [`DetectionCache`].

use crate::cache::{CacheConfig, DetectionCache};
use crate::i18n::{Language, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Weight of one common-phrase hit relative to one lexical marker match.
const PHRASE_WEIGHT: usize = 10;

/// Maximum number of alternatives reported alongside the winner.
const MAX_ALTERNATIVES: usize = 3;

/// Writing-system family, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Cjk,
    Arabic,
    Devanagari,
}

/// A candidate language and its share of the total score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageScore {
    pub language: Language,
    pub confidence: f64,
}

/// Result of detecting the language of a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub language: Language,
    /// Winner score / total score, 0 when no language scored at all
    pub confidence: f64,
    /// Up to three runner-up languages with a non-zero score, best first
    pub alternatives: Vec<LanguageScore>,
    pub script: Script,
}

/// Scores text against every language's rule table, with memoization.
pub struct LanguageDetector {
    cache: Arc<DetectionCache>,
}

impl LanguageDetector {
    pub fn new(cache: Arc<DetectionCache>) -> Self {
        Self { cache }
    }

    /// Detect the language of `text`.
    ///
    /// Never fails: empty or unrecognizable input yields confidence 0 with the
    /// first enumerated language as winner. Callers must check `confidence`.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let key = text.to_string();
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let result = score_text(text);
        debug!(
            "Detected {} (confidence {:.2}, script {:?})",
            result.language, result.confidence, result.script
        );
        self.cache.insert(key, result.clone());
        result
    }

    pub fn cache(&self) -> &Arc<DetectionCache> {
        &self.cache
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Arc::new(DetectionCache::new(
            "detection",
            CacheConfig::unbounded(),
        )))
    }
}

/// Score `text` without touching any cache.
pub fn score_text(text: &str) -> DetectionResult {
    let registry = LanguageRegistry::get();
    let lowered = text.to_lowercase();

    let mut scores: Vec<(Language, usize)> = Language::ALL
        .iter()
        .map(|&language| {
            let rules = &registry.config_for(language).rules;
            let marker_hits: usize = rules
                .lexical_markers
                .iter()
                .map(|marker| marker.find_iter(text).count())
                .sum();
            let phrase_hits = rules
                .common_phrases
                .iter()
                .filter(|phrase| lowered.contains(*phrase))
                .count();
            (language, marker_hits + PHRASE_WEIGHT * phrase_hits)
        })
        .collect();

    // Stable sort: ties keep enumeration order
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = scores.iter().map(|(_, score)| score).sum();
    let ratio = |score: usize| {
        if total == 0 {
            0.0
        } else {
            score as f64 / total as f64
        }
    };

    let (language, winner_score) = scores[0];
    let alternatives = scores[1..]
        .iter()
        .filter(|(_, score)| *score > 0)
        .take(MAX_ALTERNATIVES)
        .map(|&(language, score)| LanguageScore {
            language,
            confidence: ratio(score),
        })
        .collect();

    DetectionResult {
        language,
        confidence: ratio(winner_score),
        alternatives,
        script: classify_script(text),
    }
}

/// Classify the writing script by first-match priority:
/// Cyrillic, CJK, Arabic, Devanagari, then Latin as default.
pub fn classify_script(text: &str) -> Script {
    let has = |pred: fn(char) -> bool| text.chars().any(pred);

    if has(is_cyrillic) {
        Script::Cyrillic
    } else if has(is_cjk) {
        Script::Cjk
    } else if has(is_arabic) {
        Script::Arabic
    } else if has(is_devanagari) {
        Script::Devanagari
    } else {
        Script::Latin
    }
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}')
}

fn is_cjk(c: char) -> bool {
    matches!(
        c,
        // CJK Unified Ideographs (+ Extension A)
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}'
        // Hiragana, Katakana
        | '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}'
        // Hangul syllables and jamo
        | '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}'
    )
}

fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}')
}

fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}')
}
