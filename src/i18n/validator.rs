//! Translation quality validation module.
//!
//! Checks that elements which must survive translation untouched (formatting
//! tokens consumed by response adaptation, URLs, @mentions, numbers) are still
//! present in the translated text.

use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

// Regex patterns for extraction (cached for performance)
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
static MENTION_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate that a translation preserves important elements from the original.
    ///
    /// Errors:
    /// - empty translation of non-empty text
    /// - `{{kind:value}}` formatting tokens lost or altered
    ///
    /// Warnings:
    /// - @mentions, URLs or numbers differ
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if !original.trim().is_empty() && translated.trim().is_empty() {
            report
                .errors
                .push("Translation is empty but original is not".to_string());
            return report;
        }

        // Formatting tokens must survive verbatim, order may change
        let mut orig_tokens = Self::extract_tokens(original);
        let mut trans_tokens = Self::extract_tokens(translated);
        orig_tokens.sort();
        trans_tokens.sort();
        if orig_tokens != trans_tokens {
            report.errors.push(format!(
                "Formatting token mismatch: original has {:?}, translation has {:?}",
                orig_tokens, trans_tokens
            ));
        }

        let orig_mentions = Self::extract_mentions(original);
        let trans_mentions = Self::extract_mentions(translated);
        if orig_mentions != trans_mentions {
            report.warnings.push(format!(
                "Mention mismatch: original has {:?}, translation has {:?}",
                orig_mentions, trans_mentions
            ));
        }

        let orig_urls = Self::extract_urls(original);
        let trans_urls = Self::extract_urls(translated);
        if orig_urls != trans_urls {
            report.warnings.push(format!(
                "URL mismatch: original has {} URLs, translation has {} URLs",
                orig_urls.len(),
                trans_urls.len()
            ));
        }

        let mut orig_numbers = Self::extract_numbers(&Self::strip_tokens(original));
        let mut trans_numbers = Self::extract_numbers(&Self::strip_tokens(translated));
        orig_numbers.sort();
        trans_numbers.sort();
        if orig_numbers != trans_numbers {
            report.warnings.push(format!(
                "Number mismatch: original has {:?}, translation has {:?}",
                orig_numbers, trans_numbers
            ));
        }

        report
    }

    fn token_regex() -> &'static Regex {
        TOKEN_REGEX.get_or_init(|| Regex::new(r"\{\{(?:date|number|currency):[^}]*\}\}").unwrap())
    }

    /// Extract all `{{kind:value}}` formatting tokens from text
    fn extract_tokens(text: &str) -> Vec<String> {
        Self::token_regex()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn strip_tokens(text: &str) -> String {
        Self::token_regex().replace_all(text, " ").into_owned()
    }

    /// Extract all @mentions from text
    fn extract_mentions(text: &str) -> Vec<String> {
        let regex = MENTION_REGEX.get_or_init(|| Regex::new(r"@([a-zA-Z0-9_]+)").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(0).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract all ASCII numbers from text
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex =
            NUMBER_REGEX.get_or_init(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)*").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
