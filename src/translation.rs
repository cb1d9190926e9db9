//! Translation collaborators.
//!
//! The pipeline only depends on the [`Translator`] trait. [`TaggingTranslator`]
//! is the deterministic default used when no machine-translation backend is
//! configured; see [`crate::openai::OpenAiTranslator`] for the real one.

use crate::culture::FormalityLevel;
use crate::i18n::Language;
use anyhow::Result;
use async_trait::async_trait;

/// What a translator needs to know besides the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationContext {
    pub source: Language,
    pub target: Language,
    pub formality: FormalityLevel,
}

/// Translates text between supported languages.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `context.source` into `context.target`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot produce a translation.
    async fn translate(&self, text: &str, context: &TranslationContext) -> Result<String>;
}

/// Placeholder translator that marks text with the target language code.
///
/// `translate("hello", en → ja)` yields `"[ja] hello"`. The tag is always
/// prepended, never merged with one already present, so distinct inputs map to
/// distinct outputs and [`TaggingTranslator::untag`] recovers the input exactly.
/// Translating into the source language returns the text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggingTranslator;

impl TaggingTranslator {
    /// Undo one `translate` into `target`.
    ///
    /// Returns `None` when `text` does not start with the `[code] ` tag for `target`.
    pub fn untag(text: &str, target: Language) -> Option<&str> {
        text.strip_prefix('[')?
            .strip_prefix(target.code())?
            .strip_prefix("] ")
    }
}

#[async_trait]
impl Translator for TaggingTranslator {
    async fn translate(&self, text: &str, context: &TranslationContext) -> Result<String> {
        if context.target == context.source {
            return Ok(text.to_string());
        }
        Ok(format!("[{}] {}", context.target.code(), text))
    }
}
