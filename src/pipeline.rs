//! The orchestrator.
//!
//! A request runs strictly in sequence:
//!
//! ```text
//! detect -> analyze culture -> normalize + extract intent -> execute -> adapt
//! ```
//!
//! The only concurrent step is the multilingual fan-out, which translates one
//! base response into every requested language at once and fails fast on the
//! first translator error.

use crate::adapt::ResponseAdapter;
use crate::cache::{CacheConfig, DetectionCache, TranslationCache};
use crate::config::Config;
use crate::culture::{self, AnalysisOptions, CulturalProfile, FormalityLevel};
use crate::detection::{DetectionResult, LanguageDetector};
use crate::error::PipelineError;
use crate::executor::{EchoExecutor, Executor, MultilingualCommand};
use crate::i18n::{Language, MetricsReport, TranslationValidator};
use crate::intent::extract_intent;
use crate::normalize::normalize;
use crate::openai::OpenAiTranslator;
use crate::translation::{TaggingTranslator, TranslationContext, Translator};
use chrono::Local;
use futures::future::try_join_all;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of processing one request in the user's own language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NativeResponse {
    pub response: String,
    pub language: Language,
    pub cultural_context: CulturalProfile,
    /// Detection confidence, 1.0 when the language was given explicitly
    pub confidence: f64,
    pub command: MultilingualCommand,
}

/// Cache sizes and counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub translation_entries: usize,
    pub detection_entries: usize,
    pub total_size: usize,
    pub detection: MetricsReport,
    pub translation: MetricsReport,
    /// Translations that failed a preservation check
    pub flagged_translations: usize,
}

pub struct Pipeline {
    config: Config,
    detector: LanguageDetector,
    translation_cache: Arc<TranslationCache>,
    translator: Arc<dyn Translator>,
    executor: Arc<dyn Executor>,
    adapter: ResponseAdapter,
    flagged_translations: AtomicUsize,
}

impl Pipeline {
    /// Build a pipeline with fresh caches.
    ///
    /// Uses the OpenAI translator when an API key is configured, otherwise the
    /// tagging translator.
    pub fn new(config: Config) -> Self {
        let cache_config = CacheConfig {
            max_entries: config.cache_max_entries,
        };

        let translator: Arc<dyn Translator> = match OpenAiTranslator::from_config(&config) {
            Some(openai) => {
                info!("Using OpenAI translator ({})", config.openai_model);
                Arc::new(openai)
            }
            None => Arc::new(TaggingTranslator),
        };

        Self {
            detector: LanguageDetector::new(Arc::new(DetectionCache::new(
                "detection",
                cache_config,
            ))),
            translation_cache: Arc::new(TranslationCache::new("translation", cache_config)),
            translator,
            executor: Arc::new(EchoExecutor),
            adapter: ResponseAdapter::new(),
            flagged_translations: AtomicUsize::new(0),
            config,
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_adapter(mut self, adapter: ResponseAdapter) -> Self {
        self.adapter = adapter;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn detect_language(&self, text: &str) -> DetectionResult {
        self.detector.detect(text)
    }

    pub fn analyze_culture(&self, language: Language, text: &str) -> CulturalProfile {
        culture::analyze(language, text, &self.analysis_options())
    }

    /// Process `input` end to end and answer in the user's language.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Execution`] when the executor fails. Detection
    /// and analysis never fail.
    pub async fn process_in_native_language(
        &self,
        input: &str,
        explicit_language: Option<Language>,
    ) -> Result<NativeResponse, PipelineError> {
        let (language, confidence) = match explicit_language {
            Some(language) => (language, 1.0),
            None => {
                let detection = self.detector.detect(input);
                if detection.confidence < self.config.low_confidence_threshold {
                    let alternatives: Vec<String> = detection
                        .alternatives
                        .iter()
                        .map(|alt| format!("{} ({:.2})", alt.language, alt.confidence))
                        .collect();
                    warn!(
                        "Low confidence language detection: {} ({:.2}), alternatives: [{}]",
                        detection.language,
                        detection.confidence,
                        alternatives.join(", ")
                    );
                }
                (detection.language, detection.confidence)
            }
        };

        let profile = self.analyze_culture(language, input);
        let command = build_command(input, language, &profile);
        debug!(
            "Command: intent={} entities={:?} confidence={}",
            command.intent, command.entities, command.confidence
        );

        let raw_response = self
            .executor
            .execute(&command, &profile)
            .await
            .map_err(PipelineError::Execution)?;

        let response = self.adapter.adapt(&raw_response, &profile);

        info!(
            input = %input,
            response = %response,
            language = %language,
            formality = ?profile.formality_level,
            "Processed request"
        );

        Ok(NativeResponse {
            response,
            language,
            cultural_context: profile,
            confidence,
            command,
        })
    }

    /// Produce one response per requested language.
    ///
    /// The base response is generated once in the primary language and left
    /// unadapted. Every other language is translated from it concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Execution`] when the base response cannot be
    /// produced, or the first [`PipelineError::Translation`] raised by the
    /// fan-out. No partial map is returned.
    pub async fn generate_multilingual_response(
        &self,
        prompt: &str,
        languages: &[Language],
    ) -> Result<BTreeMap<Language, String>, PipelineError> {
        let primary = self.config.primary_language;
        let profile = self.analyze_culture(primary, prompt);
        let command = build_command(prompt, primary, &profile);

        let base = self
            .executor
            .execute(&command, &profile)
            .await
            .map_err(PipelineError::Execution)?;

        let requested: BTreeSet<Language> = languages.iter().copied().collect();
        let translations = try_join_all(
            requested
                .iter()
                .filter(|&&language| language != primary)
                .map(|&language| {
                    let base = base.as_str();
                    let formality = profile.formality_level;
                    async move {
                        self.translate_cached(base, primary, language, formality)
                            .await
                            .map(|translated| (language, translated))
                    }
                }),
        )
        .await?;

        let mut responses: BTreeMap<Language, String> = translations.into_iter().collect();
        if requested.contains(&primary) {
            responses.insert(primary, base);
        }

        info!(
            "Generated multilingual response for {} language(s)",
            responses.len()
        );
        Ok(responses)
    }

    async fn translate_cached(
        &self,
        text: &str,
        source: Language,
        target: Language,
        formality: FormalityLevel,
    ) -> Result<String, PipelineError> {
        let key = (text.to_string(), target);
        if let Some(cached) = self.translation_cache.get(&key) {
            debug!("Translation cache hit for {}", target);
            return Ok(cached);
        }

        let context = TranslationContext {
            source,
            target,
            formality,
        };
        let translated = self
            .translator
            .translate(text, &context)
            .await
            .map_err(|source| PipelineError::Translation {
                language: target,
                source,
            })?;

        let validation = TranslationValidator::validate(text, &translated);
        if !validation.is_clean() {
            self.flagged_translations.fetch_add(1, Ordering::Relaxed);
            warn!(
                "Translation to {} has issues: errors={:?} warnings={:?}",
                target, validation.errors, validation.warnings
            );
        }

        self.translation_cache.insert(key, translated.clone());
        Ok(translated)
    }

    /// Empty both caches. Hit/miss counters keep accumulating.
    pub fn clear_cache(&self) {
        self.detector.cache().clear();
        self.translation_cache.clear();
        info!("Cleared detection and translation caches");
    }

    pub fn cache_stats(&self) -> CacheStats {
        let detection_entries = self.detector.cache().len();
        let translation_entries = self.translation_cache.len();
        CacheStats {
            translation_entries,
            detection_entries,
            total_size: translation_entries + detection_entries,
            detection: self.detector.cache().report(),
            translation: self.translation_cache.report(),
            flagged_translations: self.flagged_translations.load(Ordering::Relaxed),
        }
    }

    fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            time_of_day: self
                .config
                .greet_by_local_time
                .then(|| Local::now().time()),
            ..AnalysisOptions::default()
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn build_command(input: &str, language: Language, profile: &CulturalProfile) -> MultilingualCommand {
    let normalized = normalize(input, language);
    let intent = extract_intent(&normalized, language);
    MultilingualCommand {
        raw_input: input.to_string(),
        detected_language: language,
        normalized_command: normalized,
        intent: intent.intent,
        entities: intent.entities,
        cultural_context: profile.clone(),
        confidence: intent.confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{FALLBACK_CONFIDENCE, PATTERN_CONFIDENCE};
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct FailingExecutor;

    #[async_trait]
    impl Executor for FailingExecutor {
        async fn execute(
            &self,
            _command: &MultilingualCommand,
            _profile: &CulturalProfile,
        ) -> anyhow::Result<String> {
            Err(anyhow!("executor offline"))
        }
    }

    // ==================== Native Processing Tests ====================

    #[tokio::test]
    async fn test_process_detects_and_extracts() {
        let pipeline = Pipeline::default();
        let result = pipeline
            .process_in_native_language("create a new project", None)
            .await
            .unwrap();

        assert_eq!(result.language, Language::En);
        assert_eq!(result.command.intent, "create");
        assert_eq!(result.command.confidence, PATTERN_CONFIDENCE);
        assert_eq!(result.command.entities["target"], "project");
        assert_eq!(result.command.normalized_command, "create a new project");
    }

    #[tokio::test]
    async fn test_explicit_language_has_full_confidence() {
        let pipeline = Pipeline::default();
        let result = pipeline
            .process_in_native_language("12345", Some(Language::De))
            .await
            .unwrap();

        assert_eq!(result.language, Language::De);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.command.intent, "general");
        assert_eq!(result.command.confidence, FALLBACK_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_low_confidence_does_not_block() {
        let pipeline = Pipeline::default();
        let result = pipeline.process_in_native_language("", None).await.unwrap();
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.language, Language::En);
    }

    #[tokio::test]
    async fn test_response_is_adapted_to_formality() {
        let pipeline = Pipeline::default();
        let result = pipeline
            .process_in_native_language("誠にありがとうございます", None)
            .await
            .unwrap();

        assert_eq!(result.language, Language::Ja);
        assert_eq!(
            result.cultural_context.formality_level,
            FormalityLevel::VeryFormal
        );
        assert!(result.response.starts_with("こんにちは"));
        assert!(result.response.contains("誠にありがとうございます"));
    }

    #[tokio::test]
    async fn test_executor_failure_propagates() {
        let pipeline = Pipeline::default().with_executor(Arc::new(FailingExecutor));
        let err = pipeline
            .process_in_native_language("hello", None)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Execution(_)));
    }

    // ==================== Fan-out Tests ====================

    #[tokio::test]
    async fn test_fan_out_only_requested_languages() {
        let pipeline = Pipeline::default();
        let responses = pipeline
            .generate_multilingual_response("hello", &[Language::Fr, Language::Fr])
            .await
            .unwrap();

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[&Language::Fr], "[fr] hello");
    }

    #[tokio::test]
    async fn test_fan_out_uses_translation_cache() {
        let pipeline = Pipeline::default();
        let langs = [Language::En, Language::Es, Language::Ko];

        let first = pipeline
            .generate_multilingual_response("hello", &langs)
            .await
            .unwrap();
        let second = pipeline
            .generate_multilingual_response("hello", &langs)
            .await
            .unwrap();

        assert_eq!(first, second);
        let stats = pipeline.cache_stats();
        assert_eq!(stats.translation_entries, 2);
        assert_eq!(stats.translation.misses, 2);
        assert_eq!(stats.translation.hits, 2);
    }

    #[tokio::test]
    async fn test_fan_out_executor_failure() {
        let pipeline = Pipeline::default().with_executor(Arc::new(FailingExecutor));
        let err = pipeline
            .generate_multilingual_response("hello", &[Language::Ru])
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Execution(_)));
    }

    // ==================== Cache Tests ====================

    #[test]
    fn test_cache_stats_and_clear() {
        let pipeline = Pipeline::default();
        pipeline.detect_language("hello");
        pipeline.detect_language("bonjour");

        let stats = pipeline.cache_stats();
        assert_eq!(stats.detection_entries, 2);
        assert_eq!(stats.total_size, 2);

        pipeline.clear_cache();
        let stats = pipeline.cache_stats();
        assert_eq!(stats.total_size, 0);
        assert_eq!(stats.detection.misses, 2);
    }

    #[test]
    fn test_bounded_caches_from_config() {
        let config = Config {
            cache_max_entries: Some(1),
            ..Config::default()
        };
        let pipeline = Pipeline::new(config);
        pipeline.detect_language("hello");
        pipeline.detect_language("bonjour");

        let stats = pipeline.cache_stats();
        assert_eq!(stats.detection_entries, 1);
        assert_eq!(stats.detection.evictions, 1);
    }
}
