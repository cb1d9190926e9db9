use crate::i18n::Language;
use anyhow::{bail, Context, Result};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct Config {
    // Pipeline
    pub primary_language: Language,
    pub low_confidence_threshold: f64,
    pub greet_by_local_time: bool,

    // Caches
    pub cache_max_entries: Option<usize>,

    // OpenAI (translator is only enabled when a key is set)
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_language: Language::canonical(),
            low_confidence_threshold: 0.7,
            greet_by_local_time: false,
            cache_max_entries: None,
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let primary_language = match std::env::var("PRIMARY_LANGUAGE") {
            Ok(code) => Language::from_code(&code).context("Invalid PRIMARY_LANGUAGE")?,
            Err(_) => defaults.primary_language,
        };

        let low_confidence_threshold = match std::env::var("LOW_CONFIDENCE_THRESHOLD") {
            Ok(value) => {
                let threshold: f64 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid LOW_CONFIDENCE_THRESHOLD: '{}'", value))?;
                if !(0.0..=1.0).contains(&threshold) {
                    bail!(
                        "LOW_CONFIDENCE_THRESHOLD must be between 0 and 1, got {}",
                        threshold
                    );
                }
                threshold
            }
            Err(_) => defaults.low_confidence_threshold,
        };

        let cache_max_entries = match std::env::var("CACHE_MAX_ENTRIES") {
            Ok(value) => Some(
                value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid CACHE_MAX_ENTRIES: '{}'", value))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            primary_language,
            low_confidence_threshold,
            greet_by_local_time: std::env::var("GREET_BY_LOCAL_TIME")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.greet_by_local_time),
            cache_max_entries,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_api_url: std::env::var("OPENAI_API_URL").unwrap_or(defaults.openai_api_url),
        })
    }
}
