//! Internationalization (i18n) module: the locale rule tables.
//!
//! All per-language data (detection markers, formality markers, intent
//! patterns, business-topic lexicon, localized greetings) is contained here and
//! exposed read-only through the registry.
//!
//! # Architecture
//!
//! - `language`: closed `Language` enum of supported locales
//! - `registry`: single source of truth for language metadata and tables
//! - `rules`: per-language rule sets (markers, phrases, intents, topics)
//! - `strings`: localized greetings and closings
//! - `validator`: translation preservation checks
//! - `metrics`: cache hit/miss counters
//!
//! # Example
//!
//! ```rust,ignore
//! use multilingual_pipeline::i18n::{Language, LanguageRegistry};
//!
//! let japanese = Language::from_code("ja")?;
//! let rules = &japanese.config().rules;
//! let canonical = LanguageRegistry::get().canonical();
//! ```

mod language;
mod metrics;
mod registry;
mod rules;
mod strings;
mod validator;

pub use language::Language;
pub use metrics::{CacheMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use rules::{BusinessTopic, FormalityMarkers, IntentPattern, LanguageRuleSet, TopicPattern};
pub use strings::{LanguageStrings, TimeOfDayGreetings};
pub use validator::{TranslationValidator, ValidationReport};
