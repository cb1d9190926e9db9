//! Multilingual command pipeline: detect the language of free text, extract an
//! actionable intent, derive a cultural profile and shape the response for the
//! user's locale.

pub mod adapt;
pub mod cache;
pub mod config;
pub mod culture;
pub mod detection;
pub mod error;
pub mod executor;
pub mod i18n;
pub mod intent;
pub mod normalize;
pub mod openai;
pub mod pipeline;
pub mod retry;
pub mod translation;

pub use error::PipelineError;
pub use pipeline::{CacheStats, NativeResponse, Pipeline};
