use crate::config::Config;
use crate::culture::FormalityLevel;
use crate::retry::{with_retry_if, RetryConfig};
use crate::translation::{TranslationContext, Translator};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MAX_COMPLETION_TOKENS: u32 = 2000;
const REASONING_MAX_COMPLETION_TOKENS: u32 = 16000;

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

fn register_hint(formality: FormalityLevel) -> &'static str {
    match formality {
        FormalityLevel::VeryFormal => "very formal, using honorifics where the language has them",
        FormalityLevel::Formal => "formal and polite",
        FormalityLevel::Neutral => "neutral",
        FormalityLevel::Informal => "casual and friendly",
    }
}

/// Build the system prompt for translation
fn build_translation_system_prompt(context: &TranslationContext) -> String {
    format!(
        r#"You are a professional translator. Translate the user's message from {} to {} ({}).

## Translation Rules

### DO NOT translate:
- Placeholders in double braces (e.g., {{{{date:2024-01-31}}}}, {{{{number:42}}}})
- @mentions, URLs and links
- Numbers
- Proper names of people, companies, and products

### Formatting:
- Preserve all markdown formatting and line breaks
- Maintain the same structure and layout as the original

### Tone:
- Use a {} register
- If a term has no good translation, keep the original term

Reply with the translation only."#,
        context.source.name(),
        context.target.name(),
        context.target.native_name(),
        register_hint(context.formality)
    )
}

/// Machine translation through the OpenAI chat completions API.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
    retry: RetryConfig,
}

impl OpenAiTranslator {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_url: api_url.into(),
            retry: RetryConfig::translation(),
        }
    }

    /// Build a translator from config, or `None` when no API key is set.
    pub fn from_config(config: &Config) -> Option<Self> {
        config
            .openai_api_key
            .as_ref()
            .map(|key| Self::new(key, &config.openai_model, &config.openai_api_url))
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn build_request(&self, text: &str, context: &TranslationContext) -> TranslationRequest {
        // Reasoning models need higher token limits and don't support temperature
        let is_reasoning = is_reasoning_model(&self.model);

        TranslationRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_translation_system_prompt(context),
                },
                Message {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_completion_tokens: if is_reasoning {
                REASONING_MAX_COMPLETION_TOKENS
            } else {
                MAX_COMPLETION_TOKENS
            },
            temperature: if is_reasoning { None } else { Some(0.3) },
            reasoning_effort: is_reasoning.then(|| "low".to_string()),
        }
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, context: &TranslationContext) -> Result<String> {
        if context.source == context.target {
            return Ok(text.to_string());
        }

        let request = self.build_request(text, context);
        debug!(
            "Translating {} chars {} -> {} with {}",
            text.len(),
            context.source,
            context.target,
            self.model
        );

        let translated = with_retry_if(
            &self.retry,
            &format!("Translation to {}", context.target.name()),
            || async {
                let response = self
                    .client
                    .post(&self.api_url)
                    .header("Authorization", format!("Bearer {}", self.api_key))
                    .header("Content-Type", "application/json")
                    .json(&request)
                    .send()
                    .await
                    .context("Failed to send translation request to OpenAI API")?;

                if !response.status().is_success() {
                    let status = response.status();
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
                    anyhow::bail!("OpenAI API error during translation ({}): {}", status, body);
                }

                let chat_response: ChatResponse = response
                    .json()
                    .await
                    .context("Failed to parse OpenAI translation response")?;

                chat_response
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content.trim().to_string())
                    .context("OpenAI translation response contained no choices")
            },
            is_retryable_error,
        )
        .await?;

        Ok(translated)
    }
}

/// Determine if an error is retryable (5xx errors, 429 rate limit, network errors)
/// Other 4xx client errors should not be retried
fn is_retryable_error(error: &anyhow::Error) -> bool {
    let error_str = error.to_string();

    // Error format: "OpenAI API error during translation (400 Bad Request): ..."
    if error_str.contains("OpenAI API error") {
        let status = error_str
            .split_once('(')
            .and_then(|(_, rest)| rest.split_whitespace().next())
            .map(|code| code.trim_end_matches(|c: char| !c.is_ascii_digit()))
            .and_then(|code| code.parse::<u16>().ok());
        if let Some(status) = status {
            return status == 429 || status >= 500;
        }
    }

    // Network errors, timeouts and other transient failures
    true
}
