//! Command execution collaborator.

use crate::culture::CulturalProfile;
use crate::i18n::Language;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user request resolved to an actionable intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultilingualCommand {
    pub raw_input: String,
    pub detected_language: Language,
    pub normalized_command: String,
    pub intent: String,
    pub entities: BTreeMap<String, String>,
    pub cultural_context: CulturalProfile,
    /// Confidence of the intent tier that matched
    pub confidence: f64,
}

/// Carries out a command and produces a response in the command's language.
#[async_trait]
pub trait Executor: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the command cannot be carried out.
    async fn execute(&self, command: &MultilingualCommand, profile: &CulturalProfile)
        -> Result<String>;
}

/// Returns the raw input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoExecutor;

#[async_trait]
impl Executor for EchoExecutor {
    async fn execute(
        &self,
        command: &MultilingualCommand,
        _profile: &CulturalProfile,
    ) -> Result<String> {
        Ok(command.raw_input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::culture::base_profile;

    #[tokio::test]
    async fn test_echo_returns_raw_input() {
        let profile = base_profile(Language::En).clone();
        let command = MultilingualCommand {
            raw_input: "Create A Project".to_string(),
            detected_language: Language::En,
            normalized_command: "create a project".to_string(),
            intent: "create".to_string(),
            entities: BTreeMap::new(),
            cultural_context: profile.clone(),
            confidence: 0.8,
        };

        let response = EchoExecutor.execute(&command, &profile).await.unwrap();
        assert_eq!(response, "Create A Project");
    }
}
