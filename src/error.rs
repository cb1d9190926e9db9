use crate::i18n::Language;
use thiserror::Error;

/// Errors surfaced by the pipeline orchestrator.
///
/// Detection, normalization and analysis never fail; only the pluggable
/// collaborators can.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("translation to {language} failed")]
    Translation {
        language: Language,
        #[source]
        source: anyhow::Error,
    },

    #[error("command execution failed")]
    Execution(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_translation_error_keeps_source() {
        let err = PipelineError::Translation {
            language: Language::Ru,
            source: anyhow::anyhow!("upstream 503"),
        };
        assert_eq!(err.to_string(), "translation to ru failed");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("upstream 503"));
    }

    #[test]
    fn test_execution_error_message() {
        let err = PipelineError::Execution(anyhow::anyhow!("no handler"));
        assert_eq!(err.to_string(), "command execution failed");
    }
}
