//! Error types raised while running an inbound event processing pipeline.

use thiserror::Error;

/// Errors returned by pipeline stages at message-consumption time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventProcessingError {
    /// The raw body could not be turned into the intermediate representation.
    #[error("{deserializer_type} deserializer rejected inbound event: {reason}")]
    Deserialization {
        /// Type tag of the deserializer that failed.
        deserializer_type: String,
        /// Description of the failure.
        reason: String,
    },

    /// A key or tenant detector could not evaluate its expression.
    #[error("{stage} detection failed: {reason}")]
    Detection {
        /// Stage name, `key` or `tenant`.
        stage: &'static str,
        /// Description of the failure.
        reason: String,
    },

    /// The payload extractor failed.
    #[error("payload extraction failed: {0}")]
    PayloadExtraction(String),

    /// The transformer failed.
    #[error("event transformation failed: {0}")]
    Transformation(String),
}

impl EventProcessingError {
    /// Creates a deserialization error.
    #[must_use]
    pub fn deserialization(deserializer_type: impl Into<String>, reason: impl ToString) -> Self {
        Self::Deserialization {
            deserializer_type: deserializer_type.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a detection error for the named stage.
    #[must_use]
    pub fn detection(stage: &'static str, reason: impl ToString) -> Self {
        Self::Detection {
            stage,
            reason: reason.to_string(),
        }
    }
}
