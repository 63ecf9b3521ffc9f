//! Error types for channel definition construction.

use thiserror::Error;

/// Construction-order violations detected while building a channel.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ChannelConfigurationError {
    /// `deploy` was called before a resource name was set.
    #[error("a resource name is mandatory")]
    MissingResourceName,

    /// A pipeline was built without choosing a deserializer.
    #[error("an event deserializer is mandatory for the processing pipeline")]
    MissingDeserializer,
}

/// Error returned while parsing a transport kind from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown channel transport kind: {0}")]
pub struct ParseTransportKindError(pub String);
