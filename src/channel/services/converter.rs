//! Declarative channel document format.

use crate::channel::domain::ChannelModel;

/// Converts channel models to and from their persisted JSON document.
///
/// Only the declarative parts round-trip. A model read back from a document
/// has no pipeline or adapter attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelJsonConverter;

impl ChannelJsonConverter {
    /// Renders a model as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns the serializer error when the model cannot be rendered.
    pub fn convert_to_json(model: &ChannelModel) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(model)
    }

    /// Parses a JSON document into a declarative channel model.
    ///
    /// # Errors
    ///
    /// Returns the parser error when the document is not a channel document.
    pub fn convert_to_model(document: &str) -> Result<ChannelModel, serde_json::Error> {
        serde_json::from_str(document)
    }
}
