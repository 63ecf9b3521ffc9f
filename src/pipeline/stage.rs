//! Stage contracts for inbound event processing.
//!
//! Every stage after the deserializer is parameterised by the intermediate
//! representation `T` the deserializer produces, so a pipeline can only be
//! assembled from stages that agree on that representation.

use super::{EventInstance, EventPayload, EventProcessingError, ExtractedEvent, InboundEvent};

/// Declarative shape a detector reports about itself.
///
/// Built-in detectors report the variant matching their configuration;
/// implementations outside this crate fall back to [`DetectorKind::Custom`],
/// which cannot be written to a channel document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DetectorKind {
    /// Always yields the same value.
    Fixed(String),
    /// Reads a top-level JSON field.
    JsonField(String),
    /// Evaluates an RFC 6901 JSON pointer.
    JsonPointer(String),
    /// Evaluates an XPath expression.
    XPath(String),
    /// Custom logic without a declarative form.
    Custom,
}

/// Converts a raw inbound event into the representation `T`.
pub trait InboundEventDeserializer<T>: Send + Sync {
    /// Type tag persisted as the channel's deserializer type.
    fn deserializer_type(&self) -> &str;

    /// Deserializes the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`EventProcessingError::Deserialization`] when the body is not
    /// valid for this representation.
    fn deserialize(&self, event: &InboundEvent) -> Result<T, EventProcessingError>;
}

/// Derives the business event key from the representation.
pub trait InboundEventKeyDetector<T>: Send + Sync {
    /// Detects the event key, returning `None` when the event carries none.
    ///
    /// # Errors
    ///
    /// Returns [`EventProcessingError::Detection`] when evaluation fails.
    fn detect_event_key(&self, event: &T) -> Result<Option<String>, EventProcessingError>;

    /// Reports the declarative shape of this detector.
    fn kind(&self) -> DetectorKind {
        DetectorKind::Custom
    }
}

/// Derives the owning tenant identifier from the representation.
pub trait InboundEventTenantDetector<T>: Send + Sync {
    /// Detects the tenant identifier, returning `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`EventProcessingError::Detection`] when evaluation fails.
    fn detect_tenant_id(&self, event: &T) -> Result<Option<String>, EventProcessingError>;

    /// Reports the declarative shape of this detector.
    fn kind(&self) -> DetectorKind {
        DetectorKind::Custom
    }
}

/// Derives the event payload from the representation.
pub trait InboundEventPayloadExtractor<T>: Send + Sync {
    /// Extracts the payload map.
    ///
    /// # Errors
    ///
    /// Returns [`EventProcessingError::PayloadExtraction`] on failure.
    fn extract_payload(&self, event: &T) -> Result<EventPayload, EventProcessingError>;
}

/// Converts the representation and the detected values into canonical events.
pub trait InboundEventTransformer<T>: Send + Sync {
    /// Produces the canonical events for one inbound message.
    ///
    /// # Errors
    ///
    /// Returns [`EventProcessingError::Transformation`] on failure.
    fn transform(
        &self,
        event: &T,
        extracted: ExtractedEvent,
    ) -> Result<Vec<EventInstance>, EventProcessingError>;
}

/// A realized, immutable processing pipeline.
///
/// The representation type is erased at this boundary. The introspection
/// methods let the model assembler describe the pipeline without knowing its
/// concrete stages; a fully custom pipeline keeps the defaults and is
/// therefore exported without descriptors.
pub trait InboundEventProcessingPipeline: Send + Sync {
    /// Runs one inbound message through every stage.
    ///
    /// # Errors
    ///
    /// Returns the first [`EventProcessingError`] raised by a stage.
    fn run(&self, event: &InboundEvent) -> Result<Vec<EventInstance>, EventProcessingError>;

    /// Type tag of the deserializer, when known.
    fn deserializer_type(&self) -> Option<&str> {
        None
    }

    /// Shape of the key detector, `None` when there is no key detector.
    fn key_detector_kind(&self) -> Option<DetectorKind> {
        None
    }

    /// Shape of the tenant detector, `None` when there is no tenant detector.
    fn tenant_detector_kind(&self) -> Option<DetectorKind> {
        None
    }
}
