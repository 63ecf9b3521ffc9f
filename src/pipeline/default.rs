//! Stage-composed processing pipeline.

use super::{
    DefaultInboundEventTransformer, DetectorKind, EventInstance, EventPayload, EventProcessingError,
    ExtractedEvent, InboundEvent, InboundEventDeserializer, InboundEventKeyDetector,
    InboundEventPayloadExtractor, InboundEventProcessingPipeline, InboundEventTenantDetector,
    InboundEventTransformer,
};
use std::fmt;
use std::sync::Arc;

/// Pipeline composed of one stage per slot, all agreeing on representation `T`.
///
/// Stages are shared through `Arc` and never mutated after construction, so a
/// single pipeline may be run from many consumer threads at once.
pub struct DefaultInboundEventProcessingPipeline<T> {
    deserializer: Arc<dyn InboundEventDeserializer<T>>,
    key_detector: Option<Arc<dyn InboundEventKeyDetector<T>>>,
    tenant_detector: Option<Arc<dyn InboundEventTenantDetector<T>>>,
    payload_extractor: Option<Arc<dyn InboundEventPayloadExtractor<T>>>,
    transformer: Arc<dyn InboundEventTransformer<T>>,
}

impl<T: 'static> DefaultInboundEventProcessingPipeline<T> {
    /// Creates a pipeline with only a deserializer and the default transformer.
    #[must_use]
    pub fn new(deserializer: Arc<dyn InboundEventDeserializer<T>>) -> Self {
        Self {
            deserializer,
            key_detector: None,
            tenant_detector: None,
            payload_extractor: None,
            transformer: Arc::new(DefaultInboundEventTransformer),
        }
    }

    /// Sets the key detector.
    #[must_use]
    pub fn with_key_detector(mut self, detector: Arc<dyn InboundEventKeyDetector<T>>) -> Self {
        self.key_detector = Some(detector);
        self
    }

    /// Sets the tenant detector.
    #[must_use]
    pub fn with_tenant_detector(
        mut self,
        detector: Arc<dyn InboundEventTenantDetector<T>>,
    ) -> Self {
        self.tenant_detector = Some(detector);
        self
    }

    /// Sets the payload extractor.
    #[must_use]
    pub fn with_payload_extractor(
        mut self,
        extractor: Arc<dyn InboundEventPayloadExtractor<T>>,
    ) -> Self {
        self.payload_extractor = Some(extractor);
        self
    }

    /// Replaces the transformer.
    #[must_use]
    pub fn with_transformer(mut self, transformer: Arc<dyn InboundEventTransformer<T>>) -> Self {
        self.transformer = transformer;
        self
    }
}

impl<T> fmt::Debug for DefaultInboundEventProcessingPipeline<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DefaultInboundEventProcessingPipeline")
            .field("deserializer_type", &self.deserializer.deserializer_type())
            .field(
                "key_detector",
                &self.key_detector.as_ref().map(|detector| detector.kind()),
            )
            .field(
                "tenant_detector",
                &self.tenant_detector.as_ref().map(|detector| detector.kind()),
            )
            .field("has_payload_extractor", &self.payload_extractor.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> InboundEventProcessingPipeline for DefaultInboundEventProcessingPipeline<T> {
    fn run(&self, event: &InboundEvent) -> Result<Vec<EventInstance>, EventProcessingError> {
        let representation = self.deserializer.deserialize(event)?;

        let event_key = match &self.key_detector {
            Some(detector) => detector.detect_event_key(&representation)?,
            None => None,
        };
        let tenant_id = match &self.tenant_detector {
            Some(detector) => detector.detect_tenant_id(&representation)?,
            None => None,
        };
        let payload = match &self.payload_extractor {
            Some(extractor) => extractor.extract_payload(&representation)?,
            None => EventPayload::new(),
        };

        self.transformer.transform(
            &representation,
            ExtractedEvent {
                event_key,
                tenant_id,
                payload,
                headers: event.headers().clone(),
            },
        )
    }

    fn deserializer_type(&self) -> Option<&str> {
        Some(self.deserializer.deserializer_type())
    }

    fn key_detector_kind(&self) -> Option<DetectorKind> {
        self.key_detector.as_ref().map(|detector| detector.kind())
    }

    fn tenant_detector_kind(&self) -> Option<DetectorKind> {
        self.tenant_detector.as_ref().map(|detector| detector.kind())
    }
}
