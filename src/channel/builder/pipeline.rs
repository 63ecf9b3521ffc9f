//! Staged pipeline builder.
//!
//! The builder walks deserializer, key detector, tenant detector, payload
//! extractor and transformer in that order. Choosing a deserializer fixes the
//! representation `T`, and every later view is typed by it: JSON-only and
//! XML-only choices are inherent methods on the `JsonValue` and
//! `XmlDocument` instantiations, and custom stages must implement the stage
//! trait for the same `T`.

use super::InboundChannelDefinitionBuilder;
use crate::channel::{
    domain::{ChannelConfigurationError, EventDeployment},
    services::ChannelDeploymentResult,
};
use crate::pipeline::{
    DefaultInboundEventProcessingPipeline, FixedKeyDetector, FixedTenantDetector,
    InboundEventDeserializer, InboundEventKeyDetector, InboundEventPayloadExtractor,
    InboundEventProcessingPipeline, InboundEventTenantDetector, InboundEventTransformer,
    JsonFieldKeyDetector, JsonFieldsToMapPayloadExtractor, JsonPointerKeyDetector,
    JsonPointerTenantDetector, JsonValue, StringToJsonDeserializer,
    StringToXmlDocumentDeserializer, XPathKeyDetector, XPathTenantDetector, XmlDocument,
    XmlElementsToMapPayloadExtractor,
};
use std::fmt;
use std::sync::Arc;

/// Stage choices accumulated for representation `T`.
struct PipelineSlots<T> {
    deserializer: Arc<dyn InboundEventDeserializer<T>>,
    key_detector: Option<Arc<dyn InboundEventKeyDetector<T>>>,
    tenant_detector: Option<Arc<dyn InboundEventTenantDetector<T>>>,
    payload_extractor: Option<Arc<dyn InboundEventPayloadExtractor<T>>>,
}

impl<T: 'static> PipelineSlots<T> {
    fn new(deserializer: Arc<dyn InboundEventDeserializer<T>>) -> Self {
        Self {
            deserializer,
            key_detector: None,
            tenant_detector: None,
            payload_extractor: None,
        }
    }

    /// Builds the pipeline, falling back to the default transformer.
    fn into_pipeline(
        self,
        transformer: Option<Arc<dyn InboundEventTransformer<T>>>,
    ) -> Arc<dyn InboundEventProcessingPipeline> {
        let mut pipeline = DefaultInboundEventProcessingPipeline::new(self.deserializer);
        if let Some(detector) = self.key_detector {
            pipeline = pipeline.with_key_detector(detector);
        }
        if let Some(detector) = self.tenant_detector {
            pipeline = pipeline.with_tenant_detector(detector);
        }
        if let Some(extractor) = self.payload_extractor {
            pipeline = pipeline.with_payload_extractor(extractor);
        }
        if let Some(transformer) = transformer {
            pipeline = pipeline.with_transformer(transformer);
        }
        Arc::new(pipeline)
    }
}

impl<T> fmt::Debug for PipelineSlots<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PipelineSlots")
            .field("deserializer_type", &self.deserializer.deserializer_type())
            .field("has_key_detector", &self.key_detector.is_some())
            .field("has_tenant_detector", &self.tenant_detector.is_some())
            .field("has_payload_extractor", &self.payload_extractor.is_some())
            .finish()
    }
}

/// First pipeline stage: choose how raw messages are deserialized, or supply
/// a complete custom pipeline.
#[derive(Debug)]
pub struct InboundEventProcessingPipelineBuilder {
    channel: InboundChannelDefinitionBuilder,
}

impl InboundEventProcessingPipelineBuilder {
    pub(super) const fn new(channel: InboundChannelDefinitionBuilder) -> Self {
        Self { channel }
    }

    /// Deserializes message bodies as JSON.
    #[must_use]
    pub fn json_deserializer(self) -> InboundEventKeyDetectorBuilder<JsonValue> {
        self.deserializer::<JsonValue>(Arc::new(StringToJsonDeserializer))
    }

    /// Deserializes message bodies as XML.
    #[must_use]
    pub fn xml_deserializer(self) -> InboundEventKeyDetectorBuilder<XmlDocument> {
        self.deserializer::<XmlDocument>(Arc::new(StringToXmlDocumentDeserializer))
    }

    /// Deserializes message bodies with a custom deserializer producing `T`.
    #[must_use]
    pub fn deserializer<T: 'static>(
        self,
        deserializer: Arc<dyn InboundEventDeserializer<T>>,
    ) -> InboundEventKeyDetectorBuilder<T> {
        InboundEventKeyDetectorBuilder {
            channel: self.channel,
            slots: PipelineSlots::new(deserializer),
        }
    }

    /// Uses `pipeline` as is. No descriptors are derived beyond what the
    /// pipeline reports about itself.
    #[must_use]
    pub fn event_processing_pipeline(
        self,
        pipeline: Arc<dyn InboundEventProcessingPipeline>,
    ) -> InboundChannelDefinitionBuilder {
        self.channel.with_pipeline(pipeline)
    }

    /// Returns the pipeline configured so far.
    ///
    /// No deserializer has been chosen yet at this stage, so this always
    /// fails. Build a configured pipeline from the transformer stage with
    /// [`InboundEventTransformerBuilder::build`].
    ///
    /// # Errors
    ///
    /// Returns [`ChannelConfigurationError::MissingDeserializer`].
    pub fn build(&self) -> Result<Arc<dyn InboundEventProcessingPipeline>, ChannelConfigurationError> {
        self.channel.build_pipeline()
    }
}

/// Key detection stage for representation `T`.
#[derive(Debug)]
pub struct InboundEventKeyDetectorBuilder<T> {
    channel: InboundChannelDefinitionBuilder,
    slots: PipelineSlots<T>,
}

impl<T: 'static> InboundEventKeyDetectorBuilder<T> {
    /// Gives every event the same key.
    #[must_use]
    pub fn fixed_event_key(self, key: impl Into<String>) -> InboundEventTenantDetectorBuilder<T> {
        self.detect_event_key_using_key_detector(Arc::new(FixedKeyDetector::new(key)))
    }

    /// Detects the key with a custom detector.
    #[must_use]
    pub fn detect_event_key_using_key_detector(
        mut self,
        detector: Arc<dyn InboundEventKeyDetector<T>>,
    ) -> InboundEventTenantDetectorBuilder<T> {
        self.slots.key_detector = Some(detector);
        self.without_event_key()
    }

    /// Leaves events without a key.
    #[must_use]
    pub fn without_event_key(self) -> InboundEventTenantDetectorBuilder<T> {
        InboundEventTenantDetectorBuilder {
            channel: self.channel,
            slots: self.slots,
        }
    }
}

impl InboundEventKeyDetectorBuilder<JsonValue> {
    /// Reads the key from a top-level JSON field.
    #[must_use]
    pub fn detect_event_key_using_json_field(
        self,
        field: impl Into<String>,
    ) -> InboundEventTenantDetectorBuilder<JsonValue> {
        self.detect_event_key_using_key_detector(Arc::new(JsonFieldKeyDetector::new(field)))
    }

    /// Reads the key with a JSON pointer such as `/meta/type`.
    #[must_use]
    pub fn detect_event_key_using_json_pointer_expression(
        self,
        expression: impl Into<String>,
    ) -> InboundEventTenantDetectorBuilder<JsonValue> {
        self.detect_event_key_using_key_detector(Arc::new(JsonPointerKeyDetector::new(expression)))
    }
}

impl InboundEventKeyDetectorBuilder<XmlDocument> {
    /// Reads the key with an XPath expression.
    #[must_use]
    pub fn detect_event_key_using_xpath_expression(
        self,
        expression: impl Into<String>,
    ) -> InboundEventTenantDetectorBuilder<XmlDocument> {
        self.detect_event_key_using_key_detector(Arc::new(XPathKeyDetector::new(expression)))
    }
}

/// Tenant detection stage for representation `T`.
#[derive(Debug)]
pub struct InboundEventTenantDetectorBuilder<T> {
    channel: InboundChannelDefinitionBuilder,
    slots: PipelineSlots<T>,
}

impl<T: 'static> InboundEventTenantDetectorBuilder<T> {
    /// Assigns every event to the same tenant.
    #[must_use]
    pub fn fixed_tenant_id(
        self,
        tenant_id: impl Into<String>,
    ) -> InboundEventPayloadExtractorBuilder<T> {
        self.detect_tenant_using_tenant_detector(Arc::new(FixedTenantDetector::new(tenant_id)))
    }

    /// Detects the tenant with a custom detector.
    #[must_use]
    pub fn detect_tenant_using_tenant_detector(
        mut self,
        detector: Arc<dyn InboundEventTenantDetector<T>>,
    ) -> InboundEventPayloadExtractorBuilder<T> {
        self.slots.tenant_detector = Some(detector);
        self.without_tenant()
    }

    /// Leaves events without a tenant.
    #[must_use]
    pub fn without_tenant(self) -> InboundEventPayloadExtractorBuilder<T> {
        InboundEventPayloadExtractorBuilder {
            channel: self.channel,
            slots: self.slots,
        }
    }
}

impl InboundEventTenantDetectorBuilder<JsonValue> {
    /// Reads the tenant with a JSON pointer.
    #[must_use]
    pub fn detect_event_tenant_using_json_pointer_expression(
        self,
        expression: impl Into<String>,
    ) -> InboundEventPayloadExtractorBuilder<JsonValue> {
        self.detect_tenant_using_tenant_detector(Arc::new(JsonPointerTenantDetector::new(
            expression,
        )))
    }
}

impl InboundEventTenantDetectorBuilder<XmlDocument> {
    /// Reads the tenant with an XPath expression.
    #[must_use]
    pub fn detect_event_tenant_using_xpath_expression(
        self,
        expression: impl Into<String>,
    ) -> InboundEventPayloadExtractorBuilder<XmlDocument> {
        self.detect_tenant_using_tenant_detector(Arc::new(XPathTenantDetector::new(expression)))
    }
}

/// Payload extraction stage for representation `T`.
#[derive(Debug)]
pub struct InboundEventPayloadExtractorBuilder<T> {
    channel: InboundChannelDefinitionBuilder,
    slots: PipelineSlots<T>,
}

impl<T: 'static> InboundEventPayloadExtractorBuilder<T> {
    /// Extracts the payload with a custom extractor.
    #[must_use]
    pub fn payload_extractor(
        mut self,
        extractor: Arc<dyn InboundEventPayloadExtractor<T>>,
    ) -> InboundEventTransformerBuilder<T> {
        self.slots.payload_extractor = Some(extractor);
        self.without_payload()
    }

    /// Leaves event payloads empty.
    #[must_use]
    pub fn without_payload(self) -> InboundEventTransformerBuilder<T> {
        InboundEventTransformerBuilder {
            channel: self.channel,
            slots: self.slots,
        }
    }
}

impl InboundEventPayloadExtractorBuilder<JsonValue> {
    /// Copies every top-level JSON field into the payload.
    #[must_use]
    pub fn json_fields_map_directly_to_payload(self) -> InboundEventTransformerBuilder<JsonValue> {
        self.payload_extractor(Arc::new(JsonFieldsToMapPayloadExtractor))
    }
}

impl InboundEventPayloadExtractorBuilder<XmlDocument> {
    /// Copies every child element of the root into the payload.
    #[must_use]
    pub fn xml_elements_map_directly_to_payload(
        self,
    ) -> InboundEventTransformerBuilder<XmlDocument> {
        self.payload_extractor(Arc::new(XmlElementsToMapPayloadExtractor))
    }
}

/// Final pipeline stage: supply a transformer or deploy with the default one.
#[derive(Debug)]
pub struct InboundEventTransformerBuilder<T> {
    channel: InboundChannelDefinitionBuilder,
    slots: PipelineSlots<T>,
}

impl<T: 'static> InboundEventTransformerBuilder<T> {
    /// Uses a custom transformer and returns to the channel builder.
    #[must_use]
    pub fn transformer(
        self,
        transformer: Arc<dyn InboundEventTransformer<T>>,
    ) -> InboundChannelDefinitionBuilder {
        let pipeline = self.slots.into_pipeline(Some(transformer));
        self.channel.with_pipeline(pipeline)
    }

    /// Uses the default transformer and returns to the channel builder.
    #[must_use]
    pub fn default_transformer(self) -> InboundChannelDefinitionBuilder {
        let pipeline = self.slots.into_pipeline(None);
        self.channel.with_pipeline(pipeline)
    }

    /// Builds the pipeline from the chosen stages with the default
    /// transformer, without returning to the channel builder.
    #[must_use]
    pub fn build(self) -> Arc<dyn InboundEventProcessingPipeline> {
        self.slots.into_pipeline(None)
    }

    /// Uses the default transformer and deploys the channel.
    ///
    /// # Errors
    ///
    /// Fails like [`InboundChannelDefinitionBuilder::deploy`].
    pub async fn deploy(self) -> ChannelDeploymentResult<EventDeployment> {
        self.default_transformer().deploy().await
    }
}
