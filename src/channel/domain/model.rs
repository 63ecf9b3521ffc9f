//! Deployable inbound channel model.

use super::{ChannelDefinition, KeyDescriptor, TenantDescriptor};
use crate::channel::ports::InboundEventChannelAdapter;
use crate::pipeline::InboundEventProcessingPipeline;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Channel definition together with its realized pipeline and the
/// declarative descriptors derived from it.
///
/// The runtime parts (pipeline and adapter) are not serialized; a model read
/// back from a channel document carries only the declarative parts.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelModel {
    #[serde(flatten)]
    definition: ChannelDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deserializer_type: Option<String>,
    #[serde(
        default,
        rename = "channelEventKeyDetection",
        skip_serializing_if = "Option::is_none"
    )]
    key_detection: Option<KeyDescriptor>,
    #[serde(
        default,
        rename = "channelEventTenantIdDetection",
        skip_serializing_if = "Option::is_none"
    )]
    tenant_detection: Option<TenantDescriptor>,
    #[serde(skip)]
    pipeline: Option<Arc<dyn InboundEventProcessingPipeline>>,
    #[serde(skip)]
    channel_adapter: Option<Arc<dyn InboundEventChannelAdapter>>,
}

impl ChannelModel {
    /// Creates a model with no pipeline and no descriptors.
    #[must_use]
    pub fn new(definition: ChannelDefinition) -> Self {
        Self {
            definition,
            ..Self::default()
        }
    }

    /// Attaches the realized pipeline.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: Arc<dyn InboundEventProcessingPipeline>) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Attaches the caller-supplied channel adapter.
    #[must_use]
    pub fn with_channel_adapter(mut self, adapter: Arc<dyn InboundEventChannelAdapter>) -> Self {
        self.channel_adapter = Some(adapter);
        self
    }

    /// Sets the deserializer type tag.
    #[must_use]
    pub fn with_deserializer_type(mut self, deserializer_type: impl Into<String>) -> Self {
        self.deserializer_type = Some(deserializer_type.into());
        self
    }

    /// Sets the key descriptor.
    #[must_use]
    pub fn with_key_detection(mut self, descriptor: KeyDescriptor) -> Self {
        self.key_detection = Some(descriptor);
        self
    }

    /// Sets the tenant descriptor.
    #[must_use]
    pub fn with_tenant_detection(mut self, descriptor: TenantDescriptor) -> Self {
        self.tenant_detection = Some(descriptor);
        self
    }

    /// Returns the channel definition.
    #[must_use]
    pub const fn definition(&self) -> &ChannelDefinition {
        &self.definition
    }

    /// Returns the deserializer type tag.
    #[must_use]
    pub fn deserializer_type(&self) -> Option<&str> {
        self.deserializer_type.as_deref()
    }

    /// Returns the key descriptor.
    #[must_use]
    pub const fn key_detection(&self) -> Option<&KeyDescriptor> {
        self.key_detection.as_ref()
    }

    /// Returns the tenant descriptor.
    #[must_use]
    pub const fn tenant_detection(&self) -> Option<&TenantDescriptor> {
        self.tenant_detection.as_ref()
    }

    /// Returns the realized pipeline.
    #[must_use]
    pub fn pipeline(&self) -> Option<&Arc<dyn InboundEventProcessingPipeline>> {
        self.pipeline.as_ref()
    }

    /// Returns the channel adapter.
    #[must_use]
    pub fn channel_adapter(&self) -> Option<&Arc<dyn InboundEventChannelAdapter>> {
        self.channel_adapter.as_ref()
    }
}

fn same_instance<T: ?Sized>(left: Option<&Arc<T>>, right: Option<&Arc<T>>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => Arc::ptr_eq(left, right),
        (None, None) => true,
        _ => false,
    }
}

/// Runtime parts compare by identity, declarative parts by value.
impl PartialEq for ChannelModel {
    fn eq(&self, other: &Self) -> bool {
        self.definition == other.definition
            && self.deserializer_type == other.deserializer_type
            && self.key_detection == other.key_detection
            && self.tenant_detection == other.tenant_detection
            && same_instance(self.pipeline.as_ref(), other.pipeline.as_ref())
            && same_instance(self.channel_adapter.as_ref(), other.channel_adapter.as_ref())
    }
}

impl fmt::Debug for ChannelModel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ChannelModel")
            .field("definition", &self.definition)
            .field("deserializer_type", &self.deserializer_type)
            .field("key_detection", &self.key_detection)
            .field("tenant_detection", &self.tenant_detection)
            .field("has_pipeline", &self.pipeline.is_some())
            .field(
                "channel_adapter",
                &self.channel_adapter.as_ref().map(|adapter| adapter.adapter_type()),
            )
            .finish()
    }
}
