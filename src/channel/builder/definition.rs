//! Entry point of the channel construction protocol.

use super::{
    InboundEventProcessingPipelineBuilder, InboundJmsChannelBuilder, InboundKafkaChannelBuilder,
    InboundRabbitChannelBuilder,
};
use crate::channel::{
    domain::{
        ChannelConfigurationError, ChannelDefinition, ChannelModel, ChannelTransport,
        EventDeployment, JmsInboundChannelSettings, KafkaInboundChannelSettings,
        RabbitInboundChannelSettings,
    },
    ports::{EventRepository, InboundEventChannelAdapter},
    services::{ChannelDeploymentResult, ChannelDeploymentService, ChannelModelAssembler},
};
use crate::pipeline::InboundEventProcessingPipeline;
use std::fmt;
use std::sync::Arc;

/// Accumulates channel identity, transport and pipeline, then deploys the
/// resulting channel model.
///
/// Every transition consumes the builder, so one builder produces at most one
/// deployment.
pub struct InboundChannelDefinitionBuilder {
    repository: Arc<dyn EventRepository>,
    definition: ChannelDefinition,
    channel_adapter: Option<Arc<dyn InboundEventChannelAdapter>>,
    pipeline: Option<Arc<dyn InboundEventProcessingPipeline>>,
}

impl InboundChannelDefinitionBuilder {
    /// Begins a channel definition that deploys into `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self {
            repository,
            definition: ChannelDefinition::new(),
            channel_adapter: None,
            pipeline: None,
        }
    }

    fn map_definition(mut self, update: impl FnOnce(ChannelDefinition) -> ChannelDefinition) -> Self {
        self.definition = update(std::mem::take(&mut self.definition));
        self
    }

    /// Sets the channel key.
    #[must_use]
    pub fn key(self, key: impl Into<String>) -> Self {
        self.map_definition(|definition| definition.with_key(key))
    }

    /// Sets the deployment name.
    #[must_use]
    pub fn deployment_name(self, deployment_name: impl Into<String>) -> Self {
        self.map_definition(|definition| definition.with_deployment_name(deployment_name))
    }

    /// Sets the resource name the channel document is stored under.
    #[must_use]
    pub fn resource_name(self, resource_name: impl Into<String>) -> Self {
        self.map_definition(|definition| definition.with_resource_name(resource_name))
    }

    /// Sets the category.
    #[must_use]
    pub fn category(self, category: impl Into<String>) -> Self {
        self.map_definition(|definition| definition.with_category(category))
    }

    /// Sets the parent deployment identifier.
    #[must_use]
    pub fn parent_deployment_id(self, parent_deployment_id: impl Into<String>) -> Self {
        self.map_definition(|definition| definition.with_parent_deployment_id(parent_deployment_id))
    }

    /// Sets the tenant the deployment belongs to.
    #[must_use]
    pub fn deployment_tenant_id(self, deployment_tenant_id: impl Into<String>) -> Self {
        self.map_definition(|definition| definition.with_deployment_tenant_id(deployment_tenant_id))
    }

    /// Consumes from a JMS destination.
    #[must_use]
    pub fn jms_channel_adapter(self, destination: impl Into<String>) -> InboundJmsChannelBuilder {
        InboundJmsChannelBuilder::new(self.reset(), JmsInboundChannelSettings::new(destination))
    }

    /// Consumes from a RabbitMQ queue.
    #[must_use]
    pub fn rabbit_channel_adapter(self, queue: impl Into<String>) -> InboundRabbitChannelBuilder {
        InboundRabbitChannelBuilder::new(self.reset(), RabbitInboundChannelSettings::new(queue))
    }

    /// Consumes from a Kafka topic.
    #[must_use]
    pub fn kafka_channel_adapter(self, topic: impl Into<String>) -> InboundKafkaChannelBuilder {
        InboundKafkaChannelBuilder::new(self.reset(), KafkaInboundChannelSettings::new(topic))
    }

    /// Consumes through a caller-supplied adapter and proceeds straight to the
    /// pipeline.
    #[must_use]
    pub fn channel_adapter(
        self,
        adapter: Arc<dyn InboundEventChannelAdapter>,
    ) -> InboundEventProcessingPipelineBuilder {
        let mut channel = self.reset();
        channel.channel_adapter = Some(adapter);
        InboundEventProcessingPipelineBuilder::new(channel)
    }

    /// Drops the transport and pipeline chosen by an earlier entry point.
    fn reset(self) -> Self {
        let mut channel = self.map_definition(|definition| {
            definition.with_transport(ChannelTransport::Generic)
        });
        channel.channel_adapter = None;
        channel.pipeline = None;
        channel
    }

    pub(super) fn with_transport(self, transport: ChannelTransport) -> Self {
        self.map_definition(|definition| definition.with_transport(transport))
    }

    pub(super) fn with_pipeline(mut self, pipeline: Arc<dyn InboundEventProcessingPipeline>) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Returns the definition accumulated so far.
    #[must_use]
    pub const fn definition(&self) -> &ChannelDefinition {
        &self.definition
    }

    /// Returns the configured pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelConfigurationError::MissingDeserializer`] when no
    /// pipeline has been configured.
    pub fn build_pipeline(
        &self,
    ) -> Result<Arc<dyn InboundEventProcessingPipeline>, ChannelConfigurationError> {
        self.pipeline
            .clone()
            .ok_or(ChannelConfigurationError::MissingDeserializer)
    }

    /// Assembles the channel model without deploying it.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelConfigurationError::MissingDeserializer`] when no
    /// pipeline has been configured.
    pub fn build_channel_model(&self) -> Result<ChannelModel, ChannelConfigurationError> {
        let pipeline = self.build_pipeline()?;
        Ok(ChannelModelAssembler::assemble(
            &self.definition,
            pipeline,
            self.channel_adapter.clone(),
        ))
    }

    /// Assembles the channel model and deploys it.
    ///
    /// The resource name is checked first; a missing resource name fails
    /// before the pipeline is built or the repository is contacted.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a missing resource name or pipeline,
    /// and passes repository failures through unchanged.
    pub async fn deploy(self) -> ChannelDeploymentResult<EventDeployment> {
        if self.definition.resource_name().is_none() {
            return Err(ChannelConfigurationError::MissingResourceName.into());
        }
        let model = self.build_channel_model()?;
        ChannelDeploymentService::new(self.repository)
            .deploy(&model)
            .await
    }
}

impl fmt::Debug for InboundChannelDefinitionBuilder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InboundChannelDefinitionBuilder")
            .field("definition", &self.definition)
            .field(
                "channel_adapter",
                &self
                    .channel_adapter
                    .as_ref()
                    .map(|adapter| adapter.adapter_type()),
            )
            .field("has_pipeline", &self.pipeline.is_some())
            .finish_non_exhaustive()
    }
}
