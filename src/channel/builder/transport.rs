//! Transport-specific builders.
//!
//! Each builder owns its settings value until `event_processing_pipeline`
//! records them on the channel and hands over to the pipeline builder.

use super::{InboundChannelDefinitionBuilder, InboundEventProcessingPipelineBuilder};
use crate::channel::domain::{
    ChannelTransport, JmsInboundChannelSettings, KafkaInboundChannelSettings,
    RabbitInboundChannelSettings,
};

/// Collects JMS consumer settings.
#[derive(Debug)]
pub struct InboundJmsChannelBuilder {
    channel: InboundChannelDefinitionBuilder,
    settings: JmsInboundChannelSettings,
}

impl InboundJmsChannelBuilder {
    pub(super) const fn new(
        channel: InboundChannelDefinitionBuilder,
        settings: JmsInboundChannelSettings,
    ) -> Self {
        Self { channel, settings }
    }

    /// Sets the message selector.
    #[must_use]
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.settings = self.settings.with_selector(selector);
        self
    }

    /// Sets the durable subscription name.
    #[must_use]
    pub fn subscription(mut self, subscription: impl Into<String>) -> Self {
        self.settings = self.settings.with_subscription(subscription);
        self
    }

    /// Sets the listener concurrency, for example `"3-10"`.
    #[must_use]
    pub fn concurrency(mut self, concurrency: impl Into<String>) -> Self {
        self.settings = self.settings.with_concurrency(concurrency);
        self
    }

    /// Returns the settings collected so far.
    #[must_use]
    pub const fn settings(&self) -> &JmsInboundChannelSettings {
        &self.settings
    }

    /// Records the settings and proceeds to the pipeline.
    #[must_use]
    pub fn event_processing_pipeline(self) -> InboundEventProcessingPipelineBuilder {
        InboundEventProcessingPipelineBuilder::new(
            self.channel
                .with_transport(ChannelTransport::Jms(self.settings)),
        )
    }
}

/// Collects RabbitMQ consumer settings.
#[derive(Debug)]
pub struct InboundRabbitChannelBuilder {
    channel: InboundChannelDefinitionBuilder,
    settings: RabbitInboundChannelSettings,
}

impl InboundRabbitChannelBuilder {
    pub(super) const fn new(
        channel: InboundChannelDefinitionBuilder,
        settings: RabbitInboundChannelSettings,
    ) -> Self {
        Self { channel, settings }
    }

    /// Adds another queue. Queues already present are ignored.
    #[must_use]
    pub fn queue(mut self, queue: impl Into<String>) -> Self {
        self.settings = self.settings.with_queue(queue);
        self
    }

    /// Marks the consumer exclusive.
    #[must_use]
    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.settings = self.settings.with_exclusive(exclusive);
        self
    }

    /// Sets the consumer priority.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.settings = self.settings.with_priority(priority);
        self
    }

    /// Sets the admin bean reference.
    #[must_use]
    pub fn admin(mut self, admin: impl Into<String>) -> Self {
        self.settings = self.settings.with_admin(admin);
        self
    }

    /// Sets the executor reference.
    #[must_use]
    pub fn executor(mut self, executor: impl Into<String>) -> Self {
        self.settings = self.settings.with_executor(executor);
        self
    }

    /// Sets the acknowledgement mode.
    #[must_use]
    pub fn ack_mode(mut self, ack_mode: impl Into<String>) -> Self {
        self.settings = self.settings.with_ack_mode(ack_mode);
        self
    }

    /// Sets the listener concurrency.
    #[must_use]
    pub fn concurrency(mut self, concurrency: impl Into<String>) -> Self {
        self.settings = self.settings.with_concurrency(concurrency);
        self
    }

    /// Returns the settings collected so far.
    #[must_use]
    pub const fn settings(&self) -> &RabbitInboundChannelSettings {
        &self.settings
    }

    /// Records the settings and proceeds to the pipeline.
    #[must_use]
    pub fn event_processing_pipeline(self) -> InboundEventProcessingPipelineBuilder {
        InboundEventProcessingPipelineBuilder::new(
            self.channel
                .with_transport(ChannelTransport::Rabbit(self.settings)),
        )
    }
}

/// Collects Kafka consumer settings.
#[derive(Debug)]
pub struct InboundKafkaChannelBuilder {
    channel: InboundChannelDefinitionBuilder,
    settings: KafkaInboundChannelSettings,
}

impl InboundKafkaChannelBuilder {
    pub(super) const fn new(
        channel: InboundChannelDefinitionBuilder,
        settings: KafkaInboundChannelSettings,
    ) -> Self {
        Self { channel, settings }
    }

    /// Adds another topic. Topics already present are ignored.
    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.settings = self.settings.with_topic(topic);
        self
    }

    /// Sets the consumer group.
    #[must_use]
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.settings = self.settings.with_group_id(group_id);
        self
    }

    /// Sets the client id prefix.
    #[must_use]
    pub fn client_id_prefix(mut self, client_id_prefix: impl Into<String>) -> Self {
        self.settings = self.settings.with_client_id_prefix(client_id_prefix);
        self
    }

    /// Sets the listener concurrency.
    #[must_use]
    pub fn concurrency(mut self, concurrency: impl Into<String>) -> Self {
        self.settings = self.settings.with_concurrency(concurrency);
        self
    }

    /// Sets a consumer property. A later value replaces an earlier one.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings = self.settings.with_property(name, value);
        self
    }

    /// Returns the settings collected so far.
    #[must_use]
    pub const fn settings(&self) -> &KafkaInboundChannelSettings {
        &self.settings
    }

    /// Records the settings and proceeds to the pipeline.
    #[must_use]
    pub fn event_processing_pipeline(self) -> InboundEventProcessingPipelineBuilder {
        InboundEventProcessingPipelineBuilder::new(
            self.channel
                .with_transport(ChannelTransport::Kafka(self.settings)),
        )
    }
}
