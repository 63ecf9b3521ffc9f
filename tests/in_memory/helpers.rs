//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use inlet::channel::{
    adapters::memory::InMemoryEventRepository,
    builder::InboundChannelDefinitionBuilder,
    ports::{EventRepository, InboundEventChannelAdapter},
};
use inlet::pipeline::{EventInstance, EventProcessingError, InboundEvent, InboundEventProcessingPipeline};
use rstest::fixture;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryEventRepository> {
    Arc::new(InMemoryEventRepository::new())
}

/// Starts a channel definition against `repo`.
pub fn channel_builder(repo: &Arc<InMemoryEventRepository>) -> InboundChannelDefinitionBuilder {
    let repository: Arc<dyn EventRepository> = Arc::clone(repo) as Arc<dyn EventRepository>;
    InboundChannelDefinitionBuilder::new(repository)
}

/// Adapter standing in for a caller-owned transport.
#[derive(Debug, Default)]
pub struct WebhookAdapter;

impl InboundEventChannelAdapter for WebhookAdapter {
    fn adapter_type(&self) -> &str {
        "webhook"
    }
}

/// Pipeline that echoes the raw body as the event key.
#[derive(Debug, Default)]
pub struct EchoPipeline;

impl InboundEventProcessingPipeline for EchoPipeline {
    fn run(&self, event: &InboundEvent) -> Result<Vec<EventInstance>, EventProcessingError> {
        Ok(vec![EventInstance::new(
            Some(event.body().to_owned()),
            None,
            Default::default(),
        )])
    }
}
