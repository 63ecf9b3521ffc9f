//! Shared world state for channel deployment BDD scenarios.

use std::sync::Arc;

use inlet::channel::{
    adapters::memory::InMemoryEventRepository,
    builder::InboundChannelDefinitionBuilder,
    domain::{ChannelModel, EventDeployment},
    ports::{EventRepository, InboundEventChannelAdapter},
    services::ChannelDeploymentError,
};
use inlet::pipeline::{
    EventInstance, EventProcessingError, InboundEvent, InboundEventKeyDetector,
    InboundEventProcessingPipeline, JsonValue,
};
use rstest::fixture;

/// Scenario world for channel deployment behaviour tests.
pub struct ChannelWorld {
    /// Repository receiving deployments.
    pub repository: Arc<InMemoryEventRepository>,
    /// Channel key set by the scenario.
    pub key: Option<String>,
    /// Resource name set by the scenario.
    pub resource_name: Option<String>,
    /// Custom pipeline handed to the builder, if any.
    pub custom_pipeline: Option<Arc<dyn InboundEventProcessingPipeline>>,
    /// Model assembled before the last deployment.
    pub last_model: Option<ChannelModel>,
    /// Result of the last deployment attempt.
    pub last_result: Option<Result<EventDeployment, ChannelDeploymentError>>,
}

impl ChannelWorld {
    /// Creates a world with an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryEventRepository::new()),
            key: None,
            resource_name: None,
            custom_pipeline: None,
            last_model: None,
            last_result: None,
        }
    }

    /// Starts a channel builder carrying the identity recorded so far.
    pub fn channel_builder(&self) -> InboundChannelDefinitionBuilder {
        let repository: Arc<dyn EventRepository> =
            Arc::clone(&self.repository) as Arc<dyn EventRepository>;
        let mut builder = InboundChannelDefinitionBuilder::new(repository);
        if let Some(key) = &self.key {
            builder = builder.key(key.clone());
        }
        if let Some(resource_name) = &self.resource_name {
            builder = builder.resource_name(resource_name.clone());
        }
        builder
    }
}

impl Default for ChannelWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ChannelWorld {
    ChannelWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Adapter standing in for a caller-owned transport.
pub struct WebhookAdapter;

impl InboundEventChannelAdapter for WebhookAdapter {
    fn adapter_type(&self) -> &str {
        "webhook"
    }
}

/// Pipeline that emits nothing.
pub struct SilentPipeline;

impl InboundEventProcessingPipeline for SilentPipeline {
    fn run(&self, _event: &InboundEvent) -> Result<Vec<EventInstance>, EventProcessingError> {
        Ok(Vec::new())
    }
}

/// Key detector reading a header-like field without a declarative form.
pub struct RoutingKeyDetector;

impl InboundEventKeyDetector<JsonValue> for RoutingKeyDetector {
    fn detect_event_key(&self, event: &JsonValue) -> Result<Option<String>, EventProcessingError> {
        Ok(event
            .get("routing")
            .and_then(JsonValue::as_str)
            .map(str::to_owned))
    }
}
