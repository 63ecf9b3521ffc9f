//! When steps for channel deployment BDD scenarios.

use std::sync::Arc;

use super::world::{ChannelWorld, RoutingKeyDetector, SilentPipeline, WebhookAdapter, run_async};
use inlet::pipeline::InboundEventProcessingPipeline;
use rstest_bdd_macros::when;

#[when(
    r#"the channel is deployed from Kafka topic "{topic}" with group "{group}" using fixed key "{key}" and fixed tenant "{tenant}""#
)]
fn deploy_fixed_kafka_channel(
    world: &mut ChannelWorld,
    topic: String,
    group: String,
    key: String,
    tenant: String,
) -> Result<(), eyre::Report> {
    let channel = world
        .channel_builder()
        .kafka_channel_adapter(topic)
        .group_id(group)
        .event_processing_pipeline()
        .json_deserializer()
        .fixed_event_key(key)
        .fixed_tenant_id(tenant)
        .json_fields_map_directly_to_payload()
        .default_transformer();
    world.last_model = Some(
        channel
            .build_channel_model()
            .map_err(|err| eyre::eyre!("model assembly failed: {err}"))?,
    );
    world.last_result = Some(run_async(channel.deploy()));
    Ok(())
}

#[when("the channel is deployed through a custom adapter with a custom pipeline")]
fn deploy_custom_pipeline(world: &mut ChannelWorld) -> Result<(), eyre::Report> {
    let pipeline: Arc<dyn InboundEventProcessingPipeline> = Arc::new(SilentPipeline);
    world.custom_pipeline = Some(Arc::clone(&pipeline));
    let channel = world
        .channel_builder()
        .channel_adapter(Arc::new(WebhookAdapter))
        .event_processing_pipeline(pipeline);
    world.last_model = Some(
        channel
            .build_channel_model()
            .map_err(|err| eyre::eyre!("model assembly failed: {err}"))?,
    );
    world.last_result = Some(run_async(channel.deploy()));
    Ok(())
}

#[when(r#"the channel is deployed from Kafka topic "{topic}" with a custom key detector"#)]
fn deploy_custom_key_detector(world: &mut ChannelWorld, topic: String) {
    let deployment = world
        .channel_builder()
        .kafka_channel_adapter(topic)
        .event_processing_pipeline()
        .json_deserializer()
        .detect_event_key_using_key_detector(Arc::new(RoutingKeyDetector))
        .without_tenant()
        .without_payload()
        .deploy();
    world.last_result = Some(run_async(deployment));
}
