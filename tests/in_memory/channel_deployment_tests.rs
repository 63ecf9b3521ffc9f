//! End-to-end channel construction and deployment.

use std::sync::Arc;

use super::helpers::{EchoPipeline, WebhookAdapter, channel_builder, repo};
use inlet::channel::{
    adapters::memory::InMemoryEventRepository,
    domain::{ChannelConfigurationError, KeyDescriptor, TenantDescriptor, TransportKind},
    ports::{EventRepository, InboundEventChannelAdapter},
    services::{ChannelDeploymentError, ChannelJsonConverter},
};
use inlet::pipeline::{InboundEvent, InboundEventProcessingPipeline};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn kafka_json_channel_is_deployed_with_fixed_descriptors(repo: Arc<InMemoryEventRepository>) {
    let deployment = channel_builder(&repo)
        .key("orders-created")
        .resource_name("orders.channel")
        .kafka_channel_adapter("orders")
        .group_id("g1")
        .event_processing_pipeline()
        .json_deserializer()
        .fixed_event_key("created")
        .fixed_tenant_id("acme")
        .json_fields_map_directly_to_payload()
        .deploy()
        .await
        .expect("deployment succeeds");

    let document = repo
        .find_resource(deployment.id(), "orders.channel")
        .await
        .expect("lookup succeeds")
        .expect("document stored under the resource name");
    let stored: Value = serde_json::from_str(&document).expect("document is JSON");
    assert_eq!(
        stored,
        json!({
            "key": "orders-created",
            "channelType": "kafka",
            "topics": ["orders"],
            "groupId": "g1",
            "deserializerType": "json",
            "channelEventKeyDetection": { "fixedValue": "created" },
            "channelEventTenantIdDetection": { "fixedValue": "acme" }
        })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_resource_name_leaves_repository_untouched(repo: Arc<InMemoryEventRepository>) {
    let result = channel_builder(&repo)
        .key("orders-created")
        .kafka_channel_adapter("orders")
        .group_id("g1")
        .event_processing_pipeline()
        .json_deserializer()
        .fixed_event_key("created")
        .fixed_tenant_id("acme")
        .json_fields_map_directly_to_payload()
        .deploy()
        .await;

    assert!(matches!(
        result,
        Err(ChannelDeploymentError::Configuration(
            ChannelConfigurationError::MissingResourceName
        ))
    ));
    assert!(
        repo.list_deployments()
            .await
            .expect("listing succeeds")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_adapter_and_pipeline_are_kept_verbatim(repo: Arc<InMemoryEventRepository>) {
    let adapter: Arc<dyn InboundEventChannelAdapter> = Arc::new(WebhookAdapter);
    let pipeline: Arc<dyn InboundEventProcessingPipeline> = Arc::new(EchoPipeline);

    let channel = channel_builder(&repo)
        .key("webhook")
        .resource_name("webhook.channel")
        .channel_adapter(Arc::clone(&adapter))
        .event_processing_pipeline(Arc::clone(&pipeline));
    let model = channel.build_channel_model().expect("model assembles");
    let deployment = channel.deploy().await.expect("deployment succeeds");

    assert!(
        model
            .pipeline()
            .is_some_and(|attached| Arc::ptr_eq(attached, &pipeline))
    );
    assert_eq!(model.definition().transport().kind(), TransportKind::Generic);
    assert_eq!(model.key_detection(), None);
    assert_eq!(model.tenant_detection(), None);

    let document = repo
        .find_resource(deployment.id(), "webhook.channel")
        .await
        .expect("lookup succeeds")
        .expect("document stored");
    let stored: Value = serde_json::from_str(&document).expect("document is JSON");
    assert_eq!(stored, json!({ "key": "webhook", "channelType": "generic" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn xml_rabbit_channel_round_trips_through_the_repository(
    repo: Arc<InMemoryEventRepository>,
) {
    let deployment = channel_builder(&repo)
        .key("returns")
        .resource_name("returns.channel")
        .deployment_name("returns")
        .deployment_tenant_id("acme")
        .rabbit_channel_adapter("returns")
        .queue("returns.retry")
        .ack_mode("MANUAL")
        .event_processing_pipeline()
        .xml_deserializer()
        .detect_event_key_using_xpath_expression("/return/@type")
        .detect_event_tenant_using_xpath_expression("//tenant")
        .xml_elements_map_directly_to_payload()
        .deploy()
        .await
        .expect("deployment succeeds");

    assert_eq!(deployment.name(), Some("returns"));
    assert_eq!(deployment.tenant_id(), Some("acme"));

    let document = repo
        .find_resource(deployment.id(), "returns.channel")
        .await
        .expect("lookup succeeds")
        .expect("document stored");
    let model = ChannelJsonConverter::convert_to_model(&document).expect("channel document");
    assert_eq!(model.deserializer_type(), Some("xml"));
    assert_eq!(
        model.key_detection(),
        Some(&KeyDescriptor::XPathExpression("/return/@type".to_owned()))
    );
    assert_eq!(
        model.tenant_detection(),
        Some(&TenantDescriptor::XPathExpression("//tenant".to_owned()))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deployed_model_still_runs_messages(repo: Arc<InMemoryEventRepository>) {
    let channel = channel_builder(&repo)
        .key("orders")
        .resource_name("orders.channel")
        .jms_channel_adapter("queue.orders")
        .event_processing_pipeline()
        .json_deserializer()
        .detect_event_key_using_json_field("type")
        .without_tenant()
        .json_fields_map_directly_to_payload()
        .default_transformer();
    let pipeline = channel.build_pipeline().expect("pipeline configured");

    channel.deploy().await.expect("deployment succeeds");

    let events = pipeline
        .run(&InboundEvent::new(r#"{"type":"created","total":3}"#))
        .expect("pipeline runs");
    let event = events.first().expect("one event");
    assert_eq!(event.event_key(), Some("created"));
    assert_eq!(event.payload().get("total"), Some(&json!(3)));
}
