//! Running a built pipeline from many consumer tasks at once.

use std::sync::Arc;

use super::helpers::{channel_builder, repo};
use inlet::channel::adapters::memory::InMemoryEventRepository;
use inlet::pipeline::{InboundEvent, InboundEventProcessingPipeline};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pipeline_serves_concurrent_consumers(repo: Arc<InMemoryEventRepository>) {
    let pipeline: Arc<dyn InboundEventProcessingPipeline> = channel_builder(&repo)
        .kafka_channel_adapter("orders")
        .event_processing_pipeline()
        .json_deserializer()
        .detect_event_key_using_json_pointer_expression("/meta/type")
        .detect_event_tenant_using_json_pointer_expression("/meta/tenant")
        .json_fields_map_directly_to_payload()
        .default_transformer()
        .build_pipeline()
        .expect("pipeline configured");

    let handles: Vec<_> = (0..16)
        .map(|index| {
            let pipeline = Arc::clone(&pipeline);
            tokio::spawn(async move {
                let body = format!(
                    r#"{{"meta":{{"type":"t{index}","tenant":"tenant-{index}"}},"seq":{index}}}"#
                );
                pipeline.run(&InboundEvent::new(body))
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let events = handle
            .await
            .expect("consumer task completes")
            .expect("pipeline runs");
        let event = events.first().expect("one event");
        assert_eq!(event.event_key(), Some(format!("t{index}").as_str()));
        assert_eq!(event.tenant_id(), Some(format!("tenant-{index}").as_str()));
    }
}
