//! Reading stored channel documents back and redeploying them.

use std::sync::Arc;

use super::helpers::{channel_builder, repo};
use inlet::channel::{
    adapters::memory::InMemoryEventRepository,
    domain::KeyDescriptor,
    ports::EventRepository,
    services::{ChannelDeploymentService, ChannelJsonConverter, DeploymentMetadata},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_document_redeploys_under_new_metadata(repo: Arc<InMemoryEventRepository>) {
    let initial = channel_builder(&repo)
        .key("orders")
        .resource_name("orders.channel")
        .deployment_name("orders-v1")
        .kafka_channel_adapter("orders")
        .event_processing_pipeline()
        .json_deserializer()
        .detect_event_key_using_json_field("type")
        .without_tenant()
        .without_payload()
        .deploy()
        .await
        .expect("first deployment succeeds");
    let document = repo
        .find_resource(initial.id(), "orders.channel")
        .await
        .expect("lookup succeeds")
        .expect("document stored");

    let service = ChannelDeploymentService::new(Arc::clone(&repo) as Arc<dyn EventRepository>);
    let metadata = DeploymentMetadata::new("orders.channel")
        .with_deployment_name("orders-v2")
        .with_category("commerce")
        .with_parent_deployment_id(initial.id().to_string())
        .with_tenant_id("acme");
    let redeployed = service
        .redeploy(&document, &metadata)
        .await
        .expect("redeployment succeeds");

    assert_ne!(redeployed.id(), initial.id());
    assert_eq!(redeployed.name(), Some("orders-v2"));
    assert_eq!(redeployed.category(), Some("commerce"));
    assert_eq!(
        redeployed.parent_deployment_id(),
        Some(initial.id().to_string().as_str())
    );
    assert_eq!(redeployed.tenant_id(), Some("acme"));

    let copied = repo
        .find_resource(redeployed.id(), "orders.channel")
        .await
        .expect("lookup succeeds");
    assert_eq!(copied.as_deref(), Some(document.as_str()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn declarative_model_from_document_deploys_again(repo: Arc<InMemoryEventRepository>) {
    let first = channel_builder(&repo)
        .key("orders")
        .resource_name("orders.channel")
        .jms_channel_adapter("queue.orders")
        .event_processing_pipeline()
        .json_deserializer()
        .fixed_event_key("created")
        .without_tenant()
        .without_payload()
        .deploy()
        .await
        .expect("deployment succeeds");
    let document = repo
        .find_resource(first.id(), "orders.channel")
        .await
        .expect("lookup succeeds")
        .expect("document stored");
    let model = ChannelJsonConverter::convert_to_model(&document).expect("channel document");
    assert_eq!(
        model.key_detection(),
        Some(&KeyDescriptor::Fixed("created".to_owned()))
    );

    let service = ChannelDeploymentService::new(Arc::clone(&repo) as Arc<dyn EventRepository>);
    let result = service.deploy(&model).await;

    assert!(
        result.is_err(),
        "documents carry no resource name, so deploying the bare model is rejected"
    );
    let second = service
        .redeploy(&document, &DeploymentMetadata::new("orders.channel"))
        .await
        .expect("redeployment succeeds");
    assert_eq!(
        repo.list_deployments()
            .await
            .expect("listing succeeds")
            .iter()
            .map(|deployment| deployment.id())
            .collect::<Vec<_>>(),
        vec![first.id(), second.id()]
    );
}
