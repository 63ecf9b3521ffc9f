//! Then steps for channel deployment BDD scenarios.

use std::sync::Arc;

use super::world::{ChannelWorld, run_async};
use inlet::channel::{
    domain::{ChannelConfigurationError, EventDeployment},
    ports::EventRepository,
    services::ChannelDeploymentError,
};
use rstest_bdd_macros::then;
use serde_json::Value;

fn last_deployment(world: &ChannelWorld) -> Result<&EventDeployment, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(deployment)) => Ok(deployment),
        Some(Err(err)) => Err(eyre::eyre!("deployment failed: {err}")),
        None => Err(eyre::eyre!("no deployment attempted in scenario world")),
    }
}

fn stored_document(world: &ChannelWorld) -> Result<Value, eyre::Report> {
    let deployment = last_deployment(world)?;
    let resource_name = world
        .resource_name
        .as_deref()
        .ok_or_else(|| eyre::eyre!("scenario set no resource name"))?;
    let document = run_async(world.repository.find_resource(deployment.id(), resource_name))
        .map_err(|err| eyre::eyre!("resource lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("no document stored under '{resource_name}'"))?;
    Ok(serde_json::from_str(&document)?)
}

#[then("the deployment succeeds")]
fn deployment_succeeds(world: &ChannelWorld) -> Result<(), eyre::Report> {
    last_deployment(world).map(|_| ())
}

#[then("the deployment fails because the resource name is missing")]
fn deployment_fails_without_resource_name(world: &ChannelWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing deployment result in scenario world"))?;
    if !matches!(
        result,
        Err(ChannelDeploymentError::Configuration(
            ChannelConfigurationError::MissingResourceName
        ))
    ) {
        return Err(eyre::eyre!("expected missing resource name, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the stored document declares channel type "{channel_type}""#)]
fn document_declares_channel_type(
    world: &ChannelWorld,
    channel_type: String,
) -> Result<(), eyre::Report> {
    let document = stored_document(world)?;
    let actual = document.get("channelType").and_then(Value::as_str);
    if actual != Some(channel_type.as_str()) {
        return Err(eyre::eyre!(
            "expected channel type '{channel_type}', found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the stored document declares the fixed key "{key}""#)]
fn document_declares_fixed_key(world: &ChannelWorld, key: String) -> Result<(), eyre::Report> {
    let document = stored_document(world)?;
    let actual = document.pointer("/channelEventKeyDetection/fixedValue");
    if actual.and_then(Value::as_str) != Some(key.as_str()) {
        return Err(eyre::eyre!("expected fixed key '{key}', found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the stored document declares the fixed tenant "{tenant}""#)]
fn document_declares_fixed_tenant(
    world: &ChannelWorld,
    tenant: String,
) -> Result<(), eyre::Report> {
    let document = stored_document(world)?;
    let actual = document.pointer("/channelEventTenantIdDetection/fixedValue");
    if actual.and_then(Value::as_str) != Some(tenant.as_str()) {
        return Err(eyre::eyre!(
            "expected fixed tenant '{tenant}', found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the stored document declares no key detection")]
fn document_declares_no_key_detection(world: &ChannelWorld) -> Result<(), eyre::Report> {
    let document = stored_document(world)?;
    if let Some(detection) = document.get("channelEventKeyDetection") {
        return Err(eyre::eyre!("expected no key detection, found {detection}"));
    }
    Ok(())
}

#[then("the assembled model keeps the custom pipeline")]
fn model_keeps_custom_pipeline(world: &ChannelWorld) -> Result<(), eyre::Report> {
    let expected = world
        .custom_pipeline
        .as_ref()
        .ok_or_else(|| eyre::eyre!("scenario supplied no custom pipeline"))?;
    let model = world
        .last_model
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no model assembled in scenario world"))?;
    let kept = model
        .pipeline()
        .is_some_and(|pipeline| Arc::ptr_eq(pipeline, expected));
    if !kept {
        return Err(eyre::eyre!("model does not hold the supplied pipeline"));
    }
    Ok(())
}

#[then("the repository holds {count:usize} deployments")]
fn repository_holds(world: &ChannelWorld, count: usize) -> Result<(), eyre::Report> {
    let deployments = run_async(world.repository.list_deployments())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if deployments.len() != count {
        return Err(eyre::eyre!(
            "expected {count} deployments, found {}",
            deployments.len()
        ));
    }
    Ok(())
}
