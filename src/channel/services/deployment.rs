//! Deployment of assembled channel models through the repository port.

use crate::channel::{
    domain::{ChannelConfigurationError, ChannelDefinition, ChannelModel, EventDeployment},
    ports::{DeploymentBuilder, EventRepository, EventRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::ChannelJsonConverter;

/// Errors raised while deploying a channel.
#[derive(Debug, Error)]
pub enum ChannelDeploymentError {
    /// The channel is not fully configured.
    #[error(transparent)]
    Configuration(#[from] ChannelConfigurationError),
    /// The channel model could not be rendered as a document.
    #[error("failed to serialize channel model: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The repository rejected the deployment.
    #[error(transparent)]
    Repository(#[from] EventRepositoryError),
}

/// Result type for channel deployment operations.
pub type ChannelDeploymentResult<T> = Result<T, ChannelDeploymentError>;

/// Deployment metadata passed to the repository alongside a channel document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentMetadata {
    resource_name: String,
    deployment_name: Option<String>,
    category: Option<String>,
    parent_deployment_id: Option<String>,
    tenant_id: Option<String>,
}

impl DeploymentMetadata {
    /// Creates metadata for the resource `resource_name`.
    #[must_use]
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            deployment_name: None,
            category: None,
            parent_deployment_id: None,
            tenant_id: None,
        }
    }

    /// Reads the metadata recorded on a channel definition.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelConfigurationError::MissingResourceName`] when the
    /// definition has no resource name.
    pub fn from_definition(
        definition: &ChannelDefinition,
    ) -> Result<Self, ChannelConfigurationError> {
        let resource_name = definition
            .resource_name()
            .ok_or(ChannelConfigurationError::MissingResourceName)?;
        Ok(Self {
            resource_name: resource_name.to_owned(),
            deployment_name: definition.deployment_name().map(str::to_owned),
            category: definition.category().map(str::to_owned),
            parent_deployment_id: definition.parent_deployment_id().map(str::to_owned),
            tenant_id: definition.deployment_tenant_id().map(str::to_owned),
        })
    }

    /// Sets the deployment name.
    #[must_use]
    pub fn with_deployment_name(mut self, deployment_name: impl Into<String>) -> Self {
        self.deployment_name = Some(deployment_name.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the parent deployment identifier.
    #[must_use]
    pub fn with_parent_deployment_id(mut self, parent_deployment_id: impl Into<String>) -> Self {
        self.parent_deployment_id = Some(parent_deployment_id.into());
        self
    }

    /// Sets the owning tenant.
    #[must_use]
    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Returns the resource name.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Returns the deployment name.
    #[must_use]
    pub fn deployment_name(&self) -> Option<&str> {
        self.deployment_name.as_deref()
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the parent deployment identifier.
    #[must_use]
    pub fn parent_deployment_id(&self) -> Option<&str> {
        self.parent_deployment_id.as_deref()
    }

    /// Returns the owning tenant.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }
}

/// Hands channel documents to the event repository.
#[derive(Clone)]
pub struct ChannelDeploymentService {
    repository: Arc<dyn EventRepository>,
}

impl ChannelDeploymentService {
    /// Creates a deployment service backed by `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Serializes `model` and deploys it.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelDeploymentError::Configuration`] without contacting
    /// the repository when the model has no resource name. Repository
    /// failures are returned unchanged as [`ChannelDeploymentError::Repository`].
    pub async fn deploy(&self, model: &ChannelModel) -> ChannelDeploymentResult<EventDeployment> {
        let metadata = DeploymentMetadata::from_definition(model.definition())?;
        let document = ChannelJsonConverter::convert_to_json(model)?;
        self.redeploy(&document, &metadata).await
    }

    /// Deploys an already serialized channel document.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelDeploymentError::Repository`] when the repository
    /// rejects the deployment.
    pub async fn redeploy(
        &self,
        document: &str,
        metadata: &DeploymentMetadata,
    ) -> ChannelDeploymentResult<EventDeployment> {
        let mut deployment = DeploymentBuilder::new(self.repository.as_ref())
            .add_channel_definition(metadata.resource_name(), document);
        if let Some(name) = metadata.deployment_name() {
            deployment = deployment.name(name);
        }
        if let Some(category) = metadata.category() {
            deployment = deployment.category(category);
        }
        if let Some(parent_deployment_id) = metadata.parent_deployment_id() {
            deployment = deployment.parent_deployment_id(parent_deployment_id);
        }
        if let Some(tenant_id) = metadata.tenant_id() {
            deployment = deployment.tenant_id(tenant_id);
        }

        debug!(
            resource_name = metadata.resource_name(),
            deployment_name = metadata.deployment_name(),
            "submitting channel deployment"
        );
        Ok(deployment.deploy().await?)
    }
}

impl std::fmt::Debug for ChannelDeploymentService {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ChannelDeploymentService")
            .finish_non_exhaustive()
    }
}
