//! Repository port for event deployment persistence.

use crate::channel::domain::{EventDeployment, EventDeploymentId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for event repository operations.
pub type EventRepositoryResult<T> = Result<T, EventRepositoryError>;

/// Deployment persistence contract.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persists a deployment and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`EventRepositoryError::EmptyDeployment`] when the request has
    /// no resources, [`EventRepositoryError::DuplicateResource`] when two
    /// resources share a name, or a persistence error.
    async fn deploy(&self, request: DeploymentRequest) -> EventRepositoryResult<EventDeployment>;

    /// Finds a deployment by identifier.
    async fn find_deployment(
        &self,
        id: EventDeploymentId,
    ) -> EventRepositoryResult<Option<EventDeployment>>;

    /// Returns the document stored under `resource_name` in a deployment.
    async fn find_resource(
        &self,
        id: EventDeploymentId,
        resource_name: &str,
    ) -> EventRepositoryResult<Option<String>>;

    /// Returns all deployments in deployment order.
    async fn list_deployments(&self) -> EventRepositoryResult<Vec<EventDeployment>>;
}

/// Named document inside a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentResource {
    name: String,
    document: String,
}

impl DeploymentResource {
    /// Creates a resource.
    #[must_use]
    pub fn new(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
        }
    }

    /// Returns the resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the document.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

/// Everything a repository needs to record one deployment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeploymentRequest {
    name: Option<String>,
    category: Option<String>,
    parent_deployment_id: Option<String>,
    tenant_id: Option<String>,
    resources: Vec<DeploymentResource>,
    duplicate_filtering: bool,
}

impl DeploymentRequest {
    /// Returns the deployment name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
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

    /// Returns the resources in the order they were added.
    #[must_use]
    pub fn resources(&self) -> &[DeploymentResource] {
        &self.resources
    }

    /// Returns whether an identical previous deployment should be reused.
    #[must_use]
    pub const fn duplicate_filtering(&self) -> bool {
        self.duplicate_filtering
    }
}

/// Fluent deployment construction bound to a repository.
pub struct DeploymentBuilder<'r> {
    repository: &'r dyn EventRepository,
    request: DeploymentRequest,
}

impl<'r> DeploymentBuilder<'r> {
    /// Begins a deployment against `repository`.
    #[must_use]
    pub fn new(repository: &'r dyn EventRepository) -> Self {
        Self {
            repository,
            request: DeploymentRequest::default(),
        }
    }

    /// Sets the deployment name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    /// Adds a channel document under `resource_name`.
    #[must_use]
    pub fn add_channel_definition(
        mut self,
        resource_name: impl Into<String>,
        document: impl Into<String>,
    ) -> Self {
        self.request
            .resources
            .push(DeploymentResource::new(resource_name, document));
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.request.category = Some(category.into());
        self
    }

    /// Sets the parent deployment identifier.
    #[must_use]
    pub fn parent_deployment_id(mut self, parent_deployment_id: impl Into<String>) -> Self {
        self.request.parent_deployment_id = Some(parent_deployment_id.into());
        self
    }

    /// Sets the owning tenant.
    #[must_use]
    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.request.tenant_id = Some(tenant_id.into());
        self
    }

    /// Reuses the latest deployment with the same name and tenant when its
    /// resources are identical.
    #[must_use]
    pub fn enable_duplicate_filtering(mut self) -> Self {
        self.request.duplicate_filtering = true;
        self
    }

    /// Submits the deployment.
    ///
    /// # Errors
    ///
    /// Returns whatever [`EventRepository::deploy`] returns.
    pub async fn deploy(self) -> EventRepositoryResult<EventDeployment> {
        self.repository.deploy(self.request).await
    }
}

/// Errors returned by event repository implementations.
#[derive(Debug, Clone, Error)]
pub enum EventRepositoryError {
    /// The deployment carries no resources.
    #[error("a deployment must contain at least one resource")]
    EmptyDeployment,

    /// Two resources in one deployment share a name.
    #[error("duplicate resource name in deployment: {0}")]
    DuplicateResource(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EventRepositoryError {
    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
