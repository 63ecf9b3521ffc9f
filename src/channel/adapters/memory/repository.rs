//! In-memory event repository.

use crate::channel::{
    domain::{EventDeployment, EventDeploymentData, EventDeploymentId},
    ports::{
        DeploymentRequest, DeploymentResource, EventRepository, EventRepositoryError,
        EventRepositoryResult,
    },
};
use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock};
use tracing::info;

/// Thread-safe in-memory event repository.
#[derive(Debug, Clone)]
pub struct InMemoryEventRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryEventState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryEventState {
    deployments: Vec<StoredDeployment>,
}

#[derive(Debug)]
struct StoredDeployment {
    deployment: EventDeployment,
    resources: Vec<DeploymentResource>,
    digests: BTreeMap<String, String>,
}

impl InMemoryEventRepository<DefaultClock> {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryEventRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryEventRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository using the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryEventState::default())),
            clock,
        }
    }
}

fn lock_error(err: impl ToString) -> EventRepositoryError {
    EventRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn resource_digests(
    resources: &[DeploymentResource],
) -> EventRepositoryResult<BTreeMap<String, String>> {
    if resources.is_empty() {
        return Err(EventRepositoryError::EmptyDeployment);
    }

    let mut seen = HashSet::new();
    let mut digests = BTreeMap::new();
    for resource in resources {
        if !seen.insert(resource.name()) {
            return Err(EventRepositoryError::DuplicateResource(
                resource.name().to_owned(),
            ));
        }
        let digest = Sha256::digest(resource.document().as_bytes());
        digests.insert(resource.name().to_owned(), format!("{digest:x}"));
    }
    Ok(digests)
}

impl InMemoryEventState {
    /// Latest deployment with the same name and tenant as `request`.
    fn latest_matching(&self, request: &DeploymentRequest) -> Option<&StoredDeployment> {
        self.deployments.iter().rev().find(|stored| {
            stored.deployment.name() == request.name()
                && stored.deployment.tenant_id() == request.tenant_id()
        })
    }
}

#[async_trait]
impl<C> EventRepository for InMemoryEventRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn deploy(&self, request: DeploymentRequest) -> EventRepositoryResult<EventDeployment> {
        let digests = resource_digests(request.resources())?;
        let mut state = self.state.write().map_err(lock_error)?;

        if request.duplicate_filtering()
            && let Some(previous) = state.latest_matching(&request)
            && previous.digests == digests
        {
            info!(
                deployment_id = %previous.deployment.id(),
                "reusing identical event deployment"
            );
            return Ok(previous.deployment.clone());
        }

        let deployment = EventDeployment::from_data(EventDeploymentData {
            id: EventDeploymentId::new(),
            name: request.name().map(str::to_owned),
            category: request.category().map(str::to_owned),
            parent_deployment_id: request.parent_deployment_id().map(str::to_owned),
            tenant_id: request.tenant_id().map(str::to_owned),
            deployment_time: self.clock.utc(),
        });
        info!(
            deployment_id = %deployment.id(),
            resources = request.resources().len(),
            "recorded event deployment"
        );
        state.deployments.push(StoredDeployment {
            deployment: deployment.clone(),
            resources: request.resources().to_vec(),
            digests,
        });
        Ok(deployment)
    }

    async fn find_deployment(
        &self,
        id: EventDeploymentId,
    ) -> EventRepositoryResult<Option<EventDeployment>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .deployments
            .iter()
            .find(|stored| stored.deployment.id() == id)
            .map(|stored| stored.deployment.clone()))
    }

    async fn find_resource(
        &self,
        id: EventDeploymentId,
        resource_name: &str,
    ) -> EventRepositoryResult<Option<String>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .deployments
            .iter()
            .find(|stored| stored.deployment.id() == id)
            .and_then(|stored| {
                stored
                    .resources
                    .iter()
                    .find(|resource| resource.name() == resource_name)
            })
            .map(|resource| resource.document().to_owned()))
    }

    async fn list_deployments(&self) -> EventRepositoryResult<Vec<EventDeployment>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .deployments
            .iter()
            .map(|stored| stored.deployment.clone())
            .collect())
    }
}
