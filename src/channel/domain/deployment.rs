//! Deployment handle returned by the event repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an event deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventDeploymentId(Uuid);

impl EventDeploymentId {
    /// Creates a new random deployment identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventDeploymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventDeploymentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Persisted unit produced by deploying one or more channel documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDeployment {
    id: EventDeploymentId,
    name: Option<String>,
    category: Option<String>,
    parent_deployment_id: Option<String>,
    tenant_id: Option<String>,
    deployment_time: DateTime<Utc>,
}

/// Parameter object for constructing a deployment handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDeploymentData {
    /// Deployment identifier.
    pub id: EventDeploymentId,
    /// Deployment name.
    pub name: Option<String>,
    /// Deployment category.
    pub category: Option<String>,
    /// Parent deployment identifier.
    pub parent_deployment_id: Option<String>,
    /// Owning tenant.
    pub tenant_id: Option<String>,
    /// Time the deployment was recorded.
    pub deployment_time: DateTime<Utc>,
}

impl EventDeployment {
    /// Creates a deployment handle.
    #[must_use]
    pub fn from_data(data: EventDeploymentData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            category: data.category,
            parent_deployment_id: data.parent_deployment_id,
            tenant_id: data.tenant_id,
            deployment_time: data.deployment_time,
        }
    }

    /// Returns the deployment identifier.
    #[must_use]
    pub const fn id(&self) -> EventDeploymentId {
        self.id
    }

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

    /// Returns the deployment time.
    #[must_use]
    pub const fn deployment_time(&self) -> DateTime<Utc> {
        self.deployment_time
    }
}
