//! Channel identity and deployment metadata.

use super::ChannelTransport;
use serde::{Deserialize, Serialize};

/// Identity, transport and deployment metadata of an inbound channel.
///
/// Only the identity and transport are part of the declarative document; the
/// deployment metadata accompanies the document when it is handed to the
/// repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip)]
    deployment_name: Option<String>,
    #[serde(skip)]
    resource_name: Option<String>,
    #[serde(skip)]
    parent_deployment_id: Option<String>,
    #[serde(skip)]
    deployment_tenant_id: Option<String>,
    #[serde(flatten)]
    transport: ChannelTransport,
}

impl ChannelDefinition {
    /// Creates an empty definition on the generic transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the channel key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the deployment name.
    #[must_use]
    pub fn with_deployment_name(mut self, deployment_name: impl Into<String>) -> Self {
        self.deployment_name = Some(deployment_name.into());
        self
    }

    /// Sets the resource name the document is stored under.
    #[must_use]
    pub fn with_resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = Some(resource_name.into());
        self
    }

    /// Sets the parent deployment identifier.
    #[must_use]
    pub fn with_parent_deployment_id(mut self, parent_deployment_id: impl Into<String>) -> Self {
        self.parent_deployment_id = Some(parent_deployment_id.into());
        self
    }

    /// Sets the tenant the deployment belongs to.
    #[must_use]
    pub fn with_deployment_tenant_id(mut self, deployment_tenant_id: impl Into<String>) -> Self {
        self.deployment_tenant_id = Some(deployment_tenant_id.into());
        self
    }

    /// Replaces the transport.
    #[must_use]
    pub fn with_transport(mut self, transport: ChannelTransport) -> Self {
        self.transport = transport;
        self
    }

    /// Returns the channel key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the deployment name.
    #[must_use]
    pub fn deployment_name(&self) -> Option<&str> {
        self.deployment_name.as_deref()
    }

    /// Returns the resource name.
    #[must_use]
    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    /// Returns the parent deployment identifier.
    #[must_use]
    pub fn parent_deployment_id(&self) -> Option<&str> {
        self.parent_deployment_id.as_deref()
    }

    /// Returns the deployment tenant.
    #[must_use]
    pub fn deployment_tenant_id(&self) -> Option<&str> {
        self.deployment_tenant_id.as_deref()
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &ChannelTransport {
        &self.transport
    }
}
