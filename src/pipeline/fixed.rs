//! Detectors that yield a constant value for every representation.

use super::{DetectorKind, EventProcessingError, InboundEventKeyDetector, InboundEventTenantDetector};

/// Key detector returning the same key for every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedKeyDetector {
    key: String,
}

impl FixedKeyDetector {
    /// Creates a fixed key detector.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the fixed key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T> InboundEventKeyDetector<T> for FixedKeyDetector {
    fn detect_event_key(&self, _event: &T) -> Result<Option<String>, EventProcessingError> {
        Ok(Some(self.key.clone()))
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::Fixed(self.key.clone())
    }
}

/// Tenant detector returning the same tenant for every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTenantDetector {
    tenant_id: String,
}

impl FixedTenantDetector {
    /// Creates a fixed tenant detector.
    #[must_use]
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
        }
    }

    /// Returns the fixed tenant identifier.
    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

impl<T> InboundEventTenantDetector<T> for FixedTenantDetector {
    fn detect_tenant_id(&self, _event: &T) -> Result<Option<String>, EventProcessingError> {
        Ok(Some(self.tenant_id.clone()))
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::Fixed(self.tenant_id.clone())
    }
}
