//! Inbound raw events and the canonical event shape produced by transformers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Payload map produced by payload extractors.
pub type EventPayload = BTreeMap<String, Value>;

/// Raw message as delivered by a transport adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InboundEvent {
    body: String,
    headers: BTreeMap<String, String>,
}

impl InboundEvent {
    /// Creates an inbound event from its raw body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Adds a transport header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the transport headers.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

/// Values detected from the intermediate representation, handed to the
/// transformer together with the representation itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedEvent {
    /// Detected event key.
    pub event_key: Option<String>,
    /// Detected tenant identifier.
    pub tenant_id: Option<String>,
    /// Extracted payload.
    pub payload: EventPayload,
    /// Transport headers of the inbound event, unchanged.
    pub headers: BTreeMap<String, String>,
}

/// Canonical event handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    event_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant_id: Option<String>,
    #[serde(default)]
    payload: EventPayload,
}

impl EventInstance {
    /// Creates a canonical event.
    #[must_use]
    pub const fn new(
        event_key: Option<String>,
        tenant_id: Option<String>,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_key,
            tenant_id,
            payload,
        }
    }

    /// Returns the event key.
    #[must_use]
    pub fn event_key(&self) -> Option<&str> {
        self.event_key.as_deref()
    }

    /// Returns the tenant identifier.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    /// Returns the payload.
    #[must_use]
    pub const fn payload(&self) -> &EventPayload {
        &self.payload
    }
}

impl From<ExtractedEvent> for EventInstance {
    fn from(extracted: ExtractedEvent) -> Self {
        Self::new(extracted.event_key, extracted.tenant_id, extracted.payload)
    }
}
