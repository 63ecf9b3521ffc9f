//! Inbound event processing stages for Inlet.
//!
//! A processing pipeline turns one raw transport message into canonical
//! events: deserializer, key detector, tenant detector, payload extractor and
//! transformer. All stages after the deserializer are typed by the
//! deserializer's intermediate representation.
//!
//! - Stage contracts in [`InboundEventDeserializer`] and its siblings
//! - JSON stages backed by `serde_json::Value`
//! - XML stages backed by [`XmlDocument`]
//! - [`DefaultInboundEventProcessingPipeline`] composing the stages

mod default;
mod error;
mod event;
mod fixed;
mod json;
mod stage;
mod transformer;
mod xml;

pub use default::DefaultInboundEventProcessingPipeline;
pub use error::EventProcessingError;
pub use event::{EventInstance, EventPayload, ExtractedEvent, InboundEvent};
pub use fixed::{FixedKeyDetector, FixedTenantDetector};
pub use json::{
    JSON_DESERIALIZER_TYPE, JsonFieldKeyDetector, JsonFieldsToMapPayloadExtractor,
    JsonPointerKeyDetector, JsonPointerTenantDetector, StringToJsonDeserializer,
};
pub use stage::{
    DetectorKind, InboundEventDeserializer, InboundEventKeyDetector, InboundEventPayloadExtractor,
    InboundEventProcessingPipeline, InboundEventTenantDetector, InboundEventTransformer,
};
pub use transformer::DefaultInboundEventTransformer;
pub use xml::{
    StringToXmlDocumentDeserializer, XML_DESERIALIZER_TYPE, XPathKeyDetector, XPathTenantDetector,
    XmlDocument, XmlDocumentError, XmlElementsToMapPayloadExtractor,
};

/// Intermediate representation produced by the JSON deserializer.
pub type JsonValue = serde_json::Value;

#[cfg(test)]
mod tests;
