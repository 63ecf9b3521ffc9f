//! Fluent, staged construction of inbound channels.
//!
//! Identity is set on [`InboundChannelDefinitionBuilder`], a transport entry
//! point hands over to a transport builder, and the pipeline builder walks the
//! processing stages in their fixed order:
//!
//! ```
//! use std::sync::Arc;
//! use inlet::channel::adapters::memory::InMemoryEventRepository;
//! use inlet::channel::builder::InboundChannelDefinitionBuilder;
//! use inlet::channel::domain::KeyDescriptor;
//!
//! let model = InboundChannelDefinitionBuilder::new(Arc::new(InMemoryEventRepository::new()))
//!     .key("orders-created")
//!     .resource_name("orders.channel")
//!     .kafka_channel_adapter("orders")
//!     .group_id("g1")
//!     .event_processing_pipeline()
//!     .json_deserializer()
//!     .fixed_event_key("created")
//!     .fixed_tenant_id("acme")
//!     .json_fields_map_directly_to_payload()
//!     .default_transformer()
//!     .build_channel_model()?;
//!
//! assert_eq!(model.deserializer_type(), Some("json"));
//! assert_eq!(
//!     model.key_detection(),
//!     Some(&KeyDescriptor::Fixed("created".to_owned()))
//! );
//! # Ok::<(), inlet::channel::domain::ChannelConfigurationError>(())
//! ```
//!
//! # Representation consistency
//!
//! Every stage after the deserializer is typed by its representation. A JSON
//! field reference is a JSON key stage:
//!
//! ```
//! # use std::sync::Arc;
//! # use inlet::channel::adapters::memory::InMemoryEventRepository;
//! # use inlet::channel::builder::InboundChannelDefinitionBuilder;
//! let _ = InboundChannelDefinitionBuilder::new(Arc::new(InMemoryEventRepository::new()))
//!     .kafka_channel_adapter("orders")
//!     .event_processing_pipeline()
//!     .json_deserializer()
//!     .detect_event_key_using_json_field("type");
//! ```
//!
//! so it cannot be attached to an XML pipeline:
//!
//! ```compile_fail
//! # use std::sync::Arc;
//! # use inlet::channel::adapters::memory::InMemoryEventRepository;
//! # use inlet::channel::builder::InboundChannelDefinitionBuilder;
//! let _ = InboundChannelDefinitionBuilder::new(Arc::new(InMemoryEventRepository::new()))
//!     .kafka_channel_adapter("orders")
//!     .event_processing_pipeline()
//!     .xml_deserializer()
//!     .detect_event_key_using_json_field("type");
//! ```
//!
//! XPath detection belongs to XML pipelines, for keys and tenants alike:
//!
//! ```
//! # use std::sync::Arc;
//! # use inlet::channel::adapters::memory::InMemoryEventRepository;
//! # use inlet::channel::builder::InboundChannelDefinitionBuilder;
//! let _ = InboundChannelDefinitionBuilder::new(Arc::new(InMemoryEventRepository::new()))
//!     .rabbit_channel_adapter("orders")
//!     .event_processing_pipeline()
//!     .xml_deserializer()
//!     .detect_event_key_using_xpath_expression("/order/@type")
//!     .detect_event_tenant_using_xpath_expression("//tenant");
//! ```
//!
//! A JSON pipeline offers neither:
//!
//! ```compile_fail
//! # use std::sync::Arc;
//! # use inlet::channel::adapters::memory::InMemoryEventRepository;
//! # use inlet::channel::builder::InboundChannelDefinitionBuilder;
//! let _ = InboundChannelDefinitionBuilder::new(Arc::new(InMemoryEventRepository::new()))
//!     .rabbit_channel_adapter("orders")
//!     .event_processing_pipeline()
//!     .json_deserializer()
//!     .detect_event_key_using_xpath_expression("/order/@type");
//! ```
//!
//! ```compile_fail
//! # use std::sync::Arc;
//! # use inlet::channel::adapters::memory::InMemoryEventRepository;
//! # use inlet::channel::builder::InboundChannelDefinitionBuilder;
//! let _ = InboundChannelDefinitionBuilder::new(Arc::new(InMemoryEventRepository::new()))
//!     .rabbit_channel_adapter("orders")
//!     .event_processing_pipeline()
//!     .json_deserializer()
//!     .without_event_key()
//!     .detect_event_tenant_using_xpath_expression("//tenant");
//! ```
//!
//! Custom detectors are checked the same way. A detector written for JSON
//! values fits a JSON pipeline:
//!
//! ```
//! # use std::sync::Arc;
//! # use inlet::channel::adapters::memory::InMemoryEventRepository;
//! # use inlet::channel::builder::InboundChannelDefinitionBuilder;
//! use inlet::pipeline::{EventProcessingError, InboundEventKeyDetector, JsonValue};
//!
//! struct RoutingKey;
//!
//! impl InboundEventKeyDetector<JsonValue> for RoutingKey {
//!     fn detect_event_key(&self, event: &JsonValue) -> Result<Option<String>, EventProcessingError> {
//!         Ok(event.get("routing").and_then(JsonValue::as_str).map(str::to_owned))
//!     }
//! }
//!
//! let _ = InboundChannelDefinitionBuilder::new(Arc::new(InMemoryEventRepository::new()))
//!     .kafka_channel_adapter("orders")
//!     .event_processing_pipeline()
//!     .json_deserializer()
//!     .detect_event_key_using_key_detector(Arc::new(RoutingKey));
//! ```
//!
//! and is rejected by an XML pipeline:
//!
//! ```compile_fail
//! # use std::sync::Arc;
//! # use inlet::channel::adapters::memory::InMemoryEventRepository;
//! # use inlet::channel::builder::InboundChannelDefinitionBuilder;
//! use inlet::pipeline::{EventProcessingError, InboundEventKeyDetector, JsonValue};
//!
//! struct RoutingKey;
//!
//! impl InboundEventKeyDetector<JsonValue> for RoutingKey {
//!     fn detect_event_key(&self, event: &JsonValue) -> Result<Option<String>, EventProcessingError> {
//!         Ok(event.get("routing").and_then(JsonValue::as_str).map(str::to_owned))
//!     }
//! }
//!
//! let _ = InboundChannelDefinitionBuilder::new(Arc::new(InMemoryEventRepository::new()))
//!     .kafka_channel_adapter("orders")
//!     .event_processing_pipeline()
//!     .xml_deserializer()
//!     .detect_event_key_using_key_detector(Arc::new(RoutingKey));
//! ```

mod definition;
mod pipeline;
mod transport;

pub use definition::InboundChannelDefinitionBuilder;
pub use pipeline::{
    InboundEventKeyDetectorBuilder, InboundEventPayloadExtractorBuilder,
    InboundEventProcessingPipelineBuilder, InboundEventTenantDetectorBuilder,
    InboundEventTransformerBuilder,
};
pub use transport::{
    InboundJmsChannelBuilder, InboundKafkaChannelBuilder, InboundRabbitChannelBuilder,
};
