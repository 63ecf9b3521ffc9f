//! Inlet: inbound event channel definitions for event-driven engines.
//!
//! This crate describes how raw messages arriving on a transport (JMS,
//! Kafka, RabbitMQ or a caller-supplied adapter) become canonical events, and
//! deploys those descriptions through a repository port.
//!
//! # Architecture
//!
//! Inlet follows hexagonal architecture principles:
//!
//! - **Domain**: Channel definitions, transport settings and descriptors
//! - **Ports**: Abstract trait interfaces for deployment persistence
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`channel`]: Channel construction, assembly and deployment
//! - [`pipeline`]: Processing stages and the runnable pipeline

pub mod channel;
pub mod pipeline;
