//! Port contracts for channel deployment.
//!
//! Ports define infrastructure-agnostic interfaces used by the channel
//! builder and services.

mod adapter;
mod repository;

pub use adapter::InboundEventChannelAdapter;
pub use repository::{
    DeploymentBuilder, DeploymentRequest, DeploymentResource, EventRepository,
    EventRepositoryError, EventRepositoryResult,
};
