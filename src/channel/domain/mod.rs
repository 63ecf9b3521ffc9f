//! Domain model for inbound channel definitions.
//!
//! The channel domain models channel identity, transport settings, the
//! declarative key and tenant descriptors and the assembled channel model.
//! Deployment persistence remains outside this boundary.

mod definition;
mod deployment;
mod descriptor;
mod error;
mod model;
mod transport;

pub use definition::ChannelDefinition;
pub use deployment::{EventDeployment, EventDeploymentData, EventDeploymentId};
pub use descriptor::{KeyDescriptor, TenantDescriptor};
pub use error::{ChannelConfigurationError, ParseTransportKindError};
pub use model::ChannelModel;
pub use transport::{
    ChannelTransport, JmsInboundChannelSettings, KafkaInboundChannelSettings,
    RabbitInboundChannelSettings, TransportKind,
};
