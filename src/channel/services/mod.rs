//! Application services for channel assembly and deployment.

mod assembler;
mod converter;
mod deployment;

pub use assembler::ChannelModelAssembler;
pub use converter::ChannelJsonConverter;
pub use deployment::{
    ChannelDeploymentError, ChannelDeploymentResult, ChannelDeploymentService, DeploymentMetadata,
};
