//! Assembly of a deployable channel model from a realized pipeline.

use crate::channel::{
    domain::{ChannelDefinition, ChannelModel, KeyDescriptor, TenantDescriptor},
    ports::InboundEventChannelAdapter,
};
use crate::pipeline::InboundEventProcessingPipeline;
use std::sync::Arc;
use tracing::{debug, warn};

/// Derives declarative descriptors from a pipeline and packages them with the
/// channel definition.
///
/// Detectors without a declarative form are left out of the model. The
/// omission is logged at warning level and is not an error; the runtime
/// pipeline attached to the model still carries the detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelModelAssembler;

impl ChannelModelAssembler {
    /// Assembles a channel model. Assembly has no side effects beyond logging,
    /// so equal inputs give equal models.
    #[must_use]
    pub fn assemble(
        definition: &ChannelDefinition,
        pipeline: Arc<dyn InboundEventProcessingPipeline>,
        channel_adapter: Option<Arc<dyn InboundEventChannelAdapter>>,
    ) -> ChannelModel {
        let channel_key = definition.key().unwrap_or_default();
        let mut model = ChannelModel::new(definition.clone());

        if let Some(deserializer_type) = pipeline.deserializer_type() {
            model = model.with_deserializer_type(deserializer_type);
        }

        if let Some(kind) = pipeline.key_detector_kind() {
            match KeyDescriptor::from_detector_kind(kind) {
                Some(descriptor) => model = model.with_key_detection(descriptor),
                None => warn!(
                    channel_key,
                    "key detector has no declarative form; omitting it from the channel model"
                ),
            }
        }

        if let Some(kind) = pipeline.tenant_detector_kind() {
            match TenantDescriptor::from_detector_kind(kind) {
                Some(descriptor) => model = model.with_tenant_detection(descriptor),
                None => warn!(
                    channel_key,
                    "tenant detector has no declarative form; omitting it from the channel model"
                ),
            }
        }

        model = model.with_pipeline(pipeline);
        if let Some(adapter) = channel_adapter {
            model = model.with_channel_adapter(adapter);
        }

        debug!(
            channel_key,
            transport = %definition.transport().kind(),
            deserializer_type = model.deserializer_type().unwrap_or("custom"),
            "assembled channel model"
        );
        model
    }
}
