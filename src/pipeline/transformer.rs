//! Default transformer installed when a channel does not supply one.

use super::{EventInstance, EventProcessingError, ExtractedEvent, InboundEventTransformer};

/// Emits exactly one canonical event carrying the detected key, tenant and
/// payload. The representation and the transport headers are not consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultInboundEventTransformer;

impl<T> InboundEventTransformer<T> for DefaultInboundEventTransformer {
    fn transform(
        &self,
        _event: &T,
        extracted: ExtractedEvent,
    ) -> Result<Vec<EventInstance>, EventProcessingError> {
        Ok(vec![EventInstance::from(extracted)])
    }
}
