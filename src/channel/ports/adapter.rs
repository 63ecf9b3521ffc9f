//! Port for caller-supplied transport adapters.

/// Transport adapter that delivers raw messages to a channel's pipeline.
///
/// Broker connections and consumer threads live behind this contract; the
/// channel builder only records which adapter a generic channel uses.
pub trait InboundEventChannelAdapter: Send + Sync {
    /// Short name of the adapter implementation, used in logs.
    fn adapter_type(&self) -> &str;
}
