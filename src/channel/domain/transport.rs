//! Inbound channel transport configuration value objects.

use super::ParseTransportKindError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Settings for a channel consuming a JMS destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JmsInboundChannelSettings {
    destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subscription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    concurrency: Option<String>,
}

impl JmsInboundChannelSettings {
    /// Creates settings for the given destination.
    #[must_use]
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            selector: None,
            subscription: None,
            concurrency: None,
        }
    }

    /// Sets the message selector.
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Sets the durable subscription name.
    #[must_use]
    pub fn with_subscription(mut self, subscription: impl Into<String>) -> Self {
        self.subscription = Some(subscription.into());
        self
    }

    /// Sets the listener concurrency, for example `"3-10"`.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: impl Into<String>) -> Self {
        self.concurrency = Some(concurrency.into());
        self
    }

    /// Returns the destination name.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the message selector.
    #[must_use]
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Returns the subscription name.
    #[must_use]
    pub fn subscription(&self) -> Option<&str> {
        self.subscription.as_deref()
    }

    /// Returns the listener concurrency.
    #[must_use]
    pub fn concurrency(&self) -> Option<&str> {
        self.concurrency.as_deref()
    }
}

/// Settings for a channel consuming RabbitMQ queues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RabbitInboundChannelSettings {
    queues: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclusive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    admin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    executor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ack_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    concurrency: Option<String>,
}

impl RabbitInboundChannelSettings {
    /// Creates settings consuming the given queue.
    #[must_use]
    pub fn new(queue: impl Into<String>) -> Self {
        Self {
            queues: vec![queue.into()],
            exclusive: None,
            priority: None,
            admin: None,
            executor: None,
            ack_mode: None,
            concurrency: None,
        }
    }

    /// Adds a queue; queues keep insertion order and ignore repeats.
    #[must_use]
    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        push_unique(&mut self.queues, queue.into());
        self
    }

    /// Sets whether the consumer is exclusive.
    #[must_use]
    pub const fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = Some(exclusive);
        self
    }

    /// Sets the consumer priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the broker administrator reference.
    #[must_use]
    pub fn with_admin(mut self, admin: impl Into<String>) -> Self {
        self.admin = Some(admin.into());
        self
    }

    /// Sets the listener executor reference.
    #[must_use]
    pub fn with_executor(mut self, executor: impl Into<String>) -> Self {
        self.executor = Some(executor.into());
        self
    }

    /// Sets the acknowledgement mode.
    #[must_use]
    pub fn with_ack_mode(mut self, ack_mode: impl Into<String>) -> Self {
        self.ack_mode = Some(ack_mode.into());
        self
    }

    /// Sets the listener concurrency.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: impl Into<String>) -> Self {
        self.concurrency = Some(concurrency.into());
        self
    }

    /// Returns the queue names in insertion order.
    #[must_use]
    pub fn queues(&self) -> &[String] {
        &self.queues
    }

    /// Returns the exclusive flag.
    #[must_use]
    pub const fn exclusive(&self) -> Option<bool> {
        self.exclusive
    }

    /// Returns the consumer priority.
    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Returns the administrator reference.
    #[must_use]
    pub fn admin(&self) -> Option<&str> {
        self.admin.as_deref()
    }

    /// Returns the executor reference.
    #[must_use]
    pub fn executor(&self) -> Option<&str> {
        self.executor.as_deref()
    }

    /// Returns the acknowledgement mode.
    #[must_use]
    pub fn ack_mode(&self) -> Option<&str> {
        self.ack_mode.as_deref()
    }

    /// Returns the listener concurrency.
    #[must_use]
    pub fn concurrency(&self) -> Option<&str> {
        self.concurrency.as_deref()
    }
}

/// Settings for a channel consuming Kafka topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KafkaInboundChannelSettings {
    topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    client_id_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    concurrency: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    custom_properties: BTreeMap<String, String>,
}

impl KafkaInboundChannelSettings {
    /// Creates settings consuming the given topic.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topics: vec![topic.into()],
            group_id: None,
            client_id_prefix: None,
            concurrency: None,
            custom_properties: BTreeMap::new(),
        }
    }

    /// Adds a topic; topics keep insertion order and ignore repeats.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        push_unique(&mut self.topics, topic.into());
        self
    }

    /// Sets the consumer group identifier.
    #[must_use]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Sets the client identifier prefix.
    #[must_use]
    pub fn with_client_id_prefix(mut self, client_id_prefix: impl Into<String>) -> Self {
        self.client_id_prefix = Some(client_id_prefix.into());
        self
    }

    /// Sets the listener concurrency.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: impl Into<String>) -> Self {
        self.concurrency = Some(concurrency.into());
        self
    }

    /// Sets a consumer property; a later value replaces an earlier one.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_properties.insert(name.into(), value.into());
        self
    }

    /// Returns the topic names in insertion order.
    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Returns the consumer group identifier.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Returns the client identifier prefix.
    #[must_use]
    pub fn client_id_prefix(&self) -> Option<&str> {
        self.client_id_prefix.as_deref()
    }

    /// Returns the listener concurrency.
    #[must_use]
    pub fn concurrency(&self) -> Option<&str> {
        self.concurrency.as_deref()
    }

    /// Returns the consumer properties.
    #[must_use]
    pub const fn custom_properties(&self) -> &BTreeMap<String, String> {
        &self.custom_properties
    }
}

/// Transport a channel consumes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "channelType", rename_all = "lowercase")]
pub enum ChannelTransport {
    /// Caller-supplied adapter with no declarative settings.
    #[default]
    Generic,
    /// JMS destination.
    Jms(JmsInboundChannelSettings),
    /// Kafka topics.
    Kafka(KafkaInboundChannelSettings),
    /// RabbitMQ queues.
    Rabbit(RabbitInboundChannelSettings),
}

impl ChannelTransport {
    /// Returns the transport kind.
    #[must_use]
    pub const fn kind(&self) -> TransportKind {
        match self {
            Self::Generic => TransportKind::Generic,
            Self::Jms(_) => TransportKind::Jms,
            Self::Kafka(_) => TransportKind::Kafka,
            Self::Rabbit(_) => TransportKind::Rabbit,
        }
    }
}

/// Discriminant of [`ChannelTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Caller-supplied adapter.
    Generic,
    /// JMS.
    Jms,
    /// Kafka.
    Kafka,
    /// RabbitMQ.
    Rabbit,
}

impl TransportKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Jms => "jms",
            Self::Kafka => "kafka",
            Self::Rabbit => "rabbit",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TransportKind {
    type Error = ParseTransportKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "generic" => Ok(Self::Generic),
            "jms" => Ok(Self::Jms),
            "kafka" => Ok(Self::Kafka),
            "rabbit" => Ok(Self::Rabbit),
            _ => Err(ParseTransportKindError(value.to_owned())),
        }
    }
}
