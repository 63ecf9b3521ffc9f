//! JSON representation stages backed by `serde_json::Value`.

use super::{
    DetectorKind, EventPayload, EventProcessingError, InboundEvent, InboundEventDeserializer,
    InboundEventKeyDetector, InboundEventPayloadExtractor, InboundEventTenantDetector,
};
use serde_json::Value;

/// Deserializer type tag for JSON channels.
pub const JSON_DESERIALIZER_TYPE: &str = "json";

/// Parses the raw body as a JSON document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringToJsonDeserializer;

impl InboundEventDeserializer<Value> for StringToJsonDeserializer {
    fn deserializer_type(&self) -> &str {
        JSON_DESERIALIZER_TYPE
    }

    fn deserialize(&self, event: &InboundEvent) -> Result<Value, EventProcessingError> {
        serde_json::from_str(event.body())
            .map_err(|err| EventProcessingError::deserialization(JSON_DESERIALIZER_TYPE, err))
    }
}

/// Renders a scalar JSON value as a detected string.
///
/// Strings are returned verbatim, numbers and booleans as their JSON text.
/// Null, arrays and objects carry no usable value.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Key detector reading a top-level field of a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFieldKeyDetector {
    field: String,
}

impl JsonFieldKeyDetector {
    /// Creates a detector for the given field name.
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl InboundEventKeyDetector<Value> for JsonFieldKeyDetector {
    fn detect_event_key(&self, event: &Value) -> Result<Option<String>, EventProcessingError> {
        Ok(event.get(&self.field).and_then(scalar_text))
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::JsonField(self.field.clone())
    }
}

/// Validates an RFC 6901 pointer expression.
///
/// `serde_json` treats any pointer without a leading slash as unresolvable,
/// so such expressions are reported instead of silently yielding nothing.
fn checked_pointer<'a>(
    stage: &'static str,
    expression: &str,
    event: &'a Value,
) -> Result<Option<&'a Value>, EventProcessingError> {
    if !expression.is_empty() && !expression.starts_with('/') {
        return Err(EventProcessingError::detection(
            stage,
            format!("JSON pointer '{expression}' must be empty or start with '/'"),
        ));
    }
    Ok(event.pointer(expression))
}

/// Key detector evaluating a JSON pointer expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointerKeyDetector {
    expression: String,
}

impl JsonPointerKeyDetector {
    /// Creates a detector for the given pointer expression.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Returns the pointer expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl InboundEventKeyDetector<Value> for JsonPointerKeyDetector {
    fn detect_event_key(&self, event: &Value) -> Result<Option<String>, EventProcessingError> {
        Ok(checked_pointer("key", &self.expression, event)?.and_then(scalar_text))
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::JsonPointer(self.expression.clone())
    }
}

/// Tenant detector evaluating a JSON pointer expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointerTenantDetector {
    expression: String,
}

impl JsonPointerTenantDetector {
    /// Creates a detector for the given pointer expression.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Returns the pointer expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl InboundEventTenantDetector<Value> for JsonPointerTenantDetector {
    fn detect_tenant_id(&self, event: &Value) -> Result<Option<String>, EventProcessingError> {
        Ok(checked_pointer("tenant", &self.expression, event)?.and_then(scalar_text))
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::JsonPointer(self.expression.clone())
    }
}

/// Maps every top-level field of a JSON object into the payload.
///
/// Non-object documents produce an empty payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFieldsToMapPayloadExtractor;

impl InboundEventPayloadExtractor<Value> for JsonFieldsToMapPayloadExtractor {
    fn extract_payload(&self, event: &Value) -> Result<EventPayload, EventProcessingError> {
        let payload = event
            .as_object()
            .map(|fields| {
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(payload)
    }
}
