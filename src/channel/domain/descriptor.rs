//! Declarative descriptions of key and tenant detection.
//!
//! Descriptors are derived from a realized pipeline, never written by hand.
//! Each serializes as an object with exactly one populated field, for example
//! `{"fixedValue": "created"}` or `{"pointerExpression": "/tenant"}`.

use crate::pipeline::DetectorKind;
use serde::{Deserialize, Serialize};

/// How the event key of an inbound message is detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyDescriptor {
    /// Every event gets the same key.
    #[serde(rename = "fixedValue")]
    Fixed(String),
    /// The key is read from a top-level JSON field.
    #[serde(rename = "fieldName")]
    FieldReference(String),
    /// The key is read with a JSON pointer expression.
    #[serde(rename = "pointerExpression")]
    PointerExpression(String),
    /// The key is read with an XPath expression.
    #[serde(rename = "xPathExpression")]
    XPathExpression(String),
}

impl KeyDescriptor {
    /// Describes a key detector, or returns `None` when the detector has no
    /// declarative form.
    #[must_use]
    pub fn from_detector_kind(kind: DetectorKind) -> Option<Self> {
        match kind {
            DetectorKind::Fixed(value) => Some(Self::Fixed(value)),
            DetectorKind::JsonField(field) => Some(Self::FieldReference(field)),
            DetectorKind::JsonPointer(expression) => Some(Self::PointerExpression(expression)),
            DetectorKind::XPath(expression) => Some(Self::XPathExpression(expression)),
            DetectorKind::Custom => None,
        }
    }
}

/// How the tenant of an inbound message is detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenantDescriptor {
    /// Every event belongs to the same tenant.
    #[serde(rename = "fixedValue")]
    Fixed(String),
    /// The tenant is read with a JSON pointer expression.
    #[serde(rename = "pointerExpression")]
    PointerExpression(String),
    /// The tenant is read with an XPath expression.
    #[serde(rename = "xPathExpression")]
    XPathExpression(String),
}

impl TenantDescriptor {
    /// Describes a tenant detector, or returns `None` when the detector has no
    /// declarative form. Field references are not a tenant shape.
    #[must_use]
    pub fn from_detector_kind(kind: DetectorKind) -> Option<Self> {
        match kind {
            DetectorKind::Fixed(value) => Some(Self::Fixed(value)),
            DetectorKind::JsonPointer(expression) => Some(Self::PointerExpression(expression)),
            DetectorKind::XPath(expression) => Some(Self::XPathExpression(expression)),
            DetectorKind::JsonField(_) | DetectorKind::Custom => None,
        }
    }
}
