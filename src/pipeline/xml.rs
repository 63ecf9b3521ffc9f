//! XML representation stages.
//!
//! [`XmlDocument`] owns validated XML text and re-reads it with `roxmltree`
//! whenever an expression is evaluated, which keeps the representation
//! `Send + Sync` and free of borrowed lifetimes.
//!
//! Path evaluation supports the subset of XPath that channel definitions use
//! in practice:
//!
//! - absolute child paths, `/order/customer/id`
//! - descendant search, `//customer/id`
//! - a trailing attribute step, `/order/@type`
//! - a trailing `text()` step, `/order/type/text()`
//!
//! The first matching node's trimmed text content is the result.
//!
//! Anything else is rejected with [`XmlDocumentError::UnsupportedExpression`]
//! when the expression is evaluated. That includes prefixed names such as
//! `/a/x:y`, predicates such as `[1]` or `[@sku='a']`, wildcards, axes other
//! than child and descendant, and functions other than a trailing `text()`.

use super::{
    DetectorKind, EventPayload, EventProcessingError, InboundEvent, InboundEventDeserializer,
    InboundEventKeyDetector, InboundEventPayloadExtractor, InboundEventTenantDetector,
};
use roxmltree::{Document, Node};
use serde_json::Value;
use thiserror::Error;

/// Deserializer type tag for XML channels.
pub const XML_DESERIALIZER_TYPE: &str = "xml";

/// Errors raised while reading an XML document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum XmlDocumentError {
    /// The text is not well-formed XML.
    #[error("malformed XML document: {0}")]
    Malformed(String),

    /// The path expression is outside the supported subset.
    #[error("unsupported XPath expression '{0}'")]
    UnsupportedExpression(String),
}

/// Owned, well-formed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    source: String,
}

impl XmlDocument {
    /// Parses and validates XML text.
    ///
    /// # Errors
    ///
    /// Returns [`XmlDocumentError::Malformed`] when the text is not
    /// well-formed.
    pub fn parse(source: impl Into<String>) -> Result<Self, XmlDocumentError> {
        let text = source.into();
        Document::parse(&text).map_err(|err| XmlDocumentError::Malformed(err.to_string()))?;
        Ok(Self { source: text })
    }

    /// Returns the XML text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn document(&self) -> Result<Document<'_>, XmlDocumentError> {
        Document::parse(&self.source).map_err(|err| XmlDocumentError::Malformed(err.to_string()))
    }

    /// Returns the root element's local name.
    ///
    /// # Errors
    ///
    /// Returns [`XmlDocumentError::Malformed`] if the text cannot be re-read.
    pub fn root_name(&self) -> Result<String, XmlDocumentError> {
        Ok(self.document()?.root_element().tag_name().name().to_owned())
    }

    /// Evaluates a path expression and returns the first match's text.
    ///
    /// # Errors
    ///
    /// Returns [`XmlDocumentError::UnsupportedExpression`] for expressions
    /// outside the supported subset.
    pub fn select_text(&self, expression: &str) -> Result<Option<String>, XmlDocumentError> {
        let path = XmlPath::parse(expression)?;
        let document = self.document()?;
        let Some((first, rest)) = path.elements.split_first() else {
            return Err(XmlDocumentError::UnsupportedExpression(
                expression.to_owned(),
            ));
        };

        let root = document.root_element();
        let mut candidates: Vec<Node<'_, '_>> = if path.descendant {
            root.descendants()
                .filter(|node| is_element_named(*node, first))
                .collect()
        } else {
            std::iter::once(root)
                .filter(|node| is_element_named(*node, first))
                .collect()
        };

        for step in rest {
            candidates = candidates
                .into_iter()
                .flat_map(|node| {
                    node.children()
                        .filter(move |child| is_element_named(*child, step))
                })
                .collect();
        }

        let selected = candidates.first().and_then(|node| match path.terminal {
            Terminal::Attribute(name) => node.attribute(name).map(|value| value.trim().to_owned()),
            Terminal::Text => text_content(*node),
        });
        Ok(selected)
    }

    /// Returns the root's child elements as name/text pairs in document order.
    ///
    /// # Errors
    ///
    /// Returns [`XmlDocumentError::Malformed`] if the text cannot be re-read.
    pub fn child_elements(&self) -> Result<Vec<(String, Option<String>)>, XmlDocumentError> {
        let document = self.document()?;
        let children = document
            .root_element()
            .children()
            .filter(Node::is_element)
            .map(|node| (node.tag_name().name().to_owned(), text_content(node)))
            .collect();
        Ok(children)
    }
}

fn is_element_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn text_content(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .descendants()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminal<'e> {
    Text,
    Attribute(&'e str),
}

#[derive(Debug)]
struct XmlPath<'e> {
    descendant: bool,
    elements: Vec<&'e str>,
    terminal: Terminal<'e>,
}

impl<'e> XmlPath<'e> {
    fn parse(expression: &'e str) -> Result<Self, XmlDocumentError> {
        let unsupported = || XmlDocumentError::UnsupportedExpression(expression.to_owned());
        let trimmed = expression.trim();
        let (descendant, rest) = if let Some(rest) = trimmed.strip_prefix("//") {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('/') {
            (false, rest)
        } else {
            return Err(unsupported());
        };

        let mut segments: Vec<&str> = rest.split('/').collect();
        let terminal = match segments.last().copied() {
            Some("text()") => {
                segments.pop();
                Terminal::Text
            }
            Some(last) => match last.strip_prefix('@') {
                Some(attribute) if is_valid_name(attribute) => {
                    segments.pop();
                    Terminal::Attribute(attribute)
                }
                Some(_) => return Err(unsupported()),
                None => Terminal::Text,
            },
            None => return Err(unsupported()),
        };

        if segments.is_empty() || !segments.iter().all(|segment| is_valid_name(segment)) {
            return Err(unsupported());
        }

        Ok(Self {
            descendant,
            elements: segments,
            terminal,
        })
    }
}

fn is_valid_name(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|character| character.is_alphanumeric() || matches!(character, '-' | '_' | '.'))
}

/// Parses the raw body as an XML document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringToXmlDocumentDeserializer;

impl InboundEventDeserializer<XmlDocument> for StringToXmlDocumentDeserializer {
    fn deserializer_type(&self) -> &str {
        XML_DESERIALIZER_TYPE
    }

    fn deserialize(&self, event: &InboundEvent) -> Result<XmlDocument, EventProcessingError> {
        XmlDocument::parse(event.body())
            .map_err(|err| EventProcessingError::deserialization(XML_DESERIALIZER_TYPE, err))
    }
}

/// Key detector evaluating an XPath expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPathKeyDetector {
    expression: String,
}

impl XPathKeyDetector {
    /// Creates a detector for the given expression.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Returns the XPath expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl InboundEventKeyDetector<XmlDocument> for XPathKeyDetector {
    fn detect_event_key(&self, event: &XmlDocument) -> Result<Option<String>, EventProcessingError> {
        event
            .select_text(&self.expression)
            .map_err(|err| EventProcessingError::detection("key", err))
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::XPath(self.expression.clone())
    }
}

/// Tenant detector evaluating an XPath expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPathTenantDetector {
    expression: String,
}

impl XPathTenantDetector {
    /// Creates a detector for the given expression.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Returns the XPath expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl InboundEventTenantDetector<XmlDocument> for XPathTenantDetector {
    fn detect_tenant_id(
        &self,
        event: &XmlDocument,
    ) -> Result<Option<String>, EventProcessingError> {
        event
            .select_text(&self.expression)
            .map_err(|err| EventProcessingError::detection("tenant", err))
    }

    fn kind(&self) -> DetectorKind {
        DetectorKind::XPath(self.expression.clone())
    }
}

/// Maps each child element of the root into the payload.
///
/// Element text becomes a string value; empty elements map to `null`. When an
/// element name repeats, the last occurrence wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlElementsToMapPayloadExtractor;

impl InboundEventPayloadExtractor<XmlDocument> for XmlElementsToMapPayloadExtractor {
    fn extract_payload(&self, event: &XmlDocument) -> Result<EventPayload, EventProcessingError> {
        let elements = event
            .child_elements()
            .map_err(|err| EventProcessingError::PayloadExtraction(err.to_string()))?;
        Ok(elements
            .into_iter()
            .map(|(name, text)| (name, text.map_or(Value::Null, Value::String)))
            .collect())
    }
}
