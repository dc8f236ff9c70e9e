//! # Paste Parsing
//!
//! Turns clipboard text into a component subtree.
//!
//! Parsing never fails. Text that is not a valid serialized component
//! becomes a plain-text leaf holding the text verbatim, so a paste can look
//! wrong but can never lose the clipboard content.

use pagecraft_document::{validate_value, AttributeValue, Attributes, PageComponent, ValidationError};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Id given to plain-text fallback nodes
pub const FALLBACK_ID: &str = "pasted-text";

/// Module that renders plain text
pub const TEXT_MODULE: &str = "core.Text";

/// Attribute holding the text of a plain-text node
pub const TEXT_ATTRIBUTE: &str = "text";

/// Why pasted text was not accepted as a component
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PasteRecovery {
    #[error("not a structured document: {0}")]
    Malformed(String),

    #[error("not a valid component: {0}")]
    InvalidShape(#[from] ValidationError),
}

/// Parse pasted text, falling back to a plain-text leaf
pub fn parse_paste(text: &str) -> PageComponent {
    match try_parse_paste(text) {
        Ok(component) => {
            debug!(nodes = component.node_count(), "Pasted component accepted");
            component
        }
        Err(reason @ PasteRecovery::InvalidShape(_)) => {
            warn!(reason = %reason, len = text.len(), "Pasted document rejected, inserting as text");
            fallback_component(text)
        }
        Err(reason) => {
            debug!(reason = %reason, len = text.len(), "Pasted text is not a component");
            fallback_component(text)
        }
    }
}

/// Parse pasted text, reporting why it is not a component
pub fn try_parse_paste(text: &str) -> Result<PageComponent, PasteRecovery> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| PasteRecovery::Malformed(e.to_string()))?;
    validate_value(&value)?;
    serde_json::from_value(value).map_err(|e| PasteRecovery::Malformed(e.to_string()))
}

/// Plain-text leaf that displays `text` verbatim
pub fn fallback_component(text: &str) -> PageComponent {
    let mut attributes = Attributes::new();
    attributes.insert(TEXT_ATTRIBUTE.to_string(), AttributeValue::from(text));
    PageComponent::leaf(FALLBACK_ID, TEXT_MODULE, attributes)
}

/// The raw text held by a fallback node, if `component` is one
pub fn fallback_text(component: &PageComponent) -> Option<&str> {
    if component.id != FALLBACK_ID || component.module != TEXT_MODULE {
        return None;
    }
    component
        .attributes
        .get(TEXT_ATTRIBUTE)
        .and_then(AttributeValue::as_str)
}

/// Serialize a subtree for the clipboard
pub fn to_clipboard_text(component: &PageComponent) -> serde_json::Result<String> {
    serde_json::to_string_pretty(component)
}
