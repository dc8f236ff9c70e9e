//! # Page Documents
//!
//! A page wraps exactly one root component plus descriptive metadata.
//! Pages are values: edits produce a new page rather than patching nodes
//! in place.

use crate::component::{validate_value, PageComponent};
use crate::result::DocumentResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Schema identifier of the serialized document
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Permission tag required to view the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    pub root_component: PageComponent,
}

impl Page {
    pub fn new(root_component: PageComponent) -> Self {
        Self {
            schema: None,
            description: String::new(),
            permission: None,
            root_component,
        }
    }

    /// Parse a page and check its component tree
    pub fn from_json(source: &str) -> DocumentResult<Self> {
        let value: Value = serde_json::from_str(source)?;

        // Validate the raw tree first so a bad node is reported by path
        // rather than as a serde field error.
        if let Some(root) = value.get("rootComponent") {
            validate_value(root)?;
        }

        let page: Page = serde_json::from_value(value)?;
        Ok(page)
    }

    pub fn to_json_pretty(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
