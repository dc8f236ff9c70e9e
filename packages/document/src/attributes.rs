//! # Attribute Values
//!
//! Open attribute maps passed through to renderers.
//!
//! Nested lists and maps sit behind `Arc`, so cloning an [`Attributes`] map is
//! a shallow copy: the top-level entries are duplicated while nested values
//! stay shared with the source tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Attribute map of a page component (ordered for deterministic output)
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Arc<Vec<AttributeValue>>),
    Map(Arc<Attributes>),
}

impl AttributeValue {
    pub fn list(items: Vec<AttributeValue>) -> Self {
        AttributeValue::List(Arc::new(items))
    }

    pub fn map(entries: Attributes) -> Self {
        AttributeValue::Map(Arc::new(entries))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}
