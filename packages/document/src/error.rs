use crate::edit::EditType;
use thiserror::Error;

/// A node that breaks the page component invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid component at '{node}': {field}")]
pub struct ValidationError {
    /// Slash-separated ids from the root down to the offending node
    pub node: String,
    /// What is wrong with it
    pub field: InvalidField,
}

/// The part of a node that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidField {
    #[error("missing or empty id")]
    Id,

    #[error("missing or empty module")]
    Module,

    #[error("missing attributes")]
    Attributes,

    #[error("children must be a list")]
    Children,

    #[error("node must be an object")]
    NotAnObject,
}

/// Inconsistent page edit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("{kind:?} is not a {expected} operation")]
    WrongKind {
        kind: EditType,
        expected: &'static str,
    },

    #[error("{0:?} requires a source path")]
    MissingSource(EditType),

    #[error("{0:?} must not carry a source path")]
    UnexpectedSource(EditType),

    #[error("{0:?} requires a pasted component")]
    MissingPastedComponent(EditType),

    #[error("{0:?} must not carry a pasted component")]
    UnexpectedPastedComponent(EditType),

    #[error("Pasted component is invalid: {0}")]
    InvalidPastedComponent(#[from] ValidationError),
}

/// Error type for the document model
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Edit(#[from] EditError),
}
