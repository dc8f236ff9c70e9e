//! # Pagecraft Document
//!
//! Data model for declarative pages: the component tree, its attribute
//! values, and the vocabulary of structural edits over it.
//!
//! This crate holds invariants only. Loading renderers lives in
//! `pagecraft-registry`, turning trees into elements in
//! `pagecraft-evaluator`.

pub mod attributes;
pub mod component;
pub mod edit;
pub mod error;
pub mod page;
pub mod result;
pub mod visitor;

pub use attributes::{AttributeValue, Attributes};
pub use component::{validate_value, PageComponent};
pub use edit::{EditType, PageEdit};
pub use error::{DocumentError, EditError, InvalidField, ValidationError};
pub use page::Page;
pub use result::DocumentResult;
pub use visitor::{walk_component, Visitor};
