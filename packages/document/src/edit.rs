//! # Page Edits
//!
//! Vocabulary of structural edits produced by the editor UI.
//!
//! An edit only *describes* an operation. Applying it to a page is the job
//! of whoever owns the authoritative page state.
//!
//! ## Consistency rules
//!
//! | kind   | source path | pasted component |
//! |--------|-------------|------------------|
//! | move   | required    | absent           |
//! | paste  | absent      | required, valid  |
//! | delete | absent      | absent           |
//! | none   | absent      | absent           |
//!
//! A delete addresses the node to remove through `destination_path`.

use crate::component::PageComponent;
use crate::error::EditError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditType {
    NoMove,
    MoveBeforeDestination,
    MoveAfterDestination,
    MoveIntoDestination,
    PasteBeforeDestination,
    PasteOverDestination,
    PasteAfterDestination,
    PasteIntoDestinationAtBottom,
    PasteIntoDestinationAtTop,
    Delete,
}

impl EditType {
    pub fn is_move(self) -> bool {
        matches!(
            self,
            EditType::MoveBeforeDestination
                | EditType::MoveAfterDestination
                | EditType::MoveIntoDestination
        )
    }

    pub fn is_paste(self) -> bool {
        matches!(
            self,
            EditType::PasteBeforeDestination
                | EditType::PasteOverDestination
                | EditType::PasteAfterDestination
                | EditType::PasteIntoDestinationAtBottom
                | EditType::PasteIntoDestinationAtTop
        )
    }

    pub fn is_delete(self) -> bool {
        self == EditType::Delete
    }

    pub fn is_noop(self) -> bool {
        self == EditType::NoMove
    }
}

/// One structural edit requested by the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEdit {
    /// Address of the node being moved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,

    pub move_type: EditType,

    /// Address of the target node
    #[serde(default)]
    pub destination_path: String,

    /// Subtree to insert, for paste operations only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pasted_component: Option<PageComponent>,
}

impl PageEdit {
    pub fn no_move() -> Self {
        Self {
            source_path: None,
            move_type: EditType::NoMove,
            destination_path: String::new(),
            pasted_component: None,
        }
    }

    pub fn move_node(
        kind: EditType,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self, EditError> {
        if !kind.is_move() {
            return Err(EditError::WrongKind {
                kind,
                expected: "move",
            });
        }

        Ok(Self {
            source_path: Some(source.into()),
            move_type: kind,
            destination_path: destination.into(),
            pasted_component: None,
        })
    }

    pub fn paste(
        kind: EditType,
        destination: impl Into<String>,
        component: PageComponent,
    ) -> Result<Self, EditError> {
        if !kind.is_paste() {
            return Err(EditError::WrongKind {
                kind,
                expected: "paste",
            });
        }
        component.validate()?;

        Ok(Self {
            source_path: None,
            move_type: kind,
            destination_path: destination.into(),
            pasted_component: Some(component),
        })
    }

    pub fn delete(destination: impl Into<String>) -> Self {
        Self {
            source_path: None,
            move_type: EditType::Delete,
            destination_path: destination.into(),
            pasted_component: None,
        }
    }

    /// Re-check an edit that arrived in serialized form
    pub fn validate(&self) -> Result<(), EditError> {
        let kind = self.move_type;

        match (&self.source_path, kind.is_move()) {
            (None, true) => return Err(EditError::MissingSource(kind)),
            (Some(_), false) => return Err(EditError::UnexpectedSource(kind)),
            _ => {}
        }

        match (&self.pasted_component, kind.is_paste()) {
            (None, true) => Err(EditError::MissingPastedComponent(kind)),
            (Some(_), false) => Err(EditError::UnexpectedPastedComponent(kind)),
            (Some(component), true) => Ok(component.validate()?),
            (None, false) => Ok(()),
        }
    }
}
