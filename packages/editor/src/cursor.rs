//! # Cursor Translation
//!
//! Maps caret positions between the serialized markup shown in the code
//! editor (line/column) and the block editor (block index/text offset).
//!
//! The markup is one block per line, each line opening with a start tag:
//!
//! ```text
//! <p>Hello</p>
//! <h1>Title with <b>bold</b> &amp; more</h1>
//! ```
//!
//! Both directions run the same left-to-right scan. Text offsets count
//! visible characters only: inline tags are skipped and an entity counts as
//! one character. Lines are 1-based. Columns follow the code editor's
//! convention, where column 1 sits before the first character of a line.

use serde::{Deserialize, Serialize};
use tracing::trace;

const TAG_OPEN: char = '<';
const TAG_CLOSE: char = '>';
const ENTITY_OPEN: char = '&';
const ENTITY_CLOSE: char = ';';

/// Added to the scan column when reporting a caret in the code editor
const LINEAR_COLUMN_ADJUSTMENT: usize = 2;

/// Subtracted from the scan offset when reporting a caret in a block
const BLOCK_OFFSET_ADJUSTMENT: i64 = 1;

/// Caret in the code editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPosition {
    pub line_number: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line_number: usize, column: usize) -> Self {
        Self {
            line_number,
            column,
        }
    }
}

/// Caret in the block editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPosition {
    pub block_number: usize,
    pub offset: usize,
}

impl BlockPosition {
    pub fn new(block_number: usize, offset: usize) -> Self {
        Self {
            block_number,
            offset,
        }
    }
}

/// Scanner state after some prefix of the markup.
///
/// `block` is -1 until the first start tag is seen and `text_pos` is -1
/// while inside a block's start tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub line: usize,
    pub column: usize,
    pub block: i64,
    pub text_pos: i64,
    pub in_block_start_tag: bool,
    pub in_tag: bool,
    pub in_entity: bool,
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 0,
            block: -1,
            text_pos: 0,
            in_block_start_tag: false,
            in_tag: false,
            in_entity: false,
        }
    }

    /// Move the line/column cursor over `ch`
    pub fn move_cursor(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
            self.text_pos += 1;
        } else {
            self.column += 1;
        }
    }

    /// Apply the content transition for `ch`, which must already have been
    /// passed to [`ScanState::move_cursor`]
    pub fn consume(&mut self, ch: char) {
        if ch == '\n' {
            return;
        }

        if self.column == 1 {
            if ch == TAG_OPEN {
                self.block += 1;
                self.in_block_start_tag = true;
                self.text_pos = -1;
            } else {
                self.text_pos += 1;
            }
            return;
        }

        if self.in_block_start_tag {
            if ch == TAG_CLOSE {
                self.in_block_start_tag = false;
                self.text_pos = 0;
            }
        } else if self.in_tag {
            if ch == TAG_CLOSE {
                self.in_tag = false;
                self.text_pos -= 1;
            }
        } else if self.in_entity {
            if ch == ENTITY_CLOSE {
                self.in_entity = false;
                self.text_pos += 1;
            }
        } else if ch == TAG_OPEN {
            self.in_tag = true;
            self.text_pos += 1;
        } else if ch == ENTITY_OPEN {
            self.in_entity = true;
        } else {
            self.text_pos += 1;
        }
    }

    pub fn advance(&mut self, ch: char) {
        self.move_cursor(ch);
        self.consume(ch);
    }

    pub fn is_inside_markup(&self) -> bool {
        self.in_block_start_tag || self.in_tag || self.in_entity
    }

    fn block_position(&self) -> BlockPosition {
        BlockPosition {
            block_number: self.block.max(0) as usize,
            offset: (self.text_pos - BLOCK_OFFSET_ADJUSTMENT).max(0) as usize,
        }
    }
}

/// Translate a code-editor caret into a block caret.
///
/// Positions past the end of the markup map to block 0, offset 0. A line
/// number past the target's line stops the scan at the end of the target
/// line.
pub fn to_block_coordinates(markup: &str, line_number: usize, column: usize) -> BlockPosition {
    let mut state = ScanState::new();

    for ch in markup.chars() {
        state.move_cursor(ch);
        if state.line > line_number || (state.line == line_number && state.column == column) {
            let position = state.block_position();
            trace!(line_number, column, block = position.block_number, offset = position.offset, "Mapped to block");
            return position;
        }
        state.consume(ch);
    }

    trace!(line_number, column, "Cursor is past the end of the markup");
    BlockPosition::default()
}

/// Translate a block caret into a code-editor caret.
///
/// Stops at the first character after which the scan sits on the target
/// block and offset, even if that character opens an inline tag.
/// Returns line 1, column 0 when the block or offset does not exist.
pub fn to_linear_coordinates(markup: &str, block_number: usize, offset: usize) -> CursorPosition {
    let not_found = CursorPosition::new(1, 0);
    let (Ok(target_block), Ok(target_offset)) = (i64::try_from(block_number), i64::try_from(offset))
    else {
        trace!(block_number, offset, "Block position out of range");
        return not_found;
    };

    let mut state = ScanState::new();
    for ch in markup.chars() {
        state.advance(ch);
        if state.block == target_block && state.text_pos == target_offset {
            let position = CursorPosition::new(state.line, state.column + LINEAR_COLUMN_ADJUSTMENT);
            trace!(block_number, offset, line = position.line_number, column = position.column, "Mapped to line");
            return position;
        }
    }

    trace!(block_number, offset, "Block position not found in markup");
    not_found
}

impl From<BlockPosition> for (usize, usize) {
    fn from(position: BlockPosition) -> Self {
        (position.block_number, position.offset)
    }
}

impl From<CursorPosition> for (usize, usize) {
    fn from(position: CursorPosition) -> Self {
        (position.line_number, position.column)
    }
}
