//! # Pagecraft Editor
//!
//! Editor-side helpers that sit between the page document and the two
//! editing surfaces.
//!
//! ```text
//! clipboard text ──parse_paste──▶ PageComponent ──▶ PageEdit::paste
//!
//! code editor (line, column) ◀──cursor──▶ block editor (block, offset)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{parse_paste, to_block_coordinates};
//!
//! let component = parse_paste(&clipboard);
//! let caret = to_block_coordinates(&markup, 2, 5);
//! ```

pub mod cursor;
pub mod paste;

pub use cursor::{
    to_block_coordinates, to_linear_coordinates, BlockPosition, CursorPosition, ScanState,
};
pub use paste::{
    fallback_component, fallback_text, parse_paste, to_clipboard_text, try_parse_paste,
    PasteRecovery, FALLBACK_ID, TEXT_ATTRIBUTE, TEXT_MODULE,
};
