pub mod cursor;
pub mod init;
pub mod modules;
pub mod paste;
pub mod render;

pub use cursor::{cursor, CursorArgs};
pub use init::{init, InitArgs};
pub use modules::{modules, ModulesArgs};
pub use paste::{paste, PasteArgs};
pub use render::{render, RenderArgs};

use anyhow::{Context, Result};
use pagecraft_document::Page;
use std::path::Path;

/// Read and validate a page document
pub(crate) fn read_page(path: &Path) -> Result<Page> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Page::from_json(&source).with_context(|| format!("Invalid page {}", path.display()))
}
