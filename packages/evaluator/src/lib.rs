//! # Pagecraft Evaluator
//!
//! Turns page component trees into renderable element trees.
//!
//! ## Pipeline
//!
//! ```text
//! PageComponent tree
//!        ↓  collect_module_ids
//! set of module ids  →  ModuleRegistry::load_all
//!        ↓  Resolver::resolve
//! Element tree (identity keys attached)
//! ```
//!
//! Collecting first bounds loading to the page's distinct modules, however
//! often each one is reused across nodes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_evaluator::{render_page, KeyGenerator};
//! use pagecraft_registry::{DirectoryLoader, ModuleRegistry};
//!
//! let registry = ModuleRegistry::new(DirectoryLoader::new("modules"));
//! let keys = KeyGenerator::new();
//! let element = render_page(&registry, &keys, &page).await?;
//! ```

pub mod collect;
pub mod element;
pub mod error;
pub mod keys;
pub mod resolver;

#[cfg(test)]
mod tests_resolver;

pub use collect::{collect_module_ids, collect_page_module_ids, ModuleCollector};
pub use element::{Element, KEY_ATTRIBUTE};
pub use error::{RenderError, RenderResult};
pub use keys::{KeyGenerator, KEY_PREFIX, KEY_WRAP};
pub use resolver::{render_page, Resolver};
