//! # Tree Resolution
//!
//! Converts a page component tree into an element tree.
//!
//! ## Contract
//!
//! - Every module in the tree must already be loaded. A missing module is a
//!   caller bug and fails the whole resolution.
//! - The input tree is never mutated. Attribute maps are shallow-copied;
//!   nested values stay shared with the source.
//! - Nodes whose attributes already define `key` keep it untouched. All
//!   other nodes get a fresh generated key. Keys come from a caller-owned
//!   [`KeyGenerator`], so they keep rising across renders that share it.
//! - Children keep their order.

use crate::collect::collect_module_ids;
use crate::element::{Element, KEY_ATTRIBUTE};
use crate::error::{RenderError, RenderResult};
use crate::keys::KeyGenerator;
use pagecraft_document::{AttributeValue, Page, PageComponent};
use pagecraft_registry::{ModuleLoader, ModuleRegistry};
use tracing::{debug, info};

pub struct Resolver<'r, L> {
    registry: &'r ModuleRegistry<L>,
    keys: &'r KeyGenerator,
}

impl<'r, L: ModuleLoader> Resolver<'r, L> {
    pub fn new(registry: &'r ModuleRegistry<L>, keys: &'r KeyGenerator) -> Self {
        Self { registry, keys }
    }

    /// Resolve `node` and its descendants
    pub fn resolve(&self, node: &PageComponent) -> RenderResult<Element> {
        let module = self
            .registry
            .get_loaded(&node.module)
            .map_err(|source| RenderError::Resolution {
                node_id: node.id.clone(),
                source,
            })?;

        let mut attributes = node.attributes.clone();
        if !attributes.contains_key(KEY_ATTRIBUTE) {
            attributes.insert(
                KEY_ATTRIBUTE.to_string(),
                AttributeValue::String(self.keys.next_key()),
            );
        }

        let element = Element::new(&node.id, &node.module, &module.renderer, attributes);
        if node.children.is_empty() {
            return Ok(element);
        }

        let children = node
            .children
            .iter()
            .map(|child| self.resolve(child))
            .collect::<RenderResult<Vec<_>>>()?;

        Ok(element.with_children(children))
    }
}

/// Load everything a page needs, then resolve its root
///
/// Pass the same `keys` to every render of a session so that no render
/// reuses a key handed out by an earlier one.
pub async fn render_page<L: ModuleLoader>(
    registry: &ModuleRegistry<L>,
    keys: &KeyGenerator,
    page: &Page,
) -> RenderResult<Element> {
    let module_ids = collect_module_ids(&page.root_component);
    debug!(modules = module_ids.len(), "Loading page modules");
    registry.load_all(&module_ids).await?;

    let element = Resolver::new(registry, keys).resolve(&page.root_component)?;
    info!(
        nodes = element.len(),
        modules = module_ids.len(),
        "Page resolved"
    );
    Ok(element)
}
