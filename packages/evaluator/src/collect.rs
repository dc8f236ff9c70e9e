use pagecraft_document::{walk_component, Page, PageComponent, Visitor};
use std::collections::BTreeSet;

/// Collects the distinct module identifiers used by a tree
#[derive(Debug, Default)]
pub struct ModuleCollector {
    modules: BTreeSet<String>,
}

impl ModuleCollector {
    pub fn into_modules(self) -> BTreeSet<String> {
        self.modules
    }
}

impl Visitor for ModuleCollector {
    fn visit_component(&mut self, component: &PageComponent) {
        if !self.modules.contains(&component.module) {
            self.modules.insert(component.module.clone());
        }
        walk_component(self, component);
    }
}

/// Every module a tree needs, deduplicated
///
/// Load exactly this set before resolving the tree.
pub fn collect_module_ids(root: &PageComponent) -> BTreeSet<String> {
    let mut collector = ModuleCollector::default();
    collector.visit_component(root);
    collector.into_modules()
}

/// Module identifiers for a whole page; no page means no modules
pub fn collect_page_module_ids(page: Option<&Page>) -> BTreeSet<String> {
    page.map(|page| collect_module_ids(&page.root_component))
        .unwrap_or_default()
}
