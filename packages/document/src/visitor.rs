use crate::component::PageComponent;

/// Visitor pattern for traversing page component trees immutably
///
/// The default implementation walks the entire tree in pre-order.
/// Override `visit_component` to act on each node, and call
/// `walk_component` to keep descending.
pub trait Visitor: Sized {
    fn visit_component(&mut self, component: &PageComponent) {
        walk_component(self, component);
    }
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &PageComponent) {
    for child in &component.children {
        visitor.visit_component(child);
    }
}
