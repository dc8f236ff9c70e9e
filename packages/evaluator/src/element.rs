use pagecraft_document::{AttributeValue, Attributes};
use serde::Serialize;

/// Attribute that carries an element's identity key
pub const KEY_ATTRIBUTE: &str = "key";

/// Renderable element produced from a page component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Id of the component this element was resolved from
    pub id: String,
    /// Module identifier
    pub module: String,
    /// Renderer provided by the loaded module
    pub renderer: String,
    /// Attributes handed to the renderer, identity key included
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(
        id: impl Into<String>,
        module: impl Into<String>,
        renderer: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            id: id.into(),
            module: module.into(),
            renderer: renderer.into(),
            attributes,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn key(&self) -> Option<&AttributeValue> {
        self.attributes.get(KEY_ATTRIBUTE)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of elements in this subtree, including self
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Element::len).sum::<usize>()
    }

    /// All identity keys in pre-order
    pub fn keys(&self) -> Vec<&AttributeValue> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a AttributeValue>) {
        if let Some(key) = self.key() {
            keys.push(key);
        }
        for child in &self.children {
            child.collect_keys(keys);
        }
    }
}
