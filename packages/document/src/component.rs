//! # Page Components
//!
//! A page is a tree of components. Each node names the renderer module to
//! instantiate and the attributes to hand it.
//!
//! ## Validity
//!
//! A node is valid iff it has a non-empty `id`, a non-empty `module`, an
//! `attributes` map (which may be empty), and every child is valid.
//!
//! Validation exists in two forms:
//! - [`PageComponent::validate`] for typed trees built in code
//! - [`validate_value`] for untyped JSON, before it is trusted as a tree

use crate::attributes::Attributes;
use crate::error::{InvalidField, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A node in the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageComponent {
    /// Unique within the page; used for error attribution and editor addressing
    pub id: String,

    /// Renderer module identifier (e.g. `layout.Column`)
    pub module: String,

    /// Attributes passed to the renderer
    pub attributes: Attributes,

    /// Ordered children; empty means leaf
    #[serde(
        default,
        deserialize_with = "nullable_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<PageComponent>,
}

fn nullable_children<'de, D>(deserializer: D) -> Result<Vec<PageComponent>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PageComponent>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PageComponent {
    pub fn leaf(id: impl Into<String>, module: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            id: id.into(),
            module: module.into(),
            attributes,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: PageComponent) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<PageComponent>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(PageComponent::node_count).sum::<usize>()
    }

    /// Pre-order search by id
    pub fn find(&self, id: &str) -> Option<&PageComponent> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the validity invariant, reporting the first offending node
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_at(&node_label(Some(&self.id), None, ""))
    }

    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(invalid(path, InvalidField::Id));
        }
        if self.module.is_empty() {
            return Err(invalid(path, InvalidField::Module));
        }
        for (index, child) in self.children.iter().enumerate() {
            child.validate_at(&node_label(Some(&child.id), Some(index), path))?;
        }
        Ok(())
    }
}

/// Checks that an untyped JSON value has the shape of a valid component tree
///
/// `children` may be absent or `null`; anything else must be a list of
/// valid nodes.
pub fn validate_value(value: &Value) -> Result<(), ValidationError> {
    let id = value.get("id").and_then(Value::as_str);
    validate_value_at(value, &node_label(id, None, ""))
}

fn validate_value_at(value: &Value, path: &str) -> Result<(), ValidationError> {
    let Some(node) = value.as_object() else {
        return Err(invalid(path, InvalidField::NotAnObject));
    };

    if !is_non_empty_string(node.get("id")) {
        return Err(invalid(path, InvalidField::Id));
    }
    if !is_non_empty_string(node.get("module")) {
        return Err(invalid(path, InvalidField::Module));
    }
    if !node.get("attributes").map(Value::is_object).unwrap_or(false) {
        return Err(invalid(path, InvalidField::Attributes));
    }

    match node.get("children") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(children)) => {
            for (index, child) in children.iter().enumerate() {
                let id = child.get("id").and_then(Value::as_str);
                validate_value_at(child, &node_label(id, Some(index), path))?;
            }
            Ok(())
        }
        Some(_) => Err(invalid(path, InvalidField::Children)),
    }
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .map(|s| !s.is_empty())
        .unwrap_or(false)
}

/// Path segment for a node: its id, or its position when the id is unusable
fn node_label(id: Option<&str>, index: Option<usize>, parent: &str) -> String {
    let segment = match (id, index) {
        (Some(id), _) if !id.is_empty() => id.to_string(),
        (_, Some(index)) => format!("[{index}]"),
        (_, None) => "[root]".to_string(),
    };

    if parent.is_empty() {
        segment
    } else {
        format!("{parent}/{segment}")
    }
}

fn invalid(path: &str, field: InvalidField) -> ValidationError {
    ValidationError {
        node: path.to_string(),
        field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(id: &str) -> PageComponent {
        let mut attributes = Attributes::new();
        attributes.insert("text".to_string(), "hi".into());
        PageComponent::leaf(id, "core.Text", attributes)
    }

    #[test]
    fn test_valid_tree() {
        let tree = PageComponent::leaf("root", "layout.Column", Attributes::new())
            .with_children(vec![text("a"), text("b")]);

        assert!(tree.is_valid());
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.find("b").map(|n| n.module.as_str()), Some("core.Text"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_invalid_descendant_is_reported_with_path() {
        let mut bad = text("b");
        bad.module.clear();
        let tree = PageComponent::leaf("root", "layout.Column", Attributes::new())
            .with_child(PageComponent::leaf("row", "layout.Row", Attributes::new()).with_child(bad));

        let err = tree.validate().unwrap_err();
        assert_eq!(err.node, "root/row/b");
        assert_eq!(err.field, InvalidField::Module);
    }

    #[test]
    fn test_empty_id_uses_position() {
        let tree = PageComponent::leaf("root", "layout.Column", Attributes::new())
            .with_children(vec![text("a"), text("")]);

        let err = tree.validate().unwrap_err();
        assert_eq!(err.node, "root/[1]");
        assert_eq!(err.field, InvalidField::Id);
    }

    #[test]
    fn test_validate_value_accepts_minimal_node() {
        let value = json!({ "id": "a", "module": "x", "attributes": {} });
        assert!(validate_value(&value).is_ok());

        let value = json!({ "id": "a", "module": "x", "attributes": {}, "children": null });
        assert!(validate_value(&value).is_ok());
    }

    #[test]
    fn test_validate_value_rejects_missing_fields() {
        let err = validate_value(&json!({ "id": "x" })).unwrap_err();
        assert_eq!(err.field, InvalidField::Module);

        let err = validate_value(&json!({ "id": "x", "module": "m" })).unwrap_err();
        assert_eq!(err.field, InvalidField::Attributes);

        let err = validate_value(&json!({ "id": "x", "module": "m", "attributes": null })).unwrap_err();
        assert_eq!(err.field, InvalidField::Attributes);

        let err = validate_value(&json!("text")).unwrap_err();
        assert_eq!(err.node, "[root]");
        assert_eq!(err.field, InvalidField::NotAnObject);
    }

    #[test]
    fn test_validate_value_recurses_into_children() {
        let value = json!({
            "id": "root",
            "module": "layout.Column",
            "attributes": {},
            "children": [
                { "id": "ok", "module": "core.Text", "attributes": {} },
                { "id": "broken", "attributes": {} }
            ]
        });

        let err = validate_value(&value).unwrap_err();
        assert_eq!(err.node, "root/broken");
        assert_eq!(err.field, InvalidField::Module);

        let value = json!({ "id": "a", "module": "x", "attributes": {}, "children": {} });
        assert_eq!(validate_value(&value).unwrap_err().field, InvalidField::Children);
    }

    #[test]
    fn test_null_children_deserialize_as_leaf() {
        let node: PageComponent = serde_json::from_value(
            json!({ "id": "a", "module": "x", "attributes": {}, "children": null }),
        )
        .unwrap();
        assert!(node.is_leaf());

        let serialized = serde_json::to_value(&node).unwrap();
        assert!(serialized.get("children").is_none());
    }
}
