/// Resolver tests: key injection, ordering, immutability and load contract
use crate::element::KEY_ATTRIBUTE;
use crate::error::RenderError;
use crate::keys::{KeyGenerator, KEY_PREFIX};
use crate::resolver::Resolver;
use pagecraft_document::{AttributeValue, Attributes, PageComponent};
use pagecraft_registry::{ModuleRegistry, ResolutionError, StaticLoader};
use std::collections::HashSet;
use std::sync::Arc;

fn node(id: &str, module: &str) -> PageComponent {
    PageComponent::leaf(id, module, Attributes::new())
}

async fn registry_with(ids: &[&str]) -> ModuleRegistry<StaticLoader> {
    let registry = ModuleRegistry::new(StaticLoader::new().with_modules(ids.iter().copied()));
    registry.load_all(ids.iter().copied()).await.unwrap();
    registry
}

#[tokio::test]
async fn test_leaf_gets_generated_key() {
    let registry = registry_with(&["core.Text"]).await;
    let keys = KeyGenerator::new();
    let resolver = Resolver::new(&registry, &keys);

    let element = resolver.resolve(&node("t", "core.Text")).unwrap();

    assert!(element.is_leaf());
    assert_eq!(element.renderer, "Text");
    let key = element.key().and_then(AttributeValue::as_str).unwrap();
    assert!(key.starts_with(KEY_PREFIX), "Generated key should be prefixed: {}", key);
}

#[tokio::test]
async fn test_author_key_is_kept() {
    let registry = registry_with(&["layout.Header"]).await;
    let keys = KeyGenerator::new();
    let resolver = Resolver::new(&registry, &keys);

    let mut attributes = Attributes::new();
    attributes.insert(KEY_ATTRIBUTE.to_string(), AttributeValue::from("site-header"));
    let header = PageComponent::leaf("header", "layout.Header", attributes);

    let first = resolver.resolve(&header).unwrap();
    let second = resolver.resolve(&header).unwrap();

    assert_eq!(first.key(), Some(&AttributeValue::from("site-header")));
    assert_eq!(first, second, "Pinned keys keep resolution stable");
}

#[tokio::test]
async fn test_generated_keys_are_distinct() {
    let registry = registry_with(&["A", "B"]).await;
    let keys = KeyGenerator::new();
    let resolver = Resolver::new(&registry, &keys);

    let tree = node("root", "A").with_children(vec![
        node("b1", "B").with_child(node("b1a", "B")),
        node("b2", "B"),
        node("b3", "B"),
    ]);

    let element = resolver.resolve(&tree).unwrap();
    let keys: Vec<&AttributeValue> = element.keys();
    let unique: HashSet<String> = keys
        .iter()
        .filter_map(|key| key.as_str().map(str::to_string))
        .collect();

    assert_eq!(keys.len(), 5);
    assert_eq!(unique.len(), 5);
}

#[tokio::test]
async fn test_children_keep_order() {
    let registry = registry_with(&["layout.Column", "core.Text"]).await;
    let keys = KeyGenerator::new();
    let resolver = Resolver::new(&registry, &keys);

    let tree = node("root", "layout.Column").with_children(vec![
        node("first", "core.Text"),
        node("second", "core.Text"),
        node("third", "core.Text"),
    ]);

    let element = resolver.resolve(&tree).unwrap();
    let ids: Vec<&str> = element.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
    assert_eq!(element.len(), 4);
}

#[tokio::test]
async fn test_input_is_not_mutated_and_nested_values_are_shared() {
    let registry = registry_with(&["layout.Column", "core.Text"]).await;
    let keys = KeyGenerator::new();
    let resolver = Resolver::new(&registry, &keys);

    let mut style = Attributes::new();
    style.insert("padding".to_string(), AttributeValue::from("8px"));
    let mut attributes = Attributes::new();
    attributes.insert("style".to_string(), AttributeValue::map(style));

    let tree = PageComponent::leaf("root", "layout.Column", attributes)
        .with_child(node("text", "core.Text"));
    let before = tree.clone();

    let element = resolver.resolve(&tree).unwrap();

    assert_eq!(tree, before);
    assert!(!tree.attributes.contains_key(KEY_ATTRIBUTE));
    match (&tree.attributes["style"], &element.attributes["style"]) {
        (AttributeValue::Map(source), AttributeValue::Map(resolved)) => {
            assert!(Arc::ptr_eq(source, resolved))
        }
        _ => panic!("Expected style maps"),
    }
}

#[tokio::test]
async fn test_unloaded_module_is_a_resolution_error() {
    let registry = registry_with(&["layout.Column"]).await;
    let keys = KeyGenerator::new();
    let resolver = Resolver::new(&registry, &keys);

    let tree = node("root", "layout.Column").with_child(node("img", "media.Image"));

    match resolver.resolve(&tree) {
        Err(RenderError::Resolution { node_id, source }) => {
            assert_eq!(node_id, "img");
            assert_eq!(
                source,
                ResolutionError::NotLoaded {
                    module_id: "media.Image".to_string()
                }
            );
        }
        other => panic!("Expected resolution error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_shared_generator_keeps_counting_across_resolvers() {
    let registry = registry_with(&["core.Text"]).await;
    let keys = KeyGenerator::new();
    let text = node("t", "core.Text");

    let first = Resolver::new(&registry, &keys).resolve(&text).unwrap();
    let second = Resolver::new(&registry, &keys).resolve(&text).unwrap();

    assert_eq!(first.key(), Some(&AttributeValue::from("A-0")));
    assert_eq!(second.key(), Some(&AttributeValue::from("A-1")));
}
