//! Tests for element tree construction and traversal.

use inflate_dom::{DomTree, ElementData, NodeId};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc_element(ElementData::named(tag))
}

// ========== append_child ==========

#[test]
fn test_append_single_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    assert_eq!(tree.children(parent), &[child]);
    assert_eq!(tree.parent(child), Some(parent));
    assert_eq!(tree.prev_sibling(child), None);
    assert_eq!(tree.next_sibling(child), None);
}

#[test]
fn test_append_links_siblings_in_order() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.next_sibling(c), None);
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.prev_sibling(c), Some(b));
}

// ========== traversal ==========

#[test]
fn test_ancestors_walk_nearest_first_and_stop_below_root() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, outer);
    let middle = alloc_element(&mut tree, "section");
    tree.append_child(outer, middle);
    let inner = alloc_element(&mut tree, "p");
    tree.append_child(middle, inner);

    let walked: Vec<NodeId> = tree.ancestors(inner).collect();
    assert_eq!(walked, vec![middle, outer]);

    // A top-level element has no element ancestors.
    assert_eq!(tree.ancestors(outer).count(), 0);
}

#[test]
fn test_elements_iterates_in_allocation_order() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    tree.append_child(NodeId::ROOT, a);
    let b = alloc_element(&mut tree, "b");
    tree.append_child(a, b);

    let all: Vec<NodeId> = tree.elements().collect();
    assert_eq!(all, vec![a, b]);
    assert!(!all.contains(&NodeId::ROOT));
}

#[test]
fn test_root_is_not_an_element() {
    let tree = DomTree::new();
    assert!(!tree.is_element(NodeId::ROOT));
    assert!(tree.element(NodeId::ROOT).is_none());
    assert_eq!(tree.parent(NodeId::ROOT), None);
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
}

// ========== element data ==========

#[test]
fn test_id_and_classes_accessors() {
    let mut data = ElementData::named("div");
    let _ = data
        .attrs
        .insert("id".to_string(), "main".to_string());
    let _ = data
        .attrs
        .insert("class".to_string(), "panel wide  open".to_string());

    assert_eq!(data.id(), Some("main"));
    let classes = data.classes();
    assert!(classes.contains("panel"));
    assert!(classes.contains("wide"));
    assert!(classes.contains("open"));
    assert_eq!(classes.len(), 3);

    let bare = ElementData::named("span");
    assert_eq!(bare.id(), None);
    assert!(bare.classes().is_empty());
}
