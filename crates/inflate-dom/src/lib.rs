//! Element tree for the inflate resizing engine.
//!
//! This crate provides an arena-based containment tree in the shape of the
//! [DOM Living Standard](https://dom.spec.whatwg.org/) node tree, reduced to
//! what a geometry pass needs: a document root, element nodes, and ordered
//! parent/child/sibling relationships.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow checker
//! issues. Only `Document` and `Element` nodes exist; text and comments carry
//! no box geometry and are out of scope for a resizing pass.

use std::collections::{HashMap, HashSet};

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the element tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing
/// issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the containment tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "An object that participates in a tree has a parent, which is either
/// null or an object", and "a node has an associated list of children".
#[derive(Debug, Clone)]
pub struct Node {
    /// Whether this node is the document root or an element.
    pub node_type: NodeType,

    /// Parent node, or `None` for the document root.
    pub parent: Option<NodeId>,

    /// Ordered list of child nodes.
    pub children: Vec<NodeId>,

    /// The node immediately following this one in its parent's children.
    pub next_sibling: Option<NodeId>,

    /// The node immediately preceding this one in its parent's children.
    pub prev_sibling: Option<NodeId>,
}

/// The two node kinds a resizing pass distinguishes.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    ///
    /// The tree root. It has no box geometry and is never resized; ancestor
    /// walks stop when they reach it.
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    ///
    /// "Element nodes are simply known as elements."
    Element(ElementData),
}

/// Element-specific data: local name and attributes.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element),
/// "when an element is created, its local name is always given" and "an
/// element has an associated attribute list". Only `tag_name` and `attrs`
/// are stored; namespaces and custom elements are irrelevant here.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with a tag name and no attributes.
    #[must_use]
    pub fn named(tag_name: &str) -> Self {
        ElementData {
            tag_name: tag_name.to_string(),
            attrs: AttributesMap::new(),
        }
    }

    /// Returns the element's id attribute value if present.
    ///
    /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Returns the set of class names from the class attribute.
    ///
    /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
    /// "The class attribute, if specified, must have a value that is a set
    /// of space-separated tokens."
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        match self.attrs.get("class") {
            Some(classlist) => classlist.split_whitespace().collect(),
            None => HashSet::new(),
        }
    }
}

/// Arena-based element tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
/// "The DOM represents a document as a tree."
///
/// All nodes live in a contiguous vector indexed by [`NodeId`]. The document
/// node is always at index 0 ([`NodeId::ROOT`]).
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree containing only the document node.
    #[must_use]
    pub fn new() -> Self {
        let document = Node {
            node_type: NodeType::Document,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        DomTree {
            nodes: vec![document],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree, including the document node.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true; the document node persists).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new element node and return its ID.
    ///
    /// The node is not yet attached to the tree; link it with
    /// [`DomTree::append_child`].
    pub fn alloc_element(&mut self, data: ElementData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type: NodeType::Element(data),
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`, updating parent and
    /// sibling links. The child must be detached (freshly allocated).
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let last = self.nodes[parent.0].children.last().copied();

        if let Some(prev) = last {
            self.nodes[prev.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev);
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// The parent of `id`, or `None` for the document root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// The ordered children of `id`.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// The sibling immediately after `id`, if any.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.next_sibling)
    }

    /// The sibling immediately before `id`, if any.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.prev_sibling)
    }

    /// Whether `id` refers to an element node.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(
            self.get(id),
            Some(Node {
                node_type: NodeType::Element(_),
                ..
            })
        )
    }

    /// The element data for `id`, or `None` for the document node.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.get(id) {
            Some(Node {
                node_type: NodeType::Element(data),
                ..
            }) => Some(data),
            _ => None,
        }
    }

    /// Iterate over the ancestors of `id`, nearest first, stopping before
    /// the document root.
    ///
    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-ancestor)
    /// "An object A is called an ancestor of an object B if and only if B is
    /// a descendant of A."
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over element IDs in allocation order (document excluded).
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.is_element(*id))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        DomTree::new()
    }
}

/// Iterator over a node's ancestors, nearest first.
///
/// Yields element ancestors only; the walk stops when the document root is
/// reached (the root itself is never yielded).
pub struct Ancestors<'tree> {
    tree: &'tree DomTree,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        if !self.tree.is_element(id) {
            return None;
        }
        self.current = self.tree.parent(id);
        Some(id)
    }
}
