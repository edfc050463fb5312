//! Arena view of a parsed document: flat storage, parent links, walks.
//!
//! [`parse_document`](crate::dom::parser::parse_document) returns an owned
//! tree of [`Node`]s. `Dom` flattens that tree into a slotmap so nodes can be
//! addressed by a `Copy` id, walked upward through parent links and queried
//! without recursion at the call site.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use super::node::{AttrMap, ElementData, Node};

new_key_type! {
    /// Identifier for a node in a [`Dom`]. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// Per-node payload stored in the arena. Children live in the arena's
/// adjacency map, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Text(String),
    Element { tag_name: String, attributes: AttrMap },
}

impl NodeData {
    /// Tag name for elements, `None` for text.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            NodeData::Element { tag_name, .. } => Some(tag_name),
            NodeData::Text(_) => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            NodeData::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            NodeData::Text(_) => None,
        }
    }

    /// Value of the `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Check whether the whitespace-separated `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }
}

/// A parsed document flattened into a slotmap arena.
#[derive(Debug, Default)]
pub struct Dom {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    roots: Vec<NodeId>,
}

impl Dom {
    /// Create an empty DOM.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a top-level node sequence, keeping sibling order.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut dom = Self::new();
        for node in nodes {
            let id = dom.insert(node, None);
            dom.roots.push(id);
        }
        dom
    }

    fn insert(&mut self, node: &Node, parent: Option<NodeId>) -> NodeId {
        let (data, kids) = match node {
            Node::Text(text) => (NodeData::Text(text.clone()), &[] as &[Node]),
            Node::Element(element) => (
                NodeData::Element {
                    tag_name: element.tag_name.clone(),
                    attributes: element.attributes.clone(),
                },
                element.children.as_slice(),
            ),
        };

        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::with_capacity(kids.len()));
        if let Some(parent) = parent {
            self.parent.insert(id, parent);
        }

        for kid in kids {
            let child = self.insert(kid, Some(id));
            if let Some(siblings) = self.children.get_mut(id) {
                siblings.push(child);
            }
        }
        id
    }

    /// Rebuild the owned node tree, structurally equal to the input of
    /// [`from_nodes`](Self::from_nodes).
    pub fn to_nodes(&self) -> Vec<Node> {
        self.roots.iter().filter_map(|&id| self.to_node(id)).collect()
    }

    fn to_node(&self, id: NodeId) -> Option<Node> {
        let node = match self.nodes.get(id)? {
            NodeData::Text(text) => Node::Text(text.clone()),
            NodeData::Element {
                tag_name,
                attributes,
            } => Node::Element(ElementData {
                tag_name: tag_name.clone(),
                attributes: attributes.clone(),
                children: self
                    .children(id)
                    .iter()
                    .filter_map(|&child| self.to_node(child))
                    .collect(),
            }),
        };
        Some(node)
    }

    /// Top-level nodes in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no
    /// children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to its top-level ancestor.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Number of nodes in the DOM.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Pre-order traversal of the whole document, roots in order.
    pub fn walk_document(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|&root| self.walk_depth_first(root))
            .collect()
    }
}
