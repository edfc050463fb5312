//! Document node types: Node, ElementData, AttrMap.

use std::collections::HashMap;

/// Attribute name to value. Duplicate names resolve last-write-wins.
pub type AttrMap = HashMap<String, String>;

/// A parsed document node. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A run of character data.
    Text(String),
    /// An element with attributes and child nodes.
    Element(ElementData),
}

/// Element payload: tag name, attributes, children in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    pub tag_name: String,
    pub attributes: AttrMap,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create an element node.
    pub fn element(tag_name: impl Into<String>, attributes: AttrMap, children: Vec<Node>) -> Self {
        Node::Element(ElementData {
            tag_name: tag_name.into(),
            attributes,
            children,
        })
    }

    /// Children of this node. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Element(element) => &element.children,
        }
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl ElementData {
    /// Value of the `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").map(String::as_str)
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .get("class")
            .into_iter()
            .flat_map(|value| value.split_whitespace())
    }

    /// Check whether the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn text_node_has_no_children() {
        let node = Node::text("hello");
        assert!(node.children().is_empty());
        assert_eq!(node.as_text(), Some("hello"));
        assert!(node.as_element().is_none());
    }

    #[test]
    fn element_children_in_order() {
        let node = Node::element(
            "ul",
            AttrMap::new(),
            vec![Node::text("a"), Node::text("b")],
        );
        let texts: Vec<_> = node.children().iter().filter_map(Node::as_text).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(node.as_element().unwrap().tag_name, "ul");
    }

    #[test]
    fn id_and_classes_from_attributes() {
        let node = Node::element(
            "div",
            attrs(&[("id", "main"), ("class", " note  wide ")]),
            vec![],
        );
        let element = node.as_element().unwrap();
        assert_eq!(element.id(), Some("main"));
        assert_eq!(element.classes().collect::<Vec<_>>(), vec!["note", "wide"]);
        assert!(element.has_class("wide"));
        assert!(!element.has_class("narrow"));
    }

    #[test]
    fn missing_id_and_class() {
        let node = Node::element("p", AttrMap::new(), vec![]);
        let element = node.as_element().unwrap();
        assert_eq!(element.id(), None);
        assert_eq!(element.classes().count(), 0);
    }
}
