//! DOM queries: by id, class, tag; generic predicate matching.
//!
//! All queries return ids in document (pre-order) order.

use super::tree::{Dom, NodeData, NodeId};

impl Dom {
    /// Find the first element whose `id` attribute equals `id`.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk_document()
            .into_iter()
            .find(|&node| self.get(node).and_then(NodeData::id) == Some(id))
    }

    /// Find all elements whose `class` attribute lists `class`.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// Find all elements with the given tag name.
    pub fn query_by_tag(&self, tag_name: &str) -> Vec<NodeId> {
        self.query_all(|data| data.tag_name() == Some(tag_name))
    }

    /// Find all nodes matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.walk_document()
            .into_iter()
            .filter(|&node| self.get(node).is_some_and(&predicate))
            .collect()
    }
}
