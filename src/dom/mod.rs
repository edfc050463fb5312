//! Document tree: markup parser, owned node tree, slotmap arena with queries.

pub mod node;
pub mod parser;
pub mod query;
pub mod tree;

pub use node::{AttrMap, ElementData, Node};
pub use parser::{parse_document, parse_document_with};
pub use tree::{Dom, NodeData, NodeId};
