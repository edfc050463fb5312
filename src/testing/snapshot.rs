//! Snapshot rendering helpers.
//!
//! Functions for converting parse results into plain-text strings suitable
//! for snapshot testing and assertions.

use crate::css::model::Stylesheet;
use crate::dom::node::Node;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a node sequence as an indented outline.
///
/// Elements are written as `<tag key="value" ...>` with attributes sorted by
/// name, so the output does not depend on hash order. Text nodes are written
/// as Rust string literals so surrounding whitespace is visible. Children are
/// indented two spaces per level. Lines are joined with `'\n'` and the final
/// line has no trailing newline.
///
/// # Examples
///
/// ```
/// use petal::dom::parse_document;
/// use petal::testing::nodes_to_string;
///
/// let nodes = parse_document("<p class='x'>hi</p>").unwrap();
/// assert_eq!(nodes_to_string(&nodes), "<p class=\"x\">\n  \"hi\"");
/// ```
pub fn nodes_to_string(nodes: &[Node]) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        push_node(&mut lines, node, 0);
    }
    lines.join("\n")
}

/// Render a stylesheet as one block per rule.
///
/// Selectors appear in their stored (sorted) order, declarations one per
/// line in source order.
pub fn stylesheet_to_string(stylesheet: &Stylesheet) -> String {
    let mut lines = Vec::new();
    for rule in &stylesheet.rules {
        let selectors: Vec<String> = rule.selectors.iter().map(ToString::to_string).collect();
        lines.push(format!("{} {{", selectors.join(", ")));
        for declaration in &rule.declarations {
            lines.push(format!("  {declaration}"));
        }
        lines.push("}".to_owned());
    }
    lines.join("\n")
}

fn push_node(lines: &mut Vec<String>, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(text) => lines.push(format!("{indent}{text:?}")),
        Node::Element(element) => {
            let mut attributes: Vec<_> = element.attributes.iter().collect();
            attributes.sort();
            let mut line = format!("{indent}<{}", element.tag_name);
            for (name, value) in attributes {
                line.push_str(&format!(" {name}={value:?}"));
            }
            line.push('>');
            lines.push(line);
            for child in &element.children {
                push_node(lines, child, depth + 1);
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
