//! Small lookup helpers over roxmltree nodes.

use roxmltree::Node;

/// First direct child element with the given tag name.
pub fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.has_tag_name(tag))
}

/// First descendant element with the given tag name.
pub fn descendant<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.has_tag_name(tag))
}

/// All text content under a node, joined. Elements split by child tags
/// report only their first text chunk through `Node::text`, so walk the
/// text nodes instead.
pub fn gathered_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Text content of the first descendant with the given tag, or empty.
pub fn descendant_text(node: Node, tag: &str) -> String {
    descendant(node, tag).map(gathered_text).unwrap_or_default()
}
