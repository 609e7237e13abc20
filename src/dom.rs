//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. The scorer reads the tree through
//! these functions so tree navigation rules (element-only parents and siblings,
//! lowercase tag names) live in one place.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

use std::iter::successors;

use crate::options::SiblingWalk;

// === Tag/Node Information ===

/// Get tag name (lowercase) of the first node in a selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag)
}

/// Get tag name (lowercase) of a single node.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// True if the node is an element with the given (lowercase) tag.
#[inline]
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    node_tag(node).is_some_and(|t| t == tag)
}

/// Get an attribute value of the first node in a selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|v| v.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get all text content of a single node and its descendants.
#[inline]
#[must_use]
pub fn node_text(node: &NodeRef) -> StrTendril {
    Selection::from(*node).text()
}

/// Get outer HTML content.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
#[must_use]
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape text for embedding inside an element body.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// === Tree Navigation ===

/// Get the parent element, ignoring the document root node.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Get previous element sibling (skipping text nodes)
#[must_use]
pub fn previous_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.prev_sibling();
    }
    None
}

/// All preceding element siblings, nearest first.
#[must_use]
pub fn preceding_element_siblings<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    successors(previous_element_sibling(node), previous_element_sibling).collect()
}

/// Element siblings of `node` (excluding `node` itself) in the given walk order.
///
/// Lazy, so callers that stop early never visit the rest of a long sibling list.
pub fn element_siblings<'a>(node: &NodeRef<'a>, walk: SiblingWalk) -> Box<dyn Iterator<Item = NodeRef<'a>> + 'a> {
    let preceding = successors(previous_element_sibling(node), previous_element_sibling);
    let following = successors(next_element_sibling(node), next_element_sibling);

    match walk {
        SiblingWalk::DocumentOrder => {
            let id = node.id;
            let first = node.parent().and_then(|parent| parent.first_child());
            Box::new(successors(first, |n| n.next_sibling()).filter(move |n| n.is_element() && n.id != id))
        }
        SiblingWalk::PrecedingFirst => Box::new(preceding.chain(following)),
        SiblingWalk::FollowingFirst => Box::new(following.chain(preceding)),
    }
}

/// Direct element children of a node, in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    Selection::from(*node).children().nodes().to_vec()
}

// === Tree Manipulation ===

/// Detach a node (and its subtree) from its parent.
#[inline]
pub fn remove_node(node: &NodeRef) {
    Selection::from(*node).remove();
}

/// Insert parsed HTML before the first child of every node in the selection.
#[inline]
pub fn prepend_html(sel: &Selection, html: &str) {
    sel.prepend_html(html);
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
