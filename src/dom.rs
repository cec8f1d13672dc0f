//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate: decoding raw bytes into a parsed
//! document, reading element names and attributes, and walking the tree in
//! document order.

use std::borrow::Cow;

use encoding_rs::UTF_8;

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

/// Parse HTML string into Document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Decode raw HTML bytes as UTF-8.
///
/// A leading byte order mark is stripped and malformed sequences become
/// U+FFFD. No charset declaration inside the document is consulted.
#[must_use]
pub fn decode_utf8(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _had_errors) = UTF_8.decode_with_bom_removal(bytes);
    text
}

// === Tag/Node Information ===

/// Get tag name of an element node (lowercase, as normalized by the parser)
///
/// Returns `None` for text, comment, doctype and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_string())
}

/// Get all attributes as key-value pairs, in the order the parser kept them
///
/// Returns empty vector for non-element nodes.
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Contents fragment of a `<template>` element.
///
/// The parser stores template contents in a separate fragment node instead of
/// as ordinary children.
#[must_use]
pub fn template_contents<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.query_or(None, |n| n.as_element().and_then(|el| el.template_contents))
        .map(|id| NodeRef::new(id, node.tree))
}

/// Children of a node in sibling order, template contents first.
fn children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out: Vec<NodeRef<'a>> = template_contents(node).into_iter().collect();
    let mut child = node.first_child();
    while let Some(c) = child {
        child = c.next_sibling();
        out.push(c);
    }
    out
}

// === Traversal ===

/// Visit every element under `root` (inclusive) in document order.
///
/// Depth-first, pre-order: a node is visited before its children, children
/// left to right. `<template>` contents are walked as the template's
/// children. Uses an explicit stack, so nesting depth is bounded only by
/// memory. The tree is never modified.
pub fn walk_elements<'a, F>(root: NodeRef<'a>, mut visit: F)
where
    F: FnMut(&NodeRef<'a>),
{
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_element() {
            visit(&node);
        }
        // Reverse so the first child is popped next.
        stack.extend(children(&node).into_iter().rev());
    }
}
