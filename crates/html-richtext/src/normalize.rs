//! Hyperlink/inline-style normalization.
//!
//! Rich text treats hyperlinks as containers and styles as marks on text, so
//! a link inside a style element (`<strong><a>x</a></strong>`) has no direct
//! representation. This pass moves such links outward and pushes the style
//! inside them: `<a><strong>x</strong></a>`.

use crate::node::Node;
use crate::tag::Tag;

/// Rewrite `root` so no anchor is a direct child of `strong`, `em`, `b`,
/// `i` or `u`. The input is left untouched.
///
/// The rewrite runs bottom-up, so stacked styles are handled too:
/// `<strong><em><a>x</a></em></strong>` becomes
/// `<a><strong><em>x</em></strong></a>`. Applying it again is a no-op.
pub fn normalize_inline_styles(root: &Node) -> Node {
    let mut rewritten = rewrite(root);
    if rewritten.len() == 1 {
        rewritten.remove(0)
    } else {
        Node::document_fragment().with_children(rewritten)
    }
}

/// Rewrite one node into the sequence that replaces it
fn rewrite(node: &Node) -> Vec<Node> {
    if !node.is_element() && node.children.is_empty() {
        return vec![node.clone()];
    }

    let children: Vec<Node> = node.children().flat_map(rewrite).collect();

    if node.tag().is_inline_style() && children.iter().any(is_anchor) {
        split_around_anchors(node, children)
    } else {
        vec![node.with_children(children)]
    }
}

fn is_anchor(node: &Node) -> bool {
    node.tag() == Tag::A
}

/// Replace `style` by anchors wrapping a fresh copy of the style, with the
/// non-anchor runs in between kept inside the original style element.
fn split_around_anchors(style: &Node, children: Vec<Node>) -> Vec<Node> {
    let mut result = Vec::new();
    let mut run = Vec::new();

    for child in children {
        if is_anchor(&child) {
            if !run.is_empty() {
                result.push(style.with_children(std::mem::take(&mut run)));
            }
            let inner = Node::element(style.tag_name()).with_children(child.children.clone());
            result.push(child.with_children(vec![inner]));
        } else {
            run.push(child);
        }
    }

    if !run.is_empty() {
        result.push(style.with_children(run));
    }

    result
}
