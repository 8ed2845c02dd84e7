//! Convert an HTML Node tree to the rich text AST
//!
//! The walk is synchronous and side-effect free. Images need the asset
//! platform and are handled by the service before it calls in here.

use richtext_core::{Block, Inline, ListItem, Mark};

use crate::node::{Node, NodeType};
use crate::tag::Tag;

/// Convert a top-level element to a block.
///
/// Returns `None` for images and for tags with no block mapping.
pub fn convert_element(node: &Node) -> Option<Block> {
    match node.tag() {
        Tag::P => Some(Block::Paragraph(collect_inlines(node))),
        Tag::H2 => Some(Block::Heading2(collect_inlines(node))),
        Tag::Ul => Some(Block::UnorderedList(collect_list_items(node))),
        Tag::Ol => Some(Block::OrderedList(collect_list_items(node))),
        Tag::Hr => Some(Block::Hr),
        Tag::Blockquote => Some(convert_blockquote(node)),
        _ => None,
    }
}

/// Only direct `<p>` children survive; anything else in a quote is dropped
fn convert_blockquote(node: &Node) -> Block {
    let paragraphs = node
        .element_children()
        .filter(|child| child.tag() == Tag::P)
        .map(|child| Block::Paragraph(collect_inlines(child)))
        .collect();
    Block::BlockQuote(paragraphs)
}

/// Collect list items from ul/ol
fn collect_list_items(node: &Node) -> Vec<ListItem> {
    node.element_children()
        .filter(|child| child.tag() == Tag::Li)
        .map(convert_list_item)
        .collect()
}

/// Item content parsed from an `<li>`: direct `<p>` children are blocks,
/// everything else is inline
enum ItemPart {
    Block(Block),
    Inline(Inline),
}

fn convert_list_item(node: &Node) -> ListItem {
    let mut parts = Vec::new();
    for child in node.children() {
        if child.tag() == Tag::P {
            parts.push(ItemPart::Block(Block::Paragraph(collect_inlines(child))));
        } else {
            parts.extend(convert_child(child).into_iter().map(ItemPart::Inline));
        }
    }

    if !parts.iter().any(|part| matches!(part, ItemPart::Block(_))) {
        let inlines = parts
            .into_iter()
            .filter_map(|part| match part {
                ItemPart::Inline(inline) => Some(inline),
                ItemPart::Block(_) => None,
            })
            .collect();
        return ListItem::from_inlines(inlines);
    }

    // Mixed content: each loose inline run between paragraphs gets its own
    // paragraph so the item holds blocks only.
    let mut blocks = Vec::new();
    let mut run: Vec<Inline> = Vec::new();
    for part in parts {
        match part {
            ItemPart::Inline(inline) => run.push(inline),
            ItemPart::Block(block) => {
                flush_inline_run(&mut run, &mut blocks);
                blocks.push(block);
            }
        }
    }
    flush_inline_run(&mut run, &mut blocks);

    ListItem::new(blocks)
}

fn flush_inline_run(run: &mut Vec<Inline>, blocks: &mut Vec<Block>) {
    let inlines = std::mem::take(run);
    if !inlines.iter().all(Inline::is_blank) {
        blocks.push(Block::Paragraph(inlines));
    }
}

/// Collect inline content from a node
pub fn collect_inlines(node: &Node) -> Vec<Inline> {
    node.children().flat_map(convert_child).collect()
}

fn convert_child(child: &Node) -> Vec<Inline> {
    match child.node_type {
        NodeType::Text => vec![Inline::text(child.node_value.as_deref().unwrap_or(""))],
        NodeType::Element => convert_inline_element(child),
        NodeType::DocumentFragment => collect_inlines(child),
    }
}

/// Convert an inline element to zero or more inlines
fn convert_inline_element(node: &Node) -> Vec<Inline> {
    let tag = node.tag();

    if let Some(mark) = tag.mark() {
        return with_mark(collect_inlines(node), mark);
    }

    match tag {
        Tag::A => vec![Inline::Hyperlink {
            uri: node.attr("href").map(str::to_string),
            content: collect_inlines(node),
        }],
        // Unknown and unsupported elements are unwrapped; their children are
        // spliced into the parent.
        _ => collect_inlines(node),
    }
}

/// Add `mark` to every text leaf of `inlines`; hyperlinks are passed through
fn with_mark(inlines: Vec<Inline>, mark: Mark) -> Vec<Inline> {
    inlines
        .into_iter()
        .map(|inline| inline.with_mark(mark))
        .collect()
}
