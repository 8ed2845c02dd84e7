//! Rich text Abstract Syntax Tree
//!
//! This module defines the nodes of a Contentful rich text document.
//! Blocks and inlines are separate enums so that the schema rules
//! (hyperlinks only hold inlines, list items only hold blocks) are
//! enforced by the type system rather than checked at runtime.

/// Every `nodeType` the converter can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Document,
    Paragraph,
    Heading2,
    BlockQuote,
    UnorderedList,
    OrderedList,
    ListItem,
    Hr,
    EmbeddedAssetBlock,
    Hyperlink,
    Text,
}

impl NodeType {
    /// The `nodeType` string used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Document => "document",
            NodeType::Paragraph => "paragraph",
            NodeType::Heading2 => "heading-2",
            NodeType::BlockQuote => "blockquote",
            NodeType::UnorderedList => "unordered-list",
            NodeType::OrderedList => "ordered-list",
            NodeType::ListItem => "list-item",
            NodeType::Hr => "hr",
            NodeType::EmbeddedAssetBlock => "embedded-asset-block",
            NodeType::Hyperlink => "hyperlink",
            NodeType::Text => "text",
        }
    }
}

/// Inline formatting carried by a text leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
}

impl Mark {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
        }
    }
}

/// Root document container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub content: Vec<Block>,
}

impl Document {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A block-level rich text node
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Paragraph containing inline content
    Paragraph(Vec<Inline>),

    /// Second-level heading containing inline content
    Heading2(Vec<Inline>),

    /// Block quote; holds paragraphs when produced from HTML
    BlockQuote(Vec<Block>),

    /// Bulleted list
    UnorderedList(Vec<ListItem>),

    /// Numbered list
    OrderedList(Vec<ListItem>),

    /// Horizontal rule
    Hr,

    /// Reference to a published asset
    EmbeddedAsset(AssetLink),
}

/// A list item containing blocks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    pub content: Vec<Block>,
}

impl ListItem {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    /// Wrap loose inline content in a single paragraph
    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Self {
            content: vec![Block::Paragraph(inlines)],
        }
    }
}

/// Link to an asset in the content platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLink {
    pub id: String,
}

impl AssetLink {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An inline rich text node
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Text leaf with its marks
    Text(Text),

    /// Link wrapping inline content; `uri` is `None` when the anchor had no href
    Hyperlink {
        uri: Option<String>,
        content: Vec<Inline>,
    },
}

/// A text leaf
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub value: String,
    pub marks: Vec<Mark>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: Vec::new(),
        }
    }

    /// Append a mark. Marks form a set, so a repeated mark is dropped.
    pub fn add_mark(&mut self, mark: Mark) {
        if !self.marks.contains(&mark) {
            self.marks.push(mark);
        }
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.add_mark(mark);
        self
    }

    pub fn has_mark(&self, mark: Mark) -> bool {
        self.marks.contains(&mark)
    }
}

impl Block {
    pub fn node_type(&self) -> NodeType {
        match self {
            Block::Paragraph(_) => NodeType::Paragraph,
            Block::Heading2(_) => NodeType::Heading2,
            Block::BlockQuote(_) => NodeType::BlockQuote,
            Block::UnorderedList(_) => NodeType::UnorderedList,
            Block::OrderedList(_) => NodeType::OrderedList,
            Block::Hr => NodeType::Hr,
            Block::EmbeddedAsset(_) => NodeType::EmbeddedAssetBlock,
        }
    }

    /// Concatenated text of every leaf below this block
    pub fn text_content(&self) -> String {
        match self {
            Block::Paragraph(inlines) | Block::Heading2(inlines) => inlines_text(inlines),
            Block::BlockQuote(blocks) => blocks.iter().map(Block::text_content).collect(),
            Block::UnorderedList(items) | Block::OrderedList(items) => items
                .iter()
                .flat_map(|item| item.content.iter().map(Block::text_content))
                .collect(),
            Block::Hr | Block::EmbeddedAsset(_) => String::new(),
        }
    }
}

impl Inline {
    /// Create an unmarked text leaf
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(Text::new(value))
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Inline::Text(_) => NodeType::Text,
            Inline::Hyperlink { .. } => NodeType::Hyperlink,
        }
    }

    /// Apply a mark to this node if it is a text leaf.
    ///
    /// Hyperlinks are containers and never carry marks; they come back as-is.
    pub fn with_mark(self, mark: Mark) -> Self {
        match self {
            Inline::Text(text) => Inline::Text(text.with_mark(mark)),
            link @ Inline::Hyperlink { .. } => link,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Inline::Text(text) => Some(text),
            Inline::Hyperlink { .. } => None,
        }
    }

    /// Check if this inline holds only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Text(text) => text.value.trim().is_empty(),
            Inline::Hyperlink { content, .. } => content.iter().all(Inline::is_blank),
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Inline::Text(text) => text.value.clone(),
            Inline::Hyperlink { content, .. } => inlines_text(content),
        }
    }
}

/// Helper to join the text of an inline vec
pub fn inlines_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::text_content).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_mark_is_kept_once() {
        let text = Text::new("x").with_mark(Mark::Bold).with_mark(Mark::Bold);
        assert_eq!(text.marks, vec![Mark::Bold]);
    }

    #[test]
    fn test_marks_keep_application_order() {
        let text = Text::new("x").with_mark(Mark::Italic).with_mark(Mark::Bold);
        assert_eq!(text.marks, vec![Mark::Italic, Mark::Bold]);
        assert!(text.has_mark(Mark::Bold));
        assert!(!text.has_mark(Mark::Underline));
    }

    #[test]
    fn test_hyperlink_ignores_marks() {
        let link = Inline::Hyperlink {
            uri: Some("https://example.com".to_string()),
            content: vec![Inline::text("Example")],
        };
        assert_eq!(link.clone().with_mark(Mark::Bold), link);
    }

    #[test]
    fn test_text_content() {
        let block = Block::UnorderedList(vec![
            ListItem::from_inlines(vec![Inline::text("One ")]),
            ListItem::from_inlines(vec![Inline::Hyperlink {
                uri: None,
                content: vec![Inline::text("Two")],
            }]),
        ]);
        assert_eq!(block.text_content(), "One Two");
    }

    #[test]
    fn test_node_type_strings() {
        assert_eq!(Block::Heading2(vec![]).node_type().as_str(), "heading-2");
        assert_eq!(
            Block::EmbeddedAsset(AssetLink::new("a")).node_type().as_str(),
            "embedded-asset-block"
        );
        assert_eq!(NodeType::ListItem.as_str(), "list-item");
    }
}
