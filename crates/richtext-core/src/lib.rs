//! richtext-core - Contentful rich text AST and serialization
//!
//! This crate provides the node types of a Contentful rich text document
//! and their JSON wire format. It is used by `html-richtext` (the HTML
//! converter) and `richtext-contentful` (asset embedding).
//!
//! # Example
//!
//! ```rust
//! use richtext_core::{Block, Document, Inline, Mark, Text, to_json};
//!
//! let document = Document::new(vec![Block::Paragraph(vec![
//!     Inline::text("This is "),
//!     Inline::Text(Text::new("bold").with_mark(Mark::Bold)),
//!     Inline::text(" text."),
//! ])]);
//!
//! let json = to_json(&document).unwrap();
//! assert_eq!(json["nodeType"], "document");
//! assert_eq!(json["content"][0]["content"][1]["marks"][0]["type"], "bold");
//! ```

mod ast;
mod merge;
mod serialize;

pub use ast::{inlines_text, AssetLink, Block, Document, Inline, ListItem, Mark, NodeType, Text};
pub use merge::merge_adjacent_blockquotes;
pub use serialize::{to_json, to_json_string};
