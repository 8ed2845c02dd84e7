//! The fixed tag vocabulary the converter understands.

use richtext_core::Mark;

/// Supported HTML tags; everything else is [`Tag::Other`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    P,
    H2,
    Ul,
    Ol,
    Li,
    Hr,
    Blockquote,
    Img,
    Strong,
    Em,
    U,
    /// Bold alternative; only takes part in link normalization
    B,
    /// Italic alternative; only takes part in link normalization
    I,
    A,
    Other,
}

impl Tag {
    /// Match a lowercase tag name
    pub fn from_name(name: &str) -> Self {
        match name {
            "p" => Tag::P,
            "h2" => Tag::H2,
            "ul" => Tag::Ul,
            "ol" => Tag::Ol,
            "li" => Tag::Li,
            "hr" => Tag::Hr,
            "blockquote" => Tag::Blockquote,
            "img" => Tag::Img,
            "strong" => Tag::Strong,
            "em" => Tag::Em,
            "u" => Tag::U,
            "b" => Tag::B,
            "i" => Tag::I,
            "a" => Tag::A,
            _ => Tag::Other,
        }
    }

    /// The mark a style element applies to its text
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Tag::Strong => Some(Mark::Bold),
            Tag::Em => Some(Mark::Italic),
            Tag::U => Some(Mark::Underline),
            _ => None,
        }
    }

    /// Inline-style elements that must not directly wrap an anchor
    pub fn is_inline_style(&self) -> bool {
        matches!(self, Tag::Strong | Tag::Em | Tag::B | Tag::I | Tag::U)
    }
}
