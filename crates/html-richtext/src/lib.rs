//! # html-richtext
//!
//! Convert HTML to Contentful rich text documents.
//!
//! ## Design
//!
//! Conversion runs in a fixed pipeline over a parser-agnostic [`Node`] tree:
//!
//! 1. **Normalize**: anchors wrapped in inline-style elements are moved
//!    outward so links stay containers and styles become marks.
//! 2. **Transform**: top-level `p`, `h2`, `ul`, `ol`, `hr` and `blockquote`
//!    elements become blocks; `strong`, `em` and `u` become marks on text;
//!    anything else is unwrapped.
//! 3. **Embed**: top-level `img` elements are uploaded, processed and
//!    published as assets, then embedded by reference.
//! 4. **Merge** (optional): adjacent block quotes are joined.
//!
//! ## Example
//!
//! ```rust
//! use html_richtext::RichTextConverter;
//! use richtext_core::to_json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let converter = RichTextConverter::new();
//! let document = converter
//!     .convert_html("<p>Hello <strong>World</strong></p>")
//!     .await
//!     .unwrap();
//!
//! let json = to_json(&document).unwrap();
//! assert_eq!(json["content"][0]["content"][1]["marks"][0]["type"], "bold");
//! # }
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod normalize;
mod options;
mod service;
mod tag;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use normalize::normalize_inline_styles;
pub use options::{ConverterOptions, UploadConfig};
pub use service::RichTextConverter;
pub use tag::Tag;

pub use richtext_contentful::{AssetError, AssetPlatform, PollPolicy};

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(
        "Missing configuration for uploading images to Contentful: {}. \
         Please provide spaceId, environmentId, accessToken, and locale.",
        .missing.join(", ")
    )]
    Configuration { missing: Vec<&'static str> },

    #[error(transparent)]
    Asset(#[from] AssetError),
}

impl ConversionError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ConversionError::Asset(error) if error.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
