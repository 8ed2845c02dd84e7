//! RichTextConverter - the main entry point for HTML to rich text conversion.

use std::sync::Arc;

use richtext_contentful::{AssetMaterializer, AssetPlatform, ContentfulClient, PollPolicy};
use richtext_core::{merge_adjacent_blockquotes, Block, Document};
use tracing::{debug, warn};

use crate::convert::convert_element;
use crate::node::Node;
use crate::normalize::normalize_inline_styles;
use crate::options::ConverterOptions;
use crate::tag::Tag;
use crate::Result;

/// Converts HTML trees to rich text documents.
///
/// Conversion is all-or-nothing: the first configuration, upload or
/// processing failure aborts it and no partial document is returned.
pub struct RichTextConverter {
    options: ConverterOptions,
    poll_policy: PollPolicy,
    platform: Option<Arc<dyn AssetPlatform>>,
}

impl RichTextConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::with_options(ConverterOptions::default())
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConverterOptions) -> Self {
        Self {
            options,
            poll_policy: PollPolicy::default(),
            platform: None,
        }
    }

    /// Upload images through `platform` instead of a Contentful client
    /// built from the upload configuration.
    ///
    /// The configuration is still validated before any image is uploaded.
    pub fn with_platform(mut self, platform: Arc<dyn AssetPlatform>) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Change how asset processing is polled
    pub fn with_poll_policy(mut self, poll_policy: PollPolicy) -> Self {
        self.poll_policy = poll_policy;
        self
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ConverterOptions {
        &mut self.options
    }

    /// Parse an HTML string and convert its body
    #[cfg(feature = "html")]
    pub async fn convert_html(&self, html: &str) -> Result<Document> {
        let body = crate::html::parse_html(html);
        self.convert(&body).await
    }

    /// Convert the element children of `root` (usually `<body>`).
    ///
    /// Images are uploaded one at a time, in document order.
    pub async fn convert(&self, root: &Node) -> Result<Document> {
        let normalized = normalize_inline_styles(root);
        let mut content = Vec::new();

        for element in normalized.element_children() {
            if element.tag() == Tag::Img {
                if self.options.ignore_images {
                    continue;
                }
                if let Some(block) = self.convert_image(element).await? {
                    content.push(block);
                }
                continue;
            }

            match convert_element(element) {
                Some(block) => content.push(block),
                None => debug!(tag = %element.tag_name(), "skipping unsupported top-level element"),
            }
        }

        if self.options.merge_adjacent_blockquotes {
            content = merge_adjacent_blockquotes(content);
        }

        debug!(blocks = content.len(), "converted document");
        Ok(Document::new(content))
    }

    /// Upload an `<img>` and return the embed block.
    ///
    /// Configuration is checked first so a missing field fails before any
    /// network call. An image without `src` is skipped.
    async fn convert_image(&self, element: &Node) -> Result<Option<Block>> {
        let settings = self.options.upload.validate()?;

        let Some(source) = element.attr("src").filter(|src| !src.is_empty()) else {
            warn!("skipping image without src");
            return Ok(None);
        };
        let alt = element.attr("alt").unwrap_or("");

        let platform: Arc<dyn AssetPlatform> = match &self.platform {
            Some(platform) => Arc::clone(platform),
            None => Arc::new(ContentfulClient::new(&settings)?),
        };

        let link = AssetMaterializer::new(platform.as_ref(), &settings.locale)
            .with_policy(self.poll_policy)
            .materialize(source, alt)
            .await?;

        Ok(Some(Block::EmbeddedAsset(link)))
    }
}

impl Default for RichTextConverter {
    fn default() -> Self {
        Self::new()
    }
}
