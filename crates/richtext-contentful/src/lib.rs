//! # richtext-contentful
//!
//! Materialize images as Contentful assets so rich text documents can embed
//! them by reference.
//!
//! An image goes through four remote steps: create a draft asset pointing at
//! the source URL, process it, poll until the platform reports a hosted file
//! URL, then publish. [`AssetMaterializer`] drives that sequence against any
//! [`AssetPlatform`]; [`ContentfulClient`] is the Content Management API
//! implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use richtext_contentful::{AssetMaterializer, ContentfulClient, ContentfulSettings};
//!
//! # async fn run() -> richtext_contentful::Result<()> {
//! let settings = ContentfulSettings::new("space-id", "master", "CFPAT-token", "en-US");
//! let client = ContentfulClient::new(&settings)?;
//!
//! let link = AssetMaterializer::new(&client, &settings.locale)
//!     .materialize("https://images.example.com/cat.png", "A cat")
//!     .await?;
//! println!("embedded asset {}", link.id);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod content_type;
mod materialize;
pub mod model;
mod platform;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::{ContentfulClient, ContentfulSettings, DEFAULT_BASE_URL};
pub use content_type::{resolve as resolve_content_type, FileDescriptor};
pub use materialize::{
    AssetMaterializer, PollPolicy, DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL,
};
pub use model::{Asset, AssetFields, AssetFile, AssetSys, Localized};
pub use platform::AssetPlatform;

/// Error type for asset operations
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Contentful API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Asset {asset_id} has no sys.version")]
    MissingVersion { asset_id: String },

    #[error("Asset processing timed out after {attempts} attempts (asset {asset_id})")]
    ProcessingTimeout { asset_id: String, attempts: u32 },

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AssetError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, AssetError::ProcessingTimeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
