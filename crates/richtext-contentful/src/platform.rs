//! The remote asset platform seam.

use async_trait::async_trait;

use crate::model::{Asset, AssetFields};
use crate::Result;

/// Asset operations of a content platform, scoped to one space and environment.
///
/// Implementations must be safe to share between concurrent conversions.
#[async_trait]
pub trait AssetPlatform: Send + Sync {
    /// Create a draft asset
    async fn create_asset(&self, fields: AssetFields) -> Result<Asset>;

    /// Ask the platform to fetch and process the file of every locale
    async fn process_all_locales(&self, asset: &Asset) -> Result<()>;

    /// Fetch the current state of an asset
    async fn get_asset(&self, id: &str) -> Result<Asset>;

    /// Publish an asset, returning the published version
    async fn publish(&self, asset: &Asset) -> Result<Asset>;
}
