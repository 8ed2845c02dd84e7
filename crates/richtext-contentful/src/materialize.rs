//! Upload, process, poll, publish.

use std::time::Duration;

use richtext_core::AssetLink;
use tracing::{debug, info, warn};

use crate::content_type;
use crate::model::AssetFields;
use crate::platform::AssetPlatform;
use crate::{AssetError, Result};

/// Polls before giving up on asset processing
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 10;

/// Delay before each poll
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Bounded fixed-interval polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL)
    }
}

/// Turns a remote image into a published asset.
///
/// Each call creates a persistent asset. A failure after creation leaves that
/// asset behind as an unpublished draft; nothing is rolled back.
pub struct AssetMaterializer<'a> {
    platform: &'a dyn AssetPlatform,
    locale: &'a str,
    policy: PollPolicy,
}

impl<'a> AssetMaterializer<'a> {
    pub fn new(platform: &'a dyn AssetPlatform, locale: &'a str) -> Self {
        Self {
            platform,
            locale,
            policy: PollPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Upload the image at `source_url` and return a link to the published asset
    pub async fn materialize(&self, source_url: &str, alt_text: &str) -> Result<AssetLink> {
        let file = content_type::resolve(source_url);

        let fields = AssetFields::for_upload(
            self.locale,
            &file.file_name,
            alt_text,
            &file.file_name,
            &file.content_type,
            source_url,
        );
        let asset = self.platform.create_asset(fields).await?;
        info!(
            asset_id = %asset.id(),
            file_name = %file.file_name,
            content_type = %file.content_type,
            "created asset"
        );

        self.platform.process_all_locales(&asset).await?;
        self.wait_until_processed(asset.id()).await?;

        let processed = self.platform.get_asset(asset.id()).await?;
        let published = self.platform.publish(&processed).await?;
        info!(asset_id = %published.id(), "published asset");

        Ok(AssetLink::new(published.id()))
    }

    /// Poll until the localized file has a hosted URL.
    ///
    /// A failed fetch counts as an attempt and does not abort the loop.
    async fn wait_until_processed(&self, asset_id: &str) -> Result<()> {
        for attempt in 1..=self.policy.max_attempts {
            tokio::time::sleep(self.policy.interval).await;

            match self.platform.get_asset(asset_id).await {
                Ok(asset) if asset.is_processed(self.locale) => {
                    debug!(%asset_id, attempt, "asset processed");
                    return Ok(());
                }
                Ok(_) => debug!(%asset_id, attempt, "asset still processing"),
                Err(error) => warn!(%asset_id, attempt, %error, "error fetching updated asset"),
            }
        }

        Err(AssetError::ProcessingTimeout {
            asset_id: asset_id.to_string(),
            attempts: self.policy.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockPlatform, PlatformCall};

    const LOCALE: &str = "en-US";
    const SOURCE: &str = "https://images.example.com/img/cat.png";

    fn fast_policy() -> PollPolicy {
        PollPolicy::new(DEFAULT_MAX_POLL_ATTEMPTS, Duration::from_millis(1))
    }

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.interval, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_materialize_publishes_after_processing() {
        let platform = MockPlatform::ready_after(3);

        let link = AssetMaterializer::new(&platform, LOCALE)
            .with_policy(fast_policy())
            .materialize(SOURCE, "A cat")
            .await
            .unwrap();

        assert_eq!(link.id, "asset-1");
        assert_eq!(
            platform.calls(),
            vec![
                PlatformCall::Create {
                    title: "cat.png".to_string(),
                    description: "A cat".to_string(),
                    content_type: "image/png".to_string(),
                    upload: SOURCE.to_string(),
                },
                PlatformCall::Process("asset-1".to_string()),
                PlatformCall::Get("asset-1".to_string()),
                PlatformCall::Get("asset-1".to_string()),
                PlatformCall::Get("asset-1".to_string()),
                PlatformCall::Get("asset-1".to_string()),
                PlatformCall::Publish("asset-1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_times_out_without_publishing() {
        let platform = MockPlatform::never_ready();

        let err = AssetMaterializer::new(&platform, LOCALE)
            .with_policy(fast_policy())
            .materialize(SOURCE, "")
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert!(matches!(
            err,
            AssetError::ProcessingTimeout { attempts: 10, ref asset_id } if asset_id == "asset-1"
        ));
        assert_eq!(platform.get_count(), 10);
        assert!(!platform
            .calls()
            .iter()
            .any(|call| matches!(call, PlatformCall::Publish(_))));
    }

    #[tokio::test]
    async fn test_failed_polls_count_against_budget() {
        let platform = MockPlatform::ready_after(3).failing_polls(2);

        let link = AssetMaterializer::new(&platform, LOCALE)
            .with_policy(fast_policy())
            .materialize(SOURCE, "")
            .await
            .unwrap();

        assert_eq!(link.id, "asset-1");
        // two failed polls, one successful poll, one re-fetch before publish
        assert_eq!(platform.get_count(), 4);
    }

    #[tokio::test]
    async fn test_polls_failing_throughout_time_out() {
        let platform = MockPlatform::ready_after(1).failing_polls(u32::MAX);

        let err = AssetMaterializer::new(&platform, LOCALE)
            .with_policy(PollPolicy::new(4, Duration::from_millis(1)))
            .materialize(SOURCE, "")
            .await
            .unwrap_err();

        assert!(matches!(err, AssetError::ProcessingTimeout { attempts: 4, .. }));
        assert_eq!(platform.get_count(), 4);
    }

    #[tokio::test]
    async fn test_create_failure_aborts() {
        let platform = MockPlatform::ready_after(1).failing_create();

        let err = AssetMaterializer::new(&platform, LOCALE)
            .with_policy(fast_policy())
            .materialize(SOURCE, "")
            .await
            .unwrap_err();

        assert!(matches!(err, AssetError::Api { status: 422, .. }));
        assert_eq!(platform.get_count(), 0);
    }
}
