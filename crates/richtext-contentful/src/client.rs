//! Content Management API client.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Asset, AssetFields};
use crate::platform::AssetPlatform;
use crate::{AssetError, Result};

/// Public Content Management API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.contentful.com";

const CMA_CONTENT_TYPE: &str = "application/vnd.contentful.management.v1+json";
const VERSION_HEADER: &str = "X-Contentful-Version";

/// Validated settings for uploading assets
#[derive(Clone, PartialEq, Eq)]
pub struct ContentfulSettings {
    pub space_id: String,
    pub environment_id: String,
    pub access_token: String,
    /// Locale the asset fields are written under
    pub locale: String,
    pub base_url: String,
}

impl ContentfulSettings {
    pub fn new(
        space_id: impl Into<String>,
        environment_id: impl Into<String>,
        access_token: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            space_id: space_id.into(),
            environment_id: environment_id.into(),
            access_token: access_token.into(),
            locale: locale.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for ContentfulSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentfulSettings")
            .field("space_id", &self.space_id)
            .field("environment_id", &self.environment_id)
            .field("access_token", &"<redacted>")
            .field("locale", &self.locale)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// [`AssetPlatform`] backed by the Content Management API
pub struct ContentfulClient {
    http: Client,
    environment_url: String,
    access_token: String,
}

impl ContentfulClient {
    /// Create a client for the space and environment in `settings`
    pub fn new(settings: &ContentfulSettings) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self::with_http_client(http, settings))
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_http_client(http: Client, settings: &ContentfulSettings) -> Self {
        let environment_url = format!(
            "{}/spaces/{}/environments/{}",
            settings.base_url.trim_end_matches('/'),
            settings.space_id,
            settings.environment_id
        );

        Self {
            http,
            environment_url,
            access_token: settings.access_token.clone(),
        }
    }

    fn assets_url(&self) -> String {
        format!("{}/assets", self.environment_url)
    }

    fn asset_url(&self, id: &str) -> String {
        format!("{}/assets/{}", self.environment_url, id)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, CMA_CONTENT_TYPE)
    }

    /// Send a request, turning non-2xx responses into [`AssetError::Api`]
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|error| error.message)
            .unwrap_or(body);

        Err(AssetError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn version_of(asset: &Asset) -> Result<u64> {
    asset.sys.version.ok_or_else(|| AssetError::MissingVersion {
        asset_id: asset.id().to_string(),
    })
}

#[async_trait]
impl AssetPlatform for ContentfulClient {
    async fn create_asset(&self, fields: AssetFields) -> Result<Asset> {
        let body = serde_json::to_vec(&CreateAssetRequest { fields: &fields })?;
        let request = self.request(Method::POST, self.assets_url()).body(body);

        let asset: Asset = self.send(request).await?.json().await?;
        debug!(asset_id = %asset.id(), "created draft asset");
        Ok(asset)
    }

    async fn process_all_locales(&self, asset: &Asset) -> Result<()> {
        let version = version_of(asset)?;

        for locale in asset.fields.file.keys() {
            let url = format!("{}/files/{}/process", self.asset_url(asset.id()), locale);
            let request = self
                .request(Method::PUT, url)
                .header(VERSION_HEADER, version.to_string());
            self.send(request).await?;
            debug!(asset_id = %asset.id(), %locale, "requested asset processing");
        }

        Ok(())
    }

    async fn get_asset(&self, id: &str) -> Result<Asset> {
        let request = self.request(Method::GET, self.asset_url(id));
        Ok(self.send(request).await?.json().await?)
    }

    async fn publish(&self, asset: &Asset) -> Result<Asset> {
        let version = version_of(asset)?;
        let url = format!("{}/published", self.asset_url(asset.id()));
        let request = self
            .request(Method::PUT, url)
            .header(VERSION_HEADER, version.to_string());

        Ok(self.send(request).await?.json().await?)
    }
}

#[derive(Serialize)]
struct CreateAssetRequest<'a> {
    fields: &'a AssetFields,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}
