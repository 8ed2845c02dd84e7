//! Converter configuration.

use richtext_contentful::ContentfulSettings;
use serde::Deserialize;

use crate::{ConversionError, Result};

/// Options for RichTextConverter
///
/// Deserializes from the camelCase configuration object, e.g.
/// `{"mergeAdjacentBlockquotes": true, "spaceId": "...", "locale": "en-US"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterOptions {
    /// Skip `<img>` tags entirely; no upload configuration is needed
    pub ignore_images: bool,

    /// Merge runs of consecutive block quotes into one
    pub merge_adjacent_blockquotes: bool,

    /// Where images are uploaded
    #[serde(flatten)]
    pub upload: UploadConfig,
}

/// Image upload configuration. Only checked when an image is converted.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    pub space_id: Option<String>,
    pub environment_id: Option<String>,
    pub access_token: Option<String>,
    pub locale: Option<String>,
    /// Management API endpoint; defaults to the public Contentful API
    pub base_url: Option<String>,
}

impl UploadConfig {
    /// Check that every required field is present and non-empty
    pub fn validate(&self) -> Result<ContentfulSettings> {
        let (Some(space), Some(environment), Some(token), Some(locale)) = (
            present(&self.space_id),
            present(&self.environment_id),
            present(&self.access_token),
            present(&self.locale),
        ) else {
            return Err(ConversionError::Configuration {
                missing: self.missing_fields(),
            });
        };

        let settings = ContentfulSettings::new(space, environment, token, locale);
        Ok(match present(&self.base_url) {
            Some(base_url) => settings.with_base_url(base_url),
            None => settings,
        })
    }

    /// Names of the required fields that are absent or empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("spaceId", &self.space_id),
            ("environmentId", &self.environment_id),
            ("accessToken", &self.access_token),
            ("locale", &self.locale),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl std::fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadConfig")
            .field("space_id", &self.space_id)
            .field("environment_id", &self.environment_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("locale", &self.locale)
            .field("base_url", &self.base_url)
            .finish()
    }
}
