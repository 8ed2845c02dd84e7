//! Contentful asset payloads.
//!
//! Only the fields the materializer reads or writes are modelled; anything
//! else in an API response is ignored on deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A field value keyed by locale code (e.g. `en-US`)
pub type Localized<T> = IndexMap<String, T>;

/// An asset as returned by the Content Management API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub sys: AssetSys,
    #[serde(default)]
    pub fields: AssetFields,
}

impl Asset {
    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// The processed file URL for a locale, once processing has finished
    pub fn file_url(&self, locale: &str) -> Option<&str> {
        self.fields.file.get(locale)?.url.as_deref()
    }

    pub fn is_processed(&self, locale: &str) -> bool {
        self.file_url(locale).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSys {
    pub id: String,
    /// Optimistic-locking version; process and publish must echo it back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetFields {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub title: Localized<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub description: Localized<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub file: Localized<AssetFile>,
}

impl AssetFields {
    /// Fields for a new asset uploaded from `upload_url` under a single locale
    pub fn for_upload(
        locale: &str,
        title: &str,
        description: &str,
        file_name: &str,
        content_type: &str,
        upload_url: &str,
    ) -> Self {
        let mut fields = Self::default();
        fields.title.insert(locale.to_string(), title.to_string());
        fields
            .description
            .insert(locale.to_string(), description.to_string());
        fields.file.insert(
            locale.to_string(),
            AssetFile {
                content_type: content_type.to_string(),
                file_name: file_name.to_string(),
                upload: Some(upload_url.to_string()),
                url: None,
            },
        );
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    pub content_type: String,
    pub file_name: String,
    /// Remote URL the platform fetches the bytes from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload: Option<String>,
    /// Hosted URL, present once processing has finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
