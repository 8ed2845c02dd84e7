//! In-memory [`AssetPlatform`] for tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::model::{Asset, AssetFields, AssetSys};
use crate::platform::AssetPlatform;
use crate::{AssetError, Result};

/// A recorded platform call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Create {
        title: String,
        description: String,
        content_type: String,
        upload: String,
    },
    Process(String),
    Get(String),
    Publish(String),
}

#[derive(Default)]
struct MockState {
    calls: Vec<PlatformCall>,
    assets: Vec<Asset>,
    gets: u32,
}

/// Platform that stores assets in memory and reports them processed after a
/// configurable number of fetches.
pub struct MockPlatform {
    ready_after: Option<u32>,
    failing_polls: u32,
    failing_create: bool,
    state: Mutex<MockState>,
}

impl MockPlatform {
    /// Assets report a file URL from the `polls`-th fetch on
    pub fn ready_after(polls: u32) -> Self {
        Self {
            ready_after: Some(polls),
            failing_polls: 0,
            failing_create: false,
            state: Mutex::new(MockState::default()),
        }
    }

    /// Assets never finish processing
    pub fn never_ready() -> Self {
        Self {
            ready_after: None,
            ..Self::ready_after(0)
        }
    }

    /// The first `count` fetches fail with a 503
    pub fn failing_polls(mut self, count: u32) -> Self {
        self.failing_polls = count;
        self
    }

    /// Asset creation fails with a 422
    pub fn failing_create(mut self) -> Self {
        self.failing_create = true;
        self
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.state().calls.clone()
    }

    pub fn get_count(&self) -> u32 {
        self.state().gets
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn not_found(id: &str) -> AssetError {
    AssetError::Api {
        status: 404,
        message: format!("asset {id} not found"),
    }
}

#[async_trait]
impl AssetPlatform for MockPlatform {
    async fn create_asset(&self, fields: AssetFields) -> Result<Asset> {
        let mut state = self.state();

        let (content_type, upload) = fields
            .file
            .values()
            .next()
            .map(|file| (file.content_type.clone(), file.upload.clone().unwrap_or_default()))
            .unwrap_or_default();
        state.calls.push(PlatformCall::Create {
            title: fields.title.values().next().cloned().unwrap_or_default(),
            description: fields.description.values().next().cloned().unwrap_or_default(),
            content_type,
            upload,
        });

        if self.failing_create {
            return Err(AssetError::Api {
                status: 422,
                message: "Validation error".to_string(),
            });
        }

        let asset = Asset {
            sys: AssetSys {
                id: format!("asset-{}", state.assets.len() + 1),
                version: Some(1),
                kind: Some("Asset".to_string()),
            },
            fields,
        };
        state.assets.push(asset.clone());
        Ok(asset)
    }

    async fn process_all_locales(&self, asset: &Asset) -> Result<()> {
        let mut state = self.state();
        state.calls.push(PlatformCall::Process(asset.id().to_string()));

        let stored = state
            .assets
            .iter_mut()
            .find(|stored| stored.id() == asset.id())
            .ok_or_else(|| not_found(asset.id()))?;
        stored.sys.version = stored.sys.version.map(|v| v + 1);
        Ok(())
    }

    async fn get_asset(&self, id: &str) -> Result<Asset> {
        let mut state = self.state();
        state.calls.push(PlatformCall::Get(id.to_string()));
        state.gets += 1;

        let fetch = state.gets;
        if fetch <= self.failing_polls {
            return Err(AssetError::Api {
                status: 503,
                message: "Service unavailable".to_string(),
            });
        }

        let ready = self.ready_after.is_some_and(|polls| fetch >= polls);
        let stored = state
            .assets
            .iter_mut()
            .find(|stored| stored.id() == id)
            .ok_or_else(|| not_found(id))?;

        if ready {
            for file in stored.fields.file.values_mut() {
                if file.url.is_none() {
                    file.url = Some(format!("//assets.example.com/{}/{}", id, file.file_name));
                }
            }
        }
        Ok(stored.clone())
    }

    async fn publish(&self, asset: &Asset) -> Result<Asset> {
        let mut state = self.state();
        state.calls.push(PlatformCall::Publish(asset.id().to_string()));

        let stored = state
            .assets
            .iter_mut()
            .find(|stored| stored.id() == asset.id())
            .ok_or_else(|| not_found(asset.id()))?;
        stored.sys.version = stored.sys.version.map(|v| v + 1);
        Ok(stored.clone())
    }
}
