//! localStorage theme preference and `<body>` data-attribute configuration

use web_sys::{Storage, Window};

use crate::config::ConfigSource;
use crate::error::{InsightError, Result};
use crate::theme::ThemeStore;

pub struct LocalStorage {
    window: Window,
    key: String,
}

impl LocalStorage {
    pub fn new(window: Window, key: &str) -> Self {
        Self {
            window,
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Result<Storage> {
        self.window
            .local_storage()
            .map_err(|e| InsightError::Storage(format!("{e:?}")))?
            .ok_or_else(|| InsightError::Storage("localStorage unavailable".into()))
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self) -> Result<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| InsightError::Storage(format!("{e:?}")))
    }

    fn save(&self, value: &str) -> Result<()> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|e| InsightError::Storage(format!("{e:?}")))
    }
}

/// Reads `data-<key>` from the body element
pub struct BodyDataset {
    body: Option<web_sys::HtmlElement>,
}

impl BodyDataset {
    pub fn new(document: &web_sys::Document) -> Self {
        Self { body: document.body() }
    }
}

impl ConfigSource for BodyDataset {
    fn var(&self, key: &str) -> Option<String> {
        self.body.as_ref()?.get_attribute(&format!("data-{key}"))
    }
}
