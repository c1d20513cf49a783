//! Page configuration
//!
//! Every key is optional. On the page the values come from the `<body>`
//! element's `data-*` attributes; tests use a plain map.

use std::collections::HashMap;
use std::fmt;

use crate::error::{InsightError, Result};
use crate::narrative::DEFAULT_HOTSPOT_THRESHOLD;
use crate::view_model::Period;

/// String key/value lookup the configuration is read from
pub trait ConfigSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }
}

/// Which page the bundle is driving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Charts plus narrative
    #[default]
    Index,
    /// Narrative and tabs only
    Study,
}

impl Page {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "index" => Some(Page::Index),
            "study" => Some(Page::Study),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::Study => "study",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub page: Page,

    /// Relative paths of the two datasets
    pub payload_url: String,
    pub summary_url: String,

    pub log_level: String,

    /// Storage key of the persisted theme
    pub theme_storage_key: String,

    /// Scatter period selected before any tab is clicked
    pub default_period: String,

    /// |YoY change| counted as a volatility hotspot, in percentage points
    pub hotspot_threshold: f64,

    /// `None` defers to the host's reduced-motion preference
    pub reduced_motion: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page: Page::Index,
            payload_url: "./data/viz_payload.json".to_string(),
            summary_url: "./data/derived_summary.json".to_string(),
            log_level: "info".to_string(),
            theme_storage_key: "insightlab-theme".to_string(),
            default_period: "2010-2013".to_string(),
            hotspot_threshold: DEFAULT_HOTSPOT_THRESHOLD,
            reduced_motion: None,
        }
    }
}

impl Config {
    /// Read every key from `source`, falling back to the default per key
    pub fn from_source(source: &impl ConfigSource) -> Result<Self> {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            source
                .var(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let page = match source.var("page") {
            Some(value) => Page::parse(&value)
                .ok_or_else(|| InsightError::Config(format!("unknown page '{value}'")))?,
            None => defaults.page,
        };

        Ok(Self {
            page,
            payload_url: text("payload-url", defaults.payload_url),
            summary_url: text("summary-url", defaults.summary_url),
            log_level: text("log-level", defaults.log_level),
            theme_storage_key: text("theme-storage-key", defaults.theme_storage_key),
            default_period: text("default-period", defaults.default_period),

            hotspot_threshold: source
                .var("hotspot-threshold")
                .map(|v| v.trim().parse().unwrap_or(DEFAULT_HOTSPOT_THRESHOLD))
                .unwrap_or(DEFAULT_HOTSPOT_THRESHOLD),

            reduced_motion: source
                .var("reduced-motion")
                .map(|v| v.trim().to_lowercase() == "true"),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if Period::find(&self.default_period).is_none() {
            return Err(InsightError::UnknownPeriod(self.default_period.clone()));
        }
        if self.payload_url.trim().is_empty() || self.summary_url.trim().is_empty() {
            return Err(InsightError::Config("dataset URLs must not be empty".into()));
        }
        if !(self.hotspot_threshold.is_finite() && self.hotspot_threshold > 0.0) {
            return Err(InsightError::Config("hotspot-threshold must be positive".into()));
        }
        Ok(())
    }
}
