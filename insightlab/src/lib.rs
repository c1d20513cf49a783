//! InsightLab - rent, income and transit story site
//!
//! Front-end core for a static site that reads two pre-computed JSON
//! datasets and turns them into charts and narrative copy.
//!
//! # Architecture
//! - `loader` fetches both datasets concurrently; either may be absent
//! - `view_model` projects them into per-chart shapes
//! - `narrative` derives the sentences written into the page
//! - `charts` builds Chart.js definitions and owns every live instance
//! - `app` is the page-lifetime context tying theme, tabs and charts together
//! - `web` binds all of the above to the browser (wasm32 only)
//! - `site` emits the static HTML shell
//!
//! The DOM, the chart library and theme storage are traits, so everything
//! except `web` runs and is tested natively.

// Clippy configuration for chart and copy code
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::map_unwrap_or)] // Explicit fallback preference
#![allow(clippy::float_cmp)] // Exact comparisons against parsed data

pub mod app;
pub mod charts;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
mod lenient;
pub mod loader;
pub mod narrative;
pub mod site;
pub mod tabs;
pub mod telemetry;
pub mod theme;
pub mod types;
pub mod view_model;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use config::{Config, ConfigSource, Page};
pub use error::{InsightError, Result};
pub use loader::{Datasets, HttpSource, JsonSource, load_datasets};
pub use narrative::{Narrative, Slot, Synthesizer, synthesize};
pub use theme::Theme;
pub use types::{RawPayload, SummaryStatistics};
pub use view_model::{ViewModel, build};
