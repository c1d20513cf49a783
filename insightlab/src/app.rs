//! Page-lifetime context
//!
//! One [`App`] owns everything the page mutates: the theme, the active
//! period, the current view model and every live chart. It runs on the UI
//! thread only, so nothing here is synchronized.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::charts::{
    ChartLibrary, ChartRegistry, ChartSlot, RenderContext, RenderOutcome, render_bar,
    render_heatmap, render_line, render_multiples, render_scatter,
};
use crate::config::{Config, Page};
use crate::dom::{Document, write_slot};
use crate::error::{InsightError, Result};
use crate::loader::{Datasets, JsonSource, load_datasets};
use crate::narrative::Synthesizer;
use crate::tabs::PeriodTabs;
use crate::theme::{Theme, ThemeStore, load_theme, persist_theme};
use crate::view_model::{ViewModel, build};

pub struct App {
    config: Config,
    document: Rc<dyn Document>,
    library: Option<Rc<dyn ChartLibrary>>,
    store: Rc<dyn ThemeStore>,
    theme: Theme,
    reduced_motion: bool,
    tabs: PeriodTabs,
    view: ViewModel,
    registry: ChartRegistry,
    started_at: DateTime<Utc>,
    loaded_at: Option<DateTime<Utc>>,
}

impl App {
    /// Restore the stored theme and resolve motion and period preferences
    pub fn new(
        config: Config,
        document: Rc<dyn Document>,
        library: Option<Rc<dyn ChartLibrary>>,
        store: Rc<dyn ThemeStore>,
    ) -> Self {
        let theme = load_theme(store.as_ref());
        let reduced_motion = config
            .reduced_motion
            .unwrap_or_else(|| document.prefers_reduced_motion());
        let tabs = PeriodTabs::new(&config.default_period).unwrap_or_else(|e| {
            warn!(error = %e, "falling back to the first period");
            PeriodTabs::default()
        });

        Self {
            config,
            document,
            library,
            store,
            theme,
            reduced_motion,
            tabs,
            view: ViewModel::default(),
            registry: ChartRegistry::new(),
            started_at: Utc::now(),
            loaded_at: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn active_period(&self) -> &'static str {
        self.tabs.active().key
    }

    /// Live chart instances across all slots
    pub fn live_charts(&self) -> usize {
        self.registry.total()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Run the page flow: load both datasets, then draw and write copy
    pub async fn start(&mut self, source: &impl JsonSource) {
        self.apply_theme();
        let datasets = load_datasets(source, &self.config).await;
        self.present(&datasets);
    }

    /// Everything after the fetches: view model, tabs, charts, copy
    pub fn present(&mut self, datasets: &Datasets) {
        self.ingest(datasets);
        self.tabs.sync(self.document.as_ref());

        match self.config.page {
            Page::Index => {
                if let Err(e) = self.render_all() {
                    error!(error = %e, "chart rendering failed");
                }
            }
            Page::Study => debug!("study page; charts skipped"),
        }
        let written = self.sync_text();
        if let Some(loaded_at) = self.loaded_at {
            info!(
                page = %self.config.page,
                charts = self.registry.total(),
                written,
                ready_ms = (loaded_at - self.started_at).num_milliseconds(),
                "page ready"
            );
        }
    }

    /// Set the theme attributes before anything is drawn
    pub fn apply_theme(&self) {
        self.document.apply_theme(self.theme);
    }

    /// Replace the view model with one built from fresh datasets
    pub fn ingest(&mut self, datasets: &Datasets) {
        self.view = build(datasets.payload.as_ref(), datasets.summary.as_ref());
        self.loaded_at = Some(Utc::now());
        info!(
            payload = datasets.payload.is_some(),
            summary = datasets.summary.is_some(),
            "datasets loaded"
        );
    }

    /// Draw every chart.
    ///
    /// When one renderer fails, every chart is destroyed and every fallback
    /// shown before the error is returned.
    pub fn render_all(&mut self) -> Result<Vec<(ChartSlot, RenderOutcome)>> {
        let mut outcomes = Vec::with_capacity(ChartSlot::ALL.len());
        for slot in ChartSlot::ALL {
            match self.render(slot) {
                Ok(outcome) => outcomes.push((slot, outcome)),
                Err(e) => {
                    self.sweep();
                    return Err(e);
                }
            }
        }
        Ok(outcomes)
    }

    fn render(&mut self, slot: ChartSlot) -> Result<RenderOutcome> {
        let period = self.tabs.active().key;
        let view = &self.view;
        let mut ctx = RenderContext {
            document: self.document.as_ref(),
            library: self.library.as_deref(),
            registry: &mut self.registry,
            theme: self.theme,
            reduced_motion: self.reduced_motion,
        };
        match slot {
            ChartSlot::Bar => render_bar(&mut ctx, view.rent_data.as_ref()),
            ChartSlot::Line => render_line(&mut ctx, view.rent_data.as_ref()),
            ChartSlot::Multiples => render_multiples(&mut ctx, view.rent_data.as_ref()),
            ChartSlot::Scatter => render_scatter(&mut ctx, view.scatter_data.as_ref(), period),
            ChartSlot::Heatmap => render_heatmap(&mut ctx, view.heatmap_data.as_ref()),
        }
    }

    /// Destroy every chart and reveal every fallback
    fn sweep(&mut self) {
        self.registry.destroy_all();
        for slot in ChartSlot::ALL {
            self.document.show_fallback(slot.key(), None);
        }
    }

    /// Write every available sentence; returns the number of nodes written
    pub fn sync_text(&self) -> usize {
        let narrative = Synthesizer::new(self.config.hotspot_threshold)
            .synthesize(self.view.summary.as_ref(), &self.view);
        let mut written = 0;
        for (slot, text) in narrative.iter() {
            let count = write_slot(self.document.as_ref(), slot, text);
            if count == 0 {
                debug!(selector = %slot.selector(), "no node for narrative slot");
            }
            written += count;
        }
        debug!(slots = narrative.len(), written, "narrative synced");
        written
    }

    /// Flip and persist the theme, then rebuild every chart in the new palette
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        info!(theme = %self.theme, "theme changed");
        persist_theme(self.store.as_ref(), self.theme);
        self.document.apply_theme(self.theme);

        self.registry.destroy_all();
        if self.config.page == Page::Index {
            if let Err(e) = self.render_all() {
                error!(error = %e, "chart rendering failed after theme change");
            }
        }
        self.theme
    }

    /// Activate a period tab and redraw the scatter view only
    pub fn select_period(&mut self, key: &str) -> Result<RenderOutcome> {
        self.tabs.select(key, self.document.as_ref())?;
        self.render(ChartSlot::Scatter).inspect_err(|e| {
            warn!(error = %e, period = key, "scatter render failed");
        })
    }

    /// Period key carried by a clicked tab
    pub fn tab_key(attr: Option<String>) -> Result<String> {
        attr.filter(|key| !key.is_empty())
            .ok_or_else(|| InsightError::Dom("period tab without a key".into()))
    }
}
