//! Chart renderers
//!
//! Each renderer turns one slice of the view model into a chart definition
//! and hands it to the charting library. The library is an injected
//! capability: when it is missing, or when the mount point or the data is
//! missing, the renderer shows the chart's fallback message instead.
//!
//! Every chart instance goes through [`ChartRegistry::register`], which
//! destroys whatever the slot held before. That keeps exactly one live
//! instance (or one live set, for small multiples) per slot.

mod bar;
mod heatmap;
mod line;
mod multiples;
pub mod options;
mod scatter;

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::dom::Document;
use crate::error::Result;
use crate::format::{locale_number, percent};
use crate::theme::Theme;

pub use bar::{bar_spec, render_bar};
pub use heatmap::{heatmap_spec, render_heatmap};
pub use line::{line_spec, render_line};
pub use multiples::{multiples_specs, render_multiples};
pub use scatter::{render_scatter, scatter_spec};

/// Where a chart is mounted on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    /// A canvas with this id
    Canvas(&'static str),
    /// A container that receives generated canvases
    Container(&'static str),
}

impl Mount {
    pub fn selector(self) -> String {
        match self {
            Mount::Canvas(id) => format!("#{id}"),
            Mount::Container(selector) => selector.to_string(),
        }
    }
}

/// One chart position on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartSlot {
    Bar,
    Line,
    Multiples,
    Scatter,
    Heatmap,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 5] = [
        ChartSlot::Bar,
        ChartSlot::Line,
        ChartSlot::Multiples,
        ChartSlot::Scatter,
        ChartSlot::Heatmap,
    ];

    /// Name used by `data-chart-fallback`
    pub fn key(self) -> &'static str {
        match self {
            ChartSlot::Bar => "bar",
            ChartSlot::Line => "line",
            ChartSlot::Multiples => "multiples",
            ChartSlot::Scatter => "scatter",
            ChartSlot::Heatmap => "heatmap",
        }
    }

    pub fn mount(self) -> Mount {
        match self {
            ChartSlot::Bar => Mount::Canvas("chart-bar"),
            ChartSlot::Line => Mount::Canvas("chart-line"),
            ChartSlot::Multiples => Mount::Container(crate::dom::MULTIPLES_CONTAINER),
            ChartSlot::Scatter => Mount::Canvas("chart-scatter"),
            ChartSlot::Heatmap => Mount::Canvas("chart-heatmap"),
        }
    }

    /// Fallback copy for a chart that cannot be drawn
    pub fn fallback_message(self, reason: FallbackReason) -> &'static str {
        use FallbackReason::{EmptySelection, LibraryUnavailable, MissingData};
        match (self, reason) {
            (ChartSlot::Bar, MissingData) => {
                "Data payload missing. Median rents remain in the written findings."
            }
            (ChartSlot::Bar, _) => "Chart.js did not load. Median rents are still summarized below.",
            (ChartSlot::Line, MissingData) => {
                "Data payload missing. Trajectory highlights remain described below."
            }
            (ChartSlot::Line, _) => {
                "Chart.js did not load. Trajectory details remain in the written insights."
            }
            (ChartSlot::Multiples, MissingData) => {
                "Data payload missing. Borough trends remain described below."
            }
            (ChartSlot::Multiples, _) => {
                "Chart.js did not load. Borough trends remain described below."
            }
            (ChartSlot::Scatter, MissingData) => {
                "Data payload missing. Transit-weighted insights remain in the narrative."
            }
            (ChartSlot::Scatter, EmptySelection) => {
                "No observations available for the selected window."
            }
            (ChartSlot::Scatter, LibraryUnavailable) => {
                "Chart.js did not load. Use the narrative notes for transit insights."
            }
            (ChartSlot::Heatmap, MissingData) => {
                "Data payload missing. YoY rent change highlights remain summarised below."
            }
            (ChartSlot::Heatmap, _) => {
                "Chart.js did not load. Rent change spikes are still described in the insights."
            }
        }
    }
}

/// Why a chart shows its fallback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    MissingData,
    LibraryUnavailable,
    EmptySelection,
}

/// What a render call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Number of live instances now registered for the slot
    Rendered(usize),
    Fallback(FallbackReason),
    /// The mount point is not on this page
    NoMount,
}

/// Values the tooltip callback reads from the library's context object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipContext<'a> {
    pub dataset_label: &'a str,
    pub label: &'a str,
    /// `label` carried on the raw data point, if any
    pub raw_label: Option<&'a str>,
    pub x: f64,
    pub y: f64,
}

/// Formatter the charting library calls back into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    /// Axis tick as `$1,234`
    TickCurrency,
    /// Axis tick as `12%`
    TickPercent,
    /// `$1,234 / month`
    TooltipMonthlyRent,
    /// `Bronx: +4.2%`
    TooltipSignedPercent,
    /// `Bronx 2015 - Income $52,000, Rent $1,450`
    TooltipBubble,
    /// `$1,450 (2015)`
    TooltipRentAtLabel,
}

impl Callback {
    pub fn is_tooltip(self) -> bool {
        !matches!(self, Callback::TickCurrency | Callback::TickPercent)
    }

    pub fn tick(self, value: f64) -> String {
        match self {
            Callback::TickPercent => format!("{value}%"),
            _ => format!("${}", locale_number(value)),
        }
    }

    pub fn tooltip(self, ctx: &TooltipContext<'_>) -> String {
        match self {
            Callback::TooltipMonthlyRent => format!("${} / month", locale_number(ctx.y)),
            Callback::TooltipSignedPercent => format!("{}: {}", ctx.dataset_label, percent(ctx.y)),
            Callback::TooltipBubble => format!(
                "{} - Income ${}, Rent ${}",
                ctx.raw_label.unwrap_or("Observation"),
                locale_number(ctx.x),
                locale_number(ctx.y)
            ),
            Callback::TooltipRentAtLabel => {
                format!("${} ({})", locale_number(ctx.y), ctx.label)
            }
            Callback::TickCurrency | Callback::TickPercent => self.tick(ctx.y),
        }
    }
}

/// A complete chart definition: plain JSON config plus the callbacks to
/// install at the given paths inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub config: Value,
    pub callbacks: Vec<(Vec<&'static str>, Callback)>,
}

impl ChartSpec {
    pub fn new(config: Value) -> Self {
        Self {
            config,
            callbacks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_callback(mut self, path: &[&'static str], callback: Callback) -> Self {
        self.callbacks.push((path.to_vec(), callback));
        self
    }

    /// Chart type (`bar`, `line`, `bubble`)
    pub fn kind(&self) -> Option<&str> {
        self.config.get("type").and_then(Value::as_str)
    }
}

/// A live chart owned by the registry
pub trait ChartHandle {
    fn destroy(&mut self);
}

/// The charting library, as an optional capability
pub trait ChartLibrary {
    /// Draw `spec` on the canvas with this id
    fn create(&self, canvas_id: &str, spec: &ChartSpec) -> Result<Box<dyn ChartHandle>>;
}

/// Owner of every live chart instance, keyed by slot
#[derive(Default)]
pub struct ChartRegistry {
    charts: BTreeMap<ChartSlot, Vec<Box<dyn ChartHandle>>>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy what the slot held, then take ownership of `instances`
    pub fn register(&mut self, slot: ChartSlot, instances: Vec<Box<dyn ChartHandle>>) -> usize {
        self.release(slot);
        let count = instances.len();
        self.charts.insert(slot, instances);
        count
    }

    /// Destroy and forget the slot's instances
    pub fn release(&mut self, slot: ChartSlot) {
        if let Some(existing) = self.charts.remove(&slot) {
            debug!(slot = slot.key(), count = existing.len(), "destroying charts");
            for mut chart in existing {
                chart.destroy();
            }
        }
    }

    pub fn destroy_all(&mut self) {
        for slot in ChartSlot::ALL {
            self.release(slot);
        }
    }

    /// Live instances for a slot
    pub fn live(&self, slot: ChartSlot) -> usize {
        self.charts.get(&slot).map_or(0, Vec::len)
    }

    pub fn total(&self) -> usize {
        self.charts.values().map(Vec::len).sum()
    }
}

/// What every renderer needs from the page context
pub struct RenderContext<'a> {
    pub document: &'a dyn Document,
    pub library: Option<&'a dyn ChartLibrary>,
    pub registry: &'a mut ChartRegistry,
    pub theme: Theme,
    pub reduced_motion: bool,
}

impl<'a> RenderContext<'a> {
    /// Show the fallback and drop any stale chart in the slot
    fn fallback(&mut self, slot: ChartSlot, reason: FallbackReason) -> RenderOutcome {
        debug!(slot = slot.key(), ?reason, "showing chart fallback");
        self.registry.release(slot);
        self.document
            .show_fallback(slot.key(), Some(slot.fallback_message(reason)));
        RenderOutcome::Fallback(reason)
    }

    /// Common checks before drawing: mount point, data, library.
    fn preflight<'d, T>(
        &mut self,
        slot: ChartSlot,
        data: Option<&'d T>,
    ) -> std::result::Result<(&'d T, &'a dyn ChartLibrary), RenderOutcome> {
        if !self.document.exists(&slot.mount().selector()) {
            debug!(slot = slot.key(), "mount point absent; skipping");
            return Err(RenderOutcome::NoMount);
        }
        let Some(data) = data else {
            return Err(self.fallback(slot, FallbackReason::MissingData));
        };
        let Some(library) = self.library else {
            warn!(slot = slot.key(), "chart library unavailable");
            return Err(self.fallback(slot, FallbackReason::LibraryUnavailable));
        };
        Ok((data, library))
    }

    /// Create one chart on the slot's canvas and register it
    fn draw(&mut self, slot: ChartSlot, library: &dyn ChartLibrary, spec: &ChartSpec) -> Result<RenderOutcome> {
        let Mount::Canvas(canvas_id) = slot.mount() else {
            return Ok(RenderOutcome::NoMount);
        };
        self.document.hide_fallback(slot.key());
        let chart = library.create(canvas_id, spec)?;
        let live = self.registry.register(slot, vec![chart]);
        Ok(RenderOutcome::Rendered(live))
    }
}
