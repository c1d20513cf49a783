//! Small multiples: one compact trend chart per borough on a shared y-range

use serde_json::json;
use tracing::debug;

use super::options::{base_options, set_path};
use super::{Callback, ChartSlot, ChartSpec, Mount, RenderContext, RenderOutcome};
use crate::error::{InsightError, Result};
use crate::theme::{Theme, with_alpha};
use crate::view_model::RentData;

/// Id of the generated canvas for the n-th borough
pub fn canvas_id(index: usize) -> String {
    format!("chart-multiples-{index}")
}

/// `(min, max)` over every present value, `(0, 0)` when there are none
fn value_range(data: &RentData) -> (f64, f64) {
    data.series
        .values()
        .flatten()
        .flatten()
        .copied()
        .fold(None, |range: Option<(f64, f64)>, v| match range {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0.0, 0.0))
}

fn aria_label(data: &RentData, borough: &str) -> String {
    let first = data.years.first().copied().unwrap_or(2010);
    let last = data.years.last().copied().unwrap_or(2024);
    format!("{borough} median rent trend from {first} to {last}")
}

/// One `(borough, spec)` per borough, in borough order
pub fn multiples_specs(data: &RentData, theme: Theme, reduced_motion: bool) -> Vec<(String, ChartSpec)> {
    let palette = theme.palette();
    let (min, max) = value_range(data);

    data.boroughs
        .iter()
        .enumerate()
        .map(|(index, borough)| {
            let color = palette.borough(index);
            let series = data.series.get(borough).cloned().unwrap_or_default();

            let mut options = base_options(theme, reduced_motion);
            set_path(&mut options, &["plugins", "legend", "display"], json!(false));
            set_path(&mut options, &["scales", "x", "ticks", "maxTicksLimit"], json!(5));
            set_path(&mut options, &["scales", "y", "min"], json!(min * 0.95));
            set_path(&mut options, &["scales", "y", "max"], json!(max * 1.05));

            let spec = ChartSpec::new(json!({
                "type": "line",
                "data": {
                    "labels": data.years,
                    "datasets": [{
                        "label": borough,
                        "data": series,
                        "borderColor": color,
                        "backgroundColor": with_alpha(color, 0.16),
                        "borderWidth": 2.4,
                        "fill": true,
                        "tension": 0.32,
                        "pointRadius": 0
                    }]
                },
                "options": options
            }))
            .with_callback(
                &["options", "scales", "y", "ticks", "callback"],
                Callback::TickCurrency,
            )
            .with_callback(
                &["options", "plugins", "tooltip", "callbacks", "label"],
                Callback::TooltipRentAtLabel,
            );
            (borough.clone(), spec)
        })
        .collect()
}

/// Rebuild the container's canvases and draw every borough.
///
/// All instances are registered together under one slot, so they are
/// destroyed together on the next render.
pub fn render_multiples(ctx: &mut RenderContext<'_>, data: Option<&RentData>) -> Result<RenderOutcome> {
    let slot = ChartSlot::Multiples;
    let (data, library) = match ctx.preflight(slot, data) {
        Ok(ready) => ready,
        Err(outcome) => return Ok(outcome),
    };
    let Mount::Container(container) = slot.mount() else {
        return Ok(RenderOutcome::NoMount);
    };

    ctx.registry.release(slot);
    ctx.document.hide_fallback(slot.key());
    if !ctx.document.clear_container(container) {
        return Ok(RenderOutcome::NoMount);
    }

    let mut charts = Vec::with_capacity(data.boroughs.len());
    for (index, (borough, spec)) in multiples_specs(data, ctx.theme, ctx.reduced_motion)
        .into_iter()
        .enumerate()
    {
        let id = canvas_id(index);
        let created = if ctx.document.append_canvas(container, &id, &aria_label(data, &borough)) {
            library.create(&id, &spec)
        } else {
            Err(InsightError::Dom(format!("could not add canvas {id}")))
        };
        match created {
            Ok(chart) => charts.push(chart),
            Err(e) => {
                // Keep what was built so the caller's sweep can destroy it
                ctx.registry.register(slot, charts);
                return Err(e);
            }
        }
    }

    debug!(count = charts.len(), "small multiples drawn");
    let live = ctx.registry.register(slot, charts);
    Ok(RenderOutcome::Rendered(live))
}
