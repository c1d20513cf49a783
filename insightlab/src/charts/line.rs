//! Median rent trajectories, one line per borough

use serde_json::{Value, json};

use super::options::{base_options, set_path};
use super::{Callback, ChartSlot, ChartSpec, RenderContext, RenderOutcome};
use crate::error::Result;
use crate::theme::Theme;
use crate::view_model::RentData;

pub fn line_spec(data: &RentData, theme: Theme, reduced_motion: bool) -> ChartSpec {
    let palette = theme.palette();
    let datasets: Vec<Value> = data
        .boroughs
        .iter()
        .enumerate()
        .map(|(index, borough)| {
            let series = data.series.get(borough).cloned().unwrap_or_default();
            json!({
                "label": borough,
                "data": series,
                "borderColor": palette.borough(index),
                "borderWidth": 2.4,
                "tension": 0.32,
                "fill": false,
                "pointRadius": 0,
                "pointHoverRadius": 4
            })
        })
        .collect();

    let mut options = base_options(theme, reduced_motion);
    set_path(&mut options, &["plugins", "legend", "position"], json!("bottom"));

    ChartSpec::new(json!({
        "type": "line",
        "data": { "labels": data.years, "datasets": datasets },
        "options": options
    }))
    .with_callback(
        &["options", "scales", "y", "ticks", "callback"],
        Callback::TickCurrency,
    )
}

pub fn render_line(ctx: &mut RenderContext<'_>, data: Option<&RentData>) -> Result<RenderOutcome> {
    let (data, library) = match ctx.preflight(ChartSlot::Line, data) {
        Ok(ready) => ready,
        Err(outcome) => return Ok(outcome),
    };
    let spec = line_spec(data, ctx.theme, ctx.reduced_motion);
    ctx.draw(ChartSlot::Line, library, &spec)
}
