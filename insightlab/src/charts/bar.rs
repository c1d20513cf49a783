//! Latest median rent per borough

use serde_json::{Value, json};

use super::options::{base_options, set_path};
use super::{Callback, ChartSlot, ChartSpec, RenderContext, RenderOutcome};
use crate::error::Result;
use crate::theme::{Theme, with_alpha};
use crate::view_model::RentData;

pub fn bar_spec(data: &RentData, theme: Theme, reduced_motion: bool) -> ChartSpec {
    let palette = theme.palette();
    let colors = |alpha: f64| -> Vec<String> {
        (0..data.labels.len())
            .map(|i| with_alpha(palette.borough(i), alpha))
            .collect()
    };

    let mut options = base_options(theme, reduced_motion);
    set_path(&mut options, &["plugins", "legend"], json!({ "display": false }));
    set_path(&mut options, &["scales", "y", "beginAtZero"], Value::Bool(true));

    ChartSpec::new(json!({
        "type": "bar",
        "data": {
            "labels": data.labels,
            "datasets": [{
                "label": "Median rent (USD)",
                "data": data.values,
                "borderRadius": 12,
                "borderSkipped": false,
                "backgroundColor": colors(0.85),
                "borderColor": colors(0.9),
                "hoverBackgroundColor": colors(1.0)
            }]
        },
        "options": options
    }))
    .with_callback(
        &["options", "plugins", "tooltip", "callbacks", "label"],
        Callback::TooltipMonthlyRent,
    )
    .with_callback(
        &["options", "scales", "y", "ticks", "callback"],
        Callback::TickCurrency,
    )
}

pub fn render_bar(ctx: &mut RenderContext<'_>, data: Option<&RentData>) -> Result<RenderOutcome> {
    let (data, library) = match ctx.preflight(ChartSlot::Bar, data) {
        Ok(ready) => ready,
        Err(outcome) => return Ok(outcome),
    };
    let spec = bar_spec(data, ctx.theme, ctx.reduced_motion);
    ctx.draw(ChartSlot::Bar, library, &spec)
}
