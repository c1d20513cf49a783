//! Year-over-year rent change grid, drawn as grouped bars coloured by value

use serde_json::{Value, json};

use super::options::{base_options, set_path};
use super::{Callback, ChartSlot, ChartSpec, RenderContext, RenderOutcome};
use crate::error::Result;
use crate::theme::{Theme, heatmap_color, with_alpha};
use crate::view_model::HeatmapData;

pub fn heatmap_spec(data: &HeatmapData, theme: Theme, reduced_motion: bool) -> ChartSpec {
    let palette = theme.palette();
    let datasets: Vec<Value> = data
        .boroughs
        .iter()
        .enumerate()
        .map(|(index, borough)| {
            let row = data.values.get(index).map(Vec::as_slice).unwrap_or_default();
            let colors: Vec<String> = row.iter().map(|v| heatmap_color(palette, *v)).collect();
            json!({
                "label": borough,
                "data": row,
                "backgroundColor": colors,
                "borderColor": with_alpha(palette.surface, 0.6),
                "borderWidth": 1
            })
        })
        .collect();

    let mut options = base_options(theme, reduced_motion);
    set_path(&mut options, &["plugins", "legend", "display"], json!(true));
    set_path(&mut options, &["plugins", "legend", "position"], json!("top"));
    set_path(&mut options, &["scales", "x", "ticks", "maxRotation"], json!(45));
    set_path(&mut options, &["scales", "x", "ticks", "minRotation"], json!(45));

    ChartSpec::new(json!({
        "type": "bar",
        "data": { "labels": data.years, "datasets": datasets },
        "options": options
    }))
    .with_callback(
        &["options", "plugins", "tooltip", "callbacks", "label"],
        Callback::TooltipSignedPercent,
    )
    .with_callback(
        &["options", "scales", "y", "ticks", "callback"],
        Callback::TickPercent,
    )
}

pub fn render_heatmap(ctx: &mut RenderContext<'_>, data: Option<&HeatmapData>) -> Result<RenderOutcome> {
    let (data, library) = match ctx.preflight(ChartSlot::Heatmap, data) {
        Ok(ready) => ready,
        Err(outcome) => return Ok(outcome),
    };
    let spec = heatmap_spec(data, ctx.theme, ctx.reduced_motion);
    ctx.draw(ChartSlot::Heatmap, library, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_become_coloured_datasets() {
        let data = HeatmapData {
            years: vec![2011, 2012],
            boroughs: vec!["Bronx".into(), "Queens".into()],
            values: vec![vec![8.0, 0.0]],
        };
        let spec = heatmap_spec(&data, Theme::Dark, false);
        let datasets = &spec.config["data"]["datasets"];

        assert_eq!(datasets[0]["label"], "Bronx");
        assert_eq!(datasets[0]["data"], json!([8.0, 0.0]));
        assert_eq!(
            datasets[0]["backgroundColor"],
            json!(["oklch(46.0% 0.280 50 / 0.80)", "oklch(36% 0.015 250 / 0.18)"])
        );
        assert_eq!(datasets[1]["data"], json!([]));
        assert_eq!(spec.config["options"]["scales"]["x"]["ticks"]["minRotation"], 45);
        assert_eq!(spec.callbacks[1].1, Callback::TickPercent);
    }
}
