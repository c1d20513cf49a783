//! Income against rent for one period, bubble size from the transit index

use serde_json::{Value, json};

use super::options::{base_options, set_path};
use super::{Callback, ChartSlot, ChartSpec, FallbackReason, RenderContext, RenderOutcome};
use crate::error::Result;
use crate::theme::{Theme, with_alpha};
use crate::view_model::{ScatterBuckets, ScatterPoint};

const MIN_RADIUS: f64 = 4.0;

fn radius(r: f64) -> f64 {
    (r * 0.9).max(MIN_RADIUS)
}

pub fn scatter_spec(points: &[ScatterPoint], period: &str, theme: Theme, reduced_motion: bool) -> ChartSpec {
    let palette = theme.palette();
    let data: Vec<Value> = points
        .iter()
        .map(|p| json!({ "x": p.x, "y": p.y, "r": radius(p.r), "label": p.label }))
        .collect();

    let mut options = base_options(theme, reduced_motion);
    set_path(&mut options, &["plugins", "legend"], json!({ "display": false }));
    let axis_title = |text: &str| json!({ "display": true, "text": text, "color": palette.text_muted });
    set_path(
        &mut options,
        &["scales", "x", "title"],
        axis_title("Median household income (USD)"),
    );
    set_path(&mut options, &["scales", "y", "title"], axis_title("Median rent (USD)"));

    ChartSpec::new(json!({
        "type": "bubble",
        "data": {
            "datasets": [{
                "label": format!("Income vs. rent · {period}"),
                "data": data,
                "backgroundColor": with_alpha(palette.primary, 0.45),
                "borderColor": with_alpha(palette.primary, 0.9),
                "borderWidth": 1.5
            }]
        },
        "options": options
    }))
    .with_callback(
        &["options", "plugins", "tooltip", "callbacks", "label"],
        Callback::TooltipBubble,
    )
    .with_callback(
        &["options", "scales", "x", "ticks", "callback"],
        Callback::TickCurrency,
    )
    .with_callback(
        &["options", "scales", "y", "ticks", "callback"],
        Callback::TickCurrency,
    )
}

/// Draw the bucket for `period`; an empty bucket shows the fallback
pub fn render_scatter(
    ctx: &mut RenderContext<'_>,
    data: Option<&ScatterBuckets>,
    period: &str,
) -> Result<RenderOutcome> {
    let (buckets, library) = match ctx.preflight(ChartSlot::Scatter, data) {
        Ok(ready) => ready,
        Err(outcome) => return Ok(outcome),
    };
    let points = buckets.get(period);
    if points.is_empty() {
        return Ok(ctx.fallback(ChartSlot::Scatter, FallbackReason::EmptySelection));
    }
    let spec = scatter_spec(points, period, ctx.theme, ctx.reduced_motion);
    ctx.draw(ChartSlot::Scatter, library, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartRegistry;
    use crate::test_support::{FakeLibrary, MemoryDocument};
    use crate::view_model::build;

    fn point(r: f64) -> ScatterPoint {
        ScatterPoint {
            x: 52000.0,
            y: 1450.0,
            r,
            label: "Bronx 2015".into(),
            borough: Some("Bronx".into()),
            year: 2015.0,
        }
    }

    #[test]
    fn test_radius_floor() {
        assert_eq!(radius(2.0), 4.0);
        assert_eq!(radius(10.0), 9.0);
    }

    #[test]
    fn test_scatter_spec_points() {
        let spec = scatter_spec(&[point(20.0)], "2014-2016", Theme::Dark, false);
        let dataset = &spec.config["data"]["datasets"][0];
        assert_eq!(spec.kind(), Some("bubble"));
        assert_eq!(dataset["label"], "Income vs. rent · 2014-2016");
        assert_eq!(
            dataset["data"],
            json!([{ "x": 52000.0, "y": 1450.0, "r": 18.0, "label": "Bronx 2015" }])
        );
        assert_eq!(
            spec.config["options"]["scales"]["x"]["title"]["text"],
            "Median household income (USD)"
        );
    }

    #[test]
    fn test_empty_period_shows_fallback() {
        let payload = serde_json::from_value(json!({
            "boroughs": ["Bronx"],
            "scatter": [{ "x": 1, "y": 2, "r": 3, "borough": "Bronx", "year": 2015 }]
        }))
        .expect("payload");
        let view = build(Some(&payload), None);
        let doc = MemoryDocument::with_all_mounts();
        let library = FakeLibrary::default();
        let mut registry = ChartRegistry::new();
        let mut ctx = RenderContext {
            document: &doc,
            library: Some(&library),
            registry: &mut registry,
            theme: Theme::Dark,
            reduced_motion: false,
        };

        let drawn = render_scatter(&mut ctx, view.scatter_data.as_ref(), "2014-2016").expect("render");
        assert_eq!(drawn, RenderOutcome::Rendered(1));

        let empty = render_scatter(&mut ctx, view.scatter_data.as_ref(), "2010-2013").expect("render");
        assert_eq!(empty, RenderOutcome::Fallback(FallbackReason::EmptySelection));
        assert_eq!(library.live(), 0);
        assert_eq!(
            doc.fallback("scatter"),
            Some((true, "No observations available for the selected window.".to_string()))
        );
    }
}
