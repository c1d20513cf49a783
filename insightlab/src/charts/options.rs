//! Shared chart options
//!
//! Every renderer starts from [`base_options`] and patches the few keys it
//! needs through [`set_path`].

use serde_json::{Map, Value, json};

use crate::theme::{Theme, with_alpha};

/// Layout, animation, legend, tooltip and axis styling for one theme
pub fn base_options(theme: Theme, reduced_motion: bool) -> Value {
    let palette = theme.palette();
    let animation = if reduced_motion {
        Value::Bool(false)
    } else {
        json!({ "duration": 600, "easing": "easeOutQuart" })
    };

    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "layout": { "padding": 16 },
        "animation": animation,
        "plugins": {
            "legend": {
                "labels": {
                    "color": palette.text_muted,
                    "usePointStyle": true,
                    "pointStyle": "rectRounded",
                    "boxWidth": 12
                }
            },
            "tooltip": {
                "backgroundColor": with_alpha(palette.surface, 0.95),
                "titleColor": palette.text,
                "bodyColor": palette.text_muted,
                "borderColor": with_alpha(palette.grid, 0.6),
                "borderWidth": 1,
                "padding": 12,
                "displayColors": false
            }
        },
        "scales": {
            "x": {
                "ticks": { "color": palette.text_muted, "font": { "size": 11 } },
                "grid": { "color": with_alpha(palette.grid, 0.25), "drawBorder": false }
            },
            "y": {
                "ticks": { "color": palette.text_muted, "font": { "size": 11 } },
                "grid": { "color": with_alpha(palette.grid, 0.35), "drawBorder": false }
            }
        }
    })
}

/// Set `value` at a nested object path, creating objects along the way.
///
/// A non-object met along the path is replaced by an object.
pub fn set_path(target: &mut Value, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        *target = value;
        return;
    };
    let mut node = target;
    for key in parents {
        let Some(map) = as_object(node) else {
            return;
        };
        node = map
            .entry((*key).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Some(map) = as_object(node) {
        map.insert((*last).to_string(), value);
    }
}

fn as_object(node: &mut Value) -> Option<&mut Map<String, Value>> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    node.as_object_mut()
}
