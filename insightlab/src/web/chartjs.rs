//! Chart.js binding
//!
//! The library is looked up on `window.Chart` at start-up. Chart
//! definitions cross the boundary as JSON; formatter callbacks are attached
//! afterwards as closures that live exactly as long as the chart.

use js_sys::{Array, Function, JSON, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::charts::{Callback, ChartHandle, ChartLibrary, ChartSpec, TooltipContext};
use crate::error::{InsightError, Result};

type Formatter = Closure<dyn Fn(JsValue) -> JsValue>;

pub struct ChartJs {
    window: Window,
    constructor: Function,
}

impl ChartJs {
    /// The global `Chart` constructor, if the script loaded
    pub fn detect(window: &Window) -> Option<Self> {
        let constructor = Reflect::get(window, &JsValue::from_str("Chart")).ok()?;
        let constructor = constructor.dyn_into::<Function>().ok()?;
        Some(Self {
            window: window.clone(),
            constructor,
        })
    }
}

impl ChartLibrary for ChartJs {
    fn create(&self, canvas_id: &str, spec: &ChartSpec) -> Result<Box<dyn ChartHandle>> {
        let canvas = self
            .window
            .document()
            .and_then(|doc| doc.get_element_by_id(canvas_id))
            .ok_or_else(|| InsightError::Dom(format!("canvas #{canvas_id} not found")))?;

        let config = JSON::parse(&serde_json::to_string(&spec.config)?)?;
        let mut formatters = Vec::with_capacity(spec.callbacks.len());
        for (path, callback) in &spec.callbacks {
            let formatter = formatter(*callback);
            set_path(&config, path, formatter.as_ref())?;
            formatters.push(formatter);
        }

        let instance = Reflect::construct(&self.constructor, &Array::of2(&canvas, &config))
            .map_err(|e| InsightError::Chart(format!("{e:?}")))?;
        Ok(Box::new(ChartJsHandle {
            instance,
            _formatters: formatters,
        }))
    }
}

struct ChartJsHandle {
    instance: JsValue,
    _formatters: Vec<Formatter>,
}

impl ChartHandle for ChartJsHandle {
    fn destroy(&mut self) {
        let destroy = Reflect::get(&self.instance, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            let _ = destroy.call0(&self.instance);
        }
    }
}

fn formatter(callback: Callback) -> Formatter {
    if callback.is_tooltip() {
        Closure::wrap(Box::new(move |context: JsValue| {
            let dataset_label = string_at(&context, &["dataset", "label"]);
            let label = string_at(&context, &["label"]);
            let raw_label = string_at(&context, &["raw", "label"]);
            let ctx = TooltipContext {
                dataset_label: dataset_label.as_deref().unwrap_or_default(),
                label: label.as_deref().unwrap_or_default(),
                raw_label: raw_label.as_deref(),
                x: number_at(&context, &["parsed", "x"]),
                y: number_at(&context, &["parsed", "y"]),
            };
            JsValue::from_str(&callback.tooltip(&ctx))
        }) as Box<dyn Fn(JsValue) -> JsValue>)
    } else {
        Closure::wrap(Box::new(move |value: JsValue| {
            JsValue::from_str(&callback.tick(value.as_f64().unwrap_or(0.0)))
        }) as Box<dyn Fn(JsValue) -> JsValue>)
    }
}

fn value_at(target: &JsValue, path: &[&str]) -> JsValue {
    path.iter().fold(target.clone(), |node, key| {
        if node.is_object() {
            Reflect::get(&node, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
        } else {
            JsValue::UNDEFINED
        }
    })
}

fn string_at(target: &JsValue, path: &[&str]) -> Option<String> {
    let value = value_at(target, path);
    value.as_string().or_else(|| value.as_f64().map(|n| n.to_string()))
}

fn number_at(target: &JsValue, path: &[&str]) -> f64 {
    value_at(target, path).as_f64().unwrap_or(0.0)
}

/// Install `value` at a nested path, creating objects as needed
fn set_path(target: &JsValue, path: &[&'static str], value: &JsValue) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };
    let mut node = target.clone();
    for key in parents {
        let key = JsValue::from_str(key);
        let mut child = Reflect::get(&node, &key)?;
        if !child.is_object() {
            child = Object::new().into();
            Reflect::set(&node, &key, &child)?;
        }
        node = child;
    }
    Reflect::set(&node, &JsValue::from_str(last), value)?;
    Ok(())
}
