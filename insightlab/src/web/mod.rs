//! Browser entry point
//!
//! Builds the page context from the live document, wires the theme toggle
//! and period tabs, then fetches both datasets and presents them.

mod chartjs;
mod document;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::app::App;
use crate::charts::ChartLibrary;
use crate::config::Config;
use crate::dom::{PERIOD_TAB, PERIOD_TAB_ATTR, THEME_TOGGLE};
use crate::loader::{HttpSource, load_datasets};

pub use chartjs::ChartJs;
pub use document::WebDocument;
pub use storage::{BodyDataset, LocalStorage};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = WebDocument::new(window.clone())?;
    let _ = document
        .inner()
        .document_element()
        .map(|root| root.class_list().add_1("has-js"));

    let loaded = Config::from_source(&BodyDataset::new(document.inner())).and_then(|config| {
        config.validate()?;
        Ok(config)
    });
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();
    crate::telemetry::init(&config.log_level);
    if let Err(e) = &loaded {
        warn!(error = %e, "configuration rejected; using defaults");
    }
    info!(page = %config.page, "starting");

    let library = ChartJs::detect(&window).map(|chart| Rc::new(chart) as Rc<dyn ChartLibrary>);
    if library.is_none() {
        warn!("Chart.js not found on window; charts will show fallbacks");
    }
    let store = Rc::new(LocalStorage::new(window.clone(), &config.theme_storage_key));
    let dom = document.inner().clone();
    let base = window.location().href()?;

    let app = Rc::new(RefCell::new(App::new(
        config.clone(),
        Rc::new(document),
        library,
        store,
    )));
    app.borrow().apply_theme();
    wire_theme_toggle(&dom, &app)?;
    wire_tabs(&dom, &app)?;

    spawn_local(async move {
        let source = match HttpSource::new(&base) {
            Ok(source) => source,
            Err(e) => {
                error!(error = %e, "cannot resolve dataset URLs");
                return;
            }
        };
        let datasets = load_datasets(&source, &config).await;
        app.borrow_mut().present(&datasets);
    });
    Ok(())
}

fn on_click(target: &Element, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_theme_toggle(dom: &web_sys::Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let Some(toggle) = dom.query_selector(THEME_TOGGLE)? else {
        return Ok(());
    };
    let app = Rc::clone(app);
    on_click(&toggle, move |_| {
        app.borrow_mut().toggle_theme();
    })
}

fn wire_tabs(dom: &web_sys::Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    for tab in document::elements(&dom.query_selector_all(PERIOD_TAB)?) {
        let app = Rc::clone(app);
        let key = tab.get_attribute(PERIOD_TAB_ATTR);
        on_click(&tab, move |_| {
            let selected = App::tab_key(key.clone()).and_then(|key| app.borrow_mut().select_period(&key));
            if let Err(e) = selected {
                warn!(error = %e, "period tab ignored");
            }
        })?;
    }
    Ok(())
}
