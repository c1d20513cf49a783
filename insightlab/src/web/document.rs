//! Browser implementation of the page contract

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, NodeList, Window};

use crate::dom::{Document, PERIOD_TAB, PERIOD_TAB_ATTR, fallback_selector};
use crate::error::{InsightError, Result};
use crate::theme::Theme;

const ACTIVE_CLASS: &str = "is-active";

pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(window: Window) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| InsightError::Dom("window has no document".into()))?;
        Ok(Self { window, document })
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }

    fn first(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        elements(&list)
    }
}

/// Element nodes of a static node list, in document order
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Document for WebDocument {
    fn exists(&self, selector: &str) -> bool {
        self.first(selector).is_some()
    }

    fn set_text_all(&self, selector: &str, text: &str) -> usize {
        let nodes = self.all(selector);
        for node in &nodes {
            node.set_text_content(Some(text));
        }
        nodes.len()
    }

    fn set_text_nth(&self, selector: &str, index: usize, text: &str) -> bool {
        match self.all(selector).get(index) {
            Some(node) => {
                node.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn show_fallback(&self, chart: &str, message: Option<&str>) {
        let Some(element) = self.first(&fallback_selector(chart)) else {
            return;
        };
        if let Some(message) = message {
            element.set_text_content(Some(message));
        }
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            element.set_hidden(false);
        }
    }

    fn hide_fallback(&self, chart: &str) {
        if let Some(Ok(element)) = self
            .first(&fallback_selector(chart))
            .map(|e| e.dyn_into::<HtmlElement>())
        {
            element.set_hidden(true);
        }
    }

    fn apply_theme(&self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_attr());
        }
        if let Some(meta) = self.first(r#"meta[name="theme-color"]"#) {
            let _ = meta.set_attribute("content", theme.meta_color());
        }
    }

    fn tab_keys(&self) -> Vec<String> {
        self.all(PERIOD_TAB)
            .iter()
            .filter_map(|tab| tab.get_attribute(PERIOD_TAB_ATTR))
            .collect()
    }

    fn set_active_tab(&self, key: &str) {
        for tab in self.all(PERIOD_TAB) {
            let active = tab.get_attribute(PERIOD_TAB_ATTR).as_deref() == Some(key);
            let _ = tab.class_list().toggle_with_force(ACTIVE_CLASS, active);
            let _ = tab.set_attribute("aria-selected", if active { "true" } else { "false" });
        }
    }

    fn clear_container(&self, selector: &str) -> bool {
        match self.first(selector) {
            Some(container) => {
                container.set_inner_html("");
                true
            }
            None => false,
        }
    }

    fn append_canvas(&self, selector: &str, id: &str, aria_label: &str) -> bool {
        let Some(container) = self.first(selector) else {
            return false;
        };
        let Ok(canvas) = self.document.create_element("canvas") else {
            return false;
        };
        canvas.set_id(id);
        let labelled = canvas.set_attribute("role", "img").is_ok()
            && canvas.set_attribute("aria-label", aria_label).is_ok();
        labelled && container.append_child(&canvas).is_ok()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches())
    }
}
