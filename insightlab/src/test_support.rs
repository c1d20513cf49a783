//! In-memory page, chart library and storage used by unit tests

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::charts::{ChartHandle, ChartLibrary, ChartSlot, ChartSpec, Mount};
use crate::dom::{Document, MULTIPLES_CONTAINER};
use crate::error::{InsightError, Result};
use crate::theme::{Theme, ThemeStore};

/// A page made of selector-addressed text nodes
#[derive(Default)]
pub struct MemoryDocument {
    nodes: RefCell<BTreeMap<String, Vec<String>>>,
    fallbacks: RefCell<BTreeMap<String, (bool, String)>>,
    containers: RefCell<BTreeMap<String, Vec<(String, String)>>>,
    tabs: Vec<String>,
    active_tab: RefCell<Option<String>>,
    theme: Cell<Option<Theme>>,
    reduced_motion: bool,
    canvas_limit: Option<usize>,
}

impl MemoryDocument {
    /// Every chart mount point and fallback container present
    pub fn with_all_mounts() -> Self {
        let mut doc = Self::default().with_container(MULTIPLES_CONTAINER);
        for slot in ChartSlot::ALL {
            if let Mount::Canvas(id) = slot.mount() {
                doc = doc.with_element(&format!("#{id}"));
            }
            doc = doc.with_fallback(slot.key());
        }
        doc
    }

    pub fn with_nodes(self, selector: &str, count: usize) -> Self {
        self.nodes
            .borrow_mut()
            .insert(selector.to_string(), vec![String::new(); count]);
        self
    }

    pub fn with_element(self, selector: &str) -> Self {
        self.with_nodes(selector, 1)
    }

    pub fn with_fallback(self, chart: &str) -> Self {
        self.fallbacks
            .borrow_mut()
            .insert(chart.to_string(), (false, String::new()));
        self
    }

    pub fn with_container(self, selector: &str) -> Self {
        self.containers.borrow_mut().insert(selector.to_string(), Vec::new());
        self
    }

    pub fn with_tabs(mut self, keys: &[&str]) -> Self {
        self.tabs = keys.iter().map(ToString::to_string).collect();
        self
    }

    /// Containers refuse canvases beyond the first `n`
    pub fn with_canvas_limit(mut self, n: usize) -> Self {
        self.canvas_limit = Some(n);
        self
    }

    pub fn with_reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.nodes.borrow().get(selector).cloned().unwrap_or_default()
    }

    /// First node's text, if the selector matches anything
    pub fn text(&self, selector: &str) -> Option<String> {
        self.nodes.borrow().get(selector).and_then(|t| t.first().cloned())
    }

    /// `(visible, message)` of a fallback container
    pub fn fallback(&self, chart: &str) -> Option<(bool, String)> {
        self.fallbacks.borrow().get(chart).cloned()
    }

    pub fn visible_fallbacks(&self) -> Vec<String> {
        self.fallbacks
            .borrow()
            .iter()
            .filter(|(_, (visible, _))| *visible)
            .map(|(chart, _)| chart.clone())
            .collect()
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme.get()
    }

    pub fn active_tab(&self) -> Option<String> {
        self.active_tab.borrow().clone()
    }

    /// `(id, aria-label)` of the canvases in a container
    pub fn canvases(&self, selector: &str) -> Vec<(String, String)> {
        self.containers.borrow().get(selector).cloned().unwrap_or_default()
    }
}

impl Document for MemoryDocument {
    fn exists(&self, selector: &str) -> bool {
        self.nodes.borrow().contains_key(selector) || self.containers.borrow().contains_key(selector)
    }

    fn set_text_all(&self, selector: &str, text: &str) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        let Some(texts) = nodes.get_mut(selector) else {
            return 0;
        };
        for node in texts.iter_mut() {
            *node = text.to_string();
        }
        texts.len()
    }

    fn set_text_nth(&self, selector: &str, index: usize, text: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        match nodes.get_mut(selector).and_then(|texts| texts.get_mut(index)) {
            Some(node) => {
                *node = text.to_string();
                true
            }
            None => false,
        }
    }

    fn show_fallback(&self, chart: &str, message: Option<&str>) {
        if let Some((visible, text)) = self.fallbacks.borrow_mut().get_mut(chart) {
            *visible = true;
            if let Some(message) = message {
                *text = message.to_string();
            }
        }
    }

    fn hide_fallback(&self, chart: &str) {
        if let Some((visible, _)) = self.fallbacks.borrow_mut().get_mut(chart) {
            *visible = false;
        }
    }

    fn apply_theme(&self, theme: Theme) {
        self.theme.set(Some(theme));
    }

    fn tab_keys(&self) -> Vec<String> {
        self.tabs.clone()
    }

    fn set_active_tab(&self, key: &str) {
        *self.active_tab.borrow_mut() = Some(key.to_string());
    }

    fn clear_container(&self, selector: &str) -> bool {
        match self.containers.borrow_mut().get_mut(selector) {
            Some(children) if self.canvas_limit.is_some_and(|n| children.len() >= n) => false,
            Some(children) => {
                children.clear();
                true
            }
            None => false,
        }
    }

    fn append_canvas(&self, selector: &str, id: &str, aria_label: &str) -> bool {
        match self.containers.borrow_mut().get_mut(selector) {
            Some(children) if self.canvas_limit.is_some_and(|n| children.len() >= n) => false,
            Some(children) => {
                children.push((id.to_string(), aria_label.to_string()));
                true
            }
            None => false,
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// Chart library that counts live instances and records what it drew
#[derive(Default)]
pub struct FakeLibrary {
    live: Rc<Cell<usize>>,
    specs: RefCell<Vec<ChartSpec>>,
    fail_after: Option<usize>,
}

impl FakeLibrary {
    /// Succeeds `n` times, then every creation fails
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn created(&self) -> usize {
        self.specs.borrow().len()
    }

    pub fn specs(&self) -> Vec<ChartSpec> {
        self.specs.borrow().clone()
    }
}

impl ChartLibrary for FakeLibrary {
    fn create(&self, canvas_id: &str, spec: &ChartSpec) -> Result<Box<dyn ChartHandle>> {
        if self.fail_after.is_some_and(|n| self.created() >= n) {
            return Err(InsightError::Chart(format!("cannot draw on {canvas_id}")));
        }
        self.specs.borrow_mut().push(spec.clone());
        self.live.set(self.live.get() + 1);
        Ok(Box::new(FakeChart {
            live: Rc::clone(&self.live),
            destroyed: false,
        }))
    }
}

struct FakeChart {
    live: Rc<Cell<usize>>,
    destroyed: bool,
}

impl ChartHandle for FakeChart {
    fn destroy(&mut self) {
        if !self.destroyed {
            self.destroyed = true;
            self.live.set(self.live.get() - 1);
        }
    }
}

/// Theme preference kept in memory
#[derive(Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    failing: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
            failing: false,
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        if self.failing {
            return Err(InsightError::Storage("storage disabled".into()));
        }
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<()> {
        if self.failing {
            return Err(InsightError::Storage("storage disabled".into()));
        }
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}
