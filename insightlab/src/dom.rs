//! Page contract
//!
//! The attributes and ids the core reads and writes. The browser binding
//! lives in `web`; tests use an in-memory page.

use crate::narrative::Slot;
use crate::theme::Theme;

/// Container the small-multiples canvases are appended to
pub const MULTIPLES_CONTAINER: &str = "[data-chart-multiples]";
pub const THEME_TOGGLE: &str = "[data-theme-toggle]";
pub const PERIOD_TAB: &str = "[data-period-tab]";
pub const PERIOD_TAB_ATTR: &str = "data-period-tab";

/// Selector of the fallback message container for a chart
pub fn fallback_selector(chart: &str) -> String {
    format!(r#"[data-chart-fallback="{chart}"]"#)
}

/// Everything the core needs from the host page
pub trait Document {
    /// Whether any element matches the selector
    fn exists(&self, selector: &str) -> bool;

    /// Set the text of every match; returns how many nodes were written
    fn set_text_all(&self, selector: &str, text: &str) -> usize;

    /// Set the text of the n-th match; false if there is no such node
    fn set_text_nth(&self, selector: &str, index: usize, text: &str) -> bool;

    /// Unhide a chart's fallback container, replacing its text when given
    fn show_fallback(&self, chart: &str, message: Option<&str>);

    fn hide_fallback(&self, chart: &str);

    /// Set `data-theme` on the root and the `theme-color` meta tag
    fn apply_theme(&self, theme: Theme);

    /// Keys of all period tabs, in document order
    fn tab_keys(&self) -> Vec<String>;

    /// Mark exactly one tab active (class and `aria-selected`)
    fn set_active_tab(&self, key: &str);

    /// Remove every child of the matching container; false if absent
    fn clear_container(&self, selector: &str) -> bool;

    /// Append a canvas with this id and label to the container
    fn append_canvas(&self, selector: &str, id: &str, aria_label: &str) -> bool;

    fn prefers_reduced_motion(&self) -> bool;
}

/// Write one narrative slot; returns how many nodes changed
pub fn write_slot(document: &dyn Document, slot: &Slot, text: &str) -> usize {
    let selector = slot.selector();
    match slot.index() {
        Some(index) => usize::from(document.set_text_nth(&selector, index, text)),
        None => document.set_text_all(&selector, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryDocument;

    #[test]
    fn test_write_slot_by_index_and_attribute() {
        let doc = MemoryDocument::default()
            .with_nodes(r#"[data-narrative="growth"]"#, 2)
            .with_nodes("[data-summary-item]", 3);

        assert_eq!(write_slot(&doc, &Slot::Narrative("growth"), "up"), 2);
        assert_eq!(write_slot(&doc, &Slot::SummaryItem(1), "second"), 1);
        assert_eq!(write_slot(&doc, &Slot::SummaryItem(7), "missing"), 0);
        assert_eq!(write_slot(&doc, &Slot::Kpi("wage-gap"), "+1.0 pts"), 0);

        assert_eq!(doc.texts("[data-summary-item]"), vec!["", "second", ""]);
        assert_eq!(doc.texts(r#"[data-narrative="growth"]"#), vec!["up", "up"]);
    }

    #[test]
    fn test_fallback_selector() {
        assert_eq!(fallback_selector("bar"), r#"[data-chart-fallback="bar"]"#);
    }
}
