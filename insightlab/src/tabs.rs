//! Period tabs
//!
//! Exactly one period is active. Selecting a tab only changes the scatter
//! bucket on display.

use tracing::{debug, info};

use crate::dom::Document;
use crate::error::{InsightError, Result};
use crate::view_model::{Period, SCATTER_PERIODS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodTabs {
    active: &'static Period,
}

impl Default for PeriodTabs {
    fn default() -> Self {
        Self {
            active: &SCATTER_PERIODS[0],
        }
    }
}

impl PeriodTabs {
    pub fn new(key: &str) -> Result<Self> {
        let active = Period::find(key).ok_or_else(|| InsightError::UnknownPeriod(key.to_string()))?;
        Ok(Self { active })
    }

    pub fn active(&self) -> &'static Period {
        self.active
    }

    /// Mark the active tab on the page; returns how many tabs exist
    pub fn sync(&self, document: &dyn Document) -> usize {
        let keys = document.tab_keys();
        if keys.is_empty() {
            debug!("page has no period tabs");
            return 0;
        }
        document.set_active_tab(self.active.key);
        keys.len()
    }

    /// Activate `key`; false when it was already active
    pub fn select(&mut self, key: &str, document: &dyn Document) -> Result<bool> {
        let period = Period::find(key).ok_or_else(|| InsightError::UnknownPeriod(key.to_string()))?;
        document.set_active_tab(period.key);
        if period == self.active {
            return Ok(false);
        }
        info!(from = self.active.key, to = period.key, "period changed");
        self.active = period;
        Ok(true)
    }
}
