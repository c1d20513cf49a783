//! Narrative synthesizer
//!
//! Turns summary statistics (and the heatmap grid of the view model) into
//! the sentences shown next to each chart. Every sentence is optional: if
//! one of its inputs is missing the slot is simply left out, and the other
//! slots are unaffected.

use std::collections::BTreeMap;

use crate::format::{currency, fixed, percent, signed, signed_currency};
use crate::types::{DisparityEntry, GrowthRecord, Keyed, LatestRow, SummaryStatistics};
use crate::view_model::{HeatmapData, ViewModel};

/// Heatmap cells at or above this magnitude count as volatility hotspots
pub const DEFAULT_HOTSPOT_THRESHOLD: f64 = 6.0;

/// Borough count quoted in the context stat when no rent series loaded
const FALLBACK_BOROUGH_COUNT: usize = 5;

/// A text node the page exposes for narrative copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// `[data-stat="..."]`
    Stat(&'static str),
    /// The n-th `[data-summary-item]`
    SummaryItem(usize),
    /// `[data-takeaway="..."]`
    Takeaway(&'static str),
    /// `[data-narrative="..."]`
    Narrative(&'static str),
    /// `[data-kpi="..."]`
    Kpi(&'static str),
    /// `[data-counter-value]`
    Counter,
    /// `[data-context-stat]`
    ContextStat,
}

impl Slot {
    /// CSS selector for the node(s) behind this slot
    pub fn selector(&self) -> String {
        match self {
            Slot::Stat(key) => format!(r#"[data-stat="{key}"]"#),
            Slot::SummaryItem(_) => "[data-summary-item]".to_string(),
            Slot::Takeaway(key) => format!(r#"[data-takeaway="{key}"]"#),
            Slot::Narrative(key) => format!(r#"[data-narrative="{key}"]"#),
            Slot::Kpi(key) => format!(r#"[data-kpi="{key}"]"#),
            Slot::Counter => "[data-counter-value]".to_string(),
            Slot::ContextStat => "[data-context-stat]".to_string(),
        }
    }

    /// Position among the selector's matches, for index-keyed slots
    pub fn index(&self) -> Option<usize> {
        match self {
            Slot::SummaryItem(i) => Some(*i),
            _ => None,
        }
    }
}

/// Slot-to-sentence mapping produced by [`synthesize`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Narrative(BTreeMap<Slot, String>);

impl Narrative {
    pub fn get(&self, slot: &Slot) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &str)> {
        self.0.iter().map(|(slot, text)| (slot, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn set(&mut self, slot: Slot, text: String) {
        self.0.insert(slot, text);
    }
}

/// Borough with the largest percent change
#[derive(Debug, Clone, PartialEq)]
pub struct TopGrowth<'a> {
    pub borough: &'a str,
    pub pct: f64,
    pub record: &'a GrowthRecord,
}

/// Highest and lowest latest-year rents
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes<'a> {
    pub highest: (&'a str, f64),
    pub lowest: (&'a str, f64),
}

/// A heatmap cell with its coordinates resolved to labels
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell<'a> {
    pub borough: Option<&'a str>,
    pub year: Option<i64>,
    pub value: f64,
}

/// Largest-first, first-encountered wins on ties.
pub fn top_grower(growth: &Keyed<GrowthRecord>) -> Option<TopGrowth<'_>> {
    let mut best: Option<TopGrowth<'_>> = None;
    for (borough, record) in growth.iter() {
        let Some(pct) = record.pct else { continue };
        if best.as_ref().is_none_or(|b| pct > b.pct) {
            best = Some(TopGrowth { borough, pct, record });
        }
    }
    best
}

/// Rows without a numeric rent are ignored; ties keep the earlier row.
pub fn latest_extremes(rows: &[LatestRow]) -> Option<Extremes<'_>> {
    let mut ranked = rows
        .iter()
        .filter_map(|row| row.median_rent.map(|rent| (row.borough.as_str(), rent)));
    let first = ranked.next()?;
    let mut extremes = Extremes {
        highest: first,
        lowest: first,
    };
    for entry in ranked {
        if entry.1 > extremes.highest.1 {
            extremes.highest = entry;
        }
        if entry.1 < extremes.lowest.1 {
            extremes.lowest = entry;
        }
    }
    Some(extremes)
}

/// Peak and trough of the grid, scanning row-major; ties keep the first.
pub fn heatmap_extremes(heatmap: &HeatmapData) -> Option<(HeatmapCell<'_>, HeatmapCell<'_>)> {
    let mut cells = heatmap.cells();
    let first = cells.next()?;
    let (mut peak, mut trough) = (first, first);
    for cell in cells {
        if cell.2 > peak.2 {
            peak = cell;
        }
        if cell.2 < trough.2 {
            trough = cell;
        }
    }
    let resolve = |(row, col, value): (usize, usize, f64)| HeatmapCell {
        borough: heatmap.boroughs.get(row).map(String::as_str),
        year: heatmap.years.get(col).copied(),
        value,
    };
    Some((resolve(peak), resolve(trough)))
}

/// First and last disparity spread by year, as `(first_year, last_year, delta)`
pub fn disparity_change(index: &Keyed<DisparityEntry>) -> Option<(i64, i64, f64)> {
    let mut entries: Vec<(i64, f64)> = index
        .iter()
        .filter_map(|(year, entry)| {
            year.trim()
                .parse::<i64>()
                .ok()
                .map(|y| (y, entry.spread.unwrap_or(0.0)))
        })
        .collect();
    entries.sort_by_key(|(year, _)| *year);
    let first = entries.first()?;
    let last = entries.last()?;
    Some((first.0, last.0, last.1 - first.1))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Narrative synthesis settings
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    pub hotspot_threshold: f64,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self {
            hotspot_threshold: DEFAULT_HOTSPOT_THRESHOLD,
        }
    }
}

/// Synthesize with default settings
pub fn synthesize(summary: Option<&SummaryStatistics>, view: &ViewModel) -> Narrative {
    Synthesizer::default().synthesize(summary, view)
}

impl Synthesizer {
    pub fn new(hotspot_threshold: f64) -> Self {
        Self { hotspot_threshold }
    }

    /// Build every sentence whose inputs are present
    pub fn synthesize(&self, summary: Option<&SummaryStatistics>, view: &ViewModel) -> Narrative {
        let mut out = Narrative::default();
        if let Some(summary) = summary {
            Self::summary_sentences(summary, &mut out);
            Self::kpis(summary, &mut out);
            Self::disparity(summary, view, &mut out);
        }
        if let Some(heatmap) = &view.heatmap_data {
            self.heatmap_sentences(heatmap, &mut out);
        }
        out
    }

    fn summary_sentences(summary: &SummaryStatistics, out: &mut Narrative) {
        for (index, headline) in summary.headlines.iter().enumerate() {
            if let Some(body) = &headline.body {
                out.set(Slot::SummaryItem(index), body.clone());
            }
        }

        if let Some(year) = summary.latest_year {
            out.set(Slot::Stat("latest-year"), year.to_string());
        }

        let extremes = latest_extremes(&summary.latest_rows);
        if let Some(ext) = &extremes {
            let (high_name, high) = ext.highest;
            let (low_name, low) = ext.lowest;
            out.set(Slot::Stat("rent-ceiling"), currency(high));

            let spread = summary
                .latest_year
                .and_then(|y| summary.disparity_index.get(&y.to_string()))
                .and_then(|d| d.spread)
                .filter(|s| *s != 0.0)
                .unwrap_or(high - low);
            out.set(Slot::Stat("rent-spread"), signed_currency(spread));

            if let Some(year) = summary.latest_year {
                out.set(
                    Slot::Takeaway("rent-latest"),
                    format!(
                        "{high_name} closes {year} at {} per month while {low_name} remains lowest at {}.",
                        currency(high),
                        currency(low)
                    ),
                );
            }
        }

        if let Some(top) = top_grower(&summary.rent_growth) {
            let record = top.record;
            if let (Some(start), Some(end), Some(end_value)) =
                (record.start_year, record.end_year, record.end_value)
            {
                let line = format!(
                    "{} led growth at {} since {start}, with {end} rents reaching {}.",
                    top.borough,
                    percent(top.pct),
                    currency(end_value)
                );
                out.set(Slot::Takeaway("rent-trajectories"), line.clone());
                out.set(Slot::Takeaway("line"), line.clone());
                out.set(Slot::Narrative("line"), line);
            }
            if let (Some(start), Some(ext)) = (record.start_year, &extremes) {
                let (high_name, high) = ext.highest;
                let growth = format!(
                    "{} rent grew {} since {start}; {high_name} still commands the ceiling at {}.",
                    top.borough,
                    percent(top.pct),
                    currency(high)
                );
                out.set(Slot::Takeaway("bar"), growth.clone());
                out.set(Slot::Narrative("growth"), growth);
            }
        }

        let correlations = &summary.correlations;
        let coefficients = &summary.regression.coefficients;
        if let Some(r_income) = correlations.rent_income {
            let correlation = format!(
                "Rent and income move together (r = {}), with transit premiums visible as bubbles drift above the trend line.",
                fixed(r_income, 2)
            );
            out.set(Slot::Takeaway("scatter"), correlation.clone());
            out.set(Slot::Narrative("correlation"), correlation);

            if let Some(beta) = coefficients.subway {
                out.set(
                    Slot::Narrative("scatter"),
                    format!(
                        "Rent and income move together (r = {}), and every 10-point subway lift adds about {} to rent.",
                        fixed(r_income, 2),
                        currency(beta * 10.0)
                    ),
                );
            }
            if let (Some(r_subway), Some(beta)) = (correlations.rent_subway, coefficients.subway) {
                out.set(
                    Slot::Takeaway("rent-transit"),
                    format!(
                        "Rent aligns strongly with income (r = {}) but subway proximity still adds notable pressure (r = {}, β ≈ {}).",
                        fixed(r_income, 2),
                        fixed(r_subway, 2),
                        fixed(beta, 1)
                    ),
                );
            }
        }

        if let (Some(income), Some(subway)) = (coefficients.income, coefficients.subway) {
            out.set(
                Slot::Narrative("regression"),
                format!(
                    "OLS indicates each additional $1k of income adds ≈ ${} to rent, while a 10-point transit lift adds about {}.",
                    fixed(income, 3),
                    currency(subway * 10.0)
                ),
            );
        }
    }

    fn kpis(summary: &SummaryStatistics, out: &mut Narrative) {
        if let Some(avg) = mean(summary.rent_growth.values().filter_map(|g| g.absolute)) {
            out.set(Slot::Kpi("rent-delta"), signed_currency(avg));
        }

        let rent_pct = mean(summary.rent_growth.values().filter_map(|g| g.pct));
        let income_pct = mean(summary.income_growth.values().filter_map(|g| g.pct));
        if let (Some(rent), Some(income)) = (rent_pct, income_pct) {
            out.set(Slot::Kpi("wage-gap"), signed(rent - income, 1, " pts"));
        }
    }

    fn disparity(summary: &SummaryStatistics, view: &ViewModel, out: &mut Narrative) {
        let Some((first, last, delta)) = disparity_change(&summary.disparity_index) else {
            return;
        };
        let verb = if delta >= 0.0 { "widened" } else { "narrowed" };
        out.set(
            Slot::Narrative("disparity"),
            format!(
                "Rent spread {verb} by {} between {first} and {last}, underscoring borough inequality peaks.",
                currency(delta.abs())
            ),
        );
        out.set(Slot::Counter, signed_currency(delta));

        let Some(span) = last.checked_sub(first).and_then(|d| d.checked_add(1)) else {
            return;
        };
        let boroughs = view
            .rent_data
            .as_ref()
            .map_or(FALLBACK_BOROUGH_COUNT, |rent| rent.labels.len());
        out.set(
            Slot::ContextStat,
            format!("Analyzing {span} years of borough-level data across {boroughs} NYC boroughs."),
        );
    }

    fn heatmap_sentences(&self, heatmap: &HeatmapData, out: &mut Narrative) {
        let hotspots = heatmap
            .cells()
            .filter(|(_, _, v)| v.abs() >= self.hotspot_threshold)
            .count();
        out.set(Slot::Kpi("volatility-hotspots"), hotspots.to_string());

        let Some((peak, trough)) = heatmap_extremes(heatmap) else {
            return;
        };
        let (Some(peak_borough), Some(peak_year)) = (peak.borough, peak.year) else {
            return;
        };
        out.set(
            Slot::Narrative("heatmap"),
            format!(
                "{peak_borough} peaks in {peak_year} at {}, framing the surge alongside the pandemic rebound.",
                percent(peak.value)
            ),
        );

        if let Some(trough_borough) = trough.borough {
            let takeaway = format!(
                "Peak surge hits {peak_borough} in {peak_year} at {}, while {trough_borough} saw the deepest cooldown ({}).",
                percent(peak.value),
                percent(trough.value)
            );
            out.set(Slot::Takeaway("rent-heatmap"), takeaway.clone());
            out.set(Slot::Takeaway("heatmap"), takeaway);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawPayload;
    use crate::view_model::build;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn full_summary() -> SummaryStatistics {
        serde_json::from_value(json!({
            "latest_year": 2024,
            "latest_rows": [
                { "borough": "Bronx", "median_rent": 1850 },
                { "borough": "Manhattan", "median_rent": 4325.4 },
                { "borough": "Queens", "median_rent": 2410 }
            ],
            "rent_growth": {
                "Bronx": { "pct": 48.26, "absolute": 600, "startYear": 2010, "endYear": 2024, "endValue": 1850 },
                "Manhattan": { "pct": 31.0, "absolute": 1025, "startYear": 2010, "endYear": 2024, "endValue": 4325.4 }
            },
            "income_growth": {
                "Bronx": { "pct": 20.0 },
                "Manhattan": { "pct": 30.0 }
            },
            "correlations": { "rent_income": 0.9412, "rent_subway": 0.48 },
            "regression": { "coefficients": { "income": 0.0123, "subway": 15.66 } },
            "disparity_index": {
                "2010": { "spread": 1650 },
                "2024": { "spread": 2475.4 }
            },
            "headlines": [{ "title": "Rents", "body": "Rents climbed everywhere." }, { "title": "Gap" }]
        }))
        .expect("summary should parse")
    }

    fn payload_with_heatmap() -> RawPayload {
        serde_json::from_value(json!({
            "boroughs": ["Bronx", "Manhattan"],
            "years": [2020, 2021, 2022],
            "heatmap": { "matrix": [[-4.2, 7.5, 3.0], [-6.8, 7.5, 2.0]] }
        }))
        .expect("payload should parse")
    }

    #[test]
    fn test_full_narrative() {
        let summary = full_summary();
        let payload = payload_with_heatmap();
        let view = build(Some(&payload), Some(&summary));
        let narrative = synthesize(Some(&summary), &view);

        assert_eq!(narrative.get(&Slot::Stat("latest-year")), Some("2024"));
        assert_eq!(narrative.get(&Slot::Stat("rent-ceiling")), Some("$4,325"));
        assert_eq!(narrative.get(&Slot::Stat("rent-spread")), Some("+$2,475"));
        assert_eq!(
            narrative.get(&Slot::SummaryItem(0)),
            Some("Rents climbed everywhere.")
        );
        assert_eq!(narrative.get(&Slot::SummaryItem(1)), None);
        assert_eq!(
            narrative.get(&Slot::Takeaway("rent-latest")),
            Some("Manhattan closes 2024 at $4,325 per month while Bronx remains lowest at $1,850.")
        );
        assert_eq!(
            narrative.get(&Slot::Narrative("line")),
            Some("Bronx led growth at +48.3% since 2010, with 2024 rents reaching $1,850.")
        );
        assert_eq!(
            narrative.get(&Slot::Narrative("growth")),
            Some("Bronx rent grew +48.3% since 2010; Manhattan still commands the ceiling at $4,325.")
        );
        assert_eq!(
            narrative.get(&Slot::Narrative("scatter")),
            Some("Rent and income move together (r = 0.94), and every 10-point subway lift adds about $157 to rent.")
        );
        assert_eq!(
            narrative.get(&Slot::Takeaway("rent-transit")),
            Some("Rent aligns strongly with income (r = 0.94) but subway proximity still adds notable pressure (r = 0.48, β ≈ 15.7).")
        );
        assert_eq!(
            narrative.get(&Slot::Narrative("regression")),
            Some("OLS indicates each additional $1k of income adds ≈ $0.012 to rent, while a 10-point transit lift adds about $157.")
        );
        assert_eq!(
            narrative.get(&Slot::Narrative("disparity")),
            Some("Rent spread widened by $825 between 2010 and 2024, underscoring borough inequality peaks.")
        );
        assert_eq!(narrative.get(&Slot::Counter), Some("+$825"));
        assert_eq!(
            narrative.get(&Slot::ContextStat),
            Some("Analyzing 15 years of borough-level data across 2 NYC boroughs.")
        );
        assert_eq!(narrative.get(&Slot::Kpi("rent-delta")), Some("+$813"));
        assert_eq!(narrative.get(&Slot::Kpi("wage-gap")), Some("+14.6 pts"));
        assert_eq!(narrative.get(&Slot::Kpi("volatility-hotspots")), Some("3"));
        assert_eq!(
            narrative.get(&Slot::Takeaway("heatmap")),
            Some("Peak surge hits Bronx in 2021 at +7.5%, while Manhattan saw the deepest cooldown (-6.8%).")
        );
        assert_eq!(
            narrative.get(&Slot::Narrative("heatmap")),
            Some("Bronx peaks in 2021 at +7.5%, framing the surge alongside the pandemic rebound.")
        );
    }

    #[test]
    fn test_missing_payload_still_uses_summary() {
        let summary = full_summary();
        let view = build(None, Some(&summary));
        let narrative = synthesize(view.summary.as_ref(), &view);

        assert!(narrative.get(&Slot::Narrative("growth")).is_some());
        assert!(narrative.get(&Slot::Stat("rent-ceiling")).is_some());
        assert!(narrative.get(&Slot::Narrative("heatmap")).is_none());
        assert!(narrative.get(&Slot::Kpi("volatility-hotspots")).is_none());
        assert_eq!(
            narrative.get(&Slot::ContextStat),
            Some("Analyzing 15 years of borough-level data across 5 NYC boroughs.")
        );
    }

    #[test]
    fn test_missing_summary_fields_skip_only_their_slots() {
        let summary: SummaryStatistics = serde_json::from_value(json!({
            "rent_growth": { "Queens": { "pct": 12.0, "startYear": 2010 } },
            "correlations": { "rent_income": "strong" }
        }))
        .expect("summary should parse");
        let narrative = synthesize(Some(&summary), &ViewModel::default());

        // No endYear/endValue, no latest rows, no numeric correlation
        assert!(narrative.get(&Slot::Narrative("line")).is_none());
        assert!(narrative.get(&Slot::Narrative("growth")).is_none());
        assert!(narrative.get(&Slot::Narrative("correlation")).is_none());
        assert!(narrative.get(&Slot::Stat("latest-year")).is_none());
        assert!(narrative.get(&Slot::Kpi("wage-gap")).is_none());
        assert!(narrative.is_empty());
    }

    #[test]
    fn test_no_inputs_no_sentences() {
        let narrative = synthesize(None, &ViewModel::default());
        assert!(narrative.is_empty());
    }

    #[test]
    fn test_top_grower_tie_keeps_first_key() {
        let summary: SummaryStatistics = serde_json::from_value(json!({
            "rent_growth": {
                "Staten Island": { "pct": 20.0 },
                "Bronx": { "pct": 20.0 },
                "Queens": { "pct": "n/a" }
            }
        }))
        .expect("summary should parse");

        let top = top_grower(&summary.rent_growth).expect("a top grower");
        assert_eq!(top.borough, "Staten Island");
        assert_eq!(top.pct, 20.0);
    }

    #[test]
    fn test_latest_extremes_ties_and_gaps() {
        let rows: Vec<LatestRow> = serde_json::from_value(json!([
            { "borough": "A", "median_rent": 2000 },
            { "borough": "B", "median_rent": null },
            { "borough": "C", "median_rent": 2000 },
            { "borough": "D", "median_rent": 1500 },
            { "borough": "E", "median_rent": 1500 }
        ]))
        .expect("rows should parse");

        let ext = latest_extremes(&rows).expect("extremes");
        assert_eq!(ext.highest, ("A", 2000.0));
        assert_eq!(ext.lowest, ("D", 1500.0));
        assert!(latest_extremes(&[]).is_none());
    }

    #[test]
    fn test_heatmap_extremes_row_major_ties() {
        let heatmap = HeatmapData {
            years: vec![2020, 2021],
            boroughs: vec!["A".to_string(), "B".to_string()],
            values: vec![vec![1.0, 5.0], vec![5.0, -2.0]],
        };
        let (peak, trough) = heatmap_extremes(&heatmap).expect("extremes");
        assert_eq!(peak, HeatmapCell { borough: Some("A"), year: Some(2021), value: 5.0 });
        assert_eq!(trough, HeatmapCell { borough: Some("B"), year: Some(2021), value: -2.0 });

        let empty = HeatmapData { years: vec![], boroughs: vec![], values: vec![vec![]] };
        assert!(heatmap_extremes(&empty).is_none());
    }

    #[test]
    fn test_disparity_change_sorts_years_numerically() {
        let summary: SummaryStatistics = serde_json::from_value(json!({
            "disparity_index": {
                "2024": { "spread": 1200 },
                "2009": { "spread": 1500 },
                "2015": {}
            }
        }))
        .expect("summary should parse");

        assert_eq!(disparity_change(&summary.disparity_index), Some((2009, 2024, -300.0)));
        let narrative = synthesize(Some(&summary), &ViewModel::default());
        assert_eq!(
            narrative.get(&Slot::Narrative("disparity")),
            Some("Rent spread narrowed by $300 between 2009 and 2024, underscoring borough inequality peaks.")
        );
        assert_eq!(narrative.get(&Slot::Counter), Some("-$300"));
    }

    #[test]
    fn test_single_disparity_year() {
        let summary: SummaryStatistics = serde_json::from_value(json!({
            "disparity_index": { "2024": { "spread": 900 } }
        }))
        .expect("summary should parse");
        let narrative = synthesize(Some(&summary), &ViewModel::default());

        assert_eq!(
            narrative.get(&Slot::Narrative("disparity")),
            Some("Rent spread widened by $0 between 2024 and 2024, underscoring borough inequality peaks.")
        );
        assert_eq!(narrative.get(&Slot::Counter), Some("+$0"));
        assert_eq!(
            narrative.get(&Slot::ContextStat),
            Some("Analyzing 1 years of borough-level data across 5 NYC boroughs.")
        );
    }

    #[test]
    fn test_extreme_inputs_do_not_panic() {
        let summary: SummaryStatistics = serde_json::from_value(json!({
            "latest_year": 2024,
            "latest_rows": [{ "borough": "Bronx", "median_rent": -1e19 }],
            "disparity_index": {
                "-9223372036854775808": { "spread": 1 },
                "9223372036854775807": { "spread": 2 }
            }
        }))
        .expect("summary should parse");
        let payload = payload_with_heatmap();
        let view = build(Some(&payload), Some(&summary));
        let narrative = synthesize(Some(&summary), &view);

        assert_eq!(
            narrative.get(&Slot::Stat("rent-ceiling")),
            Some("-$9,223,372,036,854,775,807")
        );
        assert_eq!(narrative.get(&Slot::Counter), Some("+$1"));
        assert!(narrative.get(&Slot::ContextStat).is_none());
    }

    #[test]
    fn test_slot_selectors() {
        assert_eq!(Slot::Narrative("growth").selector(), r#"[data-narrative="growth"]"#);
        assert_eq!(Slot::Kpi("wage-gap").selector(), r#"[data-kpi="wage-gap"]"#);
        assert_eq!(Slot::SummaryItem(2).index(), Some(2));
        assert_eq!(Slot::Counter.index(), None);
    }
}
