//! View-model builder
//!
//! Projects the raw payload and the summary into the exact shapes the chart
//! renderers need. The projection is a pure function of its inputs: no
//! clock, no randomness, and a fresh value on every call.

use tracing::debug;

use crate::lenient;
use crate::types::{Keyed, RawPayload, ScatterObservation, SummaryStatistics};

/// A fixed year range used to partition scatter observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub key: &'static str,
    pub start: i64,
    pub end: i64,
}

impl Period {
    /// Inclusive on both ends
    pub fn contains(&self, year: f64) -> bool {
        year >= self.start as f64 && year <= self.end as f64
    }

    /// Look up a period by its tab key
    pub fn find(key: &str) -> Option<&'static Period> {
        SCATTER_PERIODS.iter().find(|p| p.key == key)
    }

    /// First period containing `year`, scanning in declaration order
    pub fn for_year(year: f64) -> Option<&'static Period> {
        SCATTER_PERIODS.iter().find(|p| p.contains(year))
    }
}

pub const SCATTER_PERIODS: [Period; 4] = [
    Period { key: "2010-2013", start: 2010, end: 2013 },
    Period { key: "2014-2016", start: 2014, end: 2016 },
    Period { key: "2017-2020", start: 2017, end: 2020 },
    Period { key: "2021-2024", start: 2021, end: 2024 },
];

/// Bar and line chart data
#[derive(Debug, Clone, PartialEq)]
pub struct RentData {
    pub labels: Vec<String>,
    /// One value per borough, aligned with `labels`
    pub values: Vec<f64>,
    pub years: Vec<i64>,
    pub boroughs: Vec<String>,
    pub series: Keyed<Vec<Option<f64>>>,
}

/// A bubble ready for the scatter chart
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub label: String,
    pub borough: Option<String>,
    pub year: f64,
}

/// Scatter points grouped by period, in period order
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterBuckets(Vec<(&'static str, Vec<ScatterPoint>)>);

impl Default for ScatterBuckets {
    fn default() -> Self {
        Self(SCATTER_PERIODS.iter().map(|p| (p.key, Vec::new())).collect())
    }
}

impl ScatterBuckets {
    /// Points for a period key; unknown keys have no points
    pub fn get(&self, key: &str) -> &[ScatterPoint] {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, points)| points.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[ScatterPoint])> {
        self.0.iter().map(|(k, points)| (*k, points.as_slice()))
    }

    /// Total number of bucketed points
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, points)| points.len()).sum()
    }

    fn push(&mut self, key: &str, point: ScatterPoint) {
        if let Some((_, points)) = self.0.iter_mut().find(|(k, _)| *k == key) {
            points.push(point);
        }
    }
}

/// Heatmap grid; `values` has one row per entry of `boroughs`
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapData {
    pub years: Vec<i64>,
    pub boroughs: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl HeatmapData {
    /// Cells in row-major order as `(row, column, value)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, v)| (row, col, *v)))
    }
}

/// Renderer-ready projection of the datasets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub rent_data: Option<RentData>,
    pub scatter_data: Option<ScatterBuckets>,
    pub heatmap_data: Option<HeatmapData>,
    pub summary: Option<SummaryStatistics>,
}

impl ViewModel {
    /// True when no chart has data to show
    pub fn is_partial(&self) -> bool {
        self.rent_data.is_none() && self.scatter_data.is_none() && self.heatmap_data.is_none()
    }
}

/// Build the view model.
///
/// Without a payload every chart field is `None` and only the summary is
/// carried through.
pub fn build(payload: Option<&RawPayload>, summary: Option<&SummaryStatistics>) -> ViewModel {
    let Some(payload) = payload else {
        debug!("no payload; building summary-only view model");
        return ViewModel {
            summary: summary.cloned(),
            ..ViewModel::default()
        };
    };

    ViewModel {
        rent_data: Some(build_rent_data(payload, summary)),
        scatter_data: Some(bucket_scatter(&payload.scatter, &payload.boroughs)),
        heatmap_data: Some(build_heatmap(payload)),
        summary: summary.cloned(),
    }
}

fn build_rent_data(payload: &RawPayload, summary: Option<&SummaryStatistics>) -> RentData {
    let series: Keyed<Vec<Option<f64>>> = payload
        .boroughs
        .iter()
        .map(|borough| {
            let rents = payload
                .series
                .get(borough)
                .map(|s| s.median_rent.clone())
                .unwrap_or_default();
            (borough.clone(), rents)
        })
        .collect();

    // The summary is authoritative for the closing value when it has one
    let values = payload
        .boroughs
        .iter()
        .map(|borough| {
            summary
                .and_then(|s| s.rent_growth.get(borough))
                .and_then(|g| g.end_value)
                .unwrap_or_else(|| {
                    series
                        .get(borough)
                        .and_then(|rents| rents.last().copied().flatten())
                        .unwrap_or(0.0)
                })
        })
        .collect();

    RentData {
        labels: payload.boroughs.clone(),
        values,
        years: payload.years.clone(),
        boroughs: payload.boroughs.clone(),
        series,
    }
}

fn bucket_scatter(observations: &[ScatterObservation], boroughs: &[String]) -> ScatterBuckets {
    let mut buckets = ScatterBuckets::default();
    let mut out_of_range = 0usize;

    for obs in observations {
        let Some(year) = obs.year else {
            continue;
        };
        let unlisted = obs
            .borough
            .as_ref()
            .is_some_and(|b| !boroughs.is_empty() && !boroughs.contains(b));
        if unlisted {
            debug!(borough = ?obs.borough, "scatter point for unlisted borough dropped");
            continue;
        }
        let Some(period) = Period::for_year(year) else {
            out_of_range += 1;
            continue;
        };
        buckets.push(
            period.key,
            ScatterPoint {
                x: obs.x.unwrap_or(0.0),
                y: obs.y.unwrap_or(0.0),
                r: obs.r.unwrap_or(0.0),
                label: format!("{} {year}", obs.borough.as_deref().unwrap_or("Unknown")),
                borough: obs.borough.clone(),
                year,
            },
        );
    }

    if out_of_range > 0 {
        debug!(out_of_range, "scatter points outside every period dropped");
    }
    buckets
}

fn build_heatmap(payload: &RawPayload) -> HeatmapData {
    let source = &payload.heatmap;
    let years = source.years.clone().unwrap_or_else(|| payload.years.clone());
    let named = source.boroughs.as_ref().unwrap_or(&payload.boroughs);

    let (boroughs, values): (Vec<String>, Vec<Vec<f64>>) = named
        .iter()
        .enumerate()
        .filter(|(_, borough)| payload.boroughs.is_empty() || payload.boroughs.contains(*borough))
        .map(|(index, borough)| {
            let row = source
                .matrix
                .get(index)
                .map(|cells| {
                    cells
                        .iter()
                        .map(|c| lenient::number(c).unwrap_or(0.0))
                        .collect::<Vec<f64>>()
                })
                .unwrap_or_default();
            (borough.clone(), row)
        })
        .unzip();

    HeatmapData {
        years,
        boroughs,
        values,
    }
}
