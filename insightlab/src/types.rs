//! Dataset types
//!
//! Shapes of `viz_payload.json` and `derived_summary.json`. Every field is
//! read through the forgiving deserializers in [`crate::lenient`], so a
//! partial or malformed document still yields a usable value.

use serde::Deserialize;
use serde_json::Value;

use crate::lenient;

/// JSON object kept as ordered `(key, value)` entries.
///
/// Document order is preserved so scans over the entries break ties the
/// same way on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T>(Vec<(String, T)>);

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Keyed<T> {
    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Entries in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Values in document order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> FromIterator<(String, T)> for Keyed<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// viz_payload.json
// ============================================================================

/// Chart payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPayload {
    #[serde(default, deserialize_with = "lenient::strings")]
    pub boroughs: Vec<String>,

    #[serde(default, deserialize_with = "lenient::years")]
    pub years: Vec<i64>,

    /// Per-borough time series
    #[serde(default, deserialize_with = "lenient::keyed")]
    pub series: Keyed<BoroughSeries>,

    #[serde(default, deserialize_with = "lenient::objects")]
    pub scatter: Vec<ScatterObservation>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub heatmap: HeatmapSource,
}

/// Metric series for one borough
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoroughSeries {
    #[serde(default, deserialize_with = "lenient::series")]
    pub median_rent: Vec<Option<f64>>,
}

/// One income/rent/transit observation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScatterObservation {
    #[serde(default, deserialize_with = "lenient::opt_loose_number")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_loose_number")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_loose_number")]
    pub r: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub borough: Option<String>,
    /// Only JSON numbers count as a year here
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub year: Option<f64>,
}

/// Year-over-year change matrix, rows = boroughs, columns = years
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeatmapSource {
    #[serde(default, deserialize_with = "lenient::opt_years")]
    pub years: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "lenient::opt_strings")]
    pub boroughs: Option<Vec<String>>,
    /// Raw cells; coerced to numbers by the view-model builder
    #[serde(default, deserialize_with = "lenient::matrix")]
    pub matrix: Vec<Vec<Value>>,
}

// ============================================================================
// derived_summary.json
// ============================================================================

/// Pre-computed summary statistics
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SummaryStatistics {
    #[serde(default, deserialize_with = "lenient::opt_year")]
    pub latest_year: Option<i64>,

    #[serde(default, deserialize_with = "lenient::objects")]
    pub latest_rows: Vec<LatestRow>,

    #[serde(default, deserialize_with = "lenient::keyed")]
    pub rent_growth: Keyed<GrowthRecord>,

    #[serde(default, deserialize_with = "lenient::keyed")]
    pub income_growth: Keyed<GrowthRecord>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub correlations: Correlations,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub regression: Regression,

    /// Spread between highest and lowest borough, keyed by year
    #[serde(default, deserialize_with = "lenient::keyed")]
    pub disparity_index: Keyed<DisparityEntry>,

    #[serde(default, deserialize_with = "lenient::objects")]
    pub headlines: Vec<Headline>,
}

/// Latest-year metric for one borough
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LatestRow {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub borough: String,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub median_rent: Option<f64>,
}

/// Start-to-end change of one borough's metric
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GrowthRecord {
    /// Percent change
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub pct: Option<f64>,
    /// Absolute change
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub absolute: Option<f64>,
    #[serde(rename = "startYear", default, deserialize_with = "lenient::opt_year")]
    pub start_year: Option<i64>,
    #[serde(rename = "endYear", default, deserialize_with = "lenient::opt_year")]
    pub end_year: Option<i64>,
    #[serde(rename = "startValue", default, deserialize_with = "lenient::opt_number")]
    pub start_value: Option<f64>,
    #[serde(rename = "endValue", default, deserialize_with = "lenient::opt_number")]
    pub end_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Correlations {
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub rent_income: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub rent_subway: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Regression {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub coefficients: Coefficients,
}

/// OLS coefficients of rent on income (per $1k) and subway access score
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Coefficients {
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub income: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub subway: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisparityEntry {
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub spread: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Headline {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_tolerates_wrong_types() {
        let payload: RawPayload = serde_json::from_value(json!({
            "boroughs": "Bronx",
            "years": [2010, "2011", "soon"],
            "series": { "Bronx": { "median_rent": [1000, null, "x"] }, "Queens": 5 },
            "scatter": [null, { "x": "12", "year": 2015 }],
            "heatmap": { "matrix": [[1.5, "n/a"], null] }
        }))
        .expect("lenient payload should parse");

        assert!(payload.boroughs.is_empty());
        assert_eq!(payload.years, vec![2010, 2011]);
        assert_eq!(payload.series.len(), 1);
        assert_eq!(
            payload.series.get("Bronx").map(|s| s.median_rent.clone()),
            Some(vec![Some(1000.0), None, None])
        );
        assert_eq!(payload.scatter.len(), 1);
        assert_eq!(payload.scatter[0].x, Some(12.0));
        assert_eq!(payload.heatmap.matrix.len(), 2);
        assert!(payload.heatmap.matrix[1].is_empty());
        assert!(payload.heatmap.years.is_none());
    }

    #[test]
    fn test_summary_keeps_document_order() {
        let summary: SummaryStatistics = serde_json::from_value(json!({
            "rent_growth": {
                "Staten Island": { "pct": 20.0 },
                "Bronx": { "pct": 20.0, "endValue": 1850 },
                "Brooklyn": { "pct": 12.0 }
            },
            "disparity_index": { "2010": { "spread": 900 }, "2024": { "spread": 1700 } }
        }))
        .expect("summary should parse");

        let keys: Vec<&str> = summary.rent_growth.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Staten Island", "Bronx", "Brooklyn"]);
        assert_eq!(
            summary.rent_growth.get("Bronx").and_then(|g| g.end_value),
            Some(1850.0)
        );
        assert_eq!(summary.disparity_index.len(), 2);
    }

    #[test]
    fn test_summary_from_empty_object() {
        let summary: SummaryStatistics = serde_json::from_str("{}").expect("empty summary");
        assert_eq!(summary, SummaryStatistics::default());
    }
}
