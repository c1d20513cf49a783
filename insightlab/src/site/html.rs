//! Page fragments
//!
//! Every element the front-end writes to is addressed by a `data-*` hook or
//! a canvas id; the copy in these templates is what readers see until the
//! datasets arrive.

use crate::charts::{ChartSlot, FallbackReason, Mount};
use crate::view_model::SCATTER_PERIODS;

pub fn header(title: &str) -> String {
    format!(
        r#"
        <header>
            <div>
                <h1>{title}</h1>
                <nav>
                    <a href="index.html">Story</a>
                    <a href="study.html">Study notes</a>
                </nav>
            </div>
            <button class="btn" type="button" data-theme-toggle aria-label="Toggle colour theme">Theme</button>
        </header>"#
    )
}

pub const HERO_STATS: &str = r#"
        <section class="stats" aria-label="Key figures">
            <div class="stat">
                <div class="stat-label">Latest year</div>
                <div class="stat-value" data-stat="latest-year">-</div>
            </div>
            <div class="stat">
                <div class="stat-label">Rent ceiling</div>
                <div class="stat-value" data-stat="rent-ceiling">$--</div>
            </div>
            <div class="stat">
                <div class="stat-label">Borough spread</div>
                <div class="stat-value" data-stat="rent-spread">$--</div>
            </div>
            <div class="stat">
                <div class="stat-label">Coverage</div>
                <div class="stat-value" data-context-stat>--</div>
            </div>
        </section>"#;

pub const SUMMARY: &str = r#"
        <section aria-label="Headlines">
            <h2>What changed</h2>
            <ul class="findings">
                <li data-summary-item>Rents climbed faster than incomes across the city.</li>
                <li data-summary-item>Transit access carries a measurable rent premium.</li>
                <li data-summary-item>The gap between boroughs moved over the period.</li>
            </ul>
        </section>"#;

pub const KPIS: &str = r#"
        <section class="stats" aria-label="Indicators">
            <div class="kpi">
                <div class="kpi-label">Average rent change</div>
                <div class="kpi-value" data-kpi="rent-delta">--</div>
            </div>
            <div class="kpi">
                <div class="kpi-label">Rent vs. wage growth</div>
                <div class="kpi-value" data-kpi="wage-gap">--</div>
            </div>
            <div class="kpi">
                <div class="kpi-label">Volatility hotspots</div>
                <div class="kpi-value" data-kpi="volatility-hotspots">--</div>
            </div>
            <div class="kpi">
                <div class="kpi-label">Disparity shift</div>
                <div class="kpi-value" data-counter-value>--</div>
            </div>
        </section>"#;

pub const FINDINGS: &str = r#"
        <section aria-label="Findings">
            <h2>Reading the data</h2>
            <p class="narrative" data-narrative="correlation">Rent tracks income closely.</p>
            <p class="narrative" data-narrative="disparity">The spread between boroughs shifted.</p>
            <p class="narrative" data-narrative="regression">Income and transit both push rent upward.</p>
        </section>"#;

pub const STUDY_TAKEAWAYS: &str = r#"
        <section aria-label="Takeaways">
            <h2>Takeaways</h2>
            <ul class="findings">
                <li data-takeaway="rent-latest">The most expensive borough still leads.</li>
                <li data-takeaway="rent-trajectories">One borough grew faster than the rest.</li>
                <li data-takeaway="rent-transit">Income and subway access both shape rent.</li>
                <li data-takeaway="rent-heatmap">Year-over-year changes spiked unevenly.</li>
            </ul>
        </section>"#;

/// Buttons for every scatter period, first one active
pub fn period_tabs() -> String {
    let buttons: Vec<String> = SCATTER_PERIODS
        .iter()
        .enumerate()
        .map(|(i, period)| {
            let active = i == 0;
            format!(
                r#"<button class="tab{class}" type="button" role="tab" aria-selected="{active}" data-period-tab="{key}">{start}–{end}</button>"#,
                class = if active { " is-active" } else { "" },
                key = period.key,
                start = period.start,
                end = period.end,
            )
        })
        .collect();
    format!(
        r#"
            <div class="tabs" role="tablist" aria-label="Period">
                {}
            </div>"#,
        buttons.join("\n                ")
    )
}

struct ChartCopy {
    title: &'static str,
    description: &'static str,
    takeaway: Option<&'static str>,
    narrative: Option<&'static str>,
}

fn copy(slot: ChartSlot) -> ChartCopy {
    match slot {
        ChartSlot::Bar => ChartCopy {
            title: "Median rent by borough",
            description: "Latest median monthly rent per borough",
            takeaway: Some("bar"),
            narrative: Some("growth"),
        },
        ChartSlot::Line => ChartCopy {
            title: "Rent trajectories",
            description: "Median monthly rent per borough over time",
            takeaway: Some("line"),
            narrative: Some("line"),
        },
        ChartSlot::Multiples => ChartCopy {
            title: "Borough by borough",
            description: "One rent trend per borough on a shared scale",
            takeaway: None,
            narrative: None,
        },
        ChartSlot::Scatter => ChartCopy {
            title: "Income, rent and transit",
            description: "Household income against rent, bubble size by subway access",
            takeaway: Some("scatter"),
            narrative: Some("scatter"),
        },
        ChartSlot::Heatmap => ChartCopy {
            title: "Year-over-year rent change",
            description: "Annual rent change per borough, coloured by size",
            takeaway: Some("heatmap"),
            narrative: Some("heatmap"),
        },
    }
}

/// A chart with its mount point, fallback container and copy slots
pub fn chart_card(slot: ChartSlot) -> String {
    let copy = copy(slot);
    let mount = match slot.mount() {
        Mount::Canvas(id) => format!(
            r#"<div class="chart-frame"><canvas id="{id}" role="img" aria-label="{}"></canvas></div>"#,
            copy.description
        ),
        Mount::Container(_) => r#"<div class="multiples" data-chart-multiples></div>"#.to_string(),
    };
    let tabs = if slot == ChartSlot::Scatter { period_tabs() } else { String::new() };
    let takeaway = copy
        .takeaway
        .map(|key| format!(r#"<p class="takeaway" data-takeaway="{key}"></p>"#))
        .unwrap_or_default();
    let narrative = copy
        .narrative
        .map(|key| format!(r#"<p class="narrative" data-narrative="{key}"></p>"#))
        .unwrap_or_default();

    format!(
        r#"
        <section class="chart-card" aria-label="{title}">
            <h2>{title}</h2>{tabs}
            {mount}
            <p class="chart-fallback" data-chart-fallback="{key}" hidden>{fallback}</p>
            {takeaway}
            {narrative}
        </section>"#,
        title = copy.title,
        key = slot.key(),
        fallback = slot.fallback_message(FallbackReason::MissingData),
    )
}

pub const FOOTER: &str = r#"
        <footer>
            Median rents and incomes by borough. Charts need JavaScript; every finding is repeated in the text.
        </footer>"#;
