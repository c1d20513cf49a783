//! Static page shell
//!
//! Emits the two HTML documents the front-end runs in. Styles are inlined;
//! the page loads Chart.js from a CDN and the compiled module from `pkg/`.
//!
//! # Layout
//! - `html.rs`: header, stats, chart cards, tabs, narrative blocks
//! - `css.rs`: styling keyed on `data-theme`

mod css;
mod html;

use std::fs;
use std::path::{Path, PathBuf};

use crate::charts::ChartSlot;
use crate::config::{Config, Page};
use crate::error::{InsightError, Result};
use crate::theme::Theme;

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const MODULE_ENTRY: &str = "./pkg/insightlab.js";

/// File name for a page
pub fn file_name(page: Page) -> &'static str {
    match page {
        Page::Index => "index.html",
        Page::Study => "study.html",
    }
}

fn body(page: Page) -> String {
    match page {
        Page::Index => {
            let charts: String = ChartSlot::ALL.iter().map(|slot| html::chart_card(*slot)).collect();
            [
                html::header("NYC rent, income and transit"),
                html::HERO_STATS.to_string(),
                html::SUMMARY.to_string(),
                charts,
                html::FINDINGS.to_string(),
                html::KPIS.to_string(),
                html::FOOTER.to_string(),
            ]
            .concat()
        }
        Page::Study => [
            html::header("Study notes"),
            html::STUDY_TAKEAWAYS.to_string(),
            html::period_tabs(),
            html::KPIS.to_string(),
            html::SUMMARY.to_string(),
            html::FOOTER.to_string(),
        ]
        .concat(),
    }
}

/// The complete HTML document for a page
pub fn page_html(page: Page) -> String {
    let defaults = Config::default();
    let chart_script = match page {
        Page::Index => format!(r#"<script src="{CHART_JS}"></script>"#),
        Page::Study => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="theme-color" content="{theme_color}">
    <title>InsightLab · {title}</title>
    <style>
{css}
    </style>
    {chart_script}
</head>
<body data-page="{page}" data-payload-url="{payload}" data-summary-url="{summary}">
    <div class="container">
{body}
    </div>
    <script type="module">
        import init from "{MODULE_ENTRY}";
        init();
    </script>
</body>
</html>"#,
        theme = Theme::default().as_attr(),
        theme_color = Theme::default().meta_color(),
        title = match page {
            Page::Index => "Rent story",
            Page::Study => "Study notes",
        },
        css = css::STYLES,
        page = page.as_str(),
        payload = defaults.payload_url,
        summary = defaults.summary_url,
        body = body(page),
    )
}

/// Write both pages into `dir`, creating it if needed
pub fn write_site(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .map_err(|e| InsightError::Config(format!("cannot create {}: {e}", dir.display())))?;
    [Page::Index, Page::Study]
        .into_iter()
        .map(|page| {
            let path = dir.join(file_name(page));
            fs::write(&path, page_html(page))
                .map_err(|e| InsightError::Config(format!("cannot write {}: {e}", path.display())))?;
            Ok(path)
        })
        .collect()
}
