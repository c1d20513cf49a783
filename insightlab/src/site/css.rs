//! Page styles
//!
//! Colours come from CSS custom properties keyed on `data-theme`, so the
//! theme toggle only has to flip one attribute on the root element.

pub const STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root, [data-theme="dark"] {
    --bg: oklch(16% 0.014 250);
    --surface: oklch(21% 0.016 250);
    --border: oklch(36% 0.015 250 / 0.5);
    --text: oklch(92% 0.01 250);
    --text-muted: oklch(70% 0.015 250);
    --accent: oklch(74% 0.23 220);
    --warm: oklch(68% 0.21 40);
}

[data-theme="light"] {
    --bg: oklch(98% 0.005 250);
    --surface: oklch(96% 0.01 250);
    --border: oklch(84% 0.01 250 / 0.8);
    --text: oklch(24% 0.018 250);
    --text-muted: oklch(48% 0.015 250);
    --accent: oklch(60% 0.16 220);
    --warm: oklch(62% 0.18 30);
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.55;
    padding: 24px;
    min-height: 100vh;
}

.container { max-width: 1120px; margin: 0 auto; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 32px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 26px; font-weight: 650; }
h2 { font-size: 18px; font-weight: 600; margin-bottom: 8px; }
nav a { color: var(--text-muted); margin-right: 16px; text-decoration: none; }
nav a:hover { color: var(--accent); }

.btn {
    padding: 8px 14px;
    border-radius: 8px;
    border: 1px solid var(--border);
    background: var(--surface);
    color: var(--text);
    font-size: 13px;
    cursor: pointer;
}
.btn:hover { border-color: var(--accent); }

/* Stats */
.stats {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 16px;
    margin-bottom: 32px;
}

.stat, .kpi {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 16px 20px;
}

.stat-label, .kpi-label {
    font-size: 12px;
    color: var(--text-muted);
    text-transform: uppercase;
    letter-spacing: 0.04em;
}
.stat-value, .kpi-value { font-size: 24px; font-weight: 600; margin-top: 4px; }

/* Charts */
.chart-card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 16px;
    padding: 20px;
    margin-bottom: 28px;
}

.chart-frame { position: relative; height: 340px; }
.chart-frame canvas { width: 100%; height: 100%; }

.chart-fallback {
    padding: 24px;
    border: 1px dashed var(--border);
    border-radius: 12px;
    color: var(--text-muted);
    text-align: center;
}

.multiples {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 12px;
}
.multiples canvas { height: 160px; }

.takeaway { margin-top: 12px; font-weight: 500; }
.narrative { margin-top: 6px; color: var(--text-muted); }

/* Period tabs */
.tabs { display: flex; gap: 8px; margin-bottom: 12px; flex-wrap: wrap; }
.tab {
    padding: 6px 12px;
    border-radius: 20px;
    border: 1px solid var(--border);
    background: transparent;
    color: var(--text-muted);
    cursor: pointer;
}
.tab.is-active { background: var(--accent); color: var(--bg); border-color: var(--accent); }

/* Findings */
.findings { display: grid; gap: 12px; margin-bottom: 32px; }
.findings li { list-style: none; padding-left: 14px; border-left: 3px solid var(--warm); }

footer { margin-top: 40px; font-size: 12px; color: var(--text-muted); }

@media (max-width: 640px) {
    body { padding: 14px; }
    .chart-frame { height: 260px; }
}
"#;
