//! Single-file HTML report for one demo run.
//!
//! Produces a standalone HTML file with embedded CSS that renders:
//! - Header with problem size, generation time and host
//! - Metrics table with significance annotations
//! - Status note
//! - Execution time and approximation ratio charts as inline SVG
//!
//! The outcome itself is embedded as JSON so the page doubles as a
//! machine-readable record.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use super::charts::{ChartKind, ChartSpec, ChartsView, SvgChartBackend};
use super::{escape_markup, write_output};
use super::table::metric_rows;
use crate::core::env::EnvironmentInfo;
use crate::core::schema::FetchOutcome;
use crate::{DemoResult, now_rfc3339};

#[derive(Serialize)]
struct ReportData<'a> {
    generated_at: &'a str,
    host: &'a EnvironmentInfo,
    outcome: &'a FetchOutcome,
}

/// Escape JSON for safe embedding inside an HTML `<script type="application/json">` tag.
///
/// `<` becomes `\u003c`, which keeps `</script>` and `<!--` from ending the
/// block while the text stays valid JSON for `JSON.parse()`.
fn escape_json_for_html_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

const STYLE: &str = r#"<style>
:root {
  --bg: #1a1a2e;
  --surface: #16213e;
  --text: #e8e8e8;
  --text-muted: #9a9a9a;
  --primary: #00f5d4;
  --border: #2d3a5c;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
  background: var(--bg);
  color: var(--text);
  line-height: 1.5;
  padding: 24px;
}
.container { max-width: 1100px; margin: 0 auto; }
h1 { font-size: 2rem; color: var(--primary); text-align: center; }
.tagline { color: var(--text-muted); text-align: center; margin: 8px 0 24px; }
h2 { font-size: 1.25rem; margin: 24px 0 12px; color: var(--text-muted); }
h3 { font-size: 1rem; margin-bottom: 8px; color: var(--primary); text-align: center; }
.meta-table { display: grid; grid-template-columns: auto 1fr; gap: 4px 16px; font-size: 0.875rem; }
.meta-label { color: var(--text-muted); }
.meta-value { font-family: monospace; }
.table-container { background: var(--surface); border-radius: 8px; border: 1px solid var(--border); overflow: hidden; }
table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
th, td { padding: 12px 16px; text-align: left; border-bottom: 1px solid var(--border); }
th { background: var(--bg); color: var(--text-muted); font-weight: 600; text-transform: uppercase; font-size: 0.75rem; }
tr:last-child td { border-bottom: none; }
tr.highlight td { color: var(--primary); }
.mono { font-family: monospace; }
.note { margin-top: 16px; padding: 16px; border-radius: 8px; background: rgba(0, 245, 212, 0.08); text-align: center; }
.charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px; }
.chart-card { background: var(--surface); border-radius: 8px; border: 1px solid var(--border); padding: 16px; }
.chart { display: block; width: 100%; height: auto; }
.footer { margin-top: 32px; padding-top: 16px; border-top: 1px solid var(--border); font-size: 0.75rem; color: var(--text-muted); text-align: center; }
@media (max-width: 768px) {
  body { padding: 12px; }
  th, td { padding: 8px 12px; }
}
</style>"#;

/// Render the outcome of one run as a standalone HTML string.
///
/// Output depends only on the arguments, so identical inputs give identical
/// pages.
pub fn render_html(outcome: &FetchOutcome, host: &EnvironmentInfo, generated_at: &str) -> String {
    let result = &outcome.result;

    let data = ReportData {
        generated_at,
        host,
        outcome,
    };
    let report_json = serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string());
    let escaped_json = escape_json_for_html_script(&report_json);

    let dataset = Arc::new(outcome.chart_data.clone());
    let (time_svg, ratio_svg) = {
        let mut view = ChartsView::new(SvgChartBackend::new());
        view.render(&dataset);
        let backend = view.backend();
        (
            backend.svg(ChartKind::ExecutionTime).unwrap_or_default().to_string(),
            backend.svg(ChartKind::ApproximationRatio).unwrap_or_default().to_string(),
        )
    };

    let mut html = String::with_capacity(32 * 1024);
    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Structured Entropy Framework - MaxCut Demo</title>
"#,
    );
    html.push_str(STYLE);
    html.push_str(
        r#"
</head>
<body>
<div class="container">
<h1>Structured Entropy Framework</h1>
<p class="tagline">A demonstration of a high-performance MaxCut solver, showcasing superior approximation ratios and fast convergence.</p>
<div class="meta-table">
"#,
    );

    for (label, value) in [
        ("Problem size", result.graph_size.label()),
        ("Generated", generated_at.to_string()),
        ("Host", host.summary()),
    ] {
        html.push_str(&format!(
            "<span class=\"meta-label\">{}</span><span class=\"meta-value\">{}</span>\n",
            escape_markup(label),
            escape_markup(&value)
        ));
    }
    html.push_str("</div>\n");

    html.push_str("<h2>Metrics</h2>\n<div class=\"table-container\">\n<table>\n");
    html.push_str("<thead><tr><th>Metric</th><th>Value</th><th>Significance</th></tr></thead>\n<tbody>\n");
    for row in metric_rows(result, &outcome.chart_data) {
        let class = if row.highlighted { " class=\"highlight\"" } else { "" };
        html.push_str(&format!(
            "<tr{class}><td>{}</td><td class=\"mono\">{}</td><td>{}</td></tr>\n",
            escape_markup(row.metric),
            escape_markup(&row.value),
            escape_markup(&row.significance)
        ));
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
    html.push_str(&format!(
        "<div class=\"note\"><strong>Status Note:</strong> {}</div>\n",
        escape_markup(&result.scalability_note)
    ));

    html.push_str("<h2>Comparison</h2>\n<div class=\"charts\">\n");
    let time_title = ChartSpec::execution_time(&dataset).title;
    let ratio_title = ChartSpec::approximation_ratio(&dataset).title;
    for (title, svg) in [(time_title, &time_svg), (ratio_title, &ratio_svg)] {
        html.push_str(&format!(
            "<div class=\"chart-card\">\n<h3>{}</h3>\n{}\n</div>\n",
            escape_markup(title),
            svg
        ));
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"footer\">Generated by maxcut-demo. All figures are pre-canned demo values.</div>\n");
    html.push_str("</div>\n<script type=\"application/json\" id=\"report-data\">");
    html.push_str(&escaped_json);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

/// Write the HTML report for `outcome` to `path`, creating parent directories.
pub fn write_html(path: &Path, outcome: &FetchOutcome, host: &EnvironmentInfo) -> DemoResult<()> {
    write_output(path, render_html(outcome, host, &now_rfc3339()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_json_for_html_script() {
        let escaped = escape_json_for_html_script(r#"{"a":"</script><!--"}"#);
        assert!(!escaped.contains('<'));
        let v: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(v["a"], "</script><!--");
    }
}
