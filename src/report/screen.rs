//! Terminal rendering of a [`DemoSession`].

use crate::core::schema::ProblemSize;
use crate::session::{DemoSession, SessionState, ViewMode};

use super::charts::{AxisScale, ChartSpec};
use super::table::render_table;

pub const TITLE: &str = "Structured Entropy Framework";
pub const TAGLINE: &str = "A demonstration of a high-performance MaxCut solver, showcasing superior approximation ratios and fast convergence.";
pub const IDLE_PROMPT: &str = "Select a graph size and run the demo to see the results.";
pub const LOADING_TEXT: &str = "Running Simulation...";
pub const ERROR_HEADING: &str = "An Error Occurred";

/// Size selector line, e.g. `Select MaxCut Problem Size (N):  [5]  20   50`.
fn size_selector(selected: ProblemSize, loading: bool) -> String {
    let mut out = String::from("Select MaxCut Problem Size (N): ");
    for size in ProblemSize::ALL {
        if size == selected {
            out.push_str(&format!(" [{size}]"));
        } else {
            out.push_str(&format!("  {size} "));
        }
    }
    out.push_str(if loading { "    ( Running... )" } else { "    ( Run Demo )" });
    out
}

fn view_toggle(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Table => "View: [Table]  Charts",
        ViewMode::Charts => "View:  Table  [Charts]",
    }
}

/// Text rendering of one chart: one line per size, one column per method.
pub fn render_chart_text(spec: &ChartSpec) -> String {
    let scale = match spec.scale {
        AxisScale::Logarithmic => "log scale".to_string(),
        AxisScale::Linear { min, max } => format!("axis {min:.2}-{max:.2}"),
    };
    let mut out = format!("{} ({}, {})\n", spec.title, spec.y_axis_title, scale);

    let col_w = spec
        .series
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(spec.precision + 4);
    out.push_str(&format!("  {:<6}", ""));
    for series in &spec.series {
        out.push_str(&format!("  {:>col_w$}", series.label));
    }
    out.push('\n');

    for (i, label) in spec.labels.iter().enumerate() {
        out.push_str(&format!("  {label:<6}"));
        for series in &spec.series {
            let cell = series
                .values
                .get(i)
                .map(|v| format!("{v:.prec$}{}", spec.unit, prec = spec.precision))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!("  {cell:>col_w$}"));
        }
        out.push('\n');
    }
    out
}

/// Full screen for the current session state.
pub fn render_screen(session: &DemoSession) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(TAGLINE);
    out.push_str("\n\n");
    out.push_str(&size_selector(session.selected_size(), session.is_loading()));
    out.push_str("\n\n");

    match session.state() {
        SessionState::Idle => {
            out.push_str(IDLE_PROMPT);
            out.push('\n');
        }
        SessionState::Loading { .. } => {
            out.push_str(LOADING_TEXT);
            out.push('\n');
        }
        SessionState::Failed { message } => {
            out.push_str(ERROR_HEADING);
            out.push('\n');
            out.push_str(message);
            out.push('\n');
        }
        SessionState::Ready { result, chart_data } => {
            out.push_str(view_toggle(session.view()));
            out.push_str("\n\n");
            match session.view() {
                ViewMode::Table => out.push_str(&render_table(result, chart_data)),
                ViewMode::Charts => {
                    out.push_str(&render_chart_text(&ChartSpec::execution_time(chart_data)));
                    out.push('\n');
                    out.push_str(&render_chart_text(&ChartSpec::approximation_ratio(chart_data)));
                }
            }
        }
    }
    out
}
