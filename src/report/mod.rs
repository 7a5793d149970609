//! Presentation of demo results.
//!
//! This module provides:
//! - `table`: metrics table with comparative significance text
//! - `charts`: chart specs, SVG rendering and chart instance lifecycle
//! - `screen`: terminal rendering of the whole session
//! - `html`: standalone single-file HTML report

pub mod charts;
pub mod html;
pub mod screen;
pub mod table;

// Re-export key types
pub use charts::{
    AxisScale, ChartBackend, ChartId, ChartKind, ChartSpec, ChartsView, SvgChartBackend,
    render_svg,
};
pub use html::{render_html, write_html};
pub use screen::render_screen;
pub use table::{MetricRow, metric_rows, render_table};

use std::path::Path;

use anyhow::Context;

use crate::DemoResult;

/// Write a report file, creating missing parent directories first.
pub fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> DemoResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Escape text for HTML/SVG element content and attribute values.
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
